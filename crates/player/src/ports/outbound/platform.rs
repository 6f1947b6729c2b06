//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Game logic stays identical on desktop and in the browser
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code is testable with in-memory implementations
//!
//! NOTE: The `Platform` struct (DI container) that aggregates these traits
//! lives in `state/platform.rs`. This module only holds trait definitions.

use std::{future::Future, pin::Pin};

/// Async sleep abstraction
///
/// Used for the delayed return to the start screen after game over.
pub trait SleepProvider: Clone + 'static {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

/// Persistent storage abstraction (localStorage/file-based)
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Browser document operations (page title, etc.)
pub trait DocumentProvider: Clone + 'static {
    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);
}

/// Storage key constants
///
/// Kept in the ports layer because they define the contract for what the
/// game persists between sessions.
pub mod storage_keys {
    /// Current health as a decimal string
    pub const HEALTH: &str = "health";
    /// Display name chosen during character creation
    pub const CHARACTER_NAME: &str = "characterName";
}
