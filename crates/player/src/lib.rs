//! Survive The AI - player crate.
//!
//! Game session logic, scenario generation and the platform adapters it
//! runs on. Platform selection (desktop file storage vs. browser
//! localStorage) happens at compile time via `cfg(target_arch)`.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod state;

pub use application::dto::{Notification, NotificationSeverity};
pub use application::services::{
    CharacterService, GameError, GameSession, LlmScenarioGenerator, NextStep, TurnResolution,
};
pub use state::Platform;
