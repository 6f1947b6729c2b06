//! WASM platform implementations
//!
//! Browser-backed providers: `localStorage` for persistence, `document.title`
//! for the page title, and gloo timers for sleeping.

use crate::ports::outbound::{DocumentProvider, SleepProvider, StorageProvider};
use crate::state::Platform;
use std::{future::Future, pin::Pin};

/// Browser `localStorage` provider
///
/// Every call looks the storage object up again; it is cheap and avoids
/// holding a `!Send` JS handle inside the provider.
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl WasmStorageProvider {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match Self::local_storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    tracing::error!(key, "Failed to write to localStorage");
                }
            }
            None => tracing::warn!("localStorage unavailable, dropping write for {}", key),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        Self::local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            if storage.remove_item(key).is_err() {
                tracing::error!(key, "Failed to remove from localStorage");
            }
        }
    }
}

/// Sets `document.title`
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

/// Sleep provider backed by `setTimeout`
#[derive(Clone, Default)]
pub struct WasmSleepProvider;

impl SleepProvider for WasmSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        Box::pin(gloo_timers::future::TimeoutFuture::new(ms))
    }
}

/// Create platform services for the browser
pub fn create_platform() -> Platform {
    Platform::new(WasmSleepProvider, WasmStorageProvider, WasmDocumentProvider)
}
