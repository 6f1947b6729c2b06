//! Context state shared across routes

mod theme_state;
mod toast_state;

pub use theme_state::{use_theme_state, ThemeState};
pub use toast_state::{use_toast_state, ActiveToast, ToastQueue, ToastState};
