//! Reusable UI components

mod health_bar;
mod toast;

pub use health_bar::{health_bar_tone, HealthBar};
pub use toast::ToastHost;
