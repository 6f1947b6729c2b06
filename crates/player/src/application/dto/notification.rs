//! Transient user-facing notifications ("toasts").

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationSeverity {
    Success,
    Error,
}

/// A short message shown to the player, dismissed after `duration`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: NotificationSeverity,
    pub duration: Duration,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        severity: NotificationSeverity,
        duration: Duration,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
            duration,
        }
    }

    /// Shown after a harmful choice costs health
    pub fn health_lost(amount: u8) -> Self {
        Self::new(
            "Bad Choice!",
            format!("You lost {} health points!", amount),
            NotificationSeverity::Error,
            Duration::from_millis(2000),
        )
    }

    /// Shown when health reaches zero
    pub fn game_over() -> Self {
        Self::new(
            "Game Over",
            "You didn't survive!",
            NotificationSeverity::Error,
            Duration::from_millis(3000),
        )
    }

    /// Shown when a decision closes out a day
    pub fn day_complete(day: u32) -> Self {
        Self::new(
            "Day Complete!",
            format!("You've survived Day {}!", day),
            NotificationSeverity::Success,
            Duration::from_millis(3000),
        )
    }

    /// Shown when the next scenario could not be generated
    pub fn generation_failed(description: impl Into<String>) -> Self {
        Self::new(
            "Error",
            description,
            NotificationSeverity::Error,
            Duration::from_millis(5000),
        )
    }
}
