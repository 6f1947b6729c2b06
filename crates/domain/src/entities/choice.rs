//! A selectable action offered by a scenario

use serde::{Deserialize, Serialize};

/// One option presented to the player.
///
/// `is_bad` is hidden from the player and decides whether selecting the
/// choice costs health.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    pub text: String,
    #[serde(default)]
    pub is_bad: bool,
}

impl Choice {
    pub fn new(text: impl Into<String>, is_bad: bool) -> Self {
        Self {
            text: text.into(),
            is_bad,
        }
    }

    /// A choice with no health penalty
    pub fn safe(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    /// A choice that costs health when selected
    pub fn harmful(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }
}
