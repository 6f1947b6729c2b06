//! Player health value object
//!
//! Health is an integer in `[0, 100]`. It starts full, only ever drops by a
//! fixed penalty when a harmful choice is taken, and is persisted as a
//! decimal string between sessions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Player health, always within `0..=Health::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Health(u8);

/// Result of applying damage to health
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageResult {
    /// Player is hurt but still alive
    Wounded(Health),
    /// Health reached zero
    Depleted,
}

impl DamageResult {
    /// Health after the damage was applied
    pub fn health(&self) -> Health {
        match self {
            Self::Wounded(health) => *health,
            Self::Depleted => Health::ZERO,
        }
    }

    /// Check if this result ends the game
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Depleted)
    }
}

impl Health {
    /// Upper bound, also the starting value for a new character
    pub const MAX: u8 = 100;

    /// Health lost when a harmful choice is selected
    pub const HARMFUL_CHOICE_PENALTY: u8 = 20;

    /// Above this value the health bar is shown as healthy
    pub const HEALTHY_THRESHOLD: u8 = 50;

    pub const ZERO: Health = Health(0);

    /// Full health.
    pub const fn full() -> Self {
        Self(Self::MAX)
    }

    /// Create a health value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `value` exceeds [`Health::MAX`].
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if value > Self::MAX {
            return Err(DomainError::validation(format!(
                "Health {} exceeds maximum of {}",
                value,
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_depleted(&self) -> bool {
        self.0 == 0
    }

    /// Whether the health bar should use the healthy color scheme
    pub fn is_healthy(&self) -> bool {
        self.0 > Self::HEALTHY_THRESHOLD
    }

    /// Subtract `amount`, flooring at zero.
    pub fn take_damage(self, amount: u8) -> DamageResult {
        match self.0.saturating_sub(amount) {
            0 => DamageResult::Depleted,
            remaining => DamageResult::Wounded(Self(remaining)),
        }
    }

    /// Apply the fixed penalty for a harmful choice.
    pub fn apply_harmful_choice(self) -> DamageResult {
        self.take_damage(Self::HARMFUL_CHOICE_PENALTY)
    }

    /// Restore health from its persisted string form.
    ///
    /// Missing or unreadable values fall back to full health, matching the
    /// behaviour of a brand new character.
    pub fn from_stored(stored: Option<&str>) -> Self {
        stored
            .and_then(|raw| raw.parse::<Health>().ok())
            .unwrap_or_default()
    }

    /// String form written to persistent storage
    pub fn to_stored(&self) -> String {
        self.0.to_string()
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::full()
    }
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} HP", self.0)
    }
}

impl FromStr for Health {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::parse(format!("Invalid health value: '{}'", s)))?;
        Self::new(value).map_err(|e| DomainError::parse(e.to_string()))
    }
}

impl TryFrom<u8> for Health {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Health> for u8 {
    fn from(health: Health) -> u8 {
        health.0
    }
}
