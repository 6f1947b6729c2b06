//! Validated name newtypes
//!
//! Names are valid by construction: trimmed and non-empty.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A validated character name (non-empty, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterName(String);

impl CharacterName {
    /// Create a new validated character name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Character name cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CharacterName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CharacterName> for String {
    fn from(name: CharacterName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let name = CharacterName::new("  Aldric  ").unwrap();
        assert_eq!(name.as_str(), "Aldric");
    }

    #[test]
    fn rejects_blank_names() {
        assert!(matches!(
            CharacterName::new(""),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            CharacterName::new("   \t "),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn accepts_long_names() {
        let long = "a".repeat(1000);
        assert_eq!(CharacterName::new(long.clone()).unwrap().as_str(), long);
    }

    #[test]
    fn deserialize_validates() {
        let ok: CharacterName = serde_json::from_str("\" Mira \"").unwrap();
        assert_eq!(ok.to_string(), "Mira");
        assert!(serde_json::from_str::<CharacterName>("\"  \"").is_err());
    }
}
