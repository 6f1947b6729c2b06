//! Character service - persists the player's character between screens.

use survive_domain::{CharacterName, DomainError, Health};

use crate::ports::outbound::{storage_keys, StorageProvider};

/// Seeds the persisted character
#[derive(Clone)]
pub struct CharacterService<S: StorageProvider> {
    storage: S,
}

impl<S: StorageProvider> CharacterService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Start a new character.
    ///
    /// Writes the name and resets health to full, replacing anything left
    /// over from a previous run.
    pub fn create(&self, name: &str) -> Result<CharacterName, DomainError> {
        let name = CharacterName::new(name)?;

        self.storage.save(storage_keys::CHARACTER_NAME, name.as_str());
        self.storage
            .save(storage_keys::HEALTH, &Health::full().to_stored());

        tracing::info!(character = %name.as_str(), "Character created");
        Ok(name)
    }
}
