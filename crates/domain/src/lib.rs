//! Survive The AI domain layer.
//!
//! Pure game rules with no I/O: health bookkeeping, day progression,
//! the story state produced by each generated scenario, and the
//! validated character name entered before play.

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{Choice, StoryState, FALLBACK_SCENARIO};
pub use error::DomainError;
pub use value_objects::{
    CharacterName, DamageResult, DayCompletion, DayProgress, Health, DECISIONS_PER_DAY,
};
