//! Value objects - Immutable objects defined by their attributes

mod day_progress;
mod health;
mod names;

pub use day_progress::{DayCompletion, DayProgress, DECISIONS_PER_DAY};
pub use health::{DamageResult, Health};
pub use names::CharacterName;
