//! Domain entities

mod choice;
mod story;

pub use choice::Choice;
pub use story::{StoryState, FALLBACK_SCENARIO};
