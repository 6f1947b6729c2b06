//! Story state for the running game
//!
//! Holds the scenario currently on screen, the choices offered for it, the
//! history of what the player picked, and the day counters. The scenario and
//! choices are replaced wholesale after every generation attempt. A day is
//! closed when the player picks its last choice; the history and the per-day
//! tally only move once the scenario that follows the pick has arrived.

use serde::{Deserialize, Serialize};

use super::Choice;
use crate::value_objects::{DayCompletion, DayProgress};

/// Scenario text substituted when generation fails
pub const FALLBACK_SCENARIO: &str = "You find yourself in a mysterious situation...";

const FALLBACK_CHOICES: [&str; 5] = [
    "Try again",
    "Look around",
    "Stay still",
    "Run away",
    "Call for help",
];

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryState {
    pub scenario: String,
    pub choices: Vec<Choice>,
    pub previous_choices: Vec<String>,
    #[serde(flatten)]
    progress: DayProgress,
}

impl StoryState {
    /// Empty state shown before the first scenario arrives
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_day(&self) -> u32 {
        self.progress.current_day()
    }

    pub fn decisions_this_day(&self) -> u32 {
        self.progress.decisions_this_day()
    }

    /// Close the current day if the decision being made is its last one.
    pub fn close_day_if_due(&mut self) -> Option<DayCompletion> {
        self.progress
            .closes_day()
            .then(|| self.progress.complete_day())
    }

    /// Commit a decision whose follow-up scenario arrived.
    ///
    /// The tally is left alone when the same pick already closed the day,
    /// so a fresh day starts at zero.
    pub fn commit_decision(&mut self, choice_text: impl Into<String>, closed_day: bool) {
        self.previous_choices.push(choice_text.into());
        if !closed_day {
            self.progress.count_decision();
        }
    }

    /// Replace the scenario and its choices with freshly generated ones.
    pub fn apply_scenario(&mut self, scenario: impl Into<String>, choices: Vec<Choice>) {
        self.scenario = scenario.into();
        self.choices = choices;
    }

    /// Replace the scenario with the fixed, non-penalizing fallback.
    ///
    /// History and day counters are left untouched.
    pub fn apply_fallback(&mut self) {
        self.apply_scenario(FALLBACK_SCENARIO, Self::fallback_choices());
    }

    pub fn fallback_choices() -> Vec<Choice> {
        FALLBACK_CHOICES.iter().map(|text| Choice::safe(*text)).collect()
    }

    pub fn choice(&self, index: usize) -> Option<&Choice> {
        self.choices.get(index)
    }
}
