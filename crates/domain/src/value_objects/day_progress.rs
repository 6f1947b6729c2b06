//! Day progression
//!
//! A day is a block of [`DECISIONS_PER_DAY`] decisions. Reaching the
//! boundary advances the day counter and resets the per-day tally.

use serde::{Deserialize, Serialize};

/// Number of decisions that make up one in-game day
pub const DECISIONS_PER_DAY: u32 = 5;

/// Emitted when a decision completes a day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCompletion {
    /// The day the player just survived
    pub completed_day: u32,
    /// The day that starts now
    pub next_day: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayProgress {
    current_day: u32,
    decisions_this_day: u32,
}

impl DayProgress {
    pub fn new() -> Self {
        Self {
            current_day: 1,
            decisions_this_day: 0,
        }
    }

    pub fn current_day(&self) -> u32 {
        self.current_day
    }

    pub fn decisions_this_day(&self) -> u32 {
        self.decisions_this_day
    }

    /// True when one more decision would close out the current day.
    pub fn closes_day(&self) -> bool {
        self.decisions_this_day + 1 >= DECISIONS_PER_DAY
    }

    /// Advance to the next day and reset the per-day tally.
    pub fn complete_day(&mut self) -> DayCompletion {
        let completed_day = self.current_day;
        self.current_day += 1;
        self.decisions_this_day = 0;
        DayCompletion {
            completed_day,
            next_day: self.current_day,
        }
    }

    pub fn count_decision(&mut self) {
        self.decisions_this_day += 1;
    }
}

impl Default for DayProgress {
    fn default() -> Self {
        Self::new()
    }
}
