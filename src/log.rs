//! Scoring event log
//!
//! The log is stored newest-first: each event is inserted at the front, so
//! `logs[0]` is always the most recent answer. Its length doubles as the
//! index of the current quiz question.
//!
//! Entries whose player has since been cut from the roster stay in the log so
//! the question position is kept, but are marked detached and no longer point
//! at anyone.

use serde::{Deserialize, Serialize};

use super::GameKind;

/// Whether an answer was right or wrong
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The player answered correctly
    #[display("correct")]
    Correct,
    /// The player answered incorrectly
    #[display("incorrect")]
    Incorrect,
}

/// One recorded answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Variant the entry was recorded under
    #[serde(rename = "type")]
    pub kind: GameKind,
    /// Outcome of the answer
    pub variant: Verdict,
    /// Roster index of the answering player
    pub player: usize,
    /// Accumulator step applied when the answer was recorded, if the variant uses one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<u32>,
    /// Set once the player has been removed from the roster
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub detached: bool,
}

impl LogEntry {
    /// Creates a log entry
    pub fn new(kind: GameKind, variant: Verdict, player: usize) -> Self {
        Self {
            kind,
            variant,
            player,
            step: None,
            detached: false,
        }
    }

    /// Records the accumulator step the answer applied
    #[must_use]
    pub fn with_step(mut self, step: Option<u32>) -> Self {
        self.step = step;
        self
    }

    /// The roster index this entry still refers to
    pub fn target(&self) -> Option<usize> {
        (!self.detached).then_some(self.player)
    }
}

/// A log entry resolved against the roster, for the activity feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Activity<'a> {
    /// Name of the player, or `None` if they were removed from the roster
    pub name: Option<&'a str>,
    /// Outcome of the answer
    pub verdict: Verdict,
}
