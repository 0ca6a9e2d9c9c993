//! Input limits for the configuration and board screens
//!
//! Every numeric field a widget can edit has an inclusive range here. The
//! same table is used by input widgets (through [`bounds`]), by the reducer
//! when it clamps incoming edits, and by `garde` when a stored snapshot is
//! validated on load.

use serde::{Deserialize, Serialize};

/// Tournament configuration limits
pub mod config {
    /// Fewest players a game can have
    pub const MIN_COUNT: usize = 1;
    /// Most players a game can have
    pub const MAX_COUNT: usize = 15;
    /// Smallest value for a win, lose or target threshold
    pub const MIN_THRESHOLD: u32 = 1;
    /// Largest value for a win, lose or target threshold
    pub const MAX_THRESHOLD: u32 = 1000;
}

/// Per-player limits on the configuration screen
pub mod player {
    /// Smallest starting correct/incorrect count
    pub const MIN_INITIAL_COUNT: u32 = 0;
    /// Largest starting correct/incorrect count
    pub const MAX_INITIAL_COUNT: u32 = 15;
    /// Largest correct/incorrect count a stored snapshot may hold
    pub const MAX_TALLY: u32 = 100_000;
    /// Smallest SquareX accumulator a stored snapshot may hold
    pub const MIN_ACCUMULATOR: i64 = -100_000_000;
    /// Largest SquareX accumulator a stored snapshot may hold
    pub const MAX_ACCUMULATOR: i64 = 100_000_000;
}

/// Quiz data limits
pub mod quiz {
    /// Maximum number of questions in one quiz
    pub const MAX_QUESTIONS: usize = 1000;
}

/// Inclusive range a numeric field may take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    /// Smallest accepted value
    pub min: i64,
    /// Largest accepted value
    pub max: i64,
}

impl Bounds {
    /// Creates a range from `min` to `max`, both inclusive
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Pulls `value` into the range
    pub fn clamp(self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }

    /// Whether `value` already lies in the range
    pub fn contains(self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Numeric fields editable through the configuration screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Number of players
    Count,
    /// NoMx correct answers needed to win
    Win,
    /// NoMx incorrect answers that eliminate
    Lose,
    /// SquareX target score
    X,
    /// SquareX question cap
    End,
    /// SquareX odd-turn increment
    Odd,
    /// SquareX even-turn increment
    Even,
    /// A player's correct answers
    Correct,
    /// A player's incorrect answers
    Incorrect,
}

/// Looks up the accepted range for a field
pub const fn bounds(field: Field) -> Bounds {
    match field {
        Field::Count => Bounds::new(config::MIN_COUNT as i64, config::MAX_COUNT as i64),
        Field::Win | Field::Lose | Field::X | Field::End | Field::Odd | Field::Even => {
            Bounds::new(
                config::MIN_THRESHOLD as i64,
                config::MAX_THRESHOLD as i64,
            )
        }
        Field::Correct | Field::Incorrect => Bounds::new(
            player::MIN_INITIAL_COUNT as i64,
            player::MAX_INITIAL_COUNT as i64,
        ),
    }
}

/// Clamps `value` into the range of `field`
///
/// The result always fits the field's storage type since every range is
/// non-negative and below `u32::MAX`.
pub(crate) fn clamp_u32(field: Field, value: i64) -> u32 {
    bounds(field).clamp(value) as u32
}

/// Clamps `value` into the range of `field` for `usize` fields
pub(crate) fn clamp_usize(field: Field, value: i64) -> usize {
    bounds(field).clamp(value) as usize
}
