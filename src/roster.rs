//! Player roster management
//!
//! Both variants share the same per-player profile (name, counters, group).
//! SquareX players wrap it with extra accumulators. The roster always holds
//! exactly `config.count` players; [`resize`] keeps it that way.

use garde::Validate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{self, Field},
    log::Verdict,
};

/// Fields every player carries regardless of variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Profile {
    /// Display name
    #[garde(skip)]
    pub name: String,
    /// Correct answers so far
    #[garde(range(max = constants::player::MAX_TALLY))]
    pub correct: u32,
    /// Incorrect answers so far
    #[garde(range(max = constants::player::MAX_TALLY))]
    pub incorrect: u32,
    /// Team, school or other affiliation shown above the name
    #[garde(skip)]
    pub group: String,
}

impl Profile {
    /// Creates the default profile for the player at 1-based `position`
    pub fn placeholder(position: usize) -> Self {
        Self {
            name: format!("Player {position}"),
            correct: 0,
            incorrect: 0,
            group: String::new(),
        }
    }

    /// Returns the counter that tracks `verdict`
    pub fn tally(&self, verdict: Verdict) -> u32 {
        match verdict {
            Verdict::Correct => self.correct,
            Verdict::Incorrect => self.incorrect,
        }
    }

    fn tally_mut(&mut self, verdict: Verdict) -> &mut u32 {
        match verdict {
            Verdict::Correct => &mut self.correct,
            Verdict::Incorrect => &mut self.incorrect,
        }
    }

    /// Counts one more answer of the given kind
    pub fn credit(&mut self, verdict: Verdict) {
        let tally = self.tally_mut(verdict);
        *tally = tally.saturating_add(1);
    }

    /// Takes back one answer of the given kind, never going below zero
    pub fn debit(&mut self, verdict: Verdict) {
        let tally = self.tally_mut(verdict);
        *tally = tally.saturating_sub(1);
    }
}

/// A roster entry for some game variant
pub trait Contestant: Clone {
    /// Creates a fresh player for 1-based `position`
    fn placeholder(position: usize) -> Self;

    /// The shared profile of this player
    fn profile(&self) -> &Profile;

    /// Mutable access to the shared profile
    fn profile_mut(&mut self) -> &mut Profile;
}

impl Contestant for Profile {
    fn placeholder(position: usize) -> Self {
        Profile::placeholder(position)
    }

    fn profile(&self) -> &Profile {
        self
    }

    fn profile_mut(&mut self) -> &mut Profile {
        self
    }
}

/// An edit to one player made on the configuration screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "lowercase")]
pub enum PlayerEdit {
    /// Rename the player
    Name(String),
    /// Change the affiliation
    Group(String),
    /// Set the starting correct count, clamped to its bounds
    Correct(i64),
    /// Set the starting incorrect count, clamped to its bounds
    Incorrect(i64),
}

impl PlayerEdit {
    /// Writes this edit into `profile`
    pub fn apply(self, profile: &mut Profile) {
        match self {
            Self::Name(name) => profile.name = name,
            Self::Group(group) => profile.group = group,
            Self::Correct(value) => profile.correct = constants::clamp_u32(Field::Correct, value),
            Self::Incorrect(value) => {
                profile.incorrect = constants::clamp_u32(Field::Incorrect, value);
            }
        }
    }
}

/// Grows or shrinks `players` to exactly `count` entries
///
/// New players are appended with placeholder names continuing the existing
/// numbering. Shrinking drops players from the end along with their state.
pub fn resize<P: Contestant>(players: &[P], count: usize) -> Vec<P> {
    if players.len() >= count {
        return players[..count].to_vec();
    }
    players
        .iter()
        .cloned()
        .chain((players.len() + 1..=count).map(P::placeholder))
        .collect_vec()
}
