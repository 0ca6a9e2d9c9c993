//! Core game state and the scoring reducer
//!
//! [`GameState`] is the snapshot shared by the configuration and board
//! screens. [`GameState::apply`] is a pure function from one snapshot and an
//! [`Event`] to the next snapshot; nothing here touches storage.
//!
//! Variant-specific behaviour (thresholds, accumulators, status labels) is
//! supplied through the [`Variant`] trait.

use std::fmt::{Debug, Display};

use derive_where::derive_where;
use garde::Validate;
use itertools::Itertools;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    Error, GameKind,
    log::{Activity, LogEntry, Verdict},
    quiz::{Phase, Quiz, QuizItem},
    roster::{self, Contestant, PlayerEdit},
};

/// Rules that differ between quiz game variants
pub trait Variant: Sized + 'static {
    /// Tag written into every log entry
    const KIND: GameKind;

    /// Tournament configuration
    type Config: Clone + Debug + PartialEq + Serialize + DeserializeOwned + Validate<Context = ()>;
    /// Roster entry
    type Player: Contestant
        + Debug
        + PartialEq
        + Serialize
        + DeserializeOwned
        + Validate<Context = ()>;
    /// Edit to a configuration field
    type ConfigEdit: Clone + Debug;
    /// Derived standing of one player
    type Status: Clone + Debug + PartialEq + Display;

    /// Compiled-in configuration used on first load and on reset
    fn initial_config() -> Self::Config;

    /// Number of players the configuration asks for
    fn count(config: &Self::Config) -> usize;

    /// Writes `edit` into `config`, clamping numeric values to their bounds
    fn edit_config(config: &mut Self::Config, edit: Self::ConfigEdit);

    /// Adjusts variant accumulators for a new answer
    ///
    /// Called after the shared counters have been credited and before the
    /// answer is prepended to the log. Variants without accumulators leave
    /// the player alone.
    ///
    /// The returned step is stored on the log entry, so a later undo can take
    /// back exactly what was applied even if the configuration changed in
    /// between.
    ///
    /// # Arguments
    ///
    /// * `config` - The configuration in force when the answer is recorded
    /// * `player` - The answering player
    /// * `verdict` - Whether the answer was right
    /// * `logged` - The log length before the answer was recorded
    fn on_answer(
        config: &Self::Config,
        player: &mut Self::Player,
        verdict: Verdict,
        logged: usize,
    ) -> Option<u32>;

    /// Reverses [`Variant::on_answer`] for an answer being undone
    ///
    /// Only called while the entry still refers to a player on the roster.
    /// Entries recorded before steps were stored carry no step, and the
    /// variant falls back to `config`.
    ///
    /// # Arguments
    ///
    /// * `config` - The current configuration
    /// * `player` - The player the entry refers to
    /// * `entry` - The entry being removed, already taken off the log
    /// * `logged` - The log length at the time the answer was recorded
    fn on_undo(config: &Self::Config, player: &mut Self::Player, entry: &LogEntry, logged: usize);

    /// Standing of `player` under `config`
    fn status(config: &Self::Config, player: &Self::Player) -> Self::Status;

    /// Short rule summary shown under the tournament name
    fn headline(config: &Self::Config) -> String;
}

/// Something that happens to a game
#[derive_where(Debug, Clone)]
pub enum Event<V: Variant> {
    /// Change a configuration field; a new player count resizes the roster
    Config(V::ConfigEdit),
    /// Change a field of the player at the index
    Player(usize, PlayerEdit),
    /// Bring the roster length in line with the configured count
    ResizeRoster,
    /// Throw away all progress and restore the initial state
    Reset,
    /// The player at the index answered correctly
    Correct(usize),
    /// The player at the index answered incorrectly
    Incorrect(usize),
    /// Take back the most recent answer
    Undo,
}

impl<V: Variant> Event<V> {
    fn name(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Player(..) => "player",
            Self::ResizeRoster => "resize_roster",
            Self::Reset => "reset",
            Self::Correct(_) => "correct",
            Self::Incorrect(_) => "incorrect",
            Self::Undo => "undo",
        }
    }
}

/// The complete persisted state of one game
#[derive(Serialize, Deserialize, Validate)]
#[serde(bound(serialize = "", deserialize = ""))]
#[derive_where(Debug, Clone, PartialEq)]
pub struct GameState<V: Variant> {
    /// Tournament configuration
    #[garde(dive)]
    pub config: V::Config,
    /// Roster, always `count` long
    #[garde(dive)]
    pub players: Vec<V::Player>,
    /// Recorded answers, newest first
    #[garde(skip)]
    pub logs: Vec<LogEntry>,
}

impl<V: Variant> Default for GameState<V> {
    fn default() -> Self {
        Self::initial()
    }
}

impl<V: Variant> GameState<V> {
    /// The compiled-in starting state: default config, default roster, no log
    pub fn initial() -> Self {
        let config = V::initial_config();
        let players = roster::resize(&[], V::count(&config));
        Self {
            config,
            players,
            logs: Vec::new(),
        }
    }

    /// Produces the state that follows `event`
    ///
    /// `self` is left untouched.
    ///
    /// # Errors
    ///
    /// * `Error::UnknownPlayer` - the event names a player outside the roster
    pub fn apply(&self, event: Event<V>) -> Result<Self, Error> {
        tracing::debug!(
            kind = %V::KIND,
            event = event.name(),
            logged = self.logs.len(),
            "applying event"
        );

        let mut next = self.clone();
        match event {
            Event::Config(edit) => {
                let count = V::count(&next.config);
                V::edit_config(&mut next.config, edit);
                if V::count(&next.config) != count {
                    next.resize_roster();
                }
            }
            Event::Player(index, edit) => {
                let player = next
                    .players
                    .get_mut(index)
                    .ok_or(Error::UnknownPlayer(index))?;
                edit.apply(player.profile_mut());
            }
            Event::ResizeRoster => next.resize_roster(),
            Event::Reset => next = Self::initial(),
            Event::Correct(index) => next.record(index, Verdict::Correct)?,
            Event::Incorrect(index) => next.record(index, Verdict::Incorrect)?,
            Event::Undo => next.revert_latest(),
        }
        Ok(next)
    }

    /// Resizes the roster and detaches log entries of removed players
    ///
    /// A detached entry keeps its place in the log but is never applied to a
    /// player again, including one later created at the same index.
    fn resize_roster(&mut self) {
        let count = V::count(&self.config);
        self.players = roster::resize(&self.players, count);
        for entry in &mut self.logs {
            if entry.player >= count {
                entry.detached = true;
            }
        }
    }

    fn record(&mut self, index: usize, verdict: Verdict) -> Result<(), Error> {
        let logged = self.logs.len();
        let player = self
            .players
            .get_mut(index)
            .ok_or(Error::UnknownPlayer(index))?;
        player.profile_mut().credit(verdict);
        let step = V::on_answer(&self.config, player, verdict, logged);
        self.logs
            .insert(0, LogEntry::new(V::KIND, verdict, index).with_step(step));
        Ok(())
    }

    fn revert_latest(&mut self) {
        if self.logs.is_empty() {
            return;
        }
        let entry = self.logs.remove(0);
        let logged = self.logs.len();
        match entry.target().and_then(|index| self.players.get_mut(index)) {
            Some(player) => {
                player.profile_mut().debit(entry.variant);
                V::on_undo(&self.config, player, &entry, logged);
            }
            None => tracing::warn!(
                kind = %V::KIND,
                player = entry.player,
                "undone answer belongs to a player no longer on the roster"
            ),
        }
    }

    /// Standing of the player at `index`
    pub fn status(&self, index: usize) -> Option<V::Status> {
        self.players
            .get(index)
            .map(|player| V::status(&self.config, player))
    }

    /// Standing of every player, in roster order
    pub fn standings(&self) -> Vec<V::Status> {
        self.players
            .iter()
            .map(|player| V::status(&self.config, player))
            .collect_vec()
    }

    /// Whether there is an answer to undo
    pub fn can_undo(&self) -> bool {
        !self.logs.is_empty()
    }

    /// 1-based number of the question being asked
    pub fn question_number(&self) -> usize {
        self.logs.len() + 1
    }

    /// The quiz question for the current position, if the quiz has one
    pub fn current_question<'q>(&self, quiz: &'q Quiz) -> Option<&'q QuizItem> {
        quiz.get(self.logs.len())
    }

    /// Whether the quiz still has questions left at the current position
    pub fn phase(&self, quiz: &Quiz) -> Phase {
        quiz.phase(self.logs.len())
    }

    /// The log resolved against the roster, newest first
    pub fn history(&self) -> Vec<Activity<'_>> {
        self.logs
            .iter()
            .map(|entry| Activity {
                name: entry
                    .target()
                    .and_then(|index| self.players.get(index))
                    .map(|player| player.profile().name.as_str()),
                verdict: entry.variant,
            })
            .collect_vec()
    }

    /// Rule summary for the board header
    pub fn headline(&self) -> String {
        V::headline(&self.config)
    }

    /// Parses and checks a stored snapshot
    ///
    /// A roster whose length disagrees with the configured count is resized
    /// rather than rejected, and log entries pointing past the roster are
    /// detached.
    ///
    /// # Errors
    ///
    /// * `Error::Serialization` - `raw` is not a snapshot of this variant
    /// * `Error::Invalid` - the configuration or a player is outside its
    ///   bounds, or a log entry was recorded by the other variant
    pub fn decode(raw: &str) -> Result<Self, Error> {
        let mut state: Self = serde_json::from_str(raw)?;
        state.validate()?;
        if let Some(entry) = state.logs.iter().find(|entry| entry.kind != V::KIND) {
            return Err(Error::Invalid(format!(
                "log entry recorded by {} in a {} snapshot",
                entry.kind,
                V::KIND
            )));
        }
        if state.players.len() != V::count(&state.config) {
            tracing::warn!(
                kind = %V::KIND,
                players = state.players.len(),
                count = V::count(&state.config),
                "stored roster length disagrees with player count, resizing"
            );
        }
        state.resize_roster();
        Ok(state)
    }

    /// Serializes the snapshot for storage
    ///
    /// # Errors
    ///
    /// * `Error::Serialization` - the snapshot could not be encoded
    pub fn encode(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}
