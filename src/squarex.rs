//! SquareX rules
//!
//! Each answer moves one of two accumulators. Which one depends on the parity
//! of the log length when the answer is recorded: odd lengths move `even` by
//! `config.even`, even lengths move `odd` by `config.odd`. Correct answers add,
//! incorrect answers subtract. A player's score is `odd * even` and they win
//! once it reaches `config.x`.

use garde::Validate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{
    GameKind,
    constants::{self, Field},
    game::{self, Variant},
    log::{LogEntry, Verdict},
    roster::{Contestant, Profile},
};

/// SquareX tournament configuration
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Config {
    /// Tournament name
    #[garde(skip)]
    pub name: String,
    /// Number of players
    #[garde(range(min = constants::config::MIN_COUNT, max = constants::config::MAX_COUNT))]
    pub count: usize,
    /// Score needed to win
    #[garde(range(min = constants::config::MIN_THRESHOLD, max = constants::config::MAX_THRESHOLD))]
    pub x: u32,
    /// Optional question cap; recorded but not used in scoring
    #[garde(range(min = constants::config::MIN_THRESHOLD, max = constants::config::MAX_THRESHOLD))]
    pub end: Option<u32>,
    /// Step applied to the `odd` accumulator
    #[garde(range(min = constants::config::MIN_THRESHOLD, max = constants::config::MAX_THRESHOLD))]
    pub odd: u32,
    /// Step applied to the `even` accumulator
    #[garde(range(min = constants::config::MIN_THRESHOLD, max = constants::config::MAX_THRESHOLD))]
    pub even: u32,
}

/// An edit to one SquareX configuration field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "lowercase")]
pub enum ConfigEdit {
    /// Rename the tournament
    Name(String),
    /// Change the player count
    Count(i64),
    /// Change the target score
    X(i64),
    /// Set or clear the question cap
    End(Option<i64>),
    /// Change the odd-turn step
    Odd(i64),
    /// Change the even-turn step
    Even(i64),
}

/// A SquareX roster entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Player {
    /// Name, counters and group
    #[serde(flatten)]
    #[garde(dive)]
    pub profile: Profile,
    /// Accumulator moved on even log lengths
    #[garde(range(min = constants::player::MIN_ACCUMULATOR, max = constants::player::MAX_ACCUMULATOR))]
    pub odd: i64,
    /// Accumulator moved on odd log lengths
    #[garde(range(min = constants::player::MIN_ACCUMULATOR, max = constants::player::MAX_ACCUMULATOR))]
    pub even: i64,
}

impl Player {
    /// The product of both accumulators, saturating at the `i64` limits
    pub fn score(&self) -> i64 {
        self.odd.saturating_mul(self.even)
    }
}

impl Contestant for Player {
    fn placeholder(position: usize) -> Self {
        Self {
            profile: Profile::placeholder(position),
            odd: 0,
            even: 0,
        }
    }

    fn profile(&self) -> &Profile {
        &self.profile
    }

    fn profile_mut(&mut self) -> &mut Profile {
        &mut self.profile
    }
}

/// Standing of a SquareX player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Status {
    /// Score reached the target
    #[display("WIN!")]
    Win,
    /// Current score, still short of the target
    #[display("{_0}")]
    Score(i64),
}

/// Marker type selecting the SquareX rules
#[derive(Debug, Clone, Copy)]
pub enum SquareX {}

/// A SquareX game snapshot
pub type GameState = game::GameState<SquareX>;

/// The configured step for the accumulator that `logged`'s parity selects
fn step(config: &Config, logged: usize) -> u32 {
    if logged % 2 == 1 { config.even } else { config.odd }
}

/// Moves the accumulator chosen by `logged`'s parity by `delta`
fn shift(player: &mut Player, logged: usize, delta: i64) {
    let accumulator = if logged % 2 == 1 {
        &mut player.even
    } else {
        &mut player.odd
    };
    *accumulator = accumulator.saturating_add(delta);
}

fn sign(verdict: Verdict) -> i64 {
    match verdict {
        Verdict::Correct => 1,
        Verdict::Incorrect => -1,
    }
}

impl Variant for SquareX {
    const KIND: GameKind = GameKind::Squarex;

    type Config = Config;
    type Player = Player;
    type ConfigEdit = ConfigEdit;
    type Status = Status;

    fn initial_config() -> Config {
        Config {
            name: "SquareX".to_string(),
            count: 5,
            x: 100,
            end: None,
            odd: 1,
            even: 1,
        }
    }

    fn count(config: &Config) -> usize {
        config.count
    }

    fn edit_config(config: &mut Config, edit: ConfigEdit) {
        match edit {
            ConfigEdit::Name(name) => config.name = name,
            ConfigEdit::Count(value) => config.count = constants::clamp_usize(Field::Count, value),
            ConfigEdit::X(value) => config.x = constants::clamp_u32(Field::X, value),
            ConfigEdit::End(value) => {
                config.end = value.map(|value| constants::clamp_u32(Field::End, value));
            }
            ConfigEdit::Odd(value) => config.odd = constants::clamp_u32(Field::Odd, value),
            ConfigEdit::Even(value) => config.even = constants::clamp_u32(Field::Even, value),
        }
    }

    fn on_answer(
        config: &Config,
        player: &mut Player,
        verdict: Verdict,
        logged: usize,
    ) -> Option<u32> {
        let step = step(config, logged);
        shift(player, logged, sign(verdict) * i64::from(step));
        Some(step)
    }

    fn on_undo(config: &Config, player: &mut Player, entry: &LogEntry, logged: usize) {
        let step = entry.step.unwrap_or_else(|| step(config, logged));
        shift(player, logged, -sign(entry.variant) * i64::from(step));
    }

    fn status(config: &Config, player: &Player) -> Status {
        let score = player.score();
        if score >= i64::from(config.x) {
            Status::Win
        } else {
            Status::Score(score)
        }
    }

    fn headline(config: &Config) -> String {
        format!("Square {}", config.x)
    }
}

impl game::GameState<SquareX> {
    /// Score of the player at `index`
    pub fn score(&self, index: usize) -> Option<i64> {
        self.players.get(index).map(Player::score)
    }
}
