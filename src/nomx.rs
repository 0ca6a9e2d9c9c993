//! NoMx rules
//!
//! A player wins on reaching `win` correct answers and is eliminated on
//! reaching `lose` incorrect answers. Winning is checked first.

use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::{
    GameKind,
    constants::{self, Field},
    game::{self, Variant},
    log::{LogEntry, Verdict},
    roster::Profile,
};

/// NoMx tournament configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Config {
    /// Tournament name
    #[garde(skip)]
    pub name: String,
    /// Number of players
    #[garde(range(min = constants::config::MIN_COUNT, max = constants::config::MAX_COUNT))]
    pub count: usize,
    /// Correct answers needed to win
    #[garde(range(min = constants::config::MIN_THRESHOLD, max = constants::config::MAX_THRESHOLD))]
    pub win: u32,
    /// Incorrect answers that eliminate a player
    #[garde(range(min = constants::config::MIN_THRESHOLD, max = constants::config::MAX_THRESHOLD))]
    pub lose: u32,
}

/// An edit to one NoMx configuration field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "lowercase")]
pub enum ConfigEdit {
    /// Rename the tournament
    Name(String),
    /// Change the player count
    Count(i64),
    /// Change the win threshold
    Win(i64),
    /// Change the lose threshold
    Lose(i64),
}

/// NoMx players carry only the shared profile
pub type Player = Profile;

/// Standing of a NoMx player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Status {
    /// Reached the win threshold
    #[display("WIN")]
    Win,
    /// Reached the lose threshold without winning
    #[display("LOSE")]
    Lose,
    /// Still in the game
    #[display("playing")]
    Playing,
}

/// What a counter button shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum CounterLabel {
    /// The raw count
    #[display("{_0}")]
    Count(u32),
    /// The threshold for this counter has been met
    #[display("{_0}")]
    Reached(Status),
}

/// Marker type selecting the NoMx rules
#[derive(Debug, Clone, Copy)]
pub enum NoMx {}

/// A NoMx game snapshot
pub type GameState = game::GameState<NoMx>;

impl Variant for NoMx {
    const KIND: GameKind = GameKind::Nomx;

    type Config = Config;
    type Player = Player;
    type ConfigEdit = ConfigEdit;
    type Status = Status;

    fn initial_config() -> Config {
        Config {
            name: "NoMx".to_string(),
            count: 5,
            win: 7,
            lose: 3,
        }
    }

    fn count(config: &Config) -> usize {
        config.count
    }

    fn edit_config(config: &mut Config, edit: ConfigEdit) {
        match edit {
            ConfigEdit::Name(name) => config.name = name,
            ConfigEdit::Count(value) => config.count = constants::clamp_usize(Field::Count, value),
            ConfigEdit::Win(value) => config.win = constants::clamp_u32(Field::Win, value),
            ConfigEdit::Lose(value) => config.lose = constants::clamp_u32(Field::Lose, value),
        }
    }

    fn on_answer(
        _config: &Config,
        _player: &mut Player,
        _verdict: Verdict,
        _logged: usize,
    ) -> Option<u32> {
        None
    }

    fn on_undo(_config: &Config, _player: &mut Player, _entry: &LogEntry, _logged: usize) {}

    fn status(config: &Config, player: &Player) -> Status {
        if player.correct >= config.win {
            Status::Win
        } else if player.incorrect >= config.lose {
            Status::Lose
        } else {
            Status::Playing
        }
    }

    fn headline(config: &Config) -> String {
        format!("{} o {} x", config.win, config.lose)
    }
}

impl game::GameState<NoMx> {
    /// Label for the correct-answer button of the player at `index`
    pub fn correct_label(&self, index: usize) -> Option<CounterLabel> {
        let player = self.players.get(index)?;
        Some(if player.correct >= self.config.win {
            CounterLabel::Reached(Status::Win)
        } else {
            CounterLabel::Count(player.correct)
        })
    }

    /// Label for the incorrect-answer button of the player at `index`
    pub fn incorrect_label(&self, index: usize) -> Option<CounterLabel> {
        let player = self.players.get(index)?;
        Some(if player.incorrect >= self.config.lose {
            CounterLabel::Reached(Status::Lose)
        } else {
            CounterLabel::Count(player.incorrect)
        })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::game::Event;

    fn with_thresholds(count: i64, win: i64, lose: i64) -> GameState {
        GameState::initial()
            .apply(Event::Config(ConfigEdit::Count(count)))
            .unwrap()
            .apply(Event::Config(ConfigEdit::Win(win)))
            .unwrap()
            .apply(Event::Config(ConfigEdit::Lose(lose)))
            .unwrap()
    }

    #[test]
    fn test_initial_config() {
        let state = GameState::initial();
        assert_eq!(state.config.name, "NoMx");
        assert_eq!(state.config.count, 5);
        assert_eq!(state.config.win, 7);
        assert_eq!(state.config.lose, 3);
        assert_eq!(state.headline(), "7 o 3 x");
    }

    #[test]
    fn test_win_on_threshold() {
        let mut state = with_thresholds(2, 3, 3);
        for _ in 0..2 {
            state = state.apply(Event::Correct(0)).unwrap();
        }
        assert_eq!(state.status(0), Some(Status::Playing));

        let state = state.apply(Event::Correct(0)).unwrap();
        assert_eq!(state.status(0), Some(Status::Win));
        assert_eq!(state.correct_label(0), Some(CounterLabel::Reached(Status::Win)));
    }

    #[test]
    fn test_lose_on_threshold() {
        let state = with_thresholds(1, 5, 2).apply(Event::Incorrect(0)).unwrap();
        assert_eq!(state.status(0), Some(Status::Playing));
        assert_eq!(state.incorrect_label(0), Some(CounterLabel::Count(1)));

        let state = state.apply(Event::Incorrect(0)).unwrap();
        assert_eq!(state.status(0), Some(Status::Lose));
        assert_eq!(state.incorrect_label(0).unwrap().to_string(), "LOSE");
    }

    #[test]
    fn test_lose_reached_before_win() {
        let state = [
            Event::Correct(0),
            Event::Correct(0),
            Event::Incorrect(0),
            Event::Incorrect(0),
        ]
        .into_iter()
        .try_fold(with_thresholds(1, 3, 2), |state, event| state.apply(event))
        .unwrap();

        assert_eq!(state.status(0), Some(Status::Lose));
        assert_eq!(state.correct_label(0), Some(CounterLabel::Count(2)));
    }

    #[test]
    fn test_win_checked_before_lose() {
        let state = [Event::Correct(0), Event::Incorrect(0)]
            .into_iter()
            .try_fold(with_thresholds(1, 1, 1), |state, event| state.apply(event))
            .unwrap();

        assert_eq!(state.status(0), Some(Status::Win));
    }

    #[test]
    fn test_config_edits_are_clamped() {
        let state = with_thresholds(0, 0, 5000);
        assert_eq!(state.config.count, 1);
        assert_eq!(state.config.win, 1);
        assert_eq!(state.config.lose, 1000);
        assert_eq!(state.players.len(), 1);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(Status::Win.to_string(), "WIN");
        assert_eq!(Status::Lose.to_string(), "LOSE");
        assert_eq!(Status::Playing.to_string(), "playing");
        assert_eq!(CounterLabel::Count(4).to_string(), "4");
    }

    #[test]
    fn test_snapshot_json_shape() {
        let state = with_thresholds(1, 7, 3).apply(Event::Correct(0)).unwrap();
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "config": {"name": "NoMx", "count": 1, "win": 7, "lose": 3},
                "players": [{"name": "Player 1", "correct": 1, "incorrect": 0, "group": ""}],
                "logs": [{"type": "nomx", "variant": "correct", "player": 0}],
            })
        );
    }

    #[test]
    fn test_status_of_missing_player() {
        assert_eq!(GameState::initial().status(10), None);
        assert_eq!(GameState::initial().correct_label(10), None);
    }
}
