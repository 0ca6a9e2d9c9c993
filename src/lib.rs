//! # Quizboard
//!
//! State model for live quiz scoreboards. Two game variants are supported,
//! NoMx (first to a number of correct answers, out after a number of misses)
//! and SquareX (alternating odd/even accumulators multiplied into a score).
//! Each variant has a configuration screen and a board screen that share one
//! persisted snapshot of the game.
//!
//! The reducer in [`game`] is pure: every event turns one [`game::GameState`]
//! into a new one. The managers in [`manager`] pair it with a
//! [`session::Storage`] adapter and save the full snapshot after each event.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod constants;

pub mod game;
pub mod log;
pub mod manager;
pub mod nomx;
pub mod quiz;
pub mod roster;
pub mod session;
pub mod squarex;

pub use game::{Event, GameState, Variant};
pub use manager::{BoardManager, ConfigManager};
pub use nomx::NoMx;
pub use squarex::SquareX;

/// The quiz game variants a scoreboard can run
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    /// First to `win` correct answers, eliminated at `lose` misses
    #[display("NoMx")]
    Nomx,
    /// Score is the product of two alternating accumulators
    #[display("SquareX")]
    Squarex,
}

impl GameKind {
    /// Key under which this variant's snapshot is stored
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Nomx => "nomx.gameState",
            Self::Squarex => "squarex.gameState",
        }
    }

    /// Path of the configuration screen
    pub const fn config_route(self) -> &'static str {
        match self {
            Self::Nomx => "/config/nomx",
            Self::Squarex => "/config/squarex",
        }
    }

    /// Path of the board screen
    pub const fn board_route(self) -> &'static str {
        match self {
            Self::Nomx => "/board/nomx",
            Self::Squarex => "/board/squarex",
        }
    }
}

/// Errors raised while updating or persisting a scoreboard
#[derive(Error, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The event refers to a player index outside the roster
    #[error("no player at index {0}")]
    UnknownPlayer(usize),
    /// A snapshot or quiz did not pass validation
    #[error("invalid data: {0}")]
    Invalid(String),
    /// A snapshot could not be encoded or decoded
    #[error("serialization failed: {0}")]
    Serialization(String),
    /// The storage adapter failed to read or write
    #[error("storage failed: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

impl From<garde::Report> for Error {
    fn from(report: garde::Report) -> Self {
        Self::Invalid(report.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Storage(error.to_string())
    }
}
