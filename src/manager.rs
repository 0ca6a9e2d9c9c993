//! Configuration and board screen state managers
//!
//! A manager owns the current [`GameState`] and a [`Storage`] adapter. On
//! construction it loads the stored snapshot, falling back to the variant's
//! initial state. Every event runs through the pure reducer and the new
//! snapshot is then written back in full.
//!
//! [`ConfigManager`] and [`BoardManager`] expose the operations of their
//! respective screens over the same snapshot and can be turned into one
//! another, which is how the two screens link to each other.

use crate::{
    Error,
    game::{Event, GameState, Variant},
    log::Activity,
    quiz::{Phase, Quiz, QuizItem},
    roster::PlayerEdit,
    session::Storage,
};

/// Shared state holder behind both screens
#[derive(Debug)]
struct Manager<V: Variant, S: Storage> {
    state: GameState<V>,
    storage: S,
}

impl<V: Variant, S: Storage> Manager<V, S> {
    fn open(storage: S) -> Self {
        let state = Self::mount(&storage);
        Self { state, storage }
    }

    fn mount(storage: &S) -> GameState<V> {
        let key = V::KIND.storage_key();
        match storage.load(key) {
            Ok(Some(raw)) => GameState::decode(&raw).unwrap_or_else(|e| {
                tracing::warn!(%key, error = %e, "stored snapshot unusable, starting fresh");
                GameState::initial()
            }),
            Ok(None) => {
                tracing::debug!(%key, "no stored snapshot, starting fresh");
                GameState::initial()
            }
            Err(e) => {
                tracing::warn!(%key, error = %e, "could not read snapshot, starting fresh");
                GameState::initial()
            }
        }
    }

    /// Applies `event`, keeps the new state and saves it
    ///
    /// A failed save is logged and returned, but the new state is kept in
    /// memory either way.
    fn dispatch(&mut self, event: Event<V>) -> Result<(), Error> {
        self.state = self.state.apply(event)?;
        self.persist()
    }

    fn persist(&mut self) -> Result<(), Error> {
        let key = V::KIND.storage_key();
        let result = self
            .state
            .encode()
            .and_then(|raw| self.storage.save(key, &raw));
        if let Err(e) = &result {
            tracing::warn!(%key, error = %e, "failed to save snapshot");
        }
        result
    }
}

/// State behind a variant's configuration screen
#[derive(Debug)]
pub struct ConfigManager<V: Variant, S: Storage>(Manager<V, S>);

impl<V: Variant, S: Storage> ConfigManager<V, S> {
    /// Loads the stored snapshot for `V`, or the initial state
    pub fn open(storage: S) -> Self {
        Self(Manager::open(storage))
    }

    /// The current snapshot
    pub fn state(&self) -> &GameState<V> {
        &self.0.state
    }

    /// Changes one configuration field; a new player count resizes the roster
    ///
    /// # Errors
    ///
    /// * `Error::Storage` / `Error::Serialization` - the snapshot could not be
    ///   saved; the edit is still applied in memory
    pub fn set_config_field(&mut self, edit: V::ConfigEdit) -> Result<(), Error> {
        self.0.dispatch(Event::Config(edit))
    }

    /// Brings the roster length in line with the configured count
    ///
    /// # Errors
    ///
    /// * `Error::Storage` / `Error::Serialization` - the snapshot could not be saved
    pub fn resize_roster(&mut self) -> Result<(), Error> {
        self.0.dispatch(Event::ResizeRoster)
    }

    /// Changes one field of the player at `index`
    ///
    /// # Errors
    ///
    /// * `Error::UnknownPlayer` - `index` is outside the roster; nothing changes
    /// * `Error::Storage` / `Error::Serialization` - the snapshot could not be saved
    pub fn set_player_field(&mut self, index: usize, edit: PlayerEdit) -> Result<(), Error> {
        self.0.dispatch(Event::Player(index, edit))
    }

    /// Restores the variant's initial configuration, roster and empty log
    ///
    /// # Errors
    ///
    /// * `Error::Storage` / `Error::Serialization` - the snapshot could not be saved
    pub fn reset(&mut self) -> Result<(), Error> {
        self.0.dispatch(Event::Reset)
    }

    /// Switches to the board screen over the same snapshot
    pub fn board(self) -> BoardManager<V, S> {
        BoardManager(self.0)
    }

    /// Gives back the storage adapter
    pub fn into_storage(self) -> S {
        self.0.storage
    }
}

/// State behind a variant's board screen
#[derive(Debug)]
pub struct BoardManager<V: Variant, S: Storage>(Manager<V, S>);

impl<V: Variant, S: Storage> BoardManager<V, S> {
    /// Loads the stored snapshot for `V`, or the initial state
    pub fn open(storage: S) -> Self {
        Self(Manager::open(storage))
    }

    /// The current snapshot
    pub fn state(&self) -> &GameState<V> {
        &self.0.state
    }

    /// Records a correct answer by the player at `index`
    ///
    /// # Errors
    ///
    /// * `Error::UnknownPlayer` - `index` is outside the roster; nothing changes
    /// * `Error::Storage` / `Error::Serialization` - the snapshot could not be saved
    pub fn record_correct(&mut self, index: usize) -> Result<(), Error> {
        self.0.dispatch(Event::Correct(index))
    }

    /// Records an incorrect answer by the player at `index`
    ///
    /// # Errors
    ///
    /// * `Error::UnknownPlayer` - `index` is outside the roster; nothing changes
    /// * `Error::Storage` / `Error::Serialization` - the snapshot could not be saved
    pub fn record_incorrect(&mut self, index: usize) -> Result<(), Error> {
        self.0.dispatch(Event::Incorrect(index))
    }

    /// Takes back the most recent answer
    ///
    /// Does nothing, and writes nothing, when there is no answer to undo.
    ///
    /// # Errors
    ///
    /// * `Error::Storage` / `Error::Serialization` - the snapshot could not be saved
    pub fn undo(&mut self) -> Result<(), Error> {
        if !self.0.state.can_undo() {
            return Ok(());
        }
        self.0.dispatch(Event::Undo)
    }

    /// Standing of the player at `index`
    pub fn status(&self, index: usize) -> Option<V::Status> {
        self.0.state.status(index)
    }

    /// Whether the undo action is available
    pub fn can_undo(&self) -> bool {
        self.0.state.can_undo()
    }

    /// Question to display, if `quiz` has one at the current position
    pub fn current_question<'q>(&self, quiz: &'q Quiz) -> Option<&'q QuizItem> {
        self.0.state.current_question(quiz)
    }

    /// Whether `quiz` still has questions at the current position
    pub fn phase(&self, quiz: &Quiz) -> Phase {
        self.0.state.phase(quiz)
    }

    /// Recorded answers, newest first, resolved against the roster
    pub fn history(&self) -> Vec<Activity<'_>> {
        self.0.state.history()
    }

    /// Switches to the configuration screen over the same snapshot
    pub fn config(self) -> ConfigManager<V, S> {
        ConfigManager(self.0)
    }

    /// Gives back the storage adapter
    pub fn into_storage(self) -> S {
        self.0.storage
    }
}
