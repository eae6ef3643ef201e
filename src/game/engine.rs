use std::fmt;

use crate::error::GameError;

use super::{Board, Cell, GameState, GameStatus, Observer, Player};

/// The board engine: one game's state plus the observers that render it.
///
/// All mutation goes through [`Game::make_move`], which validates the move,
/// applies it and then notifies every observer.
pub struct Game {
    state: GameState,
    observers: Vec<Box<dyn Observer>>,
}

impl Game {
    pub fn new() -> Self {
        Game {
            state: GameState::initial(),
            observers: Vec::new(),
        }
    }

    /// Register an observer. Duplicates are kept and notified twice.
    pub fn add_observer(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Snapshot handed to observers
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    pub fn moves_made(&self) -> usize {
        self.state.moves_made()
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.state.last_move()
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn contents(&self, row: usize, col: usize) -> Cell {
        self.state.contents(row, col)
    }

    pub fn is_valid_move(&self, col: usize) -> bool {
        self.state.is_valid_move(col)
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Drop the current player's disc into `col` and notify observers.
    ///
    /// An out-of-range column, a full column or a finished game is rejected
    /// without touching the state or calling any observer. If an observer
    /// fails, the remaining observers are skipped and the error is returned;
    /// the move itself stays applied.
    pub fn make_move(&mut self, col: usize) -> Result<(), GameError> {
        let mover = self.state.current_player();
        let (row, _) = self.state.apply_move_mut(col).map_err(|e| {
            log::warn!("rejected move in column {col} by {mover}: {e}");
            e
        })?;

        log::debug!(
            "{mover} dropped into ({row}, {col}); moves made: {}",
            self.state.moves_made()
        );
        if self.state.is_terminal() {
            log::info!(
                "game over after {} moves: {}",
                self.state.moves_made(),
                self.state.status()
            );
        }

        self.notify_observers()
    }

    fn notify_observers(&mut self) -> Result<(), GameError> {
        for (index, observer) in self.observers.iter_mut().enumerate() {
            observer.update(&self.state).map_err(|e| {
                log::warn!("observer {index} failed: {e}");
                e
            })?;
        }
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
