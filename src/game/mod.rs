//! Core Connect Four game logic: board representation, player types, game
//! state and the observable engine the front-ends drive.

mod board;
mod engine;
mod observer;
mod player;
mod state;

pub use board::{Board, Cell, Coord, COLS, DIRECTIONS, ROWS, WIN_LEN};
pub use engine::Game;
pub use observer::Observer;
pub use player::Player;
pub use state::{GameState, GameStatus, MoveError};
