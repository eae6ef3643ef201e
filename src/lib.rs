//! # Connect Four
//!
//! A two-player Connect Four game built around an observable board engine.
//! The engine validates and applies moves, detects wins and ties from the
//! last disc placed, and notifies registered observers after every move.
//! Two front-ends drive it: a full-screen terminal board built with Ratatui
//! and a plain text console.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, state, observable engine
//! - [`console`]: Text front-end: prompt loop and status printing
//! - [`ui`]: Terminal UI: board view with a column selector
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod ui;
