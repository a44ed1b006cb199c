//! The game-state engine and its win detection.
//!
//! - [`GameEngine`]: move application, undo, reset, history navigation
//! - [`win`]: the four-axis line scan run after each placement

pub mod game;
pub mod win;

pub use game::GameEngine;
pub use win::{find_winning_line, WIN_LENGTH};
