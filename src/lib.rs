//! A two-player Pac-Man duel on a fixed maze, played in the terminal.

pub mod config;
pub mod constants;
pub mod direction;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod maze;
pub mod pacman;
pub mod power;
pub mod render;
pub mod score;
