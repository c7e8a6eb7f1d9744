//! Single-player Snake for the terminal.
//!
//! The game rules live in [`game`] and [`engine`] as pure value transitions;
//! [`session`] drives them from a fixed-period [`timer`], and [`renderer`]
//! draws the result with ratatui.

pub mod config;
pub mod engine;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod theme;
pub mod timer;
pub mod ui;
