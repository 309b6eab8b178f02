//! # Four in a Row
//!
//! A connect-four style game on boards from 4x4 up to 8x8, played between
//! two people or against a single-ply greedy computer opponent, over as many
//! rounds as the players like. Comes with a terminal UI built on Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, win detection, seats, scoring, round controller
//! - [`ai`]: Agent trait, greedy agent and its window heuristic
//! - [`ui`]: Terminal UI: game view
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
