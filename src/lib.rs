//! # Drop Four
//!
//! A configurable drop-piece four-in-a-row game for the terminal. Two or
//! more human players alternate dropping pieces, or a single player faces a
//! near-random automated opponent. A turn ends the game on a run of four
//! (horizontal, vertical, or diagonal) or when the grid fills with no
//! winner.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, turn-resolving session
//! - [`bot`] — Automated-opponent column selection policies
//! - [`config`] — TOML configuration loading and validation
//! - [`ui`] — Terminal UI built with Ratatui
//! - [`error`] — Structured error types

pub mod bot;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
