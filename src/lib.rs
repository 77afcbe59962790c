//! # Kalah
//!
//! Rules engine for the Kalah variant of Mancala, with a line-oriented text
//! session and a terminal UI built with Ratatui as front ends.
//!
//! ## Modules
//!
//! - [`game`] — Core rules: board layout, sowing, captures, turn order, scoring
//! - [`render`] — Fixed-width text layout of a board
//! - [`play`] — Prompt-driven session over any reader/writer pair
//! - [`ui`] — Terminal UI: pocket selection and live board
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod play;
pub mod render;
pub mod ui;
