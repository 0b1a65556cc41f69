//! # Minimax Connect Four
//!
//! Connect Four in the terminal, against another human or an AI that picks
//! its moves with depth-limited minimax search and alpha-beta pruning.
//!
//! ## Modules
//!
//! - [`game`] — Board, win detection, players, game state machine
//! - [`ai`] — Positional heuristic, minimax search, agents
//! - [`play`] — Full games between agents and match statistics
//! - [`ui`] — Terminal UI: mode menu and game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//! - [`logging`] — `tracing` subscriber setup for the binaries

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod play;
pub mod ui;
