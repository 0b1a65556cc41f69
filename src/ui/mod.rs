//! Terminal UI: a mode menu and the game view, for two humans or a human
//! against the minimax AI.

mod app;
mod game_view;
mod menu_view;

pub use app::{App, Mode, Screen, AI, HUMAN};
