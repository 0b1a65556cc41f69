//! Core Connect Four game logic: board representation, win detection, player
//! types, and a game state machine with immutable transitions.

mod board;
mod player;
mod state;
mod win;

pub use board::{
    windows, Board, Cell, LegalColumns, Window, CENTER_COL, COLS, ROWS, WINDOW_COUNT, WINDOW_LEN,
};
pub use player::Player;
pub use state::{GameOutcome, GameState};
pub use win::{has_four_in_a_row, is_terminal, winner};
