//! Full games between two agents and win/draw tallies over a series of them.

mod game;
mod stats;

pub use game::{play_game, GameRecord};
pub use stats::{color_for_game, MatchStats};
