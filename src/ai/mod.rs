//! Automated players: the positional heuristic, the alpha-beta minimax
//! search, and the [`Agent`] implementations built on them.

mod agent;
mod heuristic;
mod minimax;
mod random;

pub use agent::Agent;
pub use heuristic::{score_position, Heuristic, WindowHeuristic, CENTER_WEIGHT, MAX_HEURISTIC};
pub use minimax::{
    choose_move, Minimax, MinimaxAgent, SearchResult, SearchStats, INFINITY, WIN_SCORE,
};
pub use random::RandomAgent;
