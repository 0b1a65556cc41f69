//! Four-in-a-row detection and terminal classification.

use super::board::{windows, Board};
use super::Player;

/// Whether `player` owns four consecutive cells in any direction.
pub fn has_four_in_a_row(board: &Board, player: Player) -> bool {
    let cell = player.to_cell();
    windows().any(|window| board.window_cells(&window).iter().all(|&c| c == cell))
}

/// The player with four in a row, if any.
///
/// Only one side can have a line in a game played by alternating drops; for
/// arbitrary boards Red is reported first.
pub fn winner(board: &Board) -> Option<Player> {
    Player::BOTH
        .into_iter()
        .find(|&player| has_four_in_a_row(board, player))
}

/// The game has ended: somebody has a line or no column is open.
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}
