use crate::game::{windows, Board, Player, CENTER_COL, ROWS, WINDOW_COUNT};

/// Bonus for each own piece in the center column.
pub const CENTER_WEIGHT: i32 = 6;

/// Upper bound on `|score_position|`: a full own center column plus every
/// window scored as a completed line.
pub const MAX_HEURISTIC: i32 =
    CENTER_WEIGHT * ROWS as i32 + WINDOW_COUNT as i32 * LINE_SCORE;

/// Window score for four own pieces.
const LINE_SCORE: i32 = 100;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

/// Default heuristic that scans all 4-cell windows and scores threats.
pub struct WindowHeuristic;

impl WindowHeuristic {
    fn score_window(own: usize, opp: usize, empty: usize) -> i32 {
        if own == 4 {
            LINE_SCORE
        } else if own == 3 && empty == 1 {
            5
        } else if own == 2 && empty == 2 {
            2
        } else if opp == 3 && empty == 1 {
            -4
        } else {
            0
        }
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        score_position(board, player)
    }
}

/// Positional score of `board` for `player`.
///
/// Overlapping windows are each counted, so central cells weigh more.
pub fn score_position(board: &Board, player: Player) -> i32 {
    let own_cell = player.to_cell();
    let opp_cell = player.other().to_cell();

    let center = (0..ROWS)
        .filter(|&row| board.get(row, CENTER_COL) == own_cell)
        .count() as i32;
    let mut score = center * CENTER_WEIGHT;

    for window in windows() {
        let mut own = 0;
        let mut opp = 0;
        let mut empty = 0;
        for cell in board.window_cells(&window) {
            match cell {
                c if c == own_cell => own += 1,
                c if c == opp_cell => opp += 1,
                _ => empty += 1,
            }
        }
        score += WindowHeuristic::score_window(own, opp, empty);
    }

    score
}
