use tracing::{debug, trace};

use crate::error::SearchError;
use crate::game::{has_four_in_a_row, Board, GameState, Player};

use super::agent::Agent;
use super::heuristic::{Heuristic, WindowHeuristic, MAX_HEURISTIC};

/// Score of a position where the maximizer has won. Losses score the negation.
pub const WIN_SCORE: i32 = 10_000_000;

/// Initial alpha-beta bound, above any reachable score.
pub const INFINITY: i32 = i32::MAX;

const _: () = assert!(WIN_SCORE > MAX_HEURISTIC);

/// Column picked at a node (absent at leaves) and its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub value: i32,
}

impl SearchResult {
    fn leaf(value: i32) -> Self {
        SearchResult {
            column: None,
            value,
        }
    }
}

/// Work counters for a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, including leaves
    pub nodes: u64,
    /// Times the remaining siblings were skipped because alpha >= beta
    pub cutoffs: u64,
}

/// Depth-limited minimax with alpha-beta pruning for one fixed maximizer.
///
/// Children are explored in ascending column order on independent board
/// copies; the first column reaching the best value wins ties.
pub struct Minimax<'h> {
    maximizer: Player,
    heuristic: &'h dyn Heuristic,
    stats: SearchStats,
}

impl Minimax<'static> {
    pub fn new(maximizer: Player) -> Self {
        Self::with_heuristic(maximizer, &WindowHeuristic)
    }
}

impl<'h> Minimax<'h> {
    pub fn with_heuristic(maximizer: Player, heuristic: &'h dyn Heuristic) -> Self {
        Minimax {
            maximizer,
            heuristic,
            stats: SearchStats::default(),
        }
    }

    pub fn maximizer(&self) -> Player {
        self.maximizer
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search `board` to `depth` plies. `maximizing` tells whose turn it is:
    /// the maximizer's or the opponent's.
    pub fn search(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.stats.nodes += 1;

        let minimizer = self.maximizer.other();
        let legal = board.legal_columns();

        if has_four_in_a_row(board, self.maximizer) {
            return SearchResult::leaf(WIN_SCORE);
        }
        if has_four_in_a_row(board, minimizer) {
            return SearchResult::leaf(-WIN_SCORE);
        }
        if legal.is_empty() {
            return SearchResult::leaf(0);
        }
        if depth == 0 {
            return SearchResult::leaf(self.heuristic.evaluate(board, self.maximizer));
        }

        let (piece, mut value) = if maximizing {
            (self.maximizer, -INFINITY)
        } else {
            (minimizer, INFINITY)
        };
        let mut column = legal[0];

        for (col, child) in board.children(piece) {
            let score = self.search(&child, depth - 1, alpha, beta, !maximizing).value;

            if maximizing {
                if score > value {
                    value = score;
                    column = col;
                }
                alpha = alpha.max(value);
            } else {
                if score < value {
                    value = score;
                    column = col;
                }
                beta = beta.min(value);
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                trace!(depth, col, alpha, beta, "pruned remaining columns");
                break;
            }
        }

        SearchResult {
            column: Some(column),
            value,
        }
    }
}

/// Pick a column for `player` by searching `depth` plies ahead.
///
/// A depth of 0 is searched as 1 so that a column is always chosen. Fails with
/// [`SearchError::NoLegalMove`] when the position is already decided.
pub fn choose_move(board: &Board, depth: u32, player: Player) -> Result<usize, SearchError> {
    let depth = depth.max(1);
    let mut minimax = Minimax::new(player);
    let result = minimax.search(board, depth, -INFINITY, INFINITY, true);
    let stats = minimax.stats();

    debug!(
        player = player.name(),
        depth,
        column = ?result.column,
        value = result.value,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        "search finished"
    );

    result.column.ok_or(SearchError::NoLegalMove)
}

/// Agent that plays whatever the search picks for the side to move.
pub struct MinimaxAgent {
    depth: u32,
}

impl MinimaxAgent {
    pub fn new(depth: u32) -> Self {
        MinimaxAgent { depth }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Agent for MinimaxAgent {
    fn select_column(&mut self, state: &GameState) -> Result<usize, SearchError> {
        if state.is_terminal() {
            return Err(SearchError::NoLegalMove);
        }
        choose_move(state.board(), self.depth, state.current_player())
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
