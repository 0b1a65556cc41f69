use super::board::LegalColumns;
use super::win::has_four_in_a_row;
use super::{Board, Player};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// A board plus whose turn it is and how the game ended, if it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        Self::with_starter(Player::Red)
    }

    /// Empty board with `starter` to move.
    pub fn with_starter(starter: Player) -> Self {
        GameState {
            board: Board::new(),
            current_player: starter,
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> LegalColumns {
        if self.is_terminal() {
            return LegalColumns::new();
        }
        self.board.legal_columns()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move mutably (for UI efficiency)
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board.drop_piece(column, self.current_player)?;

        if has_four_in_a_row(&self.board, self.current_player) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = self.current_player.other();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Red);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_columns().len(), 7);
    }

    #[test]
    fn test_with_starter() {
        let state = GameState::with_starter(Player::Yellow);
        let next = state.apply_move(0).unwrap();
        assert_eq!(next.board().get(5, 0), Cell::Yellow);
        assert_eq!(next.current_player(), Player::Red);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial();
        let new_state = state.apply_move(3).unwrap();

        assert_eq!(new_state.current_player(), Player::Yellow);
        assert_eq!(new_state.board().get(5, 3), Cell::Red);
        assert_eq!(state.board().get(5, 3), Cell::Empty);
    }

    #[test]
    fn test_failed_move_keeps_turn() {
        let mut state = GameState::initial();
        assert_eq!(state.apply_move_mut(9), Err(MoveError::InvalidColumn(9)));
        assert_eq!(state.current_player(), Player::Red);
        assert_eq!(state, GameState::initial());
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Red wins with horizontal line
        for col in 0..4 {
            state = state.apply_move(col).unwrap(); // Red
            if col < 3 {
                state = state.apply_move(col).unwrap(); // Yellow (different row)
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
        assert!(state.legal_columns().is_empty());
        assert_eq!(state.apply_move(5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_draw() {
        // Fill pairs of columns three pieces at a time; nobody can line up four.
        let pattern = [
            0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, //
            2, 3, 2, 3, 2, 3, 3, 2, 3, 2, 3, 2, //
            4, 5, 4, 5, 4, 5, 5, 4, 5, 4, 5, 4, //
            6, 6, 6, 6, 6, 6,
        ];

        let mut state = GameState::initial();
        for &col in &pattern {
            assert!(!state.is_terminal(), "game ended early:\n{}", state.board());
            state = state.apply_move(col).unwrap();
        }

        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
    }
}
