use crate::error::SearchError;
use crate::game::GameState;

/// Anything that can pick a column for the side to move.
pub trait Agent {
    /// Select a column given the current game state.
    fn select_column(&mut self, state: &GameState) -> Result<usize, SearchError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
