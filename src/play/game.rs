use tracing::{info, trace};

use crate::ai::Agent;
use crate::error::PlayError;
use crate::game::{GameOutcome, GameState, Player};

/// A finished game: the columns played, in order, and the final state.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub moves: Vec<usize>,
    pub final_state: GameState,
    pub winner: Option<Player>,
}

impl GameRecord {
    pub fn length(&self) -> usize {
        self.moves.len()
    }
}

/// Play one game to the end, Red moving first.
pub fn play_game(red: &mut dyn Agent, yellow: &mut dyn Agent) -> Result<GameRecord, PlayError> {
    let mut state = GameState::initial();
    let mut moves = Vec::new();

    while !state.is_terminal() {
        let player = state.current_player();
        let agent: &mut dyn Agent = match player {
            Player::Red => &mut *red,
            Player::Yellow => &mut *yellow,
        };

        let column = agent.select_column(&state).map_err(|source| PlayError::Search {
            agent: agent.name().to_string(),
            source,
        })?;
        state = state
            .apply_move(column)
            .map_err(|_| PlayError::IllegalMove {
                agent: agent.name().to_string(),
                column,
                legal: state.legal_columns(),
            })?;
        trace!(player = player.name(), column, "move");
        moves.push(column);
    }

    let winner = match state.outcome() {
        Some(GameOutcome::Winner(p)) => Some(p),
        _ => None,
    };
    info!(
        red = red.name(),
        yellow = yellow.name(),
        winner = winner.map(Player::name).unwrap_or("draw"),
        length = moves.len(),
        "game finished"
    );

    Ok(GameRecord {
        moves,
        final_state: state,
        winner,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{MinimaxAgent, RandomAgent};
    use crate::error::SearchError;
    use crate::game::Board;

    /// Always plays the same column, full or not.
    struct Stubborn(usize);

    impl Agent for Stubborn {
        fn select_column(&mut self, _state: &GameState) -> Result<usize, SearchError> {
            Ok(self.0)
        }

        fn name(&self) -> &str {
            "Stubborn"
        }
    }

    #[test]
    fn replaying_moves_gives_final_board() {
        let mut red = RandomAgent::with_seed(5);
        let mut yellow = RandomAgent::with_seed(6);
        let record = play_game(&mut red, &mut yellow).unwrap();

        assert!(record.final_state.is_terminal());
        assert_eq!(
            Board::from_moves(&record.moves).unwrap(),
            *record.final_state.board()
        );
        assert_eq!(record.length(), record.final_state.board().piece_count());
    }

    #[test]
    fn illegal_move_is_reported() {
        let mut red = Stubborn(0);
        let mut yellow = Stubborn(0);
        // Column 0 holds six pieces alternating colours, then the seventh drop fails.
        let err = play_game(&mut red, &mut yellow).unwrap_err();
        match err {
            PlayError::IllegalMove { agent, column, legal } => {
                assert_eq!(agent, "Stubborn");
                assert_eq!(column, 0);
                assert_eq!(legal, vec![1, 2, 3, 4, 5, 6]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn minimax_beats_column_spammer() {
        let mut red = Stubborn(2);
        let mut yellow = MinimaxAgent::new(3);
        let record = play_game(&mut red, &mut yellow).unwrap();
        assert_eq!(record.winner, Some(Player::Yellow));
    }
}
