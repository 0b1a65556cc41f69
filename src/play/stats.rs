use crate::game::Player;

use super::game::GameRecord;

/// Tally of a series of games between two named agents.
#[derive(Debug, Clone, Default)]
pub struct MatchStats {
    wins: usize,
    losses: usize,
    draws: usize,
    total_moves: usize,
}

impl MatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a game; `subject` is the colour the tracked agent played.
    pub fn record(&mut self, record: &GameRecord, subject: Player) {
        self.total_moves += record.length();
        match record.winner {
            Some(winner) if winner == subject => self.wins += 1,
            Some(_) => self.losses += 1,
            None => self.draws += 1,
        }
    }

    pub fn games(&self) -> usize {
        self.wins + self.losses + self.draws
    }

    pub fn wins(&self) -> usize {
        self.wins
    }

    pub fn losses(&self) -> usize {
        self.losses
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Fraction of games the tracked agent won.
    pub fn win_rate(&self) -> f64 {
        if self.games() == 0 {
            return 0.0;
        }
        self.wins() as f64 / self.games() as f64
    }

    pub fn average_length(&self) -> f64 {
        if self.games() == 0 {
            return 0.0;
        }
        self.total_moves as f64 / self.games() as f64
    }
}

/// Colour the tracked agent plays in game `game_idx`: Red on even games.
pub fn color_for_game(game_idx: usize) -> Player {
    if game_idx % 2 == 0 {
        Player::Red
    } else {
        Player::Yellow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{MinimaxAgent, RandomAgent};
    use crate::game::GameState;
    use crate::play::play_game;

    fn record(winner: Option<Player>, moves: usize) -> GameRecord {
        GameRecord {
            moves: vec![0; moves],
            final_state: GameState::initial(),
            winner,
        }
    }

    #[test]
    fn empty_stats() {
        let stats = MatchStats::new();
        assert_eq!(stats.games(), 0);
        assert_eq!(stats.win_rate(), 0.0);
        assert_eq!(stats.average_length(), 0.0);
    }

    #[test]
    fn tallies_from_subject_perspective() {
        let mut stats = MatchStats::new();
        stats.record(&record(Some(Player::Red), 10), Player::Red);
        stats.record(&record(Some(Player::Red), 20), Player::Yellow);
        stats.record(&record(None, 42), Player::Yellow);
        stats.record(&record(Some(Player::Yellow), 12), Player::Yellow);

        assert_eq!(stats.games(), 4);
        assert_eq!(stats.wins(), 2);
        assert_eq!(stats.losses(), 1);
        assert_eq!(stats.draws(), 1);
        assert!((stats.win_rate() - 0.5).abs() < f64::EPSILON);
        assert!((stats.average_length() - 21.0).abs() < f64::EPSILON);
    }

    #[test]
    fn colors_alternate() {
        assert_eq!(color_for_game(0), Player::Red);
        assert_eq!(color_for_game(1), Player::Yellow);
        assert_eq!(color_for_game(2), Player::Red);
    }

    #[test]
    fn minimax_beats_random_agent() {
        let games = 20;
        let mut stats = MatchStats::new();

        for game_idx in 0..games {
            let mut minimax = MinimaxAgent::new(3);
            let mut random = RandomAgent::with_seed(game_idx as u64);
            let color = color_for_game(game_idx);
            let result = match color {
                Player::Red => play_game(&mut minimax, &mut random),
                Player::Yellow => play_game(&mut random, &mut minimax),
            };
            stats.record(&result.unwrap(), color);
        }

        assert!(
            stats.win_rate() > 0.80,
            "Minimax should beat random >80% of the time, got {:.0}% ({}/{})",
            stats.win_rate() * 100.0,
            stats.wins(),
            stats.games()
        );
    }
}
