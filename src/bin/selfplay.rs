use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;

use minimax_connect_four::ai::{MinimaxAgent, RandomAgent};
use minimax_connect_four::config::AppConfig;
use minimax_connect_four::game::Player;
use minimax_connect_four::logging;
use minimax_connect_four::play::{color_for_game, play_game, MatchStats};

/// Pit the minimax AI against a random mover, alternating colours.
#[derive(Parser)]
#[command(name = "selfplay", about = "Benchmark the minimax AI against random play")]
struct Cli {
    /// How many games to play
    #[arg(short, long, default_value_t = 20)]
    num_games: usize,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override the search depth from the config
    #[arg(long)]
    depth: Option<u32>,

    /// RNG seed for the random mover
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_stderr(cli.log_level);

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    config.validate().context("invalid configuration")?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, depth = config.search.depth, games = cli.num_games);

    let mut stats = MatchStats::new();
    for game_idx in 0..cli.num_games {
        let mut minimax = MinimaxAgent::new(config.search.depth);
        let mut random = RandomAgent::with_seed(seed.wrapping_add(game_idx as u64));
        let color = color_for_game(game_idx);

        let record = match color {
            Player::Red => play_game(&mut minimax, &mut random),
            Player::Yellow => play_game(&mut random, &mut minimax),
        }
        .with_context(|| format!("game {game_idx}"))?;

        debug!(game_idx, moves = ?record.moves, "final board:\n{}", record.final_state.board());
        stats.record(&record, color);
    }

    println!("-------------------------------------------");
    println!(
        "Minimax (depth {}) vs Random: {} games",
        config.search.depth,
        stats.games()
    );
    println!(
        "  wins {}  losses {}  draws {}",
        stats.wins(),
        stats.losses(),
        stats.draws()
    );
    println!("  win rate {:.1}%", stats.win_rate() * 100.0);
    println!("  average game length {:.1} moves", stats.average_length());
    println!("-------------------------------------------");

    Ok(())
}
