use std::io;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::Backend, Terminal};
use tracing::{debug, info, warn};

use crate::ai::choose_move;
use crate::config::AppConfig;
use crate::error::{MoveError, SearchError};
use crate::game::{GameOutcome, GameState, Player, CENTER_COL, COLS};

/// Colour of the human in a game against the AI.
pub const HUMAN: Player = Player::Red;
/// Colour of the AI.
pub const AI: Player = Player::Yellow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    TwoPlayers,
    VersusAi,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::TwoPlayers => "Two Players",
            Mode::VersusAi => "Player vs AI",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Game(Mode),
}

pub struct App {
    config: AppConfig,
    screen: Screen,
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    rng: StdRng,
    /// When the AI became the side to move.
    ai_turn_started: Option<Instant>,
    /// Search running on a worker thread; dropping it discards the result.
    pending_ai: Option<Receiver<Result<usize, SearchError>>>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            config,
            screen: Screen::Menu,
            game_state: GameState::initial(),
            selected_column: CENTER_COL,
            should_quit: false,
            message: None,
            rng: StdRng::from_os_rng(),
            ai_turn_started: None,
            pending_ai: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether a search for the AI's move is in flight.
    pub fn is_thinking(&self) -> bool {
        self.pending_ai.is_some()
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_ai_turn() {
                self.step_ai(Instant::now());
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Raw mode swallows the interrupt signal
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Menu => self.handle_menu_key(key),
            Screen::Game(_) => self.handle_game_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('1') => self.start_game(Mode::TwoPlayers),
            KeyCode::Char('2') => self.start_game(Mode::VersusAi),
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        // Keep the result and the thinking notice visible
        if !self.game_state.is_terminal() && !self.is_thinking() {
            self.message = None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.human_drop();
            }
            KeyCode::Char('r') => {
                if let Screen::Game(mode) = self.screen {
                    self.start_game(mode);
                }
            }
            KeyCode::Char('m') => {
                self.screen = Screen::Menu;
                self.message = None;
                self.cancel_ai();
            }
            _ => {}
        }
    }

    fn start_game(&mut self, mode: Mode) {
        let starter = match mode {
            Mode::TwoPlayers => Player::Red,
            Mode::VersusAi => self.config.game.first_player.resolve(HUMAN, &mut self.rng),
        };
        info!(mode = mode.label(), starter = starter.name(), "new game");

        self.screen = Screen::Game(mode);
        self.game_state = GameState::with_starter(starter);
        self.selected_column = CENTER_COL;
        self.message = Some(format!("New game! {} starts.", starter.name()));
        self.cancel_ai();
    }

    fn cancel_ai(&mut self) {
        if self.pending_ai.take().is_some() {
            debug!("discarding AI search in progress");
        }
        self.ai_turn_started = None;
    }

    /// Whether the AI should be thinking about a move right now.
    pub fn is_ai_turn(&self) -> bool {
        self.screen == Screen::Game(Mode::VersusAi)
            && !self.game_state.is_terminal()
            && self.game_state.current_player() == AI
    }

    /// Drive the AI's turn without blocking.
    ///
    /// Once the configured pause has passed since its turn began, the search is
    /// started on a worker thread. Later calls pick up its move when ready.
    pub fn step_ai(&mut self, now: Instant) {
        if !self.is_ai_turn() {
            return;
        }

        if let Some(polled) = self.pending_ai.as_ref().map(Receiver::try_recv) {
            match polled {
                Ok(result) => {
                    self.pending_ai = None;
                    self.finish_ai(result);
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.pending_ai = None;
                    warn!("AI search thread stopped without a move");
                    self.message = Some("AI error: search stopped".to_string());
                }
            }
            return;
        }

        let started = *self.ai_turn_started.get_or_insert(now);
        let delay = Duration::from_millis(self.config.game.ai_delay_ms);
        if now.duration_since(started) < delay {
            return;
        }
        self.ai_turn_started = None;
        self.spawn_search();
    }

    fn spawn_search(&mut self) {
        let board = *self.game_state.board();
        let depth = self.config.search.depth;
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            // The receiver is gone if the game was abandoned meanwhile
            let _ = tx.send(choose_move(&board, depth, AI));
        });

        debug!(depth, "AI search started");
        self.pending_ai = Some(rx);
        self.message = Some("AI is thinking…".to_string());
    }

    fn finish_ai(&mut self, result: Result<usize, SearchError>) {
        match result {
            Ok(col) => {
                debug!(col, depth = self.config.search.depth, "AI move");
                self.message = None;
                self.apply(col);
            }
            Err(err) => {
                warn!(%err, "AI could not move");
                self.message = Some(format!("AI error: {err}"));
            }
        }
    }

    /// Drop a piece for the human in the selected column
    fn human_drop(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if self.is_ai_turn() {
            self.message = Some("Wait for the AI to move.".to_string());
            return;
        }
        self.apply(self.selected_column);
    }

    fn apply(&mut self, col: usize) {
        let player = self.game_state.current_player();
        match self.game_state.apply_move_mut(col) {
            Ok(()) => {
                if let Some(outcome) = self.game_state.outcome() {
                    let text = match outcome {
                        GameOutcome::Winner(winner) => format!("{} wins!", winner.name()),
                        GameOutcome::Draw => "It's a draw!".to_string(),
                    };
                    info!(result = %text, moves = self.game_state.board().piece_count(), "game over");
                    self.message = Some(text);
                } else {
                    debug!(player = player.name(), col, "move");
                }
            }
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn(_)) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::Menu => super::menu_view::render(frame),
            Screen::Game(mode) => super::game_view::render(
                frame,
                &self.game_state,
                self.selected_column,
                &self.message,
                mode,
            ),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
