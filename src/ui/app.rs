use std::io;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};

use super::MoveEvent;
use crate::config::UiConfig;
use crate::error::{GameError, ObserverError};
use crate::game::{Game, GameState, MoveError, COLS};

pub struct App {
    game: Game,
    events: Receiver<MoveEvent>,
    start_column: usize,
    selected_column: usize,
    poll_interval: Duration,
    should_quit: bool,
    message: Option<String>,
}

/// Fresh engine whose observer forwards every move over a channel.
fn observed_game() -> (Game, Receiver<MoveEvent>) {
    let (tx, rx) = mpsc::channel();
    let mut game = Game::new();
    game.add_observer(move |state: &GameState| -> Result<(), ObserverError> {
        if let Some(event) = MoveEvent::from_state(state) {
            tx.send(event)
                .map_err(|_| ObserverError::new("move event receiver dropped"))?;
        }
        Ok(())
    });
    (game, rx)
}

impl App {
    pub fn new(config: &UiConfig) -> Self {
        let (game, events) = observed_game();
        App {
            game,
            events,
            start_column: config.start_column.min(COLS - 1),
            selected_column: config.start_column.min(COLS - 1),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            should_quit: false,
            message: None,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
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

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        log::info!("terminal UI started");
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        log::info!("terminal UI closed after {} moves", self.game.moves_made());
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                let (game, events) = observed_game();
                self.game = game;
                self.events = events;
                self.selected_column = self.start_column;
                self.message = Some("New game started!".to_string());
                log::info!("new game started");
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.game.make_move(self.selected_column) {
            Ok(()) => self.drain_events(),
            Err(GameError::Move(MoveError::ColumnFull)) => {
                let open: Vec<String> = self
                    .game
                    .state()
                    .legal_moves()
                    .iter()
                    .map(usize::to_string)
                    .collect();
                self.message = Some(format!("Column is full! Open columns: {}", open.join(" ")));
            }
            Err(GameError::Move(MoveError::InvalidColumn)) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(GameError::Move(MoveError::GameOver)) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(err @ GameError::Observer(_)) => {
                log::error!("{err}");
                self.message = Some(err.to_string());
            }
        }
    }

    /// Pick up what the observer reported for the latest move(s)
    fn drain_events(&mut self) {
        for event in self.events.try_iter() {
            self.message = Some(event.describe());
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            self.game.state(),
            self.selected_column,
            &self.message,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&UiConfig::default())
    }
}
