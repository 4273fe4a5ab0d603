use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::game::{GameSession, RejectReason, TurnEvent};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    config: GameConfig,
    session: GameSession,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let session = GameSession::new(&config)?;
        let selected_column = session.board().width() / 2;
        Ok(App {
            config,
            session,
            selected_column,
            should_quit: false,
            message: None,
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.session.board().width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.new_game();
            }
            _ => {}
        }
    }

    /// Discard the finished session and start a fresh one from the same
    /// configuration.
    fn new_game(&mut self) {
        match GameSession::new(&self.config) {
            Ok(session) => {
                self.session = session;
                self.selected_column = self.session.board().width() / 2;
                self.message = Some("New game started!".to_string());
            }
            // The config was validated at startup, so this only fires if it
            // was mutated out from under us.
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Drop a piece in the selected column, then let the bot reply.
    fn drop_piece(&mut self) {
        match self.session.resolve_turn(self.selected_column) {
            TurnEvent::Rejected(RejectReason::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            TurnEvent::Rejected(RejectReason::OutOfRange) => {
                self.message = Some("Invalid column!".to_string());
            }
            TurnEvent::Rejected(RejectReason::GameOver) => {
                self.message = Some("Game over! Press 'r' for a new game.".to_string());
            }
            TurnEvent::Placed {
                outcome: Some(outcome),
                ..
            } => {
                self.message = Some(outcome.message().to_string());
            }
            TurnEvent::Placed { outcome: None, .. } => {
                // The engine ignores this call unless the bot is up.
                if let Some(TurnEvent::Placed {
                    outcome: Some(outcome),
                    ..
                }) = self.session.play_bot_turn()
                {
                    self.message = Some(outcome.message().to_string());
                }
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, self.selected_column, &self.message);
    }
}
