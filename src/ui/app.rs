use crate::config::GameSettings;
use crate::error::{ConfigError, MoveError};
use crate::game::{Game, GameOutcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    settings: GameSettings,
    game: Game,
    /// 1-based pocket on the mover's side
    selected_pocket: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(settings: GameSettings) -> Result<Self, ConfigError> {
        let game = settings.build()?;
        Ok(App {
            settings,
            game,
            selected_pocket: 1,
            should_quit: false,
            message: None,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn selected_pocket(&self) -> usize {
        self.selected_pocket
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
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
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
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
                if self.selected_pocket > 1 {
                    self.selected_pocket -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_pocket < self.game.pockets_per_side() {
                    self.selected_pocket += 1;
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let pocket = c as usize - '0' as usize;
                if (1..=self.game.pockets_per_side()).contains(&pocket) {
                    self.selected_pocket = pocket;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.sow();
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        match self.settings.build() {
            Ok(game) => {
                self.game = game;
                self.selected_pocket = 1;
                self.message = Some("New game started!".to_string());
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Sow from the selected pocket
    fn sow(&mut self) {
        match self.game.make_move(self.selected_pocket) {
            Ok(report) => {
                self.message = if let Some(outcome) = self.game.winner() {
                    Some(match outcome {
                        GameOutcome::Winner(player) => format!("{} wins!", player.name()),
                        GameOutcome::Tie => "It's a tie!".to_string(),
                    })
                } else if report.extra_turn {
                    Some(format!("{} goes again!", report.player.name()))
                } else if report.captured > 0 {
                    Some(format!("Captured {} stones!", report.captured))
                } else {
                    None
                };
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game, self.selected_pocket, self.message());
    }
}
