use crate::game::{Controller, RoundOutcome, State};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    controller: Controller,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(controller: Controller) -> Self {
        let selected_column = controller.board().columns() / 2;
        App {
            controller,
            selected_column,
            should_quit: false,
            message: None,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
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
    fn handle_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
            return;
        }

        match self.controller.state() {
            State::AwaitingMove(_) => self.handle_move_key(key),
            State::RoundOver(_) => self.handle_round_over_key(key),
            State::GameOver => self.should_quit = true,
        }
    }

    fn handle_move_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;
        let columns = self.controller.board().columns();

        match key.code {
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < columns {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('s') => {
                self.surrender();
            }
            KeyCode::Char(c) => {
                if let Some(digit) = c.to_digit(10) {
                    let digit = digit as usize;
                    if (1..=columns).contains(&digit) {
                        self.selected_column = digit - 1;
                        self.drop_piece();
                    } else {
                        self.message = Some(format!("Columns are numbered 1 - {columns}"));
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_round_over_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') => match self.controller.next_round() {
                Ok(_) => {
                    self.selected_column = self.controller.board().columns() / 2;
                    self.message = Some(format!("Round {} started!", self.controller.round()));
                }
                Err(err) => self.message = Some(err.to_string()),
            },
            KeyCode::Char('n') => {
                if let Err(err) = self.controller.end_game() {
                    self.message = Some(err.to_string());
                }
                self.should_quit = true;
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.controller.play_column(self.selected_column) {
            Ok(report) => {
                if let Some(outcome) = report.outcome {
                    self.announce(outcome);
                }
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    fn surrender(&mut self) {
        match self.controller.surrender() {
            Ok(outcome) => self.announce(outcome),
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    fn announce(&mut self, outcome: RoundOutcome) {
        self.message = Some(format!(
            "{}\nPlay another round? (y/n)",
            self.controller.outcome_message(outcome)
        ));
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.controller, self.selected_column, &self.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameMode, Piece, Seat};
    use ratatui::backend::TestBackend;

    fn app(mode: GameMode) -> App {
        let controller = Controller::new(6, 7, mode)
            .unwrap()
            .starting_with(Seat::One);
        App::new(controller)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    #[test]
    fn test_arrows_clamp_to_board() {
        let mut app = app(GameMode::Multiplayer);
        assert_eq!(app.selected_column, 3);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, 6);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);
    }

    #[test]
    fn test_digit_drops_into_column() {
        let mut app = app(GameMode::Multiplayer);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.controller().board().get(5, 1), Some(Piece::X));
        assert_eq!(app.selected_column, 1);

        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.message.as_deref(), Some("Columns are numbered 1 - 7"));
    }

    #[test]
    fn test_full_column_shows_message() {
        let mut app = app(GameMode::Multiplayer);
        for _ in 0..6 {
            press(&mut app, KeyCode::Enter);
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message.as_deref(), Some("column 3 is full"));
        assert_eq!(app.controller().current_seat(), Some(Seat::One));
    }

    #[test]
    fn test_surrender_then_new_round() {
        let mut app = app(GameMode::SinglePlayer);
        press(&mut app, KeyCode::Char('s'));
        assert!(matches!(app.controller().state(), State::RoundOver(_)));
        assert!(app
            .message
            .as_deref()
            .unwrap()
            .starts_with("Computer AI  Won!"));

        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.controller().state(), State::AwaitingMove(Seat::One));
        assert_eq!(app.controller().round(), 2);
        assert_eq!(app.controller().scores().wins(Seat::Two), 1);
    }

    #[test]
    fn test_declining_new_round_quits() {
        let mut app = app(GameMode::Multiplayer);
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.controller().state(), State::GameOver);
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_shows_round_and_players() {
        let mut app = app(GameMode::SinglePlayer);
        press(&mut app, KeyCode::Enter);

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Round 1"), "missing round header");
        assert!(text.contains("Computer AI"), "missing score line");
    }
}
