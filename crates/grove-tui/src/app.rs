use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use grove_core::{DimensionError, GenerateError, Generator, GeneratorConfig, Grid};

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// Outcome of the most recent generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A balanced board came out after this many fill attempts.
    Solved { attempts: usize },
    /// The attempt budget ran out before a balanced board appeared.
    OutOfAttempts { attempts: usize },
}

/// The main application state
pub struct App {
    generator: Generator,
    width: usize,
    height: usize,
    /// Last generated board. Stays on screen if a later regenerate runs out
    /// of attempts.
    pub board: Option<Grid>,
    pub outcome: Outcome,
    pub theme: Theme,
}

impl App {
    /// Create the app and generate the first board.
    ///
    /// # Errors
    ///
    /// Returns an error when the requested dimensions are zero or odd, so
    /// the caller can report it before the terminal enters raw mode.
    pub fn new(
        width: usize,
        height: usize,
        seed: Option<u64>,
        max_attempts: usize,
    ) -> Result<Self, DimensionError> {
        let config = GeneratorConfig { max_attempts };
        let mut generator = match seed {
            Some(seed) => Generator::with_config_and_seed(config, seed),
            None => Generator::with_config(config),
        };

        let (board, outcome) = match generator.generate(width, height) {
            Ok(solution) => (
                Some(solution.grid),
                Outcome::Solved {
                    attempts: solution.attempts,
                },
            ),
            Err(GenerateError::Dimensions(e)) => return Err(e),
            Err(GenerateError::AttemptsExhausted { attempts }) => {
                (None, Outcome::OutOfAttempts { attempts })
            }
        };

        Ok(Self {
            generator,
            width,
            height,
            board,
            outcome,
            theme: Theme::default(),
        })
    }

    /// Board width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Board height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Throw the board away and generate a fresh one.
    pub fn regenerate(&mut self) {
        match self.generator.generate(self.width, self.height) {
            Ok(solution) => {
                self.board = Some(solution.grid);
                self.outcome = Outcome::Solved {
                    attempts: solution.attempts,
                };
            }
            Err(GenerateError::AttemptsExhausted { attempts }) => {
                self.outcome = Outcome::OutOfAttempts { attempts };
            }
            // `new` already accepted these dimensions and they never change.
            Err(GenerateError::Dimensions(e)) => unreachable!("{e}"),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => AppAction::Quit,
            KeyCode::Char('r') => {
                self.regenerate();
                AppAction::Continue
            }
            _ => AppAction::Continue,
        }
    }
}
