use std::fmt;
use std::str::FromStr;

use tracing::{debug, info, warn};

use super::{detector, Board, Move, ScoreBoard, Seat};
use crate::ai::{Agent, GreedyAgent};
use crate::error::GameError;

/// Who sits in seat two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum GameMode {
    /// Human in seat one against the computer in seat two
    SinglePlayer,
    /// Two humans
    Multiplayer,
}

impl GameMode {
    pub fn name(self) -> &'static str {
        match self {
            GameMode::SinglePlayer => "SinglePlayer",
            GameMode::Multiplayer => "Multiplayer",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameMode {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("SinglePlayer") {
            Ok(GameMode::SinglePlayer)
        } else if s.eq_ignore_ascii_case("Multiplayer") {
            Ok(GameMode::Multiplayer)
        } else {
            Err(GameError::InvalidMode(s.to_string()))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The seat's last move completed four in a row
    Win(Seat),
    Tie,
    /// The other seat gave up
    Surrender { winner: Seat },
}

impl RoundOutcome {
    /// Seat credited with the round, if any
    pub fn winner(self) -> Option<Seat> {
        match self {
            RoundOutcome::Win(seat) | RoundOutcome::Surrender { winner: seat } => Some(seat),
            RoundOutcome::Tie => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    AwaitingMove(Seat),
    RoundOver(RoundOutcome),
    GameOver,
}

/// Moves placed by one call to [`Controller::play_column`]: the human move,
/// followed by the computer's reply in single-player mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub moves: Vec<Move>,
    pub outcome: Option<RoundOutcome>,
}

/// Drives rounds over one match: owns the board for the current round, the
/// running score and, in single-player mode, the computer opponent.
pub struct Controller {
    board: Board,
    mode: GameMode,
    state: State,
    round_starter: Seat,
    round: u32,
    scores: ScoreBoard,
    opponent: Box<dyn Agent>,
}

impl Controller {
    /// Start a match. In multiplayer mode the first seat is drawn at random;
    /// in single-player mode the human always starts.
    pub fn new(rows: usize, columns: usize, mode: GameMode) -> Result<Self, GameError> {
        let starter = match mode {
            GameMode::Multiplayer if rand::random_bool(0.5) => Seat::Two,
            _ => Seat::One,
        };

        let board = Board::new(rows, columns)?;
        let opponent: Box<dyn Agent> = Box::new(GreedyAgent::new());
        let seat_two = match mode {
            GameMode::SinglePlayer => opponent.name().to_string(),
            GameMode::Multiplayer => "Player 2".to_string(),
        };

        info!(rows, columns, %mode, ?starter, "match started");
        Ok(Controller {
            board,
            mode,
            state: State::AwaitingMove(starter),
            round_starter: starter,
            round: 1,
            scores: ScoreBoard::new("Player 1", seat_two),
            opponent,
        })
    }

    /// Fix the seat that opens the first round. Ignored in single-player mode.
    pub fn starting_with(mut self, seat: Seat) -> Self {
        if self.mode == GameMode::Multiplayer {
            self.round_starter = seat;
            self.state = State::AwaitingMove(seat);
        }
        self
    }

    /// Replace the seat names. Resets the score, so call before playing.
    pub fn with_names(mut self, player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        self.scores = ScoreBoard::new(player_one, player_two);
        self
    }

    /// Replace the computer opponent. In single-player mode seat two takes
    /// the agent's name.
    pub fn with_agent(mut self, agent: Box<dyn Agent>) -> Self {
        if self.mode == GameMode::SinglePlayer {
            let player_one = self.scores.name(Seat::One).to_string();
            self.scores = ScoreBoard::new(player_one, agent.name());
        }
        self.opponent = agent;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// 1-based number of the current round
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn player_name(&self, seat: Seat) -> &str {
        self.scores.name(seat)
    }

    /// Seat expected to move, if a move is awaited
    pub fn current_seat(&self) -> Option<Seat> {
        match self.state {
            State::AwaitingMove(seat) => Some(seat),
            _ => None,
        }
    }

    /// Text announcing an outcome together with the running score.
    pub fn outcome_message(&self, outcome: RoundOutcome) -> String {
        match outcome.winner() {
            Some(seat) => self.scores.winner_message(seat),
            None => self.scores.tie_message(),
        }
    }

    fn awaiting_seat(&self) -> Result<Seat, GameError> {
        match self.state {
            State::AwaitingMove(seat) => Ok(seat),
            State::RoundOver(_) => Err(GameError::NotAwaitingMove),
            State::GameOver => Err(GameError::GameOver),
        }
    }

    /// Drop the active seat's piece into `column`.
    ///
    /// Out-of-range and full columns are rejected without touching the
    /// board or the turn. In single-player mode the computer answers in the
    /// same call unless the human move ended the round.
    pub fn play_column(&mut self, column: usize) -> Result<TurnReport, GameError> {
        let seat = self.awaiting_seat()?;
        let mv = self.place(seat, column)?;
        let mut moves = vec![mv];

        if let Some(outcome) = self.settle(seat, &mv) {
            return Ok(TurnReport {
                moves,
                outcome: Some(outcome),
            });
        }
        self.state = State::AwaitingMove(seat.other());

        if self.mode == GameMode::SinglePlayer {
            let computer = seat.other();
            let Some(column) = self.computer_column(computer) else {
                // No open column left, which the tie check should have caught
                let outcome = RoundOutcome::Tie;
                self.finish(outcome);
                return Ok(TurnReport {
                    moves,
                    outcome: Some(outcome),
                });
            };
            let reply = self.place(computer, column)?;
            moves.push(reply);

            if let Some(outcome) = self.settle(computer, &reply) {
                return Ok(TurnReport {
                    moves,
                    outcome: Some(outcome),
                });
            }
            self.state = State::AwaitingMove(seat);
        }

        Ok(TurnReport {
            moves,
            outcome: None,
        })
    }

    /// The active seat forfeits the round to the other seat.
    pub fn surrender(&mut self) -> Result<RoundOutcome, GameError> {
        let seat = self.awaiting_seat()?;
        let outcome = RoundOutcome::Surrender {
            winner: seat.other(),
        };
        self.finish(outcome);
        Ok(outcome)
    }

    /// Clear the board for another round, keeping the score. Multiplayer
    /// rounds alternate the opening seat; the human always opens against
    /// the computer.
    pub fn next_round(&mut self) -> Result<Seat, GameError> {
        match self.state {
            State::RoundOver(_) => {}
            State::AwaitingMove(_) => return Err(GameError::RoundInProgress),
            State::GameOver => return Err(GameError::GameOver),
        }

        self.board = Board::new(self.board.rows(), self.board.columns())?;
        self.round_starter = match self.mode {
            GameMode::Multiplayer => self.round_starter.other(),
            GameMode::SinglePlayer => Seat::One,
        };
        self.round += 1;
        self.state = State::AwaitingMove(self.round_starter);

        info!(round = self.round, starter = ?self.round_starter, "round started");
        Ok(self.round_starter)
    }

    /// Stop after a finished round. Terminal.
    pub fn end_game(&mut self) -> Result<(), GameError> {
        match self.state {
            State::RoundOver(_) => {
                info!(rounds = self.round, "game over");
                self.state = State::GameOver;
                Ok(())
            }
            State::AwaitingMove(_) => Err(GameError::RoundInProgress),
            State::GameOver => Err(GameError::GameOver),
        }
    }

    fn place(&mut self, seat: Seat, column: usize) -> Result<Move, GameError> {
        let piece = seat.piece();
        let row = self.board.insert(piece, column)?;
        debug!(?seat, %piece, row, column, "piece placed");
        Ok(Move { row, column, piece })
    }

    /// Ask the opponent for a column, falling back to the first open column
    /// if the answer is unusable.
    fn computer_column(&mut self, seat: Seat) -> Option<usize> {
        let choice = self.opponent.select_column(&mut self.board, seat.piece());
        match choice {
            Some(column) if self.board.is_column_full(column) == Ok(false) => Some(column),
            other => {
                warn!(?other, "opponent returned no playable column");
                self.board.open_columns().next()
            }
        }
    }

    /// Check the move just placed for a win, then the board for a tie.
    fn settle(&mut self, seat: Seat, mv: &Move) -> Option<RoundOutcome> {
        let outcome = if detector::is_winning(&self.board, mv) {
            RoundOutcome::Win(seat)
        } else if self.board.is_tie() {
            RoundOutcome::Tie
        } else {
            return None;
        };
        self.finish(outcome);
        Some(outcome)
    }

    fn finish(&mut self, outcome: RoundOutcome) {
        match outcome.winner() {
            Some(seat) => self.scores.record_win(seat),
            None => self.scores.record_tie(),
        }
        info!(round = self.round, ?outcome, "round over");
        self.state = State::RoundOver(outcome);
    }
}
