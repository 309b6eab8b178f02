//! Core game logic: board representation, win detection, seats, scoring and
//! the round/turn state machine.

mod board;
pub mod controller;
pub mod detector;
mod piece;
mod player;
mod score;

pub use board::{Board, Cell, Move, MAX_SIZE, MIN_SIZE};
pub use controller::{Controller, GameMode, RoundOutcome, State, TurnReport};
pub use detector::{is_winning_move, WIN_LENGTH};
pub use piece::Piece;
pub use player::Seat;
pub use score::ScoreBoard;
