use tracing::{debug, trace};

use crate::game::{Board, Piece};

use super::agent::Agent;
use super::heuristic::{Heuristic, WindowHeuristic};

/// Single-ply agent: drops its piece into each open column, evaluates the
/// resulting board, takes the piece back and keeps the best column.
pub struct GreedyAgent {
    heuristic: Box<dyn Heuristic>,
}

impl GreedyAgent {
    pub const NAME: &'static str = "Computer AI";

    pub fn new() -> Self {
        GreedyAgent {
            heuristic: Box::new(WindowHeuristic::default()),
        }
    }

    pub fn with_heuristic(heuristic: Box<dyn Heuristic>) -> Self {
        GreedyAgent { heuristic }
    }

    /// Score of every open column, ascending by column.
    pub fn score_columns(&self, board: &mut Board, piece: Piece) -> Vec<(usize, i32)> {
        let mut scores = Vec::with_capacity(board.columns());
        for column in 0..board.columns() {
            // A full column is rejected before anything is written
            let Ok(row) = board.insert(piece, column) else {
                continue;
            };
            let score = self.heuristic.evaluate(board, piece);
            board.clear(row, column);

            trace!(column, row, score, "evaluated column");
            scores.push((column, score));
        }
        scores
    }

    /// Highest scoring open column. Equal scores keep the earlier column.
    pub fn best_move(&self, board: &mut Board, piece: Piece) -> Option<usize> {
        let mut best: Option<(usize, i32)> = None;
        for (column, score) in self.score_columns(board, piece) {
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((column, score));
            }
        }

        if let Some((column, score)) = best {
            debug!(%piece, column, score, "greedy move selected");
        }
        best.map(|(column, _)| column)
    }
}

impl Default for GreedyAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for GreedyAgent {
    fn select_column(&self, board: &mut Board, piece: Piece) -> Option<usize> {
        self.best_move(board, piece)
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(board: &mut Board, moves: &[(Piece, usize)]) {
        for &(piece, column) in moves {
            board.insert(piece, column).unwrap();
        }
    }

    #[test]
    fn empty_board_prefers_center_deterministically() {
        let agent = GreedyAgent::new();
        let mut board = Board::new(6, 7).unwrap();
        let first = agent.best_move(&mut board, Piece::O);
        for _ in 0..5 {
            assert_eq!(agent.best_move(&mut board, Piece::O), first);
        }
        assert_eq!(first, Some(3));
    }

    #[test]
    fn evaluation_leaves_board_untouched() {
        let agent = GreedyAgent::new();
        let mut board = Board::new(5, 6).unwrap();
        play(
            &mut board,
            &[(Piece::X, 2), (Piece::O, 2), (Piece::X, 3), (Piece::O, 0)],
        );
        let before = board.clone();

        agent.best_move(&mut board, Piece::O);
        assert_eq!(board, before);
        agent.score_columns(&mut board, Piece::X);
        assert_eq!(board, before);
    }

    #[test]
    fn skips_full_columns() {
        let agent = GreedyAgent::new();
        let mut board = Board::new(4, 4).unwrap();
        play(
            &mut board,
            &[(Piece::X, 0), (Piece::O, 0), (Piece::X, 0), (Piece::O, 0)],
        );
        let scored: Vec<usize> = agent
            .score_columns(&mut board, Piece::O)
            .into_iter()
            .map(|(column, _)| column)
            .collect();
        assert_eq!(scored, vec![1, 2, 3]);
        assert_ne!(agent.best_move(&mut board, Piece::O), Some(0));
    }

    #[test]
    fn no_move_on_full_board() {
        let agent = GreedyAgent::new();
        let mut board = Board::new(4, 4).unwrap();
        for column in 0..4 {
            for i in 0..4 {
                let piece = if (column + i) % 2 == 0 { Piece::X } else { Piece::O };
                board.insert(piece, column).unwrap();
            }
        }
        assert_eq!(agent.best_move(&mut board, Piece::O), None);
    }

    #[test]
    fn takes_winning_move() {
        // O has three on the bottom row, X three above them
        let agent = GreedyAgent::new();
        let mut board = Board::new(6, 7).unwrap();
        for column in 0..3 {
            play(&mut board, &[(Piece::O, column), (Piece::X, column)]);
        }
        assert_eq!(agent.best_move(&mut board, Piece::O), Some(3));
    }

    #[test]
    fn blocks_opponent_three() {
        let agent = GreedyAgent::new();
        let mut board = Board::new(6, 7).unwrap();
        play(
            &mut board,
            &[(Piece::X, 0), (Piece::O, 6), (Piece::X, 1), (Piece::X, 2)],
        );
        assert_eq!(agent.best_move(&mut board, Piece::O), Some(3));
    }

    #[test]
    fn ties_go_to_the_earliest_column() {
        struct Flat;
        impl Heuristic for Flat {
            fn evaluate(&self, _board: &Board, _piece: Piece) -> i32 {
                7
            }
        }

        let agent = GreedyAgent::with_heuristic(Box::new(Flat));
        let mut board = Board::new(4, 5).unwrap();
        assert_eq!(agent.best_move(&mut board, Piece::X), Some(0));

        for _ in 0..4 {
            board.insert(Piece::O, 0).unwrap();
        }
        assert_eq!(agent.best_move(&mut board, Piece::X), Some(1));
    }

    #[test]
    fn name_is_computer_ai() {
        let agent = GreedyAgent::new();
        assert_eq!(agent.name(), "Computer AI");
    }
}
