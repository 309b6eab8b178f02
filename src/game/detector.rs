//! Win detection anchored at the most recently placed piece.
//!
//! Only the last move can complete a line, so instead of rescanning the
//! board each axis through the anchor is walked at most three cells either
//! way.

use super::{Board, Move, Piece};

/// Pieces in a row needed to win.
pub const WIN_LENGTH: usize = 4;

/// One direction per axis: horizontal, vertical, rising and falling diagonal.
/// The opposite direction is walked by negating the step.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (-1, 1), (-1, -1)];

/// Check if placing `piece` at (row, column) completed four in a row.
pub fn is_winning_move(board: &Board, row: usize, column: usize, piece: Piece) -> bool {
    AXES
        .iter()
        .any(|&axis| completes_line(board, row, column, piece, axis))
}

/// Same as [`is_winning_move`] for a move returned by the controller.
pub fn is_winning(board: &Board, mv: &Move) -> bool {
    is_winning_move(board, mv.row, mv.column, mv.piece)
}

fn completes_line(
    board: &Board,
    row: usize,
    column: usize,
    piece: Piece,
    (d_row, d_col): (isize, isize),
) -> bool {
    let mut count = 1; // The anchor itself

    for sign in [1, -1] {
        for step in 1..WIN_LENGTH as isize {
            let r = row as isize + sign * step * d_row;
            let c = column as isize + sign * step * d_col;
            match board.cell_at(r, c) {
                Some(Some(p)) if p == piece => {
                    count += 1;
                    if count == WIN_LENGTH {
                        return true;
                    }
                }
                // Opponent, empty cell or board edge
                _ => break,
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Place pieces at exact cells, bypassing gravity.
    fn board_with(rows: usize, columns: usize, cells: &[(usize, usize, Piece)]) -> Board {
        let mut board = Board::new(rows, columns).unwrap();
        let mut sorted = cells.to_vec();
        // Fill bottom-up so every insert lands where asked
        sorted.sort_by(|a, b| b.0.cmp(&a.0));
        for &(row, column, piece) in &sorted {
            while board.landing_row(column) != Some(row) {
                board.insert(piece.other(), column).unwrap();
            }
            board.insert(piece, column).unwrap();
        }
        board
    }

    #[test]
    fn test_bottom_row_win_on_fourth_piece_only() {
        let mut board = Board::new(4, 4).unwrap();
        for column in 0..3 {
            let row = board.insert(Piece::X, column).unwrap();
            assert_eq!(row, 3);
            assert!(!is_winning_move(&board, row, column, Piece::X));
        }
        let row = board.insert(Piece::X, 3).unwrap();
        assert!(is_winning_move(&board, row, 3, Piece::X));
    }

    #[test]
    fn test_horizontal_win_from_any_anchor() {
        let mut board = Board::new(6, 7).unwrap();
        for column in 1..5 {
            board.insert(Piece::O, column).unwrap();
        }
        for column in 1..5 {
            assert!(is_winning_move(&board, 5, column, Piece::O));
        }
        assert!(!is_winning_move(&board, 5, 1, Piece::X));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new(6, 7).unwrap();
        let mut last = 0;
        for _ in 0..4 {
            last = board.insert(Piece::X, 6).unwrap();
        }
        assert_eq!(last, 2);
        assert!(is_winning_move(&board, last, 6, Piece::X));
    }

    #[test]
    fn test_rising_diagonal_win() {
        let board = board_with(
            4,
            4,
            &[
                (3, 0, Piece::X),
                (2, 1, Piece::X),
                (1, 2, Piece::X),
                (0, 3, Piece::X),
            ],
        );
        assert!(is_winning_move(&board, 0, 3, Piece::X));
        assert!(is_winning_move(&board, 2, 1, Piece::X));
    }

    #[test]
    fn test_falling_diagonal_win() {
        let board = board_with(
            6,
            7,
            &[
                (2, 1, Piece::O),
                (3, 2, Piece::O),
                (4, 3, Piece::O),
                (5, 4, Piece::O),
            ],
        );
        assert!(is_winning_move(&board, 5, 4, Piece::O));
        assert!(is_winning_move(&board, 3, 2, Piece::O));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new(6, 7).unwrap();
        for column in 0..3 {
            board.insert(Piece::X, column).unwrap();
        }
        assert!(!is_winning_move(&board, 5, 1, Piece::X));
    }

    #[test]
    fn test_gap_breaks_the_line() {
        let mut board = Board::new(6, 7).unwrap();
        for column in [0, 1, 3, 4] {
            board.insert(Piece::X, column).unwrap();
        }
        board.insert(Piece::O, 2).unwrap();
        assert!(!is_winning_move(&board, 5, 1, Piece::X));
        assert!(!is_winning_move(&board, 5, 3, Piece::X));
    }

    #[test]
    fn test_filling_middle_of_longer_run() {
        let mut board = Board::new(6, 8).unwrap();
        for column in [0, 1, 2, 4, 5, 6] {
            board.insert(Piece::X, column).unwrap();
        }
        let row = board.insert(Piece::X, 3).unwrap();
        assert!(is_winning(
            &board,
            &Move {
                row,
                column: 3,
                piece: Piece::X
            }
        ));
    }

    #[test]
    fn test_corner_anchor_does_not_scan_off_board() {
        let mut board = Board::new(4, 4).unwrap();
        let row = board.insert(Piece::O, 0).unwrap();
        assert!(!is_winning_move(&board, row, 0, Piece::O));
        let row = board.insert(Piece::O, 3).unwrap();
        assert!(!is_winning_move(&board, row, 3, Piece::O));
    }
}
