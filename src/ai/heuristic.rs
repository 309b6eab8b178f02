use crate::game::{Board, Piece, WIN_LENGTH};

/// Trait for evaluating a board position from one piece's perspective.
pub trait Heuristic {
    fn evaluate(&self, board: &Board, piece: Piece) -> i32;
}

/// Points for a 4-cell window, keyed on how many cells hold the piece.
/// Counts below four only score when every other cell is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTable {
    pub one: i32,
    pub two: i32,
    pub three: i32,
    pub four: i32,
}

/// Weights for the evaluating side's own lines.
pub const OWN_TABLE: ScoreTable = ScoreTable {
    one: 1,
    two: 10,
    three: 100,
    four: 500,
};

/// Weights for the opponent's lines. An open three costs more than an own
/// three is worth, so blocking wins over building.
pub const OPPONENT_TABLE: ScoreTable = ScoreTable {
    one: 1,
    two: 10,
    three: 500,
    four: 1000,
};

impl ScoreTable {
    pub fn score(&self, count: usize, empty: usize) -> i32 {
        match (count, empty) {
            (1, 3) => self.one,
            (2, 2) => self.two,
            (3, 1) => self.three,
            (4, _) => self.four,
            _ => 0,
        }
    }
}

/// Every axis in both senses. A physical window is seen once from each end.
const BOTH_SENSES: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// One sense per axis. Every physical window is seen exactly once.
const ONE_SENSE: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Scans every 4-cell window on the board and nets the evaluating side's
/// potential lines against the opponent's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowHeuristic {
    count_both_ways: bool,
}

impl WindowHeuristic {
    /// `count_both_ways` keeps the double counting of each window (once from
    /// each endpoint). With `false` every window is scored once, which halves
    /// all scores but keeps their order.
    pub fn new(count_both_ways: bool) -> Self {
        WindowHeuristic { count_both_ways }
    }

    fn directions(&self) -> &'static [(isize, isize)] {
        if self.count_both_ways {
            &BOTH_SENSES
        } else {
            &ONE_SENSE
        }
    }

    /// Sum of `table` over all windows for `piece`.
    pub fn potential(&self, board: &Board, piece: Piece, table: &ScoreTable) -> i32 {
        let mut score = 0;
        for &direction in self.directions() {
            for row in 0..board.rows() {
                for column in 0..board.columns() {
                    if let Some((count, empty)) = tally_window(board, row, column, direction, piece)
                    {
                        score += table.score(count, empty);
                    }
                }
            }
        }
        score
    }
}

impl Default for WindowHeuristic {
    fn default() -> Self {
        WindowHeuristic::new(true)
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, piece: Piece) -> i32 {
        self.potential(board, piece, &OWN_TABLE)
            - self.potential(board, piece.other(), &OPPONENT_TABLE)
    }
}

/// Count `piece` and empty cells in the window anchored at (row, column).
/// `None` if the window leaves the board or holds an opposing piece.
fn tally_window(
    board: &Board,
    row: usize,
    column: usize,
    (d_row, d_col): (isize, isize),
    piece: Piece,
) -> Option<(usize, usize)> {
    let mut count = 0;
    let mut empty = 0;
    for i in 0..WIN_LENGTH as isize {
        match board.cell_at(row as isize + i * d_row, column as isize + i * d_col)? {
            Some(p) if p == piece => count += 1,
            Some(_) => return None,
            None => empty += 1,
        }
    }
    Some((count, empty))
}
