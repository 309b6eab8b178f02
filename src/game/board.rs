use std::fmt;

use super::Piece;
use crate::error::BoardError;

/// Smallest allowed row or column count.
pub const MIN_SIZE: usize = 4;
/// Largest allowed row or column count.
pub const MAX_SIZE: usize = 8;

/// Contents of a single cell.
pub type Cell = Option<Piece>;

/// A placed piece: the column chosen by the actor and the row gravity picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub column: usize,
    pub piece: Piece,
}

/// Grid of cells stored row-major. Row 0 is the top row.
///
/// Occupied cells of a column always form a contiguous run ending at the
/// bottom row; the only way to add a piece is [`Board::insert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. Both dimensions must lie in `MIN_SIZE..=MAX_SIZE`.
    pub fn new(rows: usize, columns: usize) -> Result<Self, BoardError> {
        let valid = MIN_SIZE..=MAX_SIZE;
        if !valid.contains(&rows) || !valid.contains(&columns) {
            return Err(BoardError::DimensionOutOfRange {
                rows,
                columns,
                min: MIN_SIZE,
                max: MAX_SIZE,
            });
        }

        Ok(Board {
            rows,
            columns,
            cells: vec![None; rows * columns],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get the cell at a specific position
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is outside the board.
    pub fn get(&self, row: usize, column: usize) -> Cell {
        assert!(
            row < self.rows && column < self.columns,
            "cell ({row}, {column}) outside {}x{} board",
            self.rows,
            self.columns
        );
        self.cells[row * self.columns + column]
    }

    /// Cell lookup with signed coordinates; `None` when off the board.
    pub(crate) fn cell_at(&self, row: isize, column: isize) -> Option<Cell> {
        if row < 0 || column < 0 {
            return None;
        }
        let (row, column) = (row as usize, column as usize);
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(self.cells[row * self.columns + column])
    }

    fn check_column(&self, column: usize) -> Result<(), BoardError> {
        if column >= self.columns {
            return Err(BoardError::ColumnOutOfRange {
                column,
                columns: self.columns,
            });
        }
        Ok(())
    }

    /// Check if a column is full, i.e. its top cell is occupied
    pub fn is_column_full(&self, column: usize) -> Result<bool, BoardError> {
        self.check_column(column)?;
        Ok(self.get(0, column).is_some())
    }

    /// Lowest empty row of an in-range column, if any.
    pub(crate) fn landing_row(&self, column: usize) -> Option<usize> {
        (0..self.rows).rev().find(|&row| self.get(row, column).is_none())
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn insert(&mut self, piece: Piece, column: usize) -> Result<usize, BoardError> {
        self.check_column(column)?;
        let row = self
            .landing_row(column)
            .ok_or(BoardError::ColumnFull(column))?;
        self.cells[row * self.columns + column] = Some(piece);
        Ok(row)
    }

    /// Empty a cell again. Only used to undo a simulated insertion, so the
    /// cell must be the top of its column's run.
    pub(crate) fn clear(&mut self, row: usize, column: usize) {
        debug_assert!(row == 0 || self.get(row - 1, column).is_none());
        self.cells[row * self.columns + column] = None;
    }

    /// Columns that can still take a piece, in ascending order
    pub fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.columns).filter(move |&column| self.get(0, column).is_none())
    }

    /// A full top row means a full board, because of gravity
    pub fn is_tie(&self) -> bool {
        (0..self.columns).all(|column| self.get(0, column).is_some())
    }
}

/// Text snapshot: a 1-based column header, then each row as `| g ` cells
/// followed by a `=` separator line.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for column in 0..self.columns {
            write!(f, "  {} ", column + 1)?;
        }
        writeln!(f)?;

        let separator = "=".repeat(self.columns * 4 + 1);
        for row in 0..self.rows {
            for column in 0..self.columns {
                let glyph = self.get(row, column).map_or(' ', Piece::glyph);
                write!(f, "| {glyph} ")?;
            }
            writeln!(f, "|")?;
            writeln!(f, "{separator}")?;
        }
        Ok(())
    }
}
