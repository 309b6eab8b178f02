use super::Piece;

/// One of the two positions at the table. Seat one always plays `X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    /// Get the other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// Piece played from this seat
    pub fn piece(self) -> Piece {
        match self {
            Seat::One => Piece::X,
            Seat::Two => Piece::O,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}
