use crate::game::{Board, Piece};

/// Interface for computer opponents.
pub trait Agent {
    /// Select a column for `piece`, or `None` when every column is full.
    ///
    /// The board is borrowed mutably so candidates can be tried in place;
    /// it must be back in its original state when this returns.
    fn select_column(&self, board: &mut Board, piece: Piece) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
