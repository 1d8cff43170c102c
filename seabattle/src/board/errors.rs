//! Errors returned by [`Board`][crate::board::Board] operations.

use thiserror::Error;

/// Reason why a ship could not be placed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum PlaceError {
    /// Part of the ship would lie outside the board.
    #[error("ship placement is out of bounds")]
    OutOfBounds,
    /// The ship would overlap or touch a previously placed ship.
    #[error("ship placement overlaps or touches another ship")]
    Overlap,
}

/// Reason why a shot could not be resolved.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ShotError {
    /// The target coordinate is outside the board.
    #[error("the target coordinate is out of bounds")]
    OutOfBounds,
    /// The target cell was already shot, or sealed by a sunk ship's contour.
    #[error("the target cell was already shot")]
    AlreadyTargeted,
}
