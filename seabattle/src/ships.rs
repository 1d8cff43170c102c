//! Ships: straight lines of cells anchored at the bow.

use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::board::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    /// The ship extends along `x` from its bow.
    Horizontal,
    /// The ship extends along `y` from its bow.
    Vertical,
}

impl Distribution<Orientation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A ship occupying `length` contiguous cells starting at its bow.
///
/// The ship tracks how many of its segments remain unhit; the owning board
/// decides which shots land on it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    length: usize,
    bow: Coordinate,
    orientation: Orientation,
    hits_left: usize,
}

impl Ship {
    /// Construct a ship of the given length anchored at `bow`.
    /// Panics if `length` is 0.
    pub fn new(length: usize, bow: Coordinate, orientation: Orientation) -> Self {
        assert!(length > 0, "ship length must be nonzero");
        Self {
            length,
            bow,
            orientation,
            hits_left: length,
        }
    }

    /// Length of the ship in cells.
    pub fn len(&self) -> usize {
        self.length
    }

    /// The anchor cell of the ship.
    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of segments that have not been hit yet.
    pub fn hits_left(&self) -> usize {
        self.hits_left
    }

    /// Whether every segment of the ship has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits_left == 0
    }

    /// Iterate the cells occupied by this ship, bow first.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let Coordinate { x, y } = self.bow;
        let orientation = self.orientation;
        (0..self.length).map(move |i| match orientation {
            Orientation::Horizontal => Coordinate::new(x + i, y),
            Orientation::Vertical => Coordinate::new(x, y + i),
        })
    }

    /// Whether the given shot lands on this ship.
    pub fn occupies(&self, shot: Coordinate) -> bool {
        self.cells().any(|c| c == shot)
    }

    /// Record one confirmed hit on this ship.
    pub(crate) fn record_hit(&mut self) {
        debug_assert!(self.hits_left > 0, "hit recorded on a sunk ship");
        self.hits_left -= 1;
    }
}
