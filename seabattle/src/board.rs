//! Types that make up a single player's board.

use std::collections::HashSet;
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::ships::Ship;

pub use self::errors::{PlaceError, ShotError};

mod errors;

/// The coordinates of a cell in the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Horizontal position of the cell.
    pub x: usize,
    /// Vertical position of the cell.
    pub y: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Iterate the in-bounds cells of the 3x3 block centered on this
    /// coordinate, including the coordinate itself.
    fn environs(self, size: usize) -> impl Iterator<Item = Coordinate> {
        let (x, y) = (self.x as i64, self.y as i64);
        (-1i64..=1)
            .flat_map(move |dy| (-1i64..=1).map(move |dx| (x + dx, y + dy)))
            .filter_map(move |(nx, ny)| {
                if (0..size as i64).contains(&nx) && (0..size as i64).contains(&ny) {
                    Some(Coordinate::new(nx as usize, ny as usize))
                } else {
                    None
                }
            })
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(x, y)` pair.
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// State of a single cell on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellState {
    /// Open water that has not been shot.
    Empty,
    /// An intact segment of a ship.
    Ship,
    /// A ship segment that has been hit.
    Hit,
    /// Water that was shot, or sealed around a sunk ship.
    Miss,
}

/// Outcome of a successfully-resolved shot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// Nothing was hit.
    Miss,
    /// A ship was hit but not sunk.
    Hit,
    /// A ship was hit and sunk.
    Sunk,
}

/// Represents a single player's board: the cell grid, the ships placed on it,
/// and the record of shots taken against it.
///
/// Placement-time reservations (every ship cell plus its contour buffer) and
/// play-time targeting history are tracked in two separate sets, so the
/// contour of a live ship stays ordinary shootable water while still blocking
/// placement of other ships.
#[derive(Debug)]
pub struct Board {
    /// Width and height of the board.
    size: usize,
    /// Cell states, linearized row by row.
    cells: Box<[CellState]>,
    /// Ships placed on this board.
    ships: Vec<Ship>,
    /// Cells reserved during placement: ship cells and their 8-neighborhoods.
    blocked: HashSet<Coordinate>,
    /// Cells targeted during play, plus cells sealed by sunk-ship contours.
    shots: HashSet<Coordinate>,
    /// Number of ships sunk so far.
    sunk: usize,
    /// Whether views of this board hide intact ships.
    concealed: bool,
}

impl Board {
    /// Create an empty `size` x `size` board. Panics if `size` is 0.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be nonzero");
        Self {
            size,
            cells: vec![CellState::Empty; size * size].into_boxed_slice(),
            ships: Vec::new(),
            blocked: HashSet::new(),
            shots: HashSet::new(),
            sunk: 0,
            concealed: false,
        }
    }

    /// Width and height of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The ships placed on this board.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships placed on this board.
    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    /// Number of ships that have been sunk.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Returns `true` once every ship on this board has been sunk.
    pub fn defeated(&self) -> bool {
        !self.ships.is_empty() && self.sunk == self.ships.len()
    }

    /// Mark this board as concealed: views produced by [`rows`](Self::rows)
    /// report intact ship cells as open water.
    pub fn conceal(&mut self) {
        self.concealed = true;
    }

    /// Whether views of this board hide intact ships.
    pub fn concealed(&self) -> bool {
        self.concealed
    }

    /// Convert a coordinate to a linear index within this board.
    /// Returns `None` if the coordinate is out of bounds.
    fn try_linearize(&self, coord: Coordinate) -> Option<usize> {
        if coord.x < self.size && coord.y < self.size {
            Some(coord.y * self.size + coord.x)
        } else {
            None
        }
    }

    /// Get the state of the cell at the given coordinate. Returns `None` if
    /// the coordinate is out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        self.try_linearize(coord).map(|i| self.cells[i])
    }

    /// Place a ship on the board.
    ///
    /// Fails with [`PlaceError::OutOfBounds`] if any of the ship's cells lies
    /// outside the board, and with [`PlaceError::Overlap`] if any of its cells
    /// falls on a previously placed ship or inside that ship's contour buffer.
    /// A failed placement leaves the board untouched.
    pub fn place(&mut self, ship: Ship) -> Result<(), PlaceError> {
        for coord in ship.cells() {
            if self.try_linearize(coord).is_none() {
                return Err(PlaceError::OutOfBounds);
            }
            if self.blocked.contains(&coord) {
                return Err(PlaceError::Overlap);
            }
        }
        for coord in ship.cells() {
            self[coord] = CellState::Ship;
            self.blocked.extend(coord.environs(self.size));
        }
        self.ships.push(ship);
        Ok(())
    }

    /// Resolve a shot at the given coordinate.
    ///
    /// Checks are applied in order: bounds, then duplicate target, then
    /// hit/miss resolution. A hit decrements the ship's remaining segments;
    /// sinking the ship also seals its contour buffer as misses so the cells
    /// around a wreck cannot be targeted afterwards. Deciding whether the
    /// whole fleet is destroyed is the caller's job.
    pub fn fire(&mut self, target: Coordinate) -> Result<ShotOutcome, ShotError> {
        if self.try_linearize(target).is_none() {
            return Err(ShotError::OutOfBounds);
        }
        if !self.shots.insert(target) {
            return Err(ShotError::AlreadyTargeted);
        }

        match self.ships.iter_mut().position(|ship| ship.occupies(target)) {
            Some(i) => {
                self.ships[i].record_hit();
                self[target] = CellState::Hit;
                if self.ships[i].is_sunk() {
                    self.sunk += 1;
                    log::debug!("ship sunk at {}, sealing its contour", target);
                    self.seal_contour(i);
                    Ok(ShotOutcome::Sunk)
                } else {
                    Ok(ShotOutcome::Hit)
                }
            }
            None => {
                self[target] = CellState::Miss;
                Ok(ShotOutcome::Miss)
            }
        }
    }

    /// Forget all shots recorded against this board. Placement-time contour
    /// reservations are kept, so this only clears targeting history.
    pub fn reset_shots(&mut self) {
        self.shots.clear();
    }

    /// Iterate the board one row at a time, as visible to a viewer. When the
    /// board is concealed, intact ship cells read as [`CellState::Empty`].
    pub fn rows<'a>(&'a self) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = CellState>> {
        let size = self.size;
        (0..size).map(move |y| {
            (0..size).map(move |x| {
                let state = self[Coordinate::new(x, y)];
                if self.concealed && state == CellState::Ship {
                    CellState::Empty
                } else {
                    state
                }
            })
        })
    }

    /// Mark the contour of the sunk ship at `index` as misses and exclude
    /// those cells from future targeting.
    fn seal_contour(&mut self, index: usize) {
        let cells: Vec<Coordinate> = self.ships[index].cells().collect();
        for coord in cells {
            for c in coord.environs(self.size) {
                if self[c] == CellState::Empty {
                    self[c] = CellState::Miss;
                }
                self.shots.insert(c);
            }
        }
    }
}

impl Index<Coordinate> for Board {
    type Output = CellState;

    fn index(&self, coord: Coordinate) -> &CellState {
        match self.try_linearize(coord) {
            Some(i) => &self.cells[i],
            None => panic!("{} is out of bounds for a {1}x{1} board", coord, self.size),
        }
    }
}

impl IndexMut<Coordinate> for Board {
    fn index_mut(&mut self, coord: Coordinate) -> &mut CellState {
        match self.try_linearize(coord) {
            Some(i) => &mut self.cells[i],
            None => panic!("{} is out of bounds for a {1}x{1} board", coord, self.size),
        }
    }
}
