//! Random fleet generation: populating a board with a legal random layout.

use rand::Rng;
use thiserror::Error;

use crate::board::{Board, Coordinate};
use crate::ships::Ship;

/// Ship lengths of the standard fleet: one three-cell ship, two two-cell
/// ships, and four single-cell boats.
pub const DEFAULT_FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Bound on placement retries for a single ship before a whole generation
/// attempt is abandoned.
pub const MAX_PLACE_ATTEMPTS: u32 = 2000;

/// Error returned when fleet generation gives up on a ship.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("no legal placement found for a length-{length} ship in {attempts} attempts")]
pub struct FleetError {
    /// Length of the ship that could not be placed.
    pub length: usize,
    /// Number of placements tried before giving up.
    pub attempts: u32,
}

/// Populate a new board of the given size with one ship per entry of
/// `lengths`, each at a random legal position.
///
/// Individual illegal placements are simply retried with a fresh random bow
/// and orientation. If a single ship exceeds [`MAX_PLACE_ATTEMPTS`] retries
/// the layout is considered dead and the whole generation fails; the caller
/// recovers by starting over from an empty board (see [`random_board`]).
pub fn generate_fleet<R: Rng>(
    rng: &mut R,
    size: usize,
    lengths: &[usize],
) -> Result<Board, FleetError> {
    let mut board = Board::new(size);
    for &length in lengths {
        let mut attempts = 0;
        loop {
            attempts += 1;
            if attempts > MAX_PLACE_ATTEMPTS {
                return Err(FleetError {
                    length,
                    attempts: MAX_PLACE_ATTEMPTS,
                });
            }
            let bow = Coordinate::new(rng.gen_range(0, size), rng.gen_range(0, size));
            let ship = Ship::new(length, bow, rng.gen());
            if board.place(ship).is_ok() {
                break;
            }
        }
    }
    board.reset_shots();
    Ok(board)
}

/// Generate a board carrying the standard fleet, retrying whole-fleet
/// generation until a legal layout is found.
pub fn random_board<R: Rng>(rng: &mut R, size: usize) -> Board {
    loop {
        match generate_fleet(rng, size, &DEFAULT_FLEET) {
            Ok(board) => return board,
            Err(err) => log::debug!("retrying fleet generation: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_board_places_the_standard_fleet() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = random_board(&mut rng, 6);
        assert_eq!(board.ship_count(), DEFAULT_FLEET.len());
        assert_eq!(board.sunk_count(), 0);
        assert!(!board.defeated());
    }

    #[test]
    fn generated_ships_never_touch() {
        let mut rng = StdRng::seed_from_u64(42);
        let board = random_board(&mut rng, 6);
        let ships = board.ships();
        for (i, a) in ships.iter().enumerate() {
            for b in &ships[i + 1..] {
                for ca in a.cells() {
                    for cb in b.cells() {
                        let dx = (ca.x as i64 - cb.x as i64).abs();
                        let dy = (ca.y as i64 - cb.y as i64).abs();
                        assert!(dx > 1 || dy > 1, "ships touch at {} / {}", ca, cb);
                    }
                }
            }
        }
    }

    #[test]
    fn generation_fails_when_a_ship_cannot_fit() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate_fleet(&mut rng, 2, &[3]).unwrap_err();
        assert_eq!(err.length, 3);
        assert_eq!(err.attempts, MAX_PLACE_ATTEMPTS);
    }

    #[test]
    fn custom_fleet_lengths_are_respected() {
        let mut rng = StdRng::seed_from_u64(3);
        let board = generate_fleet(&mut rng, 10, &[4, 3]).unwrap();
        let mut lengths: Vec<usize> = board.ships().iter().map(|s| s.len()).collect();
        lengths.sort();
        assert_eq!(lengths, vec![3, 4]);
    }
}
