//! Match orchestration: two boards, turn sequencing, and win detection.

use rand::Rng;

use crate::board::{Board, Coordinate, ShotError, ShotOutcome};

/// Identifies one side of the match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }
}

/// Source of target coordinates for one side of the match.
///
/// A shooter may be re-invoked arbitrarily many times within a turn while its
/// previous pick keeps failing with a [`ShotError`].
pub trait Shooter {
    /// Pick the next cell to fire at on the enemy board.
    fn next_target(&mut self, enemy: &Board) -> Coordinate;
}

/// Automated shooter that picks uniformly random in-bounds cells, relying on
/// the turn loop to retry cells that were already shot.
pub struct RandomShooter<R> {
    rng: R,
}

impl<R: Rng> RandomShooter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Shooter for RandomShooter<R> {
    fn next_target(&mut self, enemy: &Board) -> Coordinate {
        let size = enemy.size();
        Coordinate::new(self.rng.gen_range(0, size), self.rng.gen_range(0, size))
    }
}

/// A two-player match over a pair of populated boards.
///
/// The match owns both boards for its lifetime. [`Player::P1`] moves first;
/// a hit or a sink retains the turn, a miss passes it, and the match ends
/// the instant either fleet is fully sunk.
pub struct Game {
    boards: [Board; 2],
    current: Player,
    turns: u32,
    winner: Option<Player>,
}

impl Game {
    /// Start a match between the two boards.
    pub fn new(p1: Board, p2: Board) -> Self {
        Self {
            boards: [p1, p2],
            current: Player::P1,
            turns: 0,
            winner: None,
        }
    }

    /// The player whose turn it currently is.
    pub fn current(&self) -> Player {
        self.current
    }

    /// Number of shots resolved so far.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// The winner, if the match has ended.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The board belonging to the given player.
    pub fn board(&self, player: Player) -> &Board {
        &self.boards[player as usize]
    }

    /// Fire the current player's shot at the opponent's board.
    ///
    /// A [`ShotError`] consumes no turn: the caller reports it to the shooter
    /// and asks for a new coordinate. On success, `Hit` and `Sunk` leave the
    /// shooter in control while `Miss` passes the turn, and the shooter is
    /// recorded as the winner as soon as the last enemy ship sinks.
    pub fn fire(&mut self, target: Coordinate) -> Result<ShotOutcome, ShotError> {
        debug_assert!(self.winner.is_none(), "shot fired after the match ended");
        let shooter = self.current;
        let defender = shooter.opponent();
        let outcome = self.boards[defender as usize].fire(target)?;
        self.turns += 1;
        if self.boards[defender as usize].defeated() {
            self.winner = Some(shooter);
        } else if outcome == ShotOutcome::Miss {
            self.current = defender;
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ships::{Orientation, Ship};

    /// A 6x6 board with a single two-cell ship in the top-left corner.
    fn small_board() -> Board {
        let mut board = Board::new(6);
        board
            .place(Ship::new(
                2,
                Coordinate::new(0, 0),
                Orientation::Horizontal,
            ))
            .unwrap();
        board
    }

    /// A 6x6 board carrying the full standard fleet at fixed positions.
    fn fleet_board() -> Board {
        let mut board = Board::new(6);
        let ships = [
            (3, 0, 0, Orientation::Horizontal),
            (2, 4, 0, Orientation::Vertical),
            (2, 0, 2, Orientation::Horizontal),
            (1, 3, 3, Orientation::Horizontal),
            (1, 5, 3, Orientation::Horizontal),
            (1, 0, 4, Orientation::Horizontal),
            (1, 2, 5, Orientation::Horizontal),
        ];
        for &(length, x, y, orientation) in &ships {
            board
                .place(Ship::new(length, Coordinate::new(x, y), orientation))
                .unwrap();
        }
        board
    }

    #[test]
    fn miss_passes_the_turn() {
        let mut game = Game::new(small_board(), small_board());
        assert_eq!(game.current(), Player::P1);
        assert_eq!(game.fire(Coordinate::new(5, 5)), Ok(ShotOutcome::Miss));
        assert_eq!(game.current(), Player::P2);
        assert_eq!(game.turns(), 1);
    }

    #[test]
    fn hit_retains_the_turn() {
        let mut game = Game::new(small_board(), small_board());
        assert_eq!(game.fire(Coordinate::new(0, 0)), Ok(ShotOutcome::Hit));
        assert_eq!(game.current(), Player::P1);
    }

    #[test]
    fn shot_error_consumes_no_turn() {
        let mut game = Game::new(small_board(), small_board());
        assert_eq!(
            game.fire(Coordinate::new(6, 0)),
            Err(ShotError::OutOfBounds)
        );
        assert_eq!(game.current(), Player::P1);
        assert_eq!(game.turns(), 0);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn sinking_the_last_ship_ends_the_match() {
        let mut game = Game::new(small_board(), small_board());
        assert_eq!(game.fire(Coordinate::new(0, 0)), Ok(ShotOutcome::Hit));
        assert_eq!(game.winner(), None);
        assert_eq!(game.fire(Coordinate::new(1, 0)), Ok(ShotOutcome::Sunk));
        assert_eq!(game.winner(), Some(Player::P1));
    }

    #[test]
    fn full_fleet_win_happens_on_the_seventh_sink_only() {
        let mut game = Game::new(fleet_board(), fleet_board());
        // Every cell of every enemy ship, ship by ship. All shots hit, so P1
        // keeps the turn throughout.
        let shots = [
            (0, 0),
            (1, 0),
            (2, 0),
            (4, 0),
            (4, 1),
            (0, 2),
            (1, 2),
            (3, 3),
            (5, 3),
            (0, 4),
            (2, 5),
        ];
        for (i, &(x, y)) in shots.iter().enumerate() {
            assert_eq!(game.winner(), None, "match ended before shot {}", i);
            game.fire(Coordinate::new(x, y)).unwrap();
        }
        assert_eq!(game.winner(), Some(Player::P1));
        assert_eq!(game.board(Player::P2).sunk_count(), 7);
    }
}
