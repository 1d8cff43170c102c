//! Engine for the classic pen-and-paper sea battle game.
//!
//! The game is played on a small square grid (6x6 by default). Each side owns
//! a fleet of straight-line ships which may not touch each other, even
//! diagonally: every ship is surrounded by a one-cell contour buffer that no
//! other ship may occupy. Players take turns firing at each other's boards; a
//! hit grants another shot, and the match ends the moment one fleet is fully
//! sunk.
//!
//! [`board`] holds the per-player grid: placement validation, shot
//! resolution, and the maskable view used for rendering.
//!
//! [`ships`] defines the ships themselves and the cells they occupy.
//!
//! [`fleet`] generates random legal fleet layouts.
//!
//! [`game`] orchestrates a two-player match: turn sequencing, the
//! hit-shoots-again rule, and win detection.

pub mod board;
pub mod fleet;
pub mod game;
pub mod ships;
