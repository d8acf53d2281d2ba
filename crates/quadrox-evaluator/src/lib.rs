//! Goal scoring and move search for the block puzzle.
//!
//! This crate layers two concerns on top of the board engine:
//!
//! 1. **Goal scoring** ([`goal`]) - Pure functions from a flattened board to
//!    an integer score, one per goal kind:
//!    - [`blob`] - Size of the largest 4-connected patch of the target colour
//!    - [`perimeter`] - Target-coloured cells on the outer border, corners
//!      counted twice
//!
//! 2. **Move search** ([`search`]) - A bounded trial-and-revert search that
//!    proposes the single reversible move with the best score it found.
//!
//! Scoring never mutates the board: goals read the flattened grid only, and
//! the search undoes every trial with the move's exact inverse before the
//! next one, so a search leaves the board exactly as it found it until the
//! caller applies the winning candidate.
//!
//! # Example
//!
//! ```
//! use quadrox_engine::Board;
//! use quadrox_evaluator::{goal::Goal, search::MoveSearch};
//! use rand::{Rng as _, SeedableRng as _};
//! use rand_pcg::Pcg32;
//!
//! let mut rng = Pcg32::seed_from_u64(7);
//! let mut board = Board::random(3, &mut rng);
//!
//! let goal: Goal = rng.random();
//! let search = MoveSearch::from_difficulty(2);
//!
//! if let Some(candidate) = search.search(&mut board, &goal, &mut rng) {
//!     candidate.apply(&mut board);
//!     assert_eq!(goal.score(&board), candidate.score());
//! }
//! ```

pub mod blob;
pub mod goal;
pub mod perimeter;
pub mod search;
