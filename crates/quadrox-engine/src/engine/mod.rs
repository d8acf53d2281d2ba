//! Game-facing board state and the moves players apply to it.
//!
//! This module wraps the core block tree in the pieces a game loop works
//! with:
//!
//! - [`Board`] - A block tree kept laid out over the unit grid
//! - [`Move`] - The four reversible rearrangements, with exact inverses
//!
//! # Game Flow
//!
//! A typical turn progresses as follows:
//!
//! 1. Generate a [`Board`] from a seeded random number generator
//! 2. Pick a target block, by grid point or by quadrant path
//! 3. Apply a [`Move`] to it, or smash it into fresh random children
//! 4. Flatten the board and score the result against a goal
//!
//! Every mutation re-lays out the subtree it touched, so the board is always
//! ready to flatten or draw.
//!
//! # Example
//!
//! ```
//! use quadrox_engine::{Board, Move};
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg32;
//!
//! let mut rng = Pcg32::seed_from_u64(42);
//! let mut board = Board::random(3, &mut rng);
//!
//! // Rearrange a random descendant, then undo it.
//! let path = board.root().random_path(2, &mut rng);
//! Move::RotateClockwise.apply(board.root_mut().node_at_path_mut(&path));
//! Move::RotateClockwise.inverse().apply(board.root_mut().node_at_path_mut(&path));
//!
//! assert_eq!(board.flatten().side(), 8);
//! ```

pub use self::{board::*, moves::*};

mod board;
mod moves;
