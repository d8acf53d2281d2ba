use std::fmt;

use rand::{Rng, distr::StandardUniform, prelude::Distribution};

use crate::core::block::{Block, Rotation, SwapAxis};

/// A reversible rearrangement a player can apply to one block.
///
/// Smashing is deliberately absent: it generates fresh random content and
/// has no inverse, so anything that needs to undo what it tried (move search
/// in particular) works from this set alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    RotateClockwise,
    RotateCounterClockwise,
    SwapHorizontal,
    SwapVertical,
}

impl Distribution<Move> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        match rng.random_range(0..=3) {
            0 => Move::RotateClockwise,
            1 => Move::RotateCounterClockwise,
            2 => Move::SwapHorizontal,
            _ => Move::SwapVertical,
        }
    }
}

impl Move {
    /// Every move, in no particular order.
    pub const ALL: [Move; 4] = [
        Move::RotateClockwise,
        Move::RotateCounterClockwise,
        Move::SwapHorizontal,
        Move::SwapVertical,
    ];

    /// Applies this move to the given block.
    pub fn apply(self, block: &mut Block) {
        match self {
            Move::RotateClockwise => block.rotate(Rotation::Clockwise),
            Move::RotateCounterClockwise => block.rotate(Rotation::CounterClockwise),
            Move::SwapHorizontal => block.swap(SwapAxis::Horizontal),
            Move::SwapVertical => block.swap(SwapAxis::Vertical),
        }
    }

    /// The move that exactly undoes this one on any block.
    #[must_use]
    pub const fn inverse(self) -> Move {
        match self {
            Move::RotateClockwise => Move::RotateCounterClockwise,
            Move::RotateCounterClockwise => Move::RotateClockwise,
            Move::SwapHorizontal => Move::SwapHorizontal,
            Move::SwapVertical => Move::SwapVertical,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Move::RotateClockwise => "rotated a block clockwise",
            Move::RotateCounterClockwise => "rotated a block counter-clockwise",
            Move::SwapHorizontal => "swapped a block horizontally",
            Move::SwapVertical => "swapped a block vertically",
        };
        f.write_str(text)
    }
}
