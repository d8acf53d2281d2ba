//! Scoring objectives handed to players at the start of a game.

use std::fmt;

use quadrox_engine::{Board, Colour};
use rand::{Rng, distr::StandardUniform, prelude::Distribution};

use crate::{blob, perimeter};

/// Which pattern a goal rewards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalKind {
    /// Largest 4-connected patch of the target colour.
    Blob,
    /// Target-coloured cells on the outer border, corners double.
    Perimeter,
}

impl Distribution<GoalKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> GoalKind {
        if rng.random() {
            GoalKind::Blob
        } else {
            GoalKind::Perimeter
        }
    }
}

/// A pattern plus the colour it must be built from.
///
/// Scoring is a pure function of the flattened board; a goal never mutates
/// the tree it scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Goal {
    kind: GoalKind,
    colour: Colour,
}

impl Distribution<Goal> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Goal {
        Goal::new(rng.random(), rng.random())
    }
}

impl Goal {
    #[must_use]
    pub const fn new(kind: GoalKind, colour: Colour) -> Self {
        Self { kind, colour }
    }

    #[must_use]
    pub const fn kind(&self) -> GoalKind {
        self.kind
    }

    #[must_use]
    pub const fn colour(&self) -> Colour {
        self.colour
    }

    /// Scores the whole board against this goal.
    #[must_use]
    pub fn score(&self, board: &Board) -> usize {
        let grid = board.flatten();
        match self.kind {
            GoalKind::Blob => blob::largest_blob(&grid, self.colour),
            GoalKind::Perimeter => perimeter::border_coverage(&grid, self.colour),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            GoalKind::Blob => {
                write!(f, "build the largest connected blob of {}", self.colour.name())
            }
            GoalKind::Perimeter => {
                write!(f, "put the most {} on the outer border", self.colour.name())
            }
        }
    }
}
