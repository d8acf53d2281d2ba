//! Bounded trial-and-revert search for a good single move.
//!
//! # How It Works
//!
//! One search runs a fixed number of independent trials:
//!
//! 1. Walk a uniformly random path down from the root, capped at three
//!    levels, stopping early at a leaf
//! 2. Apply a uniformly random reversible [`Move`] to the block it reaches
//! 3. Score the whole board against the goal
//! 4. Undo the move with its exact inverse before the next trial
//!
//! The best-scoring trial wins; on ties the earlier trial keeps its place.
//! Smashing is never tried since it cannot be undone. Reverting with the
//! exact inverse restores the board bit for bit, so trials cannot leak state
//! into each other and the search as a whole leaves the board unchanged
//! until the caller applies the returned candidate.
//!
//! This is a single-ply sampling search. It never looks further ahead than
//! one move, and with a small budget it can miss the best available move
//! entirely; the budget is the difficulty knob.

use quadrox_engine::{Board, Move, NodePath, Quadrant};
use rand::Rng;

use crate::goal::Goal;

/// Trials per search, indexed by difficulty tier.
const TRIALS_BY_DIFFICULTY: [u32; 6] = [5, 10, 25, 50, 100, 150];

/// Deepest level a trial may target, regardless of board depth.
const TARGET_LEVEL_CAP: u32 = 3;

/// A randomized single-move search with a fixed trial budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSearch {
    trials: u32,
}

impl MoveSearch {
    #[must_use]
    pub const fn new(trials: u32) -> Self {
        Self { trials }
    }

    /// Search strength for a difficulty level. Difficulties beyond the top
    /// tier clamp to the top tier's budget.
    #[must_use]
    pub fn from_difficulty(difficulty: u8) -> Self {
        let tier = usize::from(difficulty).min(TRIALS_BY_DIFFICULTY.len() - 1);
        Self::new(TRIALS_BY_DIFFICULTY[tier])
    }

    #[must_use]
    pub const fn trials(&self) -> u32 {
        self.trials
    }

    /// Proposes the best move found within the trial budget, or `None` when
    /// the budget is zero.
    ///
    /// The board is mutated during the trials but always restored before the
    /// next trial and before returning; the caller decides whether to apply
    /// the winning candidate.
    pub fn search<R>(&self, board: &mut Board, goal: &Goal, rng: &mut R) -> Option<CandidateMove>
    where
        R: Rng + ?Sized,
    {
        let target_cap = board.max_depth().min(TARGET_LEVEL_CAP);
        let mut best: Option<CandidateMove> = None;
        for _ in 0..self.trials {
            let path = board.root().random_path(target_cap, rng);
            let action: Move = rng.random();
            action.apply(board.root_mut().node_at_path_mut(&path));
            let score = goal.score(board);
            action.inverse().apply(board.root_mut().node_at_path_mut(&path));
            if best.as_ref().is_none_or(|best| score > best.score) {
                best = Some(CandidateMove { path, action, score });
            }
        }
        best
    }
}

/// A move the search proposes: where, what, and the score it reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMove {
    path: NodePath,
    action: Move,
    score: usize,
}

impl CandidateMove {
    /// Path from the root to the move's target block.
    #[must_use]
    pub fn path(&self) -> &[Quadrant] {
        &self.path
    }

    #[must_use]
    pub fn action(&self) -> Move {
        self.action
    }

    /// Whole-board score the trial reached with this move applied.
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Applies this move to the board for real.
    pub fn apply(&self, board: &mut Board) {
        self.action.apply(board.root_mut().node_at_path_mut(&self.path));
    }
}

#[cfg(test)]
mod tests {
    use quadrox_engine::{Block, Colour};
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;
    use crate::goal::GoalKind;

    #[test]
    fn test_difficulty_tiers_map_to_trial_budgets() {
        assert_eq!(MoveSearch::from_difficulty(0).trials(), 5);
        assert_eq!(MoveSearch::from_difficulty(1).trials(), 10);
        assert_eq!(MoveSearch::from_difficulty(2).trials(), 25);
        assert_eq!(MoveSearch::from_difficulty(3).trials(), 50);
        assert_eq!(MoveSearch::from_difficulty(4).trials(), 100);
        assert_eq!(MoveSearch::from_difficulty(5).trials(), 150);
        assert_eq!(MoveSearch::from_difficulty(9).trials(), 150);
    }

    #[test]
    fn test_a_search_leaves_the_board_exactly_as_found() {
        let mut board_rng = Pcg32::seed_from_u64(53);
        let mut board = Board::random(4, &mut board_rng);
        let before = board.clone();
        let goal = Goal::new(GoalKind::Blob, Colour::RealRed);
        let mut rng = Pcg32::seed_from_u64(54);
        let _ = MoveSearch::new(50).search(&mut board, &goal, &mut rng);
        assert_eq!(board, before);
        assert_eq!(board.flatten(), before.flatten());
    }

    #[test]
    fn test_a_zero_budget_search_proposes_nothing() {
        let mut board_rng = Pcg32::seed_from_u64(57);
        let mut board = Board::random(3, &mut board_rng);
        let goal = Goal::new(GoalKind::Perimeter, Colour::OldOlive);
        let mut rng = Pcg32::seed_from_u64(58);
        assert_eq!(MoveSearch::new(0).search(&mut board, &goal, &mut rng), None);
    }

    #[test]
    fn test_a_root_only_leaf_yields_a_harmless_candidate() {
        let mut board = Board::from_root(Block::leaf(0, 2, Colour::OldOlive));
        let before = board.clone();
        let goal = Goal::new(GoalKind::Blob, Colour::OldOlive);
        let mut rng = Pcg32::seed_from_u64(59);
        let candidate = MoveSearch::from_difficulty(1)
            .search(&mut board, &goal, &mut rng)
            .unwrap();
        assert_eq!(candidate.score(), 16);
        candidate.apply(&mut board);
        assert_eq!(board, before);
    }

    #[test]
    fn test_the_candidate_score_matches_the_board_after_applying() {
        let mut board_rng = Pcg32::seed_from_u64(61);
        let mut board = Board::random(3, &mut board_rng);
        let goal = Goal::new(GoalKind::Blob, Colour::PacificPoint);
        let mut rng = Pcg32::seed_from_u64(62);
        let candidate = MoveSearch::from_difficulty(3)
            .search(&mut board, &goal, &mut rng)
            .unwrap();
        candidate.apply(&mut board);
        assert_eq!(goal.score(&board), candidate.score());
    }

    #[test]
    fn test_searches_are_deterministic_for_a_seed() {
        let mut board_rng = Pcg32::seed_from_u64(63);
        let mut board = Board::random(4, &mut board_rng);
        let goal = Goal::new(GoalKind::Perimeter, Colour::DaffodilDelight);
        let mut a_rng = Pcg32::seed_from_u64(64);
        let mut b_rng = Pcg32::seed_from_u64(64);
        let a = MoveSearch::from_difficulty(2).search(&mut board, &goal, &mut a_rng);
        let b = MoveSearch::from_difficulty(2).search(&mut board, &goal, &mut b_rng);
        assert_eq!(a, b);
    }

    #[test]
    fn test_a_larger_budget_never_proposes_a_worse_move() {
        // With one RNG stream per budget, a bigger budget sees the smaller
        // budget's trials first, so its pick can only match or beat them.
        let mut board_rng = Pcg32::seed_from_u64(67);
        let mut board = Board::random(3, &mut board_rng);
        let goal = Goal::new(GoalKind::Blob, Colour::RealRed);
        let mut small_rng = Pcg32::seed_from_u64(68);
        let mut large_rng = Pcg32::seed_from_u64(68);
        let small = MoveSearch::new(10)
            .search(&mut board, &goal, &mut small_rng)
            .unwrap();
        let large = MoveSearch::new(100)
            .search(&mut board, &goal, &mut large_rng)
            .unwrap();
        assert!(large.score() >= small.score());
    }
}
