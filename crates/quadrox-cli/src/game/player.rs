//! The three player kinds and how each one decides its move.
//!
//! Humans drive a selection (cursor plus level) with keys and confirm one
//! block operation per turn. Random players pick one node/action pair
//! blind, smash included. Search players run the evaluator's trial-and-
//! revert search and play its candidate. Automated players return a
//! [`PlannedMove`] so the session can show the chosen block before the move
//! lands.

use crossterm::event::KeyCode;
use quadrox_engine::{Board, Move, NodePath, Position, Quadrant, SmashError};
use quadrox_evaluator::{goal::Goal, search::MoveSearch};
use rand::Rng;

/// One contestant: a number for display, a goal to chase, and whatever
/// state its kind of control needs.
#[derive(Debug, Clone)]
pub struct Player {
    number: usize,
    goal: Goal,
    score: usize,
    controller: Controller,
}

#[derive(Debug, Clone)]
enum Controller {
    Human(HumanControl),
    Random,
    Search(MoveSearch),
}

impl Player {
    #[must_use]
    pub fn human(number: usize, goal: Goal) -> Self {
        Self::new(number, goal, Controller::Human(HumanControl::new()))
    }

    #[must_use]
    pub fn random(number: usize, goal: Goal) -> Self {
        Self::new(number, goal, Controller::Random)
    }

    #[must_use]
    pub fn search(number: usize, goal: Goal, difficulty: u8) -> Self {
        Self::new(
            number,
            goal,
            Controller::Search(MoveSearch::from_difficulty(difficulty)),
        )
    }

    fn new(number: usize, goal: Goal, controller: Controller) -> Self {
        Self {
            number,
            goal,
            score: 0,
            controller,
        }
    }

    /// 1-based player number, as shown to the user.
    #[must_use]
    pub fn number(&self) -> usize {
        self.number
    }

    #[must_use]
    pub fn goal(&self) -> Goal {
        self.goal
    }

    /// Score as of this player's last completed move (or the end of the
    /// game, once the session has finished).
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    pub(crate) fn set_score(&mut self, score: usize) {
        self.score = score;
    }

    #[must_use]
    pub fn kind_label(&self) -> &'static str {
        match self.controller {
            Controller::Human(_) => "human",
            Controller::Random => "random",
            Controller::Search(_) => "search",
        }
    }

    #[must_use]
    pub fn is_human(&self) -> bool {
        matches!(self.controller, Controller::Human(_))
    }

    /// Readies this player for its turn. Humans restart from a whole-board
    /// selection; automated players carry no per-turn state.
    pub fn begin_turn(&mut self, board: &mut Board) {
        if let Controller::Human(control) = &mut self.controller {
            control.reset(board);
        }
    }

    /// Routes a key to a human controller. Non-human players ignore keys.
    pub fn handle_key<R>(&mut self, board: &mut Board, rng: &mut R, code: KeyCode) -> KeyOutcome
    where
        R: Rng + ?Sized,
    {
        match &mut self.controller {
            Controller::Human(control) => control.handle_key(board, rng, code),
            Controller::Random | Controller::Search(_) => KeyOutcome::Ignored,
        }
    }

    /// Decides an automated player's move without applying it. `None` for
    /// humans, who move through [`Player::handle_key`] instead.
    pub fn plan_move<R>(&self, board: &mut Board, rng: &mut R) -> Option<PlannedMove>
    where
        R: Rng + ?Sized,
    {
        match &self.controller {
            Controller::Human(_) => None,
            Controller::Random => {
                let path = board
                    .root()
                    .random_path(board.max_depth().saturating_sub(1), rng);
                let plan = match rng.random_range(0..=Move::ALL.len()) {
                    index if index < Move::ALL.len() => PlannedMove::Rearrange {
                        path,
                        action: Move::ALL[index],
                    },
                    _ => PlannedMove::Smash { path },
                };
                Some(plan)
            }
            Controller::Search(search) => {
                let candidate = search.search(board, &self.goal, rng)?;
                Some(PlannedMove::Rearrange {
                    path: candidate.path().to_vec(),
                    action: candidate.action(),
                })
            }
        }
    }
}

/// What a key press did to the current human turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The selection moved; the turn stays open.
    Selection,
    /// A move landed, with its report description.
    Completed(String),
    /// The move was refused; the turn stays open.
    Rejected(&'static str),
    /// Not a key this player answers to.
    Ignored,
}

/// An automated player's decision: where to act and what to do there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedMove {
    Rearrange { path: NodePath, action: Move },
    Smash { path: NodePath },
}

impl PlannedMove {
    /// Path from the root to the move's target block.
    #[must_use]
    pub fn path(&self) -> &[Quadrant] {
        match self {
            PlannedMove::Rearrange { path, .. } | PlannedMove::Smash { path } => path,
        }
    }

    #[must_use]
    pub fn description(&self) -> String {
        match self {
            PlannedMove::Rearrange { action, .. } => action.to_string(),
            PlannedMove::Smash { .. } => "smashed a block".to_owned(),
        }
    }

    pub fn apply<R>(&self, board: &mut Board, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        match self {
            PlannedMove::Rearrange { path, action } => {
                action.apply(board.root_mut().node_at_path_mut(path));
            }
            PlannedMove::Smash { path } => {
                // A blind smash can land on the root or a bottom-level
                // block; the move is still spent.
                let _ = board.root_mut().node_at_path_mut(path).smash(rng);
            }
        }
    }
}

/// A human player's selection state and smash budget.
#[derive(Debug, Clone)]
struct HumanControl {
    cursor: Position,
    level: u32,
    smashes_used: usize,
}

impl HumanControl {
    /// Smash moves one human may make in a whole game.
    const MAX_SMASHES: usize = 1;

    fn new() -> Self {
        Self {
            cursor: Position::ORIGIN,
            level: 0,
            smashes_used: 0,
        }
    }

    fn reset(&mut self, board: &mut Board) {
        self.cursor = Position::ORIGIN;
        self.level = 0;
        self.select(board);
    }

    fn handle_key<R>(&mut self, board: &mut Board, rng: &mut R, code: KeyCode) -> KeyOutcome
    where
        R: Rng + ?Sized,
    {
        match code {
            KeyCode::Left => {
                let step = self.selected_size(board);
                self.cursor.x = self.cursor.x.saturating_sub(step);
                self.select(board);
                KeyOutcome::Selection
            }
            KeyCode::Right => {
                let step = self.selected_size(board);
                self.cursor.x = (self.cursor.x + step).min(board.unit_side() - 1);
                self.select(board);
                KeyOutcome::Selection
            }
            KeyCode::Up => {
                let step = self.selected_size(board);
                self.cursor.y = self.cursor.y.saturating_sub(step);
                self.select(board);
                KeyOutcome::Selection
            }
            KeyCode::Down => {
                let step = self.selected_size(board);
                self.cursor.y = (self.cursor.y + step).min(board.unit_side() - 1);
                self.select(board);
                KeyOutcome::Selection
            }
            KeyCode::Char('-') => {
                self.level = self.level.saturating_sub(1);
                self.select(board);
                KeyOutcome::Selection
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.level = (self.level + 1).min(board.max_depth());
                self.select(board);
                KeyOutcome::Selection
            }
            KeyCode::Char('z') => self.rearrange(board, Move::RotateCounterClockwise),
            KeyCode::Char('x') => self.rearrange(board, Move::RotateClockwise),
            KeyCode::Char('h') => self.rearrange(board, Move::SwapHorizontal),
            KeyCode::Char('v') => self.rearrange(board, Move::SwapVertical),
            KeyCode::Char('s') => self.smash(board, rng),
            _ => KeyOutcome::Ignored,
        }
    }

    /// Re-resolves the selection against the tree and moves the highlight
    /// onto it. The tree may return a shallower block than requested (the
    /// level points below a leaf), so the level and cursor snap to the
    /// block actually selected.
    fn select(&mut self, board: &mut Board) {
        let root = board.root_mut();
        root.clear_highlights();
        let node = root.node_at_mut(self.cursor, self.level);
        self.level = node.level();
        self.cursor = node.position();
        node.set_highlighted(true);
    }

    fn selected_size(&self, board: &Board) -> u32 {
        board.root().node_at(self.cursor, self.level).size()
    }

    fn rearrange(&mut self, board: &mut Board, action: Move) -> KeyOutcome {
        // Applying to a leaf is a no-op but a legal, wasted move.
        action.apply(board.root_mut().node_at_mut(self.cursor, self.level));
        KeyOutcome::Completed(action.to_string())
    }

    fn smash<R>(&mut self, board: &mut Board, rng: &mut R) -> KeyOutcome
    where
        R: Rng + ?Sized,
    {
        if self.smashes_used >= Self::MAX_SMASHES {
            return KeyOutcome::Rejected("no smash moves left");
        }
        match board
            .root_mut()
            .node_at_mut(self.cursor, self.level)
            .smash(rng)
        {
            Ok(()) => {
                self.smashes_used += 1;
                KeyOutcome::Completed("smashed a block".to_owned())
            }
            Err(SmashError::Root) => KeyOutcome::Rejected("the whole board cannot be smashed"),
            Err(SmashError::MaxDepth) => {
                KeyOutcome::Rejected("that block is already at the smallest size")
            }
        }
    }
}
