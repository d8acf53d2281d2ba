use std::{array, fmt, iter};

use rand::{Rng, distr::StandardUniform, prelude::Distribution};

use super::{colour::Colour, grid::ColourGrid};
use crate::SmashError;

/// Top-left corner of a block's square region, in board units.
///
/// `(0, 0)` is the top-left of the board; `x` grows rightward and `y` grows
/// downward. One unit corresponds to one cell of the flattened grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub const ORIGIN: Self = Self::new(0, 0);

    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four quadrants of a subdivided block, in child storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Quadrant {
    UpperRight = 0,
    UpperLeft = 1,
    LowerLeft = 2,
    LowerRight = 3,
}

impl Distribution<Quadrant> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Quadrant {
        match rng.random_range(0..=3) {
            0 => Quadrant::UpperRight,
            1 => Quadrant::UpperLeft,
            2 => Quadrant::LowerLeft,
            _ => Quadrant::LowerRight,
        }
    }
}

impl Quadrant {
    /// Every quadrant in child storage order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::UpperRight,
        Quadrant::UpperLeft,
        Quadrant::LowerLeft,
        Quadrant::LowerRight,
    ];

    /// Offset of this quadrant's top-left corner from the parent's, where
    /// `half` is half the parent's edge length.
    #[must_use]
    pub const fn offset(self, half: u32) -> (u32, u32) {
        match self {
            Quadrant::UpperRight => (half, 0),
            Quadrant::UpperLeft => (0, 0),
            Quadrant::LowerLeft => (0, half),
            Quadrant::LowerRight => (half, half),
        }
    }

    /// Position of this quadrant in the child array.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A descent path from one block to a descendant, one quadrant per step.
pub type NodePath = Vec<Quadrant>;

/// Axis argument for [`Block::swap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapAxis {
    Horizontal,
    Vertical,
}

/// Direction argument for [`Block::rotate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

/// A square region of the board: a single coloured tile, or a block
/// subdivided into four children.
///
/// # Structure
///
/// A block is a node of a quadtree. Subdivided blocks hold exactly four
/// children in [`Quadrant`] storage order — upper-right, upper-left,
/// lower-left, lower-right — and no colour; leaves hold a [`Colour`] and no
/// children. `level` counts generations from the root (root = 0) and
/// `max_depth` is the deepest level any block in the tree may reach; every
/// block in one tree shares the same `max_depth`.
///
/// # Geometry
///
/// Every block covers a square of `size` units whose top-left corner is
/// `position`. Child squares tile their parent exactly: half the parent's
/// edge length, at the offset their quadrant dictates. Constructors leave
/// geometry at zero; [`Block::update_geometry`] lays a subtree out, and every
/// mutating operation re-lays its own subtree out before returning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    position: Position,
    size: u32,
    level: u32,
    max_depth: u32,
    highlighted: bool,
    content: BlockContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum BlockContent {
    Leaf(Colour),
    Quad(Box<[Block; 4]>),
}

impl Block {
    /// Probability that [`Block::generate`] subdivides a block above the
    /// bottom level.
    pub const SPLIT_PROBABILITY: f64 = 0.7;

    /// Creates a single coloured tile.
    ///
    /// # Panics
    ///
    /// Panics if `level > max_depth`.
    #[must_use]
    pub fn leaf(level: u32, max_depth: u32, colour: Colour) -> Self {
        assert!(
            level <= max_depth,
            "leaf level {level} exceeds max depth {max_depth}"
        );
        Self {
            position: Position::ORIGIN,
            size: 0,
            level,
            max_depth,
            highlighted: false,
            content: BlockContent::Leaf(colour),
        }
    }

    /// Creates a subdivided block from four pre-built children in
    /// [`Quadrant`] order.
    ///
    /// The children's `level` and `max_depth` are rewritten, recursively, to
    /// fit under the new parent. Geometry is left for
    /// [`Block::update_geometry`].
    ///
    /// # Panics
    ///
    /// Panics if `level >= max_depth`, or if a child subtree is too deep to
    /// fit above `max_depth`.
    #[must_use]
    pub fn with_children(level: u32, max_depth: u32, children: [Block; 4]) -> Self {
        assert!(
            level < max_depth,
            "a block at level {level} of {max_depth} cannot hold children"
        );
        let mut block = Self {
            position: Position::ORIGIN,
            size: 0,
            level,
            max_depth,
            highlighted: false,
            content: BlockContent::Quad(Box::new(children)),
        };
        block.renumber(level, max_depth);
        block
    }

    fn renumber(&mut self, level: u32, max_depth: u32) {
        assert!(
            level <= max_depth,
            "block level {level} exceeds max depth {max_depth}"
        );
        self.level = level;
        self.max_depth = max_depth;
        if let BlockContent::Quad(children) = &mut self.content {
            for child in children.iter_mut() {
                child.renumber(level + 1, max_depth);
            }
        }
    }

    /// Builds a random subtree rooted at `level`.
    ///
    /// Blocks at `max_depth` are always leaves; blocks above it subdivide
    /// with probability [`Block::SPLIT_PROBABILITY`], otherwise take a single
    /// random colour. Geometry is left at its defaults; callers normalize it
    /// with [`Block::update_geometry`].
    ///
    /// # Panics
    ///
    /// Panics if `level > max_depth`.
    #[must_use]
    pub fn generate<R>(level: u32, max_depth: u32, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::generate_with(level, max_depth, Self::SPLIT_PROBABILITY, rng)
    }

    /// [`Block::generate`] with an explicit subdivision probability.
    #[must_use]
    pub fn generate_with<R>(
        level: u32,
        max_depth: u32,
        split_probability: f64,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + ?Sized,
    {
        assert!(
            level <= max_depth,
            "generation level {level} exceeds max depth {max_depth}"
        );
        if level < max_depth && rng.random_bool(split_probability) {
            let children = array::from_fn(|_| {
                Self::generate_with(level + 1, max_depth, split_probability, rng)
            });
            Self::with_children(level, max_depth, children)
        } else {
            Self::leaf(level, max_depth, rng.random())
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    #[must_use]
    pub fn highlighted(&self) -> bool {
        self.highlighted
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self.content, BlockContent::Leaf(_))
    }

    /// This block's colour, if it is a leaf.
    #[must_use]
    pub fn colour(&self) -> Option<Colour> {
        match &self.content {
            BlockContent::Leaf(colour) => Some(*colour),
            BlockContent::Quad(_) => None,
        }
    }

    /// This block's children, if it is subdivided.
    #[must_use]
    pub fn children(&self) -> Option<&[Block; 4]> {
        match &self.content {
            BlockContent::Quad(children) => Some(children),
            BlockContent::Leaf(_) => None,
        }
    }

    /// Half-open containment test for a unit point.
    #[must_use]
    pub fn contains(&self, point: Position) -> bool {
        point.x >= self.position.x
            && point.x < self.position.x + self.size
            && point.y >= self.position.y
            && point.y < self.position.y + self.size
    }

    /// Assigns this block's region and recursively lays out every
    /// descendant: each child covers the half-sized square its quadrant
    /// dictates. Must run after any change to the child sequence.
    pub fn update_geometry(&mut self, top_left: Position, size: u32) {
        self.position = top_left;
        self.size = size;
        if let BlockContent::Quad(children) = &mut self.content {
            let half = size / 2;
            for (quadrant, child) in iter::zip(Quadrant::ALL, children.iter_mut()) {
                let (dx, dy) = quadrant.offset(half);
                child.update_geometry(Position::new(top_left.x + dx, top_left.y + dy), half);
            }
        }
    }

    /// Mirrors the child arrangement across the given axis.
    ///
    /// Horizontal exchanges upper-right with upper-left and lower-left with
    /// lower-right; vertical exchanges upper-right with lower-right and
    /// upper-left with lower-left. Only the top-level arrangement moves; the
    /// children's own subtrees keep their internal layout. No-op on a leaf.
    pub fn swap(&mut self, axis: SwapAxis) {
        if let BlockContent::Quad(children) = &mut self.content {
            match axis {
                SwapAxis::Horizontal => {
                    children.swap(Quadrant::UpperRight.index(), Quadrant::UpperLeft.index());
                    children.swap(Quadrant::LowerLeft.index(), Quadrant::LowerRight.index());
                }
                SwapAxis::Vertical => {
                    children.swap(Quadrant::UpperRight.index(), Quadrant::LowerRight.index());
                    children.swap(Quadrant::UpperLeft.index(), Quadrant::LowerLeft.index());
                }
            }
            self.update_geometry(self.position, self.size);
        }
    }

    /// Cyclically rotates the four children one quadrant in the given
    /// direction. Four rotations in one direction restore the original
    /// arrangement. No-op on a leaf.
    pub fn rotate(&mut self, direction: Rotation) {
        if let BlockContent::Quad(children) = &mut self.content {
            match direction {
                Rotation::Clockwise => children.rotate_left(1),
                Rotation::CounterClockwise => children.rotate_right(1),
            }
            self.update_geometry(self.position, self.size);
        }
    }

    /// Subdivides this block into four freshly generated random subtrees,
    /// discarding whatever it held before.
    ///
    /// The root cannot be smashed, nor can a block already at the tree's
    /// maximum depth; in both cases the block is left untouched.
    pub fn smash<R>(&mut self, rng: &mut R) -> Result<(), SmashError>
    where
        R: Rng + ?Sized,
    {
        if self.level == 0 {
            return Err(SmashError::Root);
        }
        if self.level == self.max_depth {
            return Err(SmashError::MaxDepth);
        }
        let children = array::from_fn(|_| Self::generate(self.level + 1, self.max_depth, rng));
        self.content = BlockContent::Quad(Box::new(children));
        self.update_geometry(self.position, self.size);
        Ok(())
    }

    /// Finds the block at `target_level` whose region contains `point`.
    ///
    /// Descent stops early at a leaf, and a block returns itself when the
    /// point lies outside its own region or inside none of its children
    /// (boundary fallback; callers normally query the root with in-range
    /// points).
    #[must_use]
    pub fn node_at(&self, point: Position, target_level: u32) -> &Block {
        let mut node = self;
        loop {
            if !node.contains(point) || node.level == target_level {
                return node;
            }
            let Some(child) = node
                .children()
                .and_then(|children| children.iter().find(|child| child.contains(point)))
            else {
                return node;
            };
            node = child;
        }
    }

    /// Mutable variant of [`Block::node_at`].
    #[must_use]
    pub fn node_at_mut(&mut self, point: Position, target_level: u32) -> &mut Block {
        let mut node = self;
        loop {
            if !node.contains(point) || node.level == target_level {
                return node;
            }
            let Some(index) = node.child_index_at(point) else {
                return node;
            };
            node = node.step_mut(index);
        }
    }

    /// Follows a quadrant path down from this block, stopping early at a
    /// leaf.
    #[must_use]
    pub fn node_at_path(&self, path: &[Quadrant]) -> &Block {
        let mut node = self;
        for &quadrant in path {
            let Some(children) = node.children() else {
                break;
            };
            node = &children[quadrant.index()];
        }
        node
    }

    /// Mutable variant of [`Block::node_at_path`].
    #[must_use]
    pub fn node_at_path_mut(&mut self, path: &[Quadrant]) -> &mut Block {
        let mut node = self;
        for &quadrant in path {
            if node.is_leaf() {
                break;
            }
            node = node.step_mut(quadrant.index());
        }
        node
    }

    fn child_index_at(&self, point: Position) -> Option<usize> {
        self.children()
            .and_then(|children| children.iter().position(|child| child.contains(point)))
    }

    fn step_mut(&mut self, index: usize) -> &mut Block {
        let BlockContent::Quad(children) = &mut self.content else {
            unreachable!("descent steps into subdivided blocks only");
        };
        &mut children[index]
    }

    /// Walks a uniformly random number of steps (at most `max_steps`) down
    /// from this block, picking a uniformly random quadrant at each step and
    /// stopping early at a leaf. Returns the quadrant path taken.
    #[must_use]
    pub fn random_path<R>(&self, max_steps: u32, rng: &mut R) -> NodePath
    where
        R: Rng + ?Sized,
    {
        let steps = rng.random_range(0..=max_steps);
        let mut path = NodePath::new();
        let mut node = self;
        for _ in 0..steps {
            let Some(children) = node.children() else {
                break;
            };
            let quadrant: Quadrant = rng.random();
            path.push(quadrant);
            node = &children[quadrant.index()];
        }
        path
    }

    /// Projects this block's region onto a uniform colour grid with one cell
    /// per unit, side `2^(max_depth - level)`.
    ///
    /// The grid is row-major with row 0 at the top: the upper-left and
    /// upper-right children fill the top half of the rows and the lower-left
    /// and lower-right children the bottom half, matching the block geometry
    /// cell for cell.
    #[must_use]
    pub fn flatten(&self) -> ColourGrid {
        let side = 1_usize << (self.max_depth - self.level);
        match &self.content {
            BlockContent::Leaf(colour) => ColourGrid::filled(side, *colour),
            BlockContent::Quad(children) => {
                let half = side / 2;
                let upper_right = children[Quadrant::UpperRight.index()].flatten();
                let upper_left = children[Quadrant::UpperLeft.index()].flatten();
                let lower_left = children[Quadrant::LowerLeft.index()].flatten();
                let lower_right = children[Quadrant::LowerRight.index()].flatten();
                let quads = [&upper_right, &upper_left, &lower_left, &lower_right];
                if quads.iter().any(|grid| grid.side() != half) {
                    // Children flatten to half-sized grids under the level
                    // invariants; anything else means the bookkeeping broke.
                    return ColourGrid::filled(side, Colour::default());
                }
                let mut cells = Vec::with_capacity(side * side);
                for row in 0..half {
                    cells.extend_from_slice(upper_left.row(row));
                    cells.extend_from_slice(upper_right.row(row));
                }
                for row in 0..half {
                    cells.extend_from_slice(lower_left.row(row));
                    cells.extend_from_slice(lower_right.row(row));
                }
                ColourGrid::from_cells(side, cells)
            }
        }
    }

    /// Marks or unmarks this block as the current selection.
    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    /// Clears the selection mark on this block and every descendant.
    pub fn clear_highlights(&mut self) {
        self.highlighted = false;
        if let BlockContent::Quad(children) = &mut self.content {
            for child in children.iter_mut() {
                child.clear_highlights();
            }
        }
    }
}

impl fmt::Display for Block {
    /// Writes an indented outline of the subtree, one block per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

impl Block {
    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = "  ".repeat(indent);
        match &self.content {
            BlockContent::Leaf(colour) => writeln!(
                f,
                "{pad}leaf {} at {}, size {}, level {}",
                colour.name(),
                self.position,
                self.size,
                self.level
            ),
            BlockContent::Quad(children) => {
                writeln!(
                    f,
                    "{pad}block at {}, size {}, level {}",
                    self.position, self.size, self.level
                )?;
                for child in children.iter() {
                    child.fmt_indented(f, indent + 1)?;
                }
                Ok(())
            }
        }
    }
}
