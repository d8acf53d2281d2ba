use rand::Rng;

use crate::core::{
    block::{Block, Position},
    draw::DrawCommand,
    grid::ColourGrid,
};

/// A complete game board: a block tree laid out over the unit square grid.
///
/// The tree alone does not pin down where anything is; this wrapper owns the
/// root and keeps the whole tree's geometry normalized, with the root's
/// top-left corner at the origin and an edge length of one unit per
/// bottom-level cell. Mutation goes through [`Board::root_mut`], and the
/// block operations themselves re-lay out whatever subtree they touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    root: Block,
}

impl Board {
    /// Generates a random board of the given depth.
    #[must_use]
    pub fn random<R>(max_depth: u32, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::from_root(Block::generate(0, max_depth, rng))
    }

    /// Wraps an existing tree, normalizing its geometry.
    ///
    /// # Panics
    ///
    /// Panics if `root` is not a level-0 block.
    #[must_use]
    pub fn from_root(mut root: Block) -> Self {
        assert_eq!(root.level(), 0, "a board must be built from a level-0 block");
        let size = 1_u32 << root.max_depth();
        root.update_geometry(Position::ORIGIN, size);
        Self { root }
    }

    #[must_use]
    pub fn root(&self) -> &Block {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Block {
        &mut self.root
    }

    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.root.max_depth()
    }

    /// Edge length of the board in units, one unit per bottom-level cell.
    #[must_use]
    pub fn unit_side(&self) -> u32 {
        1_u32 << self.root.max_depth()
    }

    /// Projects the whole board onto a uniform colour grid.
    #[must_use]
    pub fn flatten(&self) -> ColourGrid {
        self.root.flatten()
    }

    /// Lists the rectangles a renderer must paint, in paint order.
    #[must_use]
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        self.root.draw_commands()
    }
}
