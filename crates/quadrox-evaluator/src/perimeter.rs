//! Border coverage of one colour in a flattened board.

use quadrox_engine::{Colour, ColourGrid};

/// Number of `colour` cells on the grid's outer border, with the four corner
/// cells counted twice.
///
/// The top and bottom rows are scanned across every column, applying the
/// corner weight where the column is first or last; the left and right
/// columns are then scanned across interior rows only, so no cell is visited
/// twice.
#[must_use]
pub fn border_coverage(grid: &ColourGrid, colour: Colour) -> usize {
    let side = grid.side();
    let Some(last) = side.checked_sub(1) else {
        return 0;
    };
    let mut count = 0;
    for col in 0..side {
        for row in [0, last] {
            if grid[(row, col)] == colour {
                count += if col == 0 || col == last { 2 } else { 1 };
            }
        }
    }
    for row in 1..last {
        for col in [0, last] {
            if grid[(row, col)] == colour {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use quadrox_engine::{Block, Board, Quadrant};
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    /// Depth-1 board that is Old Olive except for one Real Red cell.
    fn board_with_single_red(quadrant: Quadrant) -> Board {
        let mut root = Block::with_children(0, 1, [
            Block::leaf(1, 1, Colour::OldOlive),
            Block::leaf(1, 1, Colour::OldOlive),
            Block::leaf(1, 1, Colour::OldOlive),
            Block::leaf(1, 1, Colour::OldOlive),
        ]);
        *root.node_at_path_mut(&[quadrant]) = Block::leaf(1, 1, Colour::RealRed);
        Board::from_root(root)
    }

    #[test]
    fn test_a_corner_cell_counts_twice() {
        for quadrant in Quadrant::ALL {
            let board = board_with_single_red(quadrant);
            assert_eq!(border_coverage(&board.flatten(), Colour::RealRed), 2);
        }
    }

    #[test]
    fn test_an_edge_cell_counts_once() {
        // Depth-2 board, Real Red in a non-corner boundary cell.
        let mut root = Block::with_children(0, 2, [
            Block::leaf(1, 2, Colour::OldOlive),
            Block::leaf(1, 2, Colour::OldOlive),
            Block::leaf(1, 2, Colour::OldOlive),
            Block::leaf(1, 2, Colour::OldOlive),
        ]);
        *root.node_at_path_mut(&[Quadrant::UpperLeft]) = Block::with_children(1, 2, [
            Block::leaf(2, 2, Colour::RealRed),
            Block::leaf(2, 2, Colour::OldOlive),
            Block::leaf(2, 2, Colour::OldOlive),
            Block::leaf(2, 2, Colour::OldOlive),
        ]);
        let board = Board::from_root(root);
        let grid = board.flatten();
        assert_eq!(grid[(0, 1)], Colour::RealRed);
        assert_eq!(border_coverage(&grid, Colour::RealRed), 1);
    }

    #[test]
    fn test_full_boundary_reaches_the_corner_weighted_maximum() {
        let board = Board::from_root(Block::leaf(0, 2, Colour::PacificPoint));
        let grid = board.flatten();
        let side = grid.side();
        assert_eq!(border_coverage(&grid, Colour::PacificPoint), 4 * side);
        assert_eq!(border_coverage(&grid, Colour::RealRed), 0);
    }

    #[test]
    fn test_interior_cells_never_score() {
        // Pacific Point everywhere except one interior Real Red cell.
        let mut root = Block::with_children(0, 2, [
            Block::leaf(1, 2, Colour::PacificPoint),
            Block::leaf(1, 2, Colour::PacificPoint),
            Block::leaf(1, 2, Colour::PacificPoint),
            Block::leaf(1, 2, Colour::PacificPoint),
        ]);
        *root.node_at_path_mut(&[Quadrant::UpperLeft]) = Block::with_children(1, 2, [
            Block::leaf(2, 2, Colour::PacificPoint),
            Block::leaf(2, 2, Colour::PacificPoint),
            Block::leaf(2, 2, Colour::PacificPoint),
            Block::leaf(2, 2, Colour::RealRed),
        ]);
        let board = Board::from_root(root);
        let grid = board.flatten();
        assert_eq!(grid[(1, 1)], Colour::RealRed);
        assert_eq!(border_coverage(&grid, Colour::RealRed), 0);
    }

    #[test]
    fn test_coverage_stays_within_the_boundary_maximum() {
        let mut rng = Pcg32::seed_from_u64(31);
        for _ in 0..20 {
            let board = Board::random(3, &mut rng);
            let grid = board.flatten();
            for colour in Colour::ALL {
                assert!(border_coverage(&grid, colour) <= 4 * grid.side());
            }
        }
    }
}
