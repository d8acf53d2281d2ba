//! Largest connected patch of one colour in a flattened board.

use quadrox_engine::{Colour, ColourGrid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unvisited,
    Miss,
    Match,
}

/// Size of the largest 4-connected component of `colour` cells.
///
/// Every cell is flooded from at most once, so a full scan is `O(n²)` for an
/// `n × n` grid.
#[must_use]
pub fn largest_blob(grid: &ColourGrid, colour: Colour) -> usize {
    let side = grid.side();
    let mut visits = vec![Visit::Unvisited; side * side];
    let mut best = 0;
    for row in 0..side {
        for col in 0..side {
            if visits[row * side + col] == Visit::Unvisited {
                best = best.max(flood(grid, colour, &mut visits, row, col));
            }
        }
    }
    best
}

/// Flood-fills through 4-connected `colour` cells starting at `(row, col)`,
/// marking visits and returning the component size. A start cell of the
/// wrong colour yields zero.
fn flood(
    grid: &ColourGrid,
    colour: Colour,
    visits: &mut [Visit],
    row: usize,
    col: usize,
) -> usize {
    let side = grid.side();
    let mut stack = vec![(row, col)];
    let mut count = 0;
    while let Some((row, col)) = stack.pop() {
        let slot = &mut visits[row * side + col];
        if *slot != Visit::Unvisited {
            continue;
        }
        if grid[(row, col)] != colour {
            *slot = Visit::Miss;
            continue;
        }
        *slot = Visit::Match;
        count += 1;
        if row > 0 {
            stack.push((row - 1, col));
        }
        if row + 1 < side {
            stack.push((row + 1, col));
        }
        if col > 0 {
            stack.push((row, col - 1));
        }
        if col + 1 < side {
            stack.push((row, col + 1));
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

    fn uniform_board(max_depth: u32, colour: Colour) -> Board {
        Board::from_root(Block::leaf(0, max_depth, colour))
    }

    #[test]
    fn test_a_uniform_board_is_one_blob_of_every_cell() {
        let board = uniform_board(2, Colour::RealRed);
        let grid = board.flatten();
        assert_eq!(largest_blob(&grid, Colour::RealRed), 16);
        assert_eq!(largest_blob(&grid, Colour::OldOlive), 0);
    }

    #[test]
    fn test_diagonal_cells_do_not_connect() {
        // Two Real Red quadrants meeting only at the centre point.
        let root = Block::with_children(0, 1, [
            Block::leaf(1, 1, Colour::RealRed),
            Block::leaf(1, 1, Colour::OldOlive),
            Block::leaf(1, 1, Colour::RealRed),
            Block::leaf(1, 1, Colour::OldOlive),
        ]);
        let board = Board::from_root(root);
        assert_eq!(largest_blob(&board.flatten(), Colour::RealRed), 1);
        assert_eq!(largest_blob(&board.flatten(), Colour::OldOlive), 1);
    }

    #[test]
    fn test_adjacent_quadrants_merge_into_one_blob() {
        // Upper-right and upper-left share a vertical edge.
        let root = Block::with_children(0, 2, [
            Block::leaf(1, 2, Colour::DaffodilDelight),
            Block::leaf(1, 2, Colour::DaffodilDelight),
            Block::leaf(1, 2, Colour::PacificPoint),
            Block::leaf(1, 2, Colour::PacificPoint),
        ]);
        let board = Board::from_root(root);
        assert_eq!(largest_blob(&board.flatten(), Colour::DaffodilDelight), 8);
        assert_eq!(largest_blob(&board.flatten(), Colour::PacificPoint), 8);
    }

    #[test]
    fn test_the_largest_of_several_components_wins() {
        let mut root = Block::with_children(0, 2, [
            Block::leaf(1, 2, Colour::RealRed),
            Block::leaf(1, 2, Colour::OldOlive),
            Block::leaf(1, 2, Colour::OldOlive),
            Block::leaf(1, 2, Colour::OldOlive),
        ]);
        // Shrink the lone Real Red region to a single bottom-level cell.
        let corner = root.node_at_path_mut(&[Quadrant::UpperRight]);
        *corner = Block::with_children(1, 2, [
            Block::leaf(2, 2, Colour::RealRed),
            Block::leaf(2, 2, Colour::OldOlive),
            Block::leaf(2, 2, Colour::OldOlive),
            Block::leaf(2, 2, Colour::OldOlive),
        ]);
        let board = Board::from_root(root);
        assert_eq!(largest_blob(&board.flatten(), Colour::RealRed), 1);
        assert_eq!(largest_blob(&board.flatten(), Colour::OldOlive), 15);
    }

    #[test]
    fn test_blob_sizes_stay_within_the_cell_count() {
        let mut rng = Pcg32::seed_from_u64(29);
        for _ in 0..20 {
            let board = Board::random(3, &mut rng);
            let grid = board.flatten();
            for colour in Colour::ALL {
                assert!(largest_blob(&grid, colour) <= 64);
            }
        }
    }
}
