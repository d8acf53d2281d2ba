use std::ops::Index;

use super::colour::Colour;

/// A square grid of colours at unit-cell resolution.
///
/// Row-major with row 0 at the top; `(row, col)` indexing matches the board
/// geometry, so column `x` and row `y` of the grid cover the unit square at
/// position `(x, y)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourGrid {
    side: usize,
    cells: Vec<Colour>,
}

impl ColourGrid {
    /// Creates a grid with every cell set to `colour`.
    #[must_use]
    pub fn filled(side: usize, colour: Colour) -> Self {
        Self {
            side,
            cells: vec![colour; side * side],
        }
    }

    pub(crate) fn from_cells(side: usize, cells: Vec<Colour>) -> Self {
        assert_eq!(cells.len(), side * side, "cell count fits a {side}-square");
        Self { side, cells }
    }

    /// Edge length in cells.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Cell at `(row, col)`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Colour> {
        (row < self.side && col < self.side).then(|| self.cells[row * self.side + col])
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Colour]> {
        self.cells.chunks_exact(self.side)
    }

    pub(crate) fn row(&self, row: usize) -> &[Colour] {
        &self.cells[row * self.side..(row + 1) * self.side]
    }
}

impl Index<(usize, usize)> for ColourGrid {
    type Output = Colour;

    /// Indexes by `(row, col)`.
    fn index(&self, (row, col): (usize, usize)) -> &Colour {
        assert!(
            row < self.side && col < self.side,
            "cell ({row}, {col}) lies outside a {}-square grid",
            self.side
        );
        &self.cells[row * self.side + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_sets_every_cell() {
        let grid = ColourGrid::filled(4, Colour::OldOlive);
        assert_eq!(grid.side(), 4);
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(grid[(row, col)], Colour::OldOlive);
            }
        }
    }

    #[test]
    fn test_get_is_none_outside_the_grid() {
        let grid = ColourGrid::filled(2, Colour::RealRed);
        assert_eq!(grid.get(0, 0), Some(Colour::RealRed));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn test_rows_iterates_top_to_bottom() {
        let cells = vec![
            Colour::RealRed,
            Colour::RealRed,
            Colour::OldOlive,
            Colour::OldOlive,
        ];
        let grid = ColourGrid::from_cells(2, cells);
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows, [
            [Colour::RealRed, Colour::RealRed],
            [Colour::OldOlive, Colour::OldOlive],
        ]);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_indexing_panics_outside_the_grid() {
        let grid = ColourGrid::filled(2, Colour::RealRed);
        let _ = grid[(0, 2)];
    }
}
