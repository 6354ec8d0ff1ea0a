use std::fmt;

use serde::{Deserialize, Serialize};

/// A square board of tile values.
///
/// Cells are stored row-major. `0` marks an empty cell; occupied cells hold
/// the actual tile value (2, 4, 8, ...). `Grid` is a value type: every
/// transformation returns a new grid, so callers never observe aliasing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<u32>,
}

impl Grid {
    /// Construct an empty `size`×`size` grid.
    ///
    /// ```
    /// use merge_2048::Grid;
    /// let g = Grid::empty(4);
    /// assert_eq!(g.empty_positions().len(), 16);
    /// ```
    pub fn empty(size: usize) -> Self {
        Grid {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Build a grid from explicit rows. Intended for tests and frontends.
    ///
    /// Panics if the rows do not form a square matrix.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Self {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            assert_eq!(row.len(), size, "grid rows must form a square matrix");
            cells.extend_from_slice(&row);
        }
        Grid { size, cells }
    }

    /// Side length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Value at `(row, col)`; `0` means empty.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row * self.size + col]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[row * self.size + col] = value;
    }

    /// Iterate over rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks_exact(self.size)
    }

    /// All `(row, col)` coordinates holding `0`, in row-major scan order.
    ///
    /// The order is part of the contract: the spawner draws a random index
    /// into this list, so a deterministic order makes seeded games
    /// reproducible.
    pub fn empty_positions(&self) -> Vec<(usize, usize)> {
        let mut positions = Vec::new();
        for r in 0..self.size {
            for c in 0..self.size {
                if self.get(r, c) == 0 {
                    positions.push((r, c));
                }
            }
        }
        positions
    }

    /// Number of occupied cells.
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Largest tile value on the board, `0` when empty.
    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Rotate a quarter turn clockwise: the cell at `(r, c)` moves to
    /// `(c, n−1−r)`. Four applications round-trip to the original grid.
    ///
    /// ```
    /// use merge_2048::Grid;
    /// let g = Grid::from_rows(vec![vec![2, 0], vec![4, 8]]);
    /// let r = g.rotate_clockwise();
    /// assert_eq!(r, Grid::from_rows(vec![vec![4, 2], vec![8, 0]]));
    /// ```
    pub fn rotate_clockwise(&self) -> Grid {
        let n = self.size;
        let mut rotated = Grid::empty(n);
        for r in 0..n {
            for c in 0..n {
                rotated.set(c, n - 1 - r, self.get(r, c));
            }
        }
        rotated
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1)
            .max(4);
        for row in self.rows() {
            for (c, &v) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, "|")?;
                }
                if v == 0 {
                    write!(f, "{:>width$}", ".", width = width)?;
                } else {
                    write!(f, "{:>width$}", v, width = width)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
