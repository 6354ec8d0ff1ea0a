//! Board-transformation engine: move/merge, random tile spawning, and
//! win/loss evaluation.
//!
//! All four move directions reduce to a single merge-left pass through
//! quarter-turn rotation, so there is exactly one merge implementation to
//! get right. Every operation is a pure function of its input grid.
//!
//! Quick start:
//! ```
//! use merge_2048::{Direction, Grid};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let g0 = Grid::initialize(4, 2, 0.9, &mut rng);
//! let outcome = g0.shift(Direction::Left);
//! if outcome.grid != g0 {
//!     let _g1 = outcome.grid.with_random_tile(&mut rng, 0.9);
//! }
//! ```

mod grid;
mod spawn;
mod state;

pub use grid::Grid;
pub use state::{can_move, evaluate, has_winning_tile, Evaluation, GamePhase};

use serde::{Deserialize, Serialize};

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Clockwise quarter turns that bring this direction into the canonical
    /// left-facing orientation. The inverse, `(4 - n) % 4`, restores the
    /// original orientation after the merge.
    #[inline]
    fn pre_rotations(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 2,
            Direction::Up => 3,
            Direction::Down => 1,
        }
    }
}

/// Result of sliding/merging in one direction: the new grid plus the points
/// scored by merges (each merge of two tiles valued `v` contributes `2v`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub grid: Grid,
    pub points: u32,
}

impl Grid {
    /// Slide/merge tiles in the given direction. No randomness, no spawn.
    ///
    /// The caller decides what to do with the outcome; a move that leaves
    /// the grid unchanged must be rejected (no tile spawned, no counters
    /// incremented).
    ///
    /// ```
    /// use merge_2048::{Direction, Grid};
    /// let g = Grid::from_rows(vec![vec![2, 0], vec![0, 2]]);
    /// let out = g.shift(Direction::Down);
    /// assert_eq!(out.grid, Grid::from_rows(vec![vec![0, 0], vec![2, 2]]));
    /// assert_eq!(out.points, 0);
    /// ```
    pub fn shift(&self, direction: Direction) -> MoveOutcome {
        let pre = direction.pre_rotations();
        let mut grid = self.clone();
        for _ in 0..pre {
            grid = grid.rotate_clockwise();
        }
        let (mut grid, points) = merge_left(&grid);
        for _ in 0..(4 - pre) % 4 {
            grid = grid.rotate_clockwise();
        }
        MoveOutcome { grid, points }
    }
}

/// Apply the merge-left operator to every row independently.
fn merge_left(grid: &Grid) -> (Grid, u32) {
    let n = grid.size();
    let mut out = Grid::empty(n);
    let mut points = 0;
    for (r, row) in grid.rows().enumerate() {
        let (merged, row_points) = merge_row_left(row);
        points += row_points;
        for (c, v) in merged.into_iter().enumerate() {
            out.set(r, c, v);
        }
    }
    (out, points)
}

/// Compact non-zeros left, merge equal adjacent pairs once each, pad with
/// zeros. Merges are pairwise left-to-right: `[2,2,2,2]` becomes `[4,4,0,0]`,
/// never `[8,0,0,0]`, because the scan advances past both source tiles.
fn merge_row_left(row: &[u32]) -> (Vec<u32>, u32) {
    let compacted: Vec<u32> = row.iter().copied().filter(|&v| v != 0).collect();
    let mut merged = Vec::with_capacity(row.len());
    let mut points = 0;
    let mut i = 0;
    while i < compacted.len() {
        if i + 1 < compacted.len() && compacted[i] == compacted[i + 1] {
            let doubled = compacted[i] * 2;
            merged.push(doubled);
            points += doubled;
            i += 2;
        } else {
            merged.push(compacted[i]);
            i += 1;
        }
    }
    merged.resize(row.len(), 0);
    (merged, points)
}
