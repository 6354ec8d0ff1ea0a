use rand::Rng;

use super::Grid;

impl Grid {
    /// Insert one random tile into a random empty cell, using the provided
    /// RNG: value 2 with probability `probability_of_two`, else 4.
    ///
    /// A full grid is returned unchanged; spawning is best-effort, never an
    /// error.
    ///
    /// Deterministic example with a seeded RNG:
    /// ```
    /// use merge_2048::Grid;
    /// use rand::{rngs::StdRng, SeedableRng};
    /// let mut rng = StdRng::seed_from_u64(123);
    /// let g = Grid::empty(4)
    ///     .with_random_tile(&mut rng, 0.9)
    ///     .with_random_tile(&mut rng, 0.9);
    /// assert_eq!(g.tile_count(), 2);
    /// ```
    pub fn with_random_tile<R: Rng + ?Sized>(&self, rng: &mut R, probability_of_two: f64) -> Grid {
        let empties = self.empty_positions();
        if empties.is_empty() {
            return self.clone();
        }
        let (row, col) = empties[rng.gen_range(0..empties.len())];
        let value = if rng.gen_bool(probability_of_two) { 2 } else { 4 };
        let mut grid = self.clone();
        grid.set(row, col, value);
        grid
    }

    /// Convenience: like `with_random_tile` but uses thread-local RNG.
    pub fn with_random_tile_thread(&self, probability_of_two: f64) -> Grid {
        let mut rng = rand::thread_rng();
        self.with_random_tile(&mut rng, probability_of_two)
    }

    /// Build a fresh `size`×`size` board seeded with `initial_tile_count`
    /// random tiles.
    pub fn initialize<R: Rng + ?Sized>(
        size: usize,
        initial_tile_count: usize,
        probability_of_two: f64,
        rng: &mut R,
    ) -> Grid {
        let mut grid = Grid::empty(size);
        for _ in 0..initial_tile_count {
            grid = grid.with_random_tile(rng, probability_of_two);
        }
        grid
    }
}
