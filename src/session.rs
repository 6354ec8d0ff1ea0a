//! Turn controller wrapping the pure engine: serializes moves, owns the
//! RNG, and keeps the score, move count, and win/over latches.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{GameSettings, SettingsError};
use crate::engine::{evaluate, Direction, GamePhase, Grid};

/// What `apply_move` did with a directional request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The shift changed nothing (or the game is over): no tile spawned,
    /// no counters touched.
    Rejected,
    /// The move was accepted and a tile was spawned.
    Moved {
        points: u32,
        /// True exactly once per game, when the win target first appears.
        announce_win: bool,
        game_over: bool,
    },
}

/// One game from start to game-over: grid, score, move count, and the
/// win latch, driven by directional requests.
pub struct GameSession {
    settings: GameSettings,
    grid: Grid,
    rng: StdRng,
    score: u32,
    moves: u32,
    has_won: bool,
    win_pending: bool,
    is_over: bool,
}

impl GameSession {
    /// Start a session with a freshly seeded RNG.
    pub fn new(settings: GameSettings) -> Result<Self, SettingsError> {
        Self::with_seed(settings, rand::random())
    }

    /// Start a session with a fixed seed; identical seeds replay
    /// identical games.
    ///
    /// ```
    /// use merge_2048::{GameSession, GameSettings, Direction};
    /// let mut a = GameSession::with_seed(GameSettings::default(), 42).unwrap();
    /// let mut b = GameSession::with_seed(GameSettings::default(), 42).unwrap();
    /// a.apply_move(Direction::Left);
    /// b.apply_move(Direction::Left);
    /// assert_eq!(a.grid(), b.grid());
    /// ```
    pub fn with_seed(settings: GameSettings, seed: u64) -> Result<Self, SettingsError> {
        settings.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = Grid::initialize(
            settings.grid_size,
            settings.initial_tile_count,
            settings.probability_of_two,
            &mut rng,
        );
        Ok(Self {
            settings,
            grid,
            rng,
            score: 0,
            moves: 0,
            has_won: false,
            win_pending: false,
            is_over: false,
        })
    }

    /// Discard the board wholesale and start over with the same settings.
    pub fn new_game(&mut self) {
        self.grid = Grid::initialize(
            self.settings.grid_size,
            self.settings.initial_tile_count,
            self.settings.probability_of_two,
            &mut self.rng,
        );
        self.score = 0;
        self.moves = 0;
        self.has_won = false;
        self.win_pending = false;
        self.is_over = false;
    }

    /// Apply one directional request.
    ///
    /// A request that leaves the grid unchanged is rejected outright:
    /// no spawn, no move counted, no score added. Once the game is over
    /// every request is rejected until `new_game`.
    pub fn apply_move(&mut self, direction: Direction) -> MoveResult {
        if self.is_over {
            return MoveResult::Rejected;
        }
        let outcome = self.grid.shift(direction);
        if outcome.grid == self.grid {
            return MoveResult::Rejected;
        }

        self.grid = outcome
            .grid
            .with_random_tile(&mut self.rng, self.settings.probability_of_two);
        self.moves += 1;
        self.score += outcome.points;

        let eval = evaluate(&self.grid, self.settings.win_target, self.has_won);
        if eval.should_announce_win {
            self.win_pending = true;
        }
        self.has_won = eval.has_won;
        self.is_over = eval.is_over;

        MoveResult::Moved {
            points: outcome.points,
            announce_win: eval.should_announce_win,
            game_over: eval.is_over,
        }
    }

    /// Dismiss the win banner and keep playing.
    pub fn acknowledge_win(&mut self) {
        self.win_pending = false;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn has_won(&self) -> bool {
        self.has_won
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// Derived phase, recomputed from the latches.
    pub fn phase(&self) -> GamePhase {
        if self.is_over {
            GamePhase::Over
        } else if self.win_pending {
            GamePhase::Won
        } else if self.has_won {
            GamePhase::ContinuingAfterWin
        } else {
            GamePhase::Playing
        }
    }
}
