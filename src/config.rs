//! Game configuration, validated once at the boundary.
//!
//! The engine itself assumes well-formed input; these checks mirror the
//! ranges the settings panel exposes (grid 3–8, starting tiles 1–4,
//! probability 0–100%).

use serde::{Deserialize, Serialize};

/// Default side length of the board.
pub const DEFAULT_GRID_SIZE: usize = 4;
/// Default probability of spawning a 2 (vs a 4).
pub const DEFAULT_PROBABILITY_OF_TWO: f64 = 0.9;
/// Default number of tiles placed at game start.
pub const DEFAULT_INITIAL_TILE_COUNT: usize = 2;
/// Default winning tile value.
pub const DEFAULT_WIN_TARGET: u32 = 2048;

/// Tunable game parameters consumed by the engine at new-game time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Side length of the board, 3..=8.
    pub grid_size: usize,
    /// Tiles spawned when a game starts, 1..=4.
    pub initial_tile_count: usize,
    /// P(spawned tile is a 2); the complement spawns a 4.
    pub probability_of_two: f64,
    /// Tile value that wins the game; a power of two >= 8.
    pub win_target: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            initial_tile_count: DEFAULT_INITIAL_TILE_COUNT,
            probability_of_two: DEFAULT_PROBABILITY_OF_TWO,
            win_target: DEFAULT_WIN_TARGET,
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SettingsError {
    #[error("grid size {0} out of range (3..=8)")]
    GridSize(usize),
    #[error("initial tile count {0} out of range (1..=4)")]
    InitialTileCount(usize),
    #[error("probability of two {0} outside [0.0, 1.0]")]
    ProbabilityOfTwo(f64),
    #[error("win target {0} must be a power of two >= 8")]
    WinTarget(u32),
}

impl GameSettings {
    /// Check every parameter against its allowed range.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(3..=8).contains(&self.grid_size) {
            return Err(SettingsError::GridSize(self.grid_size));
        }
        if !(1..=4).contains(&self.initial_tile_count) {
            return Err(SettingsError::InitialTileCount(self.initial_tile_count));
        }
        if !(0.0..=1.0).contains(&self.probability_of_two) {
            return Err(SettingsError::ProbabilityOfTwo(self.probability_of_two));
        }
        if self.win_target < 8 || !self.win_target.is_power_of_two() {
            return Err(SettingsError::WinTarget(self.win_target));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(GameSettings::default().validate(), Ok(()));
    }

    #[test]
    fn grid_size_bounds() {
        let mut s = GameSettings::default();
        s.grid_size = 3;
        assert!(s.validate().is_ok());
        s.grid_size = 8;
        assert!(s.validate().is_ok());
        s.grid_size = 2;
        assert_eq!(s.validate(), Err(SettingsError::GridSize(2)));
        s.grid_size = 9;
        assert_eq!(s.validate(), Err(SettingsError::GridSize(9)));
    }

    #[test]
    fn initial_tile_count_bounds() {
        let mut s = GameSettings::default();
        s.initial_tile_count = 0;
        assert_eq!(s.validate(), Err(SettingsError::InitialTileCount(0)));
        s.initial_tile_count = 5;
        assert_eq!(s.validate(), Err(SettingsError::InitialTileCount(5)));
    }

    #[test]
    fn probability_bounds() {
        let mut s = GameSettings::default();
        s.probability_of_two = 0.0;
        assert!(s.validate().is_ok());
        s.probability_of_two = 1.0;
        assert!(s.validate().is_ok());
        s.probability_of_two = 1.5;
        assert!(matches!(
            s.validate(),
            Err(SettingsError::ProbabilityOfTwo(_))
        ));
    }

    #[test]
    fn win_target_must_be_power_of_two() {
        let mut s = GameSettings::default();
        s.win_target = 4096;
        assert!(s.validate().is_ok());
        s.win_target = 1000;
        assert_eq!(s.validate(), Err(SettingsError::WinTarget(1000)));
        s.win_target = 4;
        assert_eq!(s.validate(), Err(SettingsError::WinTarget(4)));
    }
}
