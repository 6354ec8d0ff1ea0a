//! merge-2048: a sliding-tile merge puzzle engine.
//!
//! This crate provides:
//! - A `Grid` value type with pure move/merge/rotate operations (`engine`)
//! - Random tile spawning and board initialization, generic over `rand::Rng`
//! - Win and game-over evaluation with one-shot win announcement
//! - A `GameSession` turn controller with score, move count, and latches
//! - Validated `GameSettings` and file-backed best-score persistence
//!
//! Quick start:
//! ```
//! use merge_2048::{Direction, GameSession, GameSettings, MoveResult};
//!
//! // Deterministic game with a fixed seed
//! let mut session = GameSession::with_seed(GameSettings::default(), 42).unwrap();
//! for dir in Direction::ALL {
//!     if session.apply_move(dir) != MoveResult::Rejected {
//!         break;
//!     }
//! }
//! assert_eq!(session.moves(), 1);
//! ```
//!
//! The engine layer is usable without a session when a frontend keeps its
//! own state: `Grid::shift` returns the moved grid plus the points scored,
//! and the caller decides whether the move is accepted by comparing grids.

pub mod config;
pub mod engine;
pub mod score_store;
pub mod session;

pub use config::{GameSettings, SettingsError};
pub use engine::{evaluate, Direction, Evaluation, GamePhase, Grid, MoveOutcome};
pub use score_store::{BestScoreStore, ScoreStoreError};
pub use session::{GameSession, MoveResult};
