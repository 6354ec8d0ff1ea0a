//! Best-score persistence: a single integer in a text file.
//!
//! The game core only supplies the current score; this store compares and
//! keeps the maximum across games. A missing file reads as zero.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ScoreStoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed best-score file")]
    Malformed,
}

/// File-backed best score.
pub struct BestScoreStore {
    path: PathBuf,
    best: u32,
}

impl BestScoreStore {
    /// Open the store at `path`, reading the saved best score if the file
    /// exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ScoreStoreError> {
        let path = path.as_ref().to_path_buf();
        let best = match fs::read_to_string(&path) {
            Ok(contents) => contents
                .trim()
                .parse::<u32>()
                .map_err(|_| ScoreStoreError::Malformed)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => 0,
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, best })
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record `score` if it beats the stored best; persists on improvement
    /// and returns whether the best changed.
    pub fn update(&mut self, score: u32) -> Result<bool, ScoreStoreError> {
        if score <= self.best {
            return Ok(false);
        }
        // Persist first so a failed write leaves memory and disk agreeing.
        fs::write(&self.path, score.to_string())?;
        self.best = score;
        Ok(true)
    }
}
