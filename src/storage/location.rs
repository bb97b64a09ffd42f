//! Board directory location detection and management

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Board directory name
const BOARD_DIR: &str = ".taskboard";

/// Errors related to board location
#[derive(Debug, Error)]
pub enum BoardLocationError {
    #[error("Failed to access home directory")]
    NoHomeDirectory,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Represents where a board is stored
#[derive(Debug, Clone)]
pub struct BoardLocation {
    /// The directory holding the board documents
    pub board_dir: PathBuf,
    /// Whether this is the global board (~/.taskboard)
    pub is_global: bool,
}

impl BoardLocation {
    /// Pick the board for this invocation: an explicit directory wins,
    /// then the global board if requested, then the nearest project board,
    /// falling back to the global one.
    pub fn resolve(global: bool, dir: Option<&Path>) -> Result<Self, BoardLocationError> {
        if let Some(dir) = dir {
            return Ok(Self::at(dir));
        }

        if global {
            return Self::global();
        }

        let current = std::env::current_dir()?;
        match Self::find_project_from(&current) {
            Some(location) => Ok(location),
            None => Self::global(),
        }
    }

    /// Walk up from `start` looking for an existing .taskboard directory
    pub fn find_project_from(start: &Path) -> Option<Self> {
        let mut current = start.to_path_buf();
        loop {
            let board_dir = current.join(BOARD_DIR);
            if board_dir.is_dir() {
                return Some(BoardLocation {
                    board_dir,
                    is_global: false,
                });
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Get the global board location (~/.taskboard)
    pub fn global() -> Result<Self, BoardLocationError> {
        let home = dirs::home_dir().ok_or(BoardLocationError::NoHomeDirectory)?;
        Ok(BoardLocation {
            board_dir: home.join(BOARD_DIR),
            is_global: true,
        })
    }

    /// Use an explicit directory
    pub fn at(dir: &Path) -> Self {
        BoardLocation {
            board_dir: dir.to_path_buf(),
            is_global: false,
        }
    }

    /// Location of a new project board rooted at `root`
    pub fn project_root(root: &Path) -> Self {
        Self::at(&root.join(BOARD_DIR))
    }

    /// Check if the board directory exists
    pub fn exists(&self) -> bool {
        self.board_dir.exists()
    }

    /// Create the board directory if it doesn't exist
    pub fn ensure_exists(&self) -> Result<(), BoardLocationError> {
        if !self.board_dir.exists() {
            std::fs::create_dir_all(&self.board_dir)?;
        }
        Ok(())
    }
}
