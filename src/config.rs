//! Global configuration for the SAV converter
//!
//! Manages the directory the finished PNG files are written to.
//!
//! This program is unlicensed and dedicated to the public domain.

use std::path::{Path, PathBuf};

/// Application version
pub const VERSION: &str = "1.2";

#[derive(Clone)]
pub struct Config {
    pub output_path: PathBuf,
}

impl Config {
    pub fn new(output_path: impl AsRef<Path>) -> Self {
        Self {
            output_path: output_path.as_ref().to_path_buf(),
        }
    }

    /// Create a Config writing into the current working directory
    pub fn auto() -> Result<Self, String> {
        let output_path = std::env::current_dir()
            .map_err(|e| format!("Failed to get current directory: {}", e))?;
        Ok(Self::new(output_path))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::auto().unwrap_or_else(|_| Self::new("."))
    }
}
