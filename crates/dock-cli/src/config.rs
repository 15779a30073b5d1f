//! CLI configuration from environment.

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Location list read on every run
    pub input_path: PathBuf,
    /// Where flight coordinate files are written
    pub output_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            input_path: env::var("DOCKPLAN_INPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("locations.csv")),
            output_dir: env::var("DOCKPLAN_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}
