use crate::error::{CliError, Result};
use std::{env, path::PathBuf};

const ENV_OUTPUT_DIR: &str = "PLANOGRAM_OUTPUT_DIR";
const DEFAULT_OUTPUT_DIR: &str = "csv";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Output directory from `PLANOGRAM_OUTPUT_DIR` (trimmed), `csv/` when
    /// unset or blank. An existing non-directory path is rejected.
    pub fn from_env() -> Result<Self> {
        let output_dir = env::var(ENV_OUTPUT_DIR)
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from);

        if output_dir.exists() && !output_dir.is_dir() {
            return Err(CliError::InvalidConfiguration(format!(
                "{ENV_OUTPUT_DIR} points at a file, not a directory: {}",
                output_dir.display()
            )));
        }
        Ok(Self {
            output_dir: Some(output_dir),
        })
    }
}
