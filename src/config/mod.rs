use std::path::{Path, PathBuf};

use crate::Result;
use crate::error::Error as AppError;
use crate::types::{ClassName, Zone};

mod defaults;
mod env;
mod raw;

#[derive(Debug, Clone)]
pub struct Config {
    pub class: ClassName,
    pub zone: Zone,
    pub pattern: String,
    pub io: IoSettings,
}

#[derive(Debug, Clone)]
pub struct IoSettings {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub pretty: bool,
}

impl Config {
    /// Load configuration from a file and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration file cannot be parsed, when
    /// environment overrides are invalid, or when the resulting values
    /// fail validation.
    pub fn from_env_and_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut raw = raw::load(path).map_err(AppError::from)?;
        raw.apply_env_overrides().map_err(AppError::from)?;
        raw.validate_and_build()
    }
}
