use std::fmt;
use std::path::PathBuf;

use crownfall_core::errors::ConfigError;

/// Failures the host can hit before or around a match. The simulation
/// itself never fails once running.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    /// An environment variable held a value that could not be parsed.
    Env { var: &'static str, value: String },
    ReadConfig { path: PathBuf, source: std::io::Error },
    SpawnLoop(std::io::Error),
    LoopPanicked,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "invalid match config: {e}"),
            AppError::Env { var, value } => write!(f, "invalid value '{value}' for {var}"),
            AppError::ReadConfig { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            AppError::SpawnLoop(e) => write!(f, "failed to spawn game loop thread: {e}"),
            AppError::LoopPanicked => write!(f, "game loop thread panicked"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::ReadConfig { source, .. } => Some(source),
            AppError::SpawnLoop(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}
