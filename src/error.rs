use std::path::PathBuf;

use crate::game::MoveError;

/// A failure reported by an observer while it handled a move.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ObserverError(Box<dyn std::error::Error + Send + Sync>);

impl ObserverError {
    /// Wrap a plain message
    pub fn new(message: impl Into<String>) -> Self {
        ObserverError(message.into().into())
    }

    pub fn other(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        ObserverError(Box::new(err))
    }
}

impl From<std::io::Error> for ObserverError {
    fn from(err: std::io::Error) -> Self {
        ObserverError::other(err)
    }
}

/// Errors returned by [`Game::make_move`](crate::game::Game::make_move).
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("invalid move: {0}")]
    Move(#[from] MoveError),

    #[error("observer failed: {0}")]
    Observer(#[from] ObserverError),
}

/// Errors from the text front-end's prompt loop.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Game(#[from] GameError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("failed to create log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = GameError::from(MoveError::ColumnFull);
        assert_eq!(err.to_string(), "invalid move: column is full");
    }

    #[test]
    fn test_observer_error_display() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = GameError::from(ObserverError::from(io));
        assert_eq!(err.to_string(), "observer failed: pipe closed");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("ui.start_column must be < 7".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: ui.start_column must be < 7"
        );
    }
}
