use std::io;

use thiserror::Error;

/// Failures at the session boundary. The match itself never errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("session already running")]
    AlreadyRunning,
    #[error("session not started")]
    NotStarted,
    #[error("game loop is no longer receiving commands")]
    Disconnected,
    #[error("shared state lock poisoned: {0}")]
    PoisonedLock(String),
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[from] io::Error),
}

impl<T> From<std::sync::PoisonError<T>> for AppError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        AppError::PoisonedLock(err.to_string())
    }
}
