//! Host error types.

use std::path::PathBuf;

use nightfarm_core::error::SimError;

/// Errors from the host layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Reading or writing a file failed.
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config or save file could not be parsed or written as JSON.
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The simulation rejected its configuration.
    #[error(transparent)]
    Sim(#[from] SimError),

    /// The game loop thread could not be started.
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(std::io::Error),

    /// The game loop thread panicked.
    #[error("game loop thread panicked")]
    GameLoopPanicked,
}
