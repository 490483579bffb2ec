use thiserror::Error;

/// Failures of the collaborators around the timer. None of them are
/// recoverable; callers propagate them until the process exits.
#[derive(Debug, Error)]
pub enum Error {
    #[error("audio output unavailable: {0}")]
    AudioStream(#[from] rodio::StreamError),

    #[error("failed to play completion tone: {0}")]
    AudioPlay(#[from] rodio::PlayError),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("window backend failed: {0}")]
    Window(String),
}

pub type Result<T> = std::result::Result<T, Error>;
