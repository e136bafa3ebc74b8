//! Error types for the playground

use thiserror::Error;

/// Main error type for playground operations.
///
/// None of the demonstrations themselves can fail. The only fallible step is
/// handing the rendered transcript to an output sink.
#[derive(Error, Debug)]
pub enum PlaygroundError {
    /// Writing an observation to the output sink failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl PlaygroundError {
    /// Whether the reader closed the output early (e.g. `| head`)
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            PlaygroundError::Output(err) => err.kind() == std::io::ErrorKind::BrokenPipe,
        }
    }
}

/// Result type alias for playground operations
pub type Result<T> = std::result::Result<T, PlaygroundError>;
