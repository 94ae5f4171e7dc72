use thiserror::Error;

/// Errors surfaced by the core library.
///
/// Only the persistence and watch paths can fail; everything else (styling
/// hook updates, selector refreshes, event publication) is infallible by
/// design, matching the last-writer-wins model of the shared state.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Reading or writing the selection state file failed.
    #[error("state file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The selection state file exists but does not parse.
    #[error("state file parse error: {0}")]
    Parse(String),

    /// Setting up or driving the file watcher failed.
    #[error("state watcher error: {0}")]
    Watch(#[from] notify::Error),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
