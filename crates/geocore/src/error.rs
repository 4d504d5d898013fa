use thiserror::Error;

/// Errors surfaced at the console's outer boundary.
///
/// Controller operations themselves absorb their failure modes (silent no-op
/// or warn-and-default); only configuration loading and the file-backed
/// store can fail loudly enough to return one of these.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("invalid console configuration: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
