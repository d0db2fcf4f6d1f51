use std::path::PathBuf;

/// Errors that can occur while loading, fixing or saving a catalog.
#[derive(Debug, thiserror::Error)]
pub enum FixError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid UTF-8 content")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("malformed catalog: {reason}")]
    MalformedCatalog { reason: String },

    #[error("singular/plural mismatch storing translation of {msgid:?}")]
    FormMismatch { msgid: String },
}
