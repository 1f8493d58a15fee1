// Typed errors for startup configuration and the counter source

use std::path::PathBuf;

use thiserror::Error;

use crate::models::StatusLine;

/// Fatal at startup: reported as an error status line, then exit 1.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid polling interval: {0}")]
    InvalidInterval(String),
    #[error("interface does not exist: {0}")]
    MissingInterface(String),
    #[error("interface name pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl ConfigError {
    pub fn status_line(&self) -> StatusLine {
        match self {
            ConfigError::InvalidInterval(raw) => {
                StatusLine::error(raw, "Invalid polling interval")
            }
            ConfigError::MissingInterface(name) => {
                StatusLine::error(name, "Interface does not exist")
            }
            ConfigError::InvalidPattern(e) => StatusLine::error("Error", &e.to_string()),
        }
    }
}

/// A read of the counter source that produced no usable snapshot.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot open {}: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no matching interfaces in {}", .path.display())]
    Empty { path: PathBuf },
    #[error("snapshot task join: {0}")]
    Join(String),
}

impl SourceError {
    /// Status line to show for this failure. An empty read is skipped silently.
    pub fn status_line(&self) -> Option<StatusLine> {
        match self {
            SourceError::Unavailable { path, .. } => Some(StatusLine::error(
                "Error",
                &format!("Cannot open {}", path.display()),
            )),
            SourceError::Empty { .. } => None,
            SourceError::Join(_) => Some(StatusLine::error("Error", "Snapshot read failed")),
        }
    }
}
