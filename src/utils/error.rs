//! Error types for the entire crate.
//!
//! We use `thiserror` for library-style errors with custom types.
//! Each concern (file output, asset orchestration) gets its own enum
//! so callers can match on exactly the failures they care about.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

impl From<serde_json::Error> for OutputError {
    /// serde_json wraps sink errors in its own type; unwrap them back
    /// into `WriteFailed` so the I/O vs serialization taxonomy holds.
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            OutputError::WriteFailed(err.into())
        } else {
            OutputError::SerializationFailed(err)
        }
    }
}

/// Errors that can occur while preparing or persisting asset bundles
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Screenshot retrieval failed: {0}")]
    ScreenshotFetch(String),

    #[error("Failed to render filmstrip for pass {pass}: {source}")]
    FilmstripRender {
        pass: String,
        #[source]
        source: OutputError,
    },

    #[error("Failed to write {path} (pass {pass_index}): {source}")]
    FileWrite {
        pass_index: usize,
        path: PathBuf,
        #[source]
        source: OutputError,
    },

    #[error("{} asset file(s) failed to write: {}", .0.len(), join_failures(.0))]
    Aggregate(Vec<AssetError>),
}

/// Render each collected failure as its own `; `-separated clause
fn join_failures(failures: &[AssetError]) -> String {
    failures
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
