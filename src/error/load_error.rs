use std::path::PathBuf;

use crate::error::ParseError;

/// Represents all errors that can occur while loading a program from disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source file does not exist.
    #[error("Robot program source file not found: {}", .path.display())]
    NotFound {
        /// The path that was looked up.
        path: PathBuf,
    },
    /// The source file exists but could not be read.
    #[error("Failed to read robot program {}: {source}", .path.display())]
    Io {
        /// The path that was read.
        path:   PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The source file was read but is not a valid program.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
