use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of a flat copy run
#[derive(Debug, Error)]
pub enum FlatCopyError {
    /// Destination absent under the require-existing policy; nothing was copied
    #[error("Target folder does not exist: {}", path.display())]
    MissingDestination { path: PathBuf },

    #[error("Destination is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// Source and destination resolve to the same directory
    #[error("Source and destination are the same directory: {}", path.display())]
    SameDirectory { path: PathBuf },

    #[error("{} and {} are the same file", from.display(), to.display())]
    SameFile { from: PathBuf, to: PathBuf },

    #[error("Failed to resolve path {}: {source}", path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read source directory {}: {source}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create destination directory {}: {source}", path.display())]
    CreateDestination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to copy {} to {}: {source}", from.display(), to.display())]
    CopyFile {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write progress output: {0}")]
    Output(#[source] io::Error),
}

impl FlatCopyError {
    /// True for the clean early exit, as opposed to a filesystem failure
    pub fn is_missing_destination(&self) -> bool {
        matches!(self, FlatCopyError::MissingDestination { .. })
    }
}

pub type FlatCopyResult<T> = Result<T, FlatCopyError>;
