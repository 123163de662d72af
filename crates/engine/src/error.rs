use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File '{}' is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },
}

impl EngineError {
    pub(crate) fn read(path: &Path, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn decode(path: &Path, source: std::str::Utf8Error) -> Self {
        Self::Decode {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The file the failing statistic was computed over.
    pub fn path(&self) -> &Path {
        match self {
            Self::FileRead { path, .. } | Self::Decode { path, .. } => path,
        }
    }

    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
