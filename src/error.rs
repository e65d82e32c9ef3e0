//! Error types for content and configuration loading

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while reading the site from disk
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error when reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk content directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Invalid configuration in {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
