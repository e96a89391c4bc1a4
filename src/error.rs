//! Error and result types.

use std::io;
use std::path::PathBuf;

use itertools::Itertools;
use ndarray::ShapeError;
use thiserror::Error;

/// `Result` type alias for operations that can lead to I/O errors.
pub type Result<T> = ::std::result::Result<T, Error>;

/// Errors in configuring, resolving, or reading embeddings.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading.
    #[error("{desc}: {error}")]
    Io {
        desc: String,
        #[source]
        error: io::Error,
    },

    /// Invalid file format.
    #[error("{0}")]
    Format(String),

    /// `ndarray` shape error.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// The configuration file could not be parsed.
    #[error("Cannot parse configuration file '{}': {error}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        error: toml::de::Error,
    },

    /// No model file could be found for a model name.
    #[error(
        "Embedding model '{name}' not found, searched: {}",
        searched.iter().map(|p| p.display()).join(", ")
    )]
    ModelNotFound { name: String, searched: Vec<PathBuf> },
}

impl Error {
    pub fn read_error(desc: impl Into<String>, error: io::Error) -> Self {
        Error::Io {
            desc: desc.into(),
            error,
        }
    }
}
