//! Model path discovery.
//!
//! Pretrained models are identified by name, e.g.
//! `word2vec-google-news-300`, and looked up in a set of data
//! directories. The layout follows the gensim-data cache, so models
//! downloaded by gensim can be used directly.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// The model that is used when no model is configured.
pub const DEFAULT_MODEL: &str = "word2vec-google-news-300";

/// Environment variable with the data directory.
pub const DATA_DIR_ENV: &str = "WORDSIM_DATA_DIR";

/// Name of the default data directory in the user's home directory.
const HOME_DATA_DIR: &str = "gensim-data";

/// Get the data directories to search, in priority order.
///
/// An explicitly given directory comes first, followed by
/// `$HOME/gensim-data`.
pub fn data_dirs(data_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if let Some(data_dir) = data_dir {
        dirs.push(data_dir.to_owned());
    }

    if let Some(home) = env::var_os("HOME").or_else(|| env::var_os("USERPROFILE")) {
        let home_dir = PathBuf::from(home).join(HOME_DATA_DIR);
        if !dirs.contains(&home_dir) {
            dirs.push(home_dir);
        }
    }

    dirs
}

/// Candidate locations of a model within a data directory.
///
/// Uncompressed files are preferred over the gzip archive that the
/// gensim downloader stores.
fn candidates(data_dir: &Path, name: &str) -> Vec<PathBuf> {
    let model_dir = data_dir.join(name);
    vec![
        model_dir.join(name),
        model_dir.join(format!("{}.bin", name)),
        data_dir.join(format!("{}.bin", name)),
        model_dir.join(format!("{}.gz", name)),
    ]
}

/// Find the file of the model `name` in the given data directories.
pub fn find_model(name: &str, data_dirs: &[PathBuf]) -> Result<PathBuf> {
    let mut searched = Vec::new();

    for data_dir in data_dirs {
        for candidate in candidates(data_dir, name) {
            if candidate.is_file() {
                tracing::info!(model = name, path = %candidate.display(), "found model");
                return Ok(candidate);
            }

            tracing::debug!(path = %candidate.display(), "model not found at");
            searched.push(candidate);
        }
    }

    Err(Error::ModelNotFound {
        name: name.to_owned(),
        searched,
    })
}
