//! Configuration.
//!
//! Configuration is read from an optional TOML file:
//!
//! ```toml
//! data_dir = "/srv/embeddings"
//!
//! [model]
//! name = "word2vec-google-news-300"
//! format = "word2vec"
//! lossy = true
//! limit = 500000
//! ```
//!
//! Command-line options take precedence over the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::compat::ReadOptions;
use crate::embeddings::Embeddings;
use crate::error::{Error, Result};
use crate::io::{read_embeddings, EmbeddingFormat};
use crate::model::{data_dirs, find_model, DEFAULT_MODEL};
use crate::storage::NdArray;
use crate::vocab::SimpleVocab;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory that is searched first for models.
    pub data_dir: Option<PathBuf>,

    pub model: ModelConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// Model name, resolved in the data directories.
    pub name: String,

    /// Explicit model file, bypasses name resolution.
    pub path: Option<PathBuf>,

    pub format: EmbeddingFormat,

    /// Accept tokens with invalid UTF-8.
    pub lossy: bool,

    /// Only read the first `limit` vectors.
    pub limit: Option<usize>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            name: DEFAULT_MODEL.to_owned(),
            path: None,
            format: EmbeddingFormat::default(),
            lossy: false,
            limit: None,
        }
    }
}

impl Config {
    /// Read the configuration from a TOML file.
    ///
    /// Relative paths in the file are resolved against the directory
    /// of the file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|e| {
            Error::read_error(
                format!("Cannot read configuration file '{}'", path.display()),
                e,
            )
        })?;

        let mut config: Config = toml::from_str(&data).map_err(|error| Error::Config {
            path: path.to_owned(),
            error,
        })?;

        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }

        Ok(config)
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        let resolve = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        };

        if let Some(data_dir) = &mut self.data_dir {
            resolve(data_dir);
        }
        if let Some(model_path) = &mut self.model.path {
            resolve(model_path);
        }
    }

    /// Resolve the path of the model file.
    pub fn model_path(&self) -> Result<PathBuf> {
        match &self.model.path {
            Some(path) => Ok(path.clone()),
            None => find_model(&self.model.name, &data_dirs(self.data_dir.as_deref())),
        }
    }

    pub fn read_options(&self) -> ReadOptions {
        ReadOptions {
            lossy: self.model.lossy,
            limit: self.model.limit,
        }
    }

    /// Read the configured embeddings from `path`.
    pub fn read_embeddings(&self, path: &Path) -> Result<Embeddings<SimpleVocab, NdArray>> {
        read_embeddings(path, self.model.format, self.read_options())
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;
    use std::path::PathBuf;

    use tempfile::{tempdir, NamedTempFile};

    use super::{Config, ModelConfig};
    use crate::error::Error;
    use crate::io::EmbeddingFormat;
    use crate::model::DEFAULT_MODEL;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.model.name, DEFAULT_MODEL);
        assert_eq!(config.model.format, EmbeddingFormat::Word2Vec);
        assert!(!config.read_options().lossy);
        assert_eq!(config.read_options().limit, None);
    }

    #[test]
    fn empty_file_gives_defaults() {
        let file = config_file("");
        assert_eq!(Config::from_file(file.path()).unwrap(), Config::default());
    }

    #[test]
    fn reads_model_table() {
        let file = config_file(
            r#"
data_dir = "/srv/embeddings"

[model]
name = "glove-wiki-gigaword-300"
format = "text"
lossy = true
limit = 1000
"#,
        );

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/embeddings")));
        assert_eq!(
            config.model,
            ModelConfig {
                name: "glove-wiki-gigaword-300".to_owned(),
                path: None,
                format: EmbeddingFormat::Text,
                lossy: true,
                limit: Some(1000),
            }
        );
        assert!(config.read_options().lossy);
        assert_eq!(config.read_options().limit, Some(1000));
    }

    #[test]
    fn relative_paths_are_resolved_against_config_dir() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("wordsim.toml");
        std::fs::write(
            &config_path,
            "data_dir = \"models\"\n[model]\npath = \"vectors/tiny.bin\"\n",
        )
        .unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.data_dir, Some(dir.path().join("models")));
        assert_eq!(
            config.model_path().unwrap(),
            dir.path().join("vectors/tiny.bin")
        );
    }

    #[test]
    fn absolute_paths_are_kept() {
        let file = config_file("[model]\npath = \"/models/vectors.bin\"\n");
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(
            config.model.path,
            Some(PathBuf::from("/models/vectors.bin"))
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        let file = config_file("[model]\nnmae = \"typo\"\n");
        match Config::from_file(file.path()) {
            Err(Error::Config { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("expected configuration error, got: {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_format() {
        let file = config_file("[model]\nformat = \"fasttext\"\n");
        assert!(Config::from_file(file.path()).is_err());
    }

    #[test]
    fn missing_file_fails() {
        assert!(Config::from_file("/nonexistent/wordsim.toml").is_err());
    }

    #[test]
    fn explicit_path_bypasses_lookup() {
        let mut config = Config::default();
        config.model.path = Some(PathBuf::from("/models/vectors.bin"));
        assert_eq!(
            config.model_path().unwrap(),
            PathBuf::from("/models/vectors.bin")
        );
    }

    #[test]
    fn model_is_resolved_in_data_dir() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("tiny.bin")).unwrap();

        let mut config = Config::default();
        config.data_dir = Some(dir.path().to_owned());
        config.model.name = "tiny".to_owned();
        assert_eq!(config.model_path().unwrap(), dir.path().join("tiny.bin"));
    }
}
