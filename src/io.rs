//! Reading embeddings from files.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use flate2::read::MultiGzDecoder;
use serde::Deserialize;

use crate::compat::text::{ReadText, ReadTextDims};
use crate::compat::word2vec::ReadWord2Vec;
use crate::compat::ReadOptions;
use crate::embeddings::Embeddings;
use crate::error::{Error, Result};
use crate::storage::NdArray;
use crate::vocab::SimpleVocab;

/// Embedding file formats.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingFormat {
    /// word2vec binary format.
    #[value(name = "word2vec")]
    Word2Vec,

    /// Text format without a shape header, as used by GloVe.
    Text,

    /// Text format with a shape header, as used by word2vec.
    #[value(name = "textdims")]
    TextDims,
}

impl Default for EmbeddingFormat {
    fn default() -> Self {
        EmbeddingFormat::Word2Vec
    }
}

impl fmt::Display for EmbeddingFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::EmbeddingFormat::*;

        match self {
            Word2Vec => write!(f, "word2vec"),
            Text => write!(f, "text"),
            TextDims => write!(f, "textdims"),
        }
    }
}

/// Read embeddings from a file.
///
/// Files with the `.gz` extension are decompressed while reading. The
/// embeddings are l2-normalized after reading.
pub fn read_embeddings(
    path: &Path,
    embedding_format: EmbeddingFormat,
    options: ReadOptions,
) -> Result<Embeddings<SimpleVocab, NdArray>> {
    let f = File::open(path).map_err(|e| {
        Error::read_error(
            format!("Cannot open embeddings file '{}'", path.display()),
            e,
        )
    })?;
    let compressed = path.extension().map(|ext| ext == "gz").unwrap_or(false);
    let mut reader: Box<dyn BufRead> = if compressed {
        Box::new(BufReader::new(MultiGzDecoder::new(f)))
    } else {
        Box::new(BufReader::new(f))
    };

    tracing::info!(
        path = %path.display(),
        format = %embedding_format,
        compressed,
        lossy = options.lossy,
        limit = ?options.limit,
        "reading embeddings"
    );
    let start = Instant::now();

    use self::EmbeddingFormat::*;
    let embeddings: Embeddings<SimpleVocab, NdArray> = match embedding_format {
        Word2Vec => Embeddings::read_word2vec_binary_with_options(&mut reader, options),
        Text => Embeddings::read_text_with_options(&mut reader, options),
        TextDims => Embeddings::read_text_dims_with_options(&mut reader, options),
    }?;

    tracing::info!(
        words = embeddings.len(),
        dims = embeddings.dims(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "embeddings loaded"
    );

    Ok(embeddings)
}
