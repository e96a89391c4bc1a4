//! Reader for the word2vec binary format.
//!
//! Embeddings in the word2vec binary format are read as follows:
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! use wordsim::prelude::*;
//!
//! let mut reader = BufReader::new(File::open("GoogleNews-vectors-negative300.bin").unwrap());
//!
//! // Read the embeddings.
//! let embeddings = Embeddings::read_word2vec_binary(&mut reader)
//!     .unwrap();
//!
//! // Look up an embedding.
//! let embedding = embeddings.embedding("Berlin");
//! ```

use std::io::BufRead;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::compat::{EmbeddingsBuilder, ReadOptions, MAX_PREALLOC_COMPONENTS};
use crate::embeddings::Embeddings;
use crate::error::{Error, Result};
use crate::storage::NdArray;
use crate::util::{read_number, read_string};
use crate::vocab::SimpleVocab;

/// Method to construct `Embeddings` from a word2vec binary file.
///
/// This trait defines an extension to `Embeddings` to read the word embeddings
/// from a file in word2vec binary format. The embeddings are
/// l2-normalized. When a word occurs more than once, only its first
/// embedding is kept.
pub trait ReadWord2Vec<R>
where
    Self: Sized,
    R: BufRead,
{
    /// Read the embeddings from the given buffered reader.
    fn read_word2vec_binary(reader: &mut R) -> Result<Self> {
        Self::read_word2vec_binary_with_options(reader, ReadOptions::default())
    }

    /// Read the embeddings from the given buffered reader.
    ///
    /// In contrast to `read_word2vec_binary`, this constructor does
    /// not fail if a token contains invalid UTF-8. Instead, it will
    /// replace invalid UTF-8 characters by the replacement character.
    fn read_word2vec_binary_lossy(reader: &mut R) -> Result<Self> {
        Self::read_word2vec_binary_with_options(reader, ReadOptions::lossy())
    }

    /// Read the embeddings from the given buffered reader.
    fn read_word2vec_binary_with_options(reader: &mut R, options: ReadOptions) -> Result<Self>;
}

impl<R> ReadWord2Vec<R> for Embeddings<SimpleVocab, NdArray>
where
    R: BufRead,
{
    fn read_word2vec_binary_with_options(reader: &mut R, options: ReadOptions) -> Result<Self> {
        let n_words = read_number(reader, b' ')?;
        let embed_len = read_number(reader, b'\n')?;
        let n_words = options.n_words(n_words);

        let mut builder = EmbeddingsBuilder::with_shape(n_words, embed_len)?;
        let mut embedding = Vec::new();

        for idx in 0..n_words {
            // Vectors are followed by an optional newline, which ends
            // up in front of the next word.
            let word = read_string(reader, b' ', options.lossy)?;
            let word = word.trim();
            if word.is_empty() {
                return Err(Error::Format(format!(
                    "Empty word at vocabulary index {}",
                    idx
                )));
            }

            // Grow in bounded chunks, the header is not trusted.
            embedding.clear();
            while embedding.len() < embed_len {
                let start = embedding.len();
                let chunk = (embed_len - start).min(MAX_PREALLOC_COMPONENTS);
                embedding.resize(start + chunk, 0.);
                reader
                    .read_f32_into::<LittleEndian>(&mut embedding[start..])
                    .map_err(|e| Error::read_error("Cannot read word embedding", e))?;
            }

            builder.push(word, &embedding)?;
        }

        builder.build()
    }
}
