//! Readers for text formats.
//!
//! This module provides two readers:
//!
//! 1. `ReadText`: word embeddings in text format. In this format,
//!    each line contains a word followed by its embedding. The word
//!    and the embedding vector components are separated by a
//!    space. This format is used by GloVe.
//! 2. `ReadTextDims`: this format is the same as (1), but the data is
//!    preceded by a line with the shape of the embedding matrix. This
//!    format is used by word2vec's text output.
//!
//! For example:
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! use wordsim::prelude::*;
//!
//! let mut reader = BufReader::new(File::open("glove.6B.300d.txt").unwrap());
//!
//! // Read the embeddings.
//! let embeddings = Embeddings::read_text(&mut reader)
//!     .unwrap();
//!
//! // Look up an embedding.
//! let embedding = embeddings.embedding("berlin");
//! ```

use std::borrow::Cow;
use std::io::BufRead;

use crate::compat::{EmbeddingsBuilder, ReadOptions};
use crate::embeddings::Embeddings;
use crate::error::{Error, Result};
use crate::storage::NdArray;
use crate::util::read_number;
use crate::vocab::SimpleVocab;

/// Method to construct `Embeddings` from a text file.
///
/// This trait defines an extension to `Embeddings` to read the word embeddings
/// from a text stream. The text should contain one word embedding per line in
/// the following format:
///
/// *word0 component_1 component_2 ... component_n*
pub trait ReadText<R>
where
    Self: Sized,
    R: BufRead,
{
    /// Read the embeddings from the given buffered reader.
    fn read_text(reader: &mut R) -> Result<Self> {
        Self::read_text_with_options(reader, ReadOptions::default())
    }

    /// Read the embeddings from the given buffered reader.
    ///
    /// In contrast to `read_text`, this constructor does not
    /// fail if a token contains invalid UTF-8. Instead, it will
    /// replace invalid UTF-8 characters by the replacement
    /// character.
    fn read_text_lossy(reader: &mut R) -> Result<Self> {
        Self::read_text_with_options(reader, ReadOptions::lossy())
    }

    /// Read the embeddings from the given buffered reader.
    fn read_text_with_options(reader: &mut R, options: ReadOptions) -> Result<Self>;
}

impl<R> ReadText<R> for Embeddings<SimpleVocab, NdArray>
where
    R: BufRead,
{
    fn read_text_with_options(reader: &mut R, options: ReadOptions) -> Result<Self> {
        read_embeds(reader, EmbeddingsBuilder::new(), options.limit, options)
    }
}

/// Method to construct `Embeddings` from a text file with dimensions.
///
/// This trait defines an extension to `Embeddings` to read the word embeddings
/// from a text stream. The text must contain as the first line the shape of
/// the embedding matrix:
///
/// *vocab_size n_components*
///
/// The remainder of the stream should contain one word embedding per line in
/// the following format:
///
/// *word0 component_1 component_2 ... component_n*
pub trait ReadTextDims<R>
where
    Self: Sized,
    R: BufRead,
{
    /// Read the embeddings from the given buffered reader.
    fn read_text_dims(reader: &mut R) -> Result<Self> {
        Self::read_text_dims_with_options(reader, ReadOptions::default())
    }

    /// Read the embeddings from the given buffered reader.
    ///
    /// In contrast to `read_text_dims`, this constructor does not
    /// fail if a token contains invalid UTF-8. Instead, it will
    /// replace invalid UTF-8 characters by the replacement
    /// character.
    fn read_text_dims_lossy(reader: &mut R) -> Result<Self> {
        Self::read_text_dims_with_options(reader, ReadOptions::lossy())
    }

    /// Read the embeddings from the given buffered reader.
    fn read_text_dims_with_options(reader: &mut R, options: ReadOptions) -> Result<Self>;
}

impl<R> ReadTextDims<R> for Embeddings<SimpleVocab, NdArray>
where
    R: BufRead,
{
    fn read_text_dims_with_options(reader: &mut R, options: ReadOptions) -> Result<Self> {
        let n_words = read_number(reader, b' ')?;
        let embed_len = read_number(reader, b'\n')?;
        let n_words = options.n_words(n_words);

        read_embeds(
            reader,
            EmbeddingsBuilder::with_shape(n_words, embed_len)?,
            Some(n_words),
            options,
        )
    }
}

/// Read up to `n_lines` embeddings, or all of them when `n_lines` is
/// `None`.
///
/// When `n_lines` is given, fewer lines is an error.
fn read_embeds<R>(
    reader: &mut R,
    mut builder: EmbeddingsBuilder,
    n_lines: Option<usize>,
    options: ReadOptions,
) -> Result<Embeddings<SimpleVocab, NdArray>>
where
    R: BufRead,
{
    let mut n_read = 0;
    let mut buf = Vec::new();
    let mut embedding = Vec::new();

    while n_lines.map(|n| n_read < n).unwrap_or(true) {
        buf.clear();
        match reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| Error::read_error("Cannot read line from embedding file", e))?
        {
            0 => break,
            n => {
                if buf[n - 1] == b'\n' {
                    buf.pop();
                }
            }
        };

        let line: Cow<str> = if options.lossy {
            String::from_utf8_lossy(&buf)
        } else {
            std::str::from_utf8(&buf)
                .map_err(|e| Error::Format(format!("Token contains invalid UTF-8: {}", e)))?
                .into()
        };

        let mut parts = line
            .split(|c: char| c.is_ascii_whitespace())
            .filter(|part| !part.is_empty());

        let word = parts
            .next()
            .ok_or_else(|| Error::Format(String::from("Spurious empty line")))?;

        embedding.clear();
        for part in parts {
            embedding.push(part.parse().map_err(|e| {
                Error::Format(format!("Cannot parse vector component '{}': {}", part, e))
            })?);
        }

        builder.push(word, &embedding)?;
        n_read += 1;
    }

    if let Some(n_lines) = n_lines {
        if n_read != n_lines {
            return Err(Error::Format(format!(
                "Incorrect vocabulary size, expected: {}, got: {}",
                n_lines, n_read
            )));
        }
    }

    builder.build()
}
