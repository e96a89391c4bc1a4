//! Readers for the word2vec and text embedding formats.

use ndarray::Array2;

use crate::embeddings::Embeddings;
use crate::error::{Error, Result};
use crate::storage::NdArray;
use crate::util::l2_normalize_array;
use crate::vocab::{SimpleVocab, Vocab};

pub mod text;

pub mod word2vec;

/// Upper bounds on what is allocated up front from a shape header.
pub(crate) const MAX_PREALLOC_COMPONENTS: usize = 1 << 20;
const MAX_PREALLOC_WORDS: usize = 1 << 16;

/// Options for reading embeddings.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ReadOptions {
    /// Replace invalid UTF-8 in tokens by the replacement character
    /// instead of failing.
    pub lossy: bool,

    /// Only read the first `limit` embeddings.
    ///
    /// Embedding files are usually sorted by descending frequency, so
    /// this keeps the most frequent words while reducing load time and
    /// memory use.
    pub limit: Option<usize>,
}

impl ReadOptions {
    pub fn lossy() -> Self {
        ReadOptions {
            lossy: true,
            limit: None,
        }
    }

    pub(crate) fn n_words(&self, n_words: usize) -> usize {
        self.limit.map(|l| l.min(n_words)).unwrap_or(n_words)
    }
}

/// Collects words and their vectors while reading.
///
/// Only the first occurrence of a word is kept, the vectors of later
/// occurrences are dropped.
pub(crate) struct EmbeddingsBuilder {
    data: Vec<f32>,
    dims: Option<usize>,
    vocab: SimpleVocab,
}

impl EmbeddingsBuilder {
    /// Construct a builder for embeddings of unknown shape.
    pub fn new() -> Self {
        EmbeddingsBuilder {
            data: Vec::new(),
            dims: None,
            vocab: SimpleVocab::with_capacity(0),
        }
    }

    /// Construct a builder for the shape from a file header.
    ///
    /// The header is not trusted: an unrepresentable shape is an error
    /// and only a bounded amount of memory is allocated up front.
    pub fn with_shape(n_words: usize, dims: usize) -> Result<Self> {
        let n_components = n_words.checked_mul(dims).ok_or_else(|| {
            Error::Format(format!(
                "Embedding matrix shape is too large: {} x {}",
                n_words, dims
            ))
        })?;

        Ok(EmbeddingsBuilder {
            data: Vec::with_capacity(n_components.min(MAX_PREALLOC_COMPONENTS)),
            dims: Some(dims),
            vocab: SimpleVocab::with_capacity(n_words.min(MAX_PREALLOC_WORDS)),
        })
    }

    /// Add the embedding of a word.
    ///
    /// Fails when the embedding does not have the dimensionality of
    /// the previous embeddings or of the shape header.
    pub fn push(&mut self, word: &str, embedding: &[f32]) -> Result<()> {
        match self.dims {
            Some(dims) if dims != embedding.len() => {
                return Err(Error::Format(format!(
                    "Incorrect embedding dimensionality for '{}', expected: {}, got: {}",
                    word,
                    dims,
                    embedding.len(),
                )))
            }
            Some(_) => (),
            None => self.dims = Some(embedding.len()),
        }

        if self.vocab.push(word.to_owned()) {
            self.data.extend_from_slice(embedding);
        } else {
            tracing::warn!(word, "duplicate word, ignoring all but the first occurrence");
        }

        Ok(())
    }

    /// Construct the l2-normalized embeddings.
    pub fn build(self) -> Result<Embeddings<SimpleVocab, NdArray>> {
        let n_words = self.vocab.words().len();
        let mut matrix = Array2::from_shape_vec((n_words, self.dims.unwrap_or(0)), self.data)?;
        l2_normalize_array(matrix.view_mut());

        Ok(Embeddings::new(self.vocab, NdArray::new(matrix)))
    }
}

#[cfg(test)]
mod tests {
    use approx::AbsDiffEq;
    use ndarray::array;

    use super::EmbeddingsBuilder;
    use crate::vocab::Vocab;

    #[test]
    fn builder_keeps_first_occurrence() {
        let mut builder = EmbeddingsBuilder::new();
        builder.push("king", &[3., 4.]).unwrap();
        builder.push("queen", &[0., 2.]).unwrap();
        builder.push("king", &[1., 0.]).unwrap();

        let embeddings = builder.build().unwrap();
        assert_eq!(embeddings.vocab().words(), &["king", "queen"]);
        assert!(embeddings
            .embedding("king")
            .unwrap()
            .abs_diff_eq(&array![0.6f32, 0.8], 1e-6));
    }

    #[test]
    fn builder_rejects_inconsistent_dims() {
        let mut builder = EmbeddingsBuilder::new();
        builder.push("king", &[3., 4.]).unwrap();
        assert!(builder.push("queen", &[0., 2., 1.]).is_err());

        let mut builder = EmbeddingsBuilder::with_shape(2, 3).unwrap();
        assert!(builder.push("king", &[3., 4.]).is_err());
    }

    #[test]
    fn builder_rejects_overflowing_shape() {
        assert!(EmbeddingsBuilder::with_shape(usize::MAX, 2).is_err());
        assert!(EmbeddingsBuilder::with_shape(usize::MAX, 1).is_ok());
    }

    #[test]
    fn empty_builder() {
        let embeddings = EmbeddingsBuilder::new().build().unwrap();
        assert!(embeddings.is_empty());
    }
}
