//! Word embeddings.

use ndarray::{CowArray, Ix1};

use crate::storage::Storage;
use crate::vocab::Vocab;

/// Word embeddings.
///
/// This data structure stores word embeddings (also known as *word
/// vectors*) together with their vocabulary. The readers in this
/// crate l2-normalize the storage, so the dot product of two
/// embeddings is their cosine similarity.
#[derive(Clone, Debug)]
pub struct Embeddings<V, S> {
    storage: S,
    vocab: V,
}

impl<V, S> Embeddings<V, S>
where
    V: Vocab,
    S: Storage,
{
    /// Construct embeddings from a vocabulary and storage.
    ///
    /// Panics when the vocabulary and storage sizes differ.
    pub fn new(vocab: V, storage: S) -> Self {
        assert_eq!(
            vocab.words_len(),
            storage.shape().0,
            "Vocab and storage do not have the same number of words"
        );

        Embeddings { storage, vocab }
    }

    /// Return the length (in vector components) of the word embeddings.
    pub fn dims(&self) -> usize {
        self.storage.shape().1
    }

    /// Get the embedding of a word.
    pub fn embedding(&self, word: &str) -> Option<CowArray<f32, Ix1>> {
        self.vocab.idx(word).map(|idx| self.storage.embedding(idx))
    }

    /// Get the number of words.
    pub fn len(&self) -> usize {
        self.vocab.words_len()
    }

    /// Check whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the embedding storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Get the vocabulary.
    pub fn vocab(&self) -> &V {
        &self.vocab
    }
}
