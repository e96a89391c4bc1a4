//! Embedding vocabularies

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Embedding vocabularies.
#[allow(clippy::len_without_is_empty)]
pub trait Vocab {
    /// Get the index of a token.
    fn idx(&self, word: &str) -> Option<usize>;

    /// Get the number of words in the vocabulary.
    fn words_len(&self) -> usize;

    /// Get the words in the vocabulary.
    fn words(&self) -> &[String];
}

/// Vocabulary of in-vocabulary words.
///
/// Lookups are case-sensitive: `King` and `king` are distinct entries.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SimpleVocab {
    indices: HashMap<String, usize>,
    words: Vec<String>,
}

impl SimpleVocab {
    /// Construct a new simple vocabulary.
    ///
    /// Words are assigned indices in the given order. Returns a format
    /// error when a word occurs more than once.
    pub fn new(words: impl Into<Vec<String>>) -> Result<Self> {
        let words = words.into();

        let mut vocab = SimpleVocab::with_capacity(words.len());
        for word in words {
            if !vocab.push(word.clone()) {
                return Err(Error::Format(format!(
                    "Vocabulary contains duplicate word: '{}'",
                    word
                )));
            }
        }

        Ok(vocab)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        SimpleVocab {
            indices: HashMap::with_capacity(capacity),
            words: Vec::with_capacity(capacity),
        }
    }

    /// Add a word with the next free index.
    ///
    /// Returns `false` without modifying the vocabulary if the word
    /// is already present.
    pub(crate) fn push(&mut self, word: String) -> bool {
        if self.indices.contains_key(&word) {
            return false;
        }

        self.indices.insert(word.clone(), self.words.len());
        self.words.push(word);

        true
    }
}

impl Vocab for SimpleVocab {
    fn idx(&self, word: &str) -> Option<usize> {
        self.indices.get(word).cloned()
    }

    fn words_len(&self) -> usize {
        self.words.len()
    }

    fn words(&self) -> &[String] {
        &self.words
    }
}
