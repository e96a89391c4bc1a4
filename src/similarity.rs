//! Traits and trait implementations for similarity queries.

use ordered_float::NotNan;

use crate::embeddings::Embeddings;
use crate::storage::Storage;
use crate::vocab::Vocab;

/// The similarity of a pair of words.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PairSimilarityResult {
    similarity: NotNan<f32>,
}

impl PairSimilarityResult {
    /// Get the similarity in cosine similarity.
    pub fn cosine_similarity(&self) -> f32 {
        *self.similarity
    }
}

/// Trait for similarity queries between two words.
pub trait WordPairSimilarity {
    /// Compute the similarity of two words.
    ///
    /// The similarity is the dot product of the embeddings. Since the
    /// embeddings are l2-normalized, this is the cosine similarity.
    ///
    /// Returns `None` when either word is not in the vocabulary, or
    /// when the similarity is not a number.
    fn word_pair_similarity(&self, word1: &str, word2: &str) -> Option<PairSimilarityResult>;
}

impl<V, S> WordPairSimilarity for Embeddings<V, S>
where
    V: Vocab,
    S: Storage,
{
    fn word_pair_similarity(&self, word1: &str, word2: &str) -> Option<PairSimilarityResult> {
        let embedding1 = self.embedding(word1)?;
        let embedding2 = self.embedding(word2)?;

        let sim = embedding1.dot(&embedding2);
        match NotNan::new(sim) {
            Ok(similarity) => Some(PairSimilarityResult { similarity }),
            Err(_) => {
                tracing::warn!(word1, word2, "similarity is not a number");
                None
            }
        }
    }
}
