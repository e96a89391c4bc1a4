//! Membership and similarity queries over a vocabulary.

use crate::embeddings::Embeddings;
use crate::similarity::WordPairSimilarity;
use crate::storage::Storage;
use crate::vocab::Vocab;

/// A read-only source of word similarities.
///
/// Words are looked up as given; callers are responsible for
/// normalizing them (e.g. lower-casing).
pub trait EmbeddingProvider {
    /// Check whether `word` is in the vocabulary.
    fn contains(&self, word: &str) -> bool;

    /// Compute the cosine similarity of two words.
    ///
    /// Callers must check `contains` for both words first. Returns
    /// `None` when the similarity cannot be computed.
    fn similarity(&self, word1: &str, word2: &str) -> Option<f32>;
}

impl<V, S> EmbeddingProvider for Embeddings<V, S>
where
    V: Vocab,
    S: Storage,
{
    fn contains(&self, word: &str) -> bool {
        self.vocab().idx(word).is_some()
    }

    fn similarity(&self, word1: &str, word2: &str) -> Option<f32> {
        self.word_pair_similarity(word1, word2)
            .map(|sim| sim.cosine_similarity())
    }
}

impl<'a, P> EmbeddingProvider for &'a P
where
    P: EmbeddingProvider + ?Sized,
{
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }

    fn similarity(&self, word1: &str, word2: &str) -> Option<f32> {
        (**self).similarity(word1, word2)
    }
}

#[cfg(test)]
mod tests {
    use approx::AbsDiffEq;
    use ndarray::array;

    use super::EmbeddingProvider;
    use crate::embeddings::Embeddings;
    use crate::storage::NdArray;
    use crate::util::l2_normalize_array;
    use crate::vocab::SimpleVocab;

    fn test_provider() -> Embeddings<SimpleVocab, NdArray> {
        let vocab = SimpleVocab::new(vec!["king".to_owned(), "queen".to_owned()]).unwrap();
        let mut matrix = array![[2f32, 0.], [1., 1.]];
        l2_normalize_array(matrix.view_mut());
        Embeddings::new(vocab, NdArray::new(matrix))
    }

    #[test]
    fn contains_is_case_sensitive() {
        let provider = test_provider();
        assert!(provider.contains("king"));
        assert!(!provider.contains("King"));
        assert!(!provider.contains("asdfghjkl"));
    }

    #[test]
    fn similarity_is_cosine() {
        let provider = test_provider();
        assert!(provider
            .similarity("king", "queen")
            .unwrap()
            .abs_diff_eq(&(1f32 / 2f32.sqrt()), 1e-6));
        assert_eq!(provider.similarity("king", "dog"), None);
    }

    #[test]
    fn provider_by_reference() {
        fn check(provider: impl EmbeddingProvider) -> bool {
            provider.contains("queen")
        }

        let provider = test_provider();
        assert!(check(&provider));
    }
}
