//! Prelude exports the most commonly-used types and traits.

pub use crate::compat::text::{ReadText, ReadTextDims};

pub use crate::compat::word2vec::ReadWord2Vec;

pub use crate::compat::ReadOptions;

pub use crate::config::Config;

pub use crate::embeddings::Embeddings;

pub use crate::error::{Error, Result};

pub use crate::io::{read_embeddings, EmbeddingFormat};

pub use crate::provider::EmbeddingProvider;

pub use crate::repl::QueryLoop;

pub use crate::similarity::{PairSimilarityResult, WordPairSimilarity};

pub use crate::storage::{NdArray, Storage};

pub use crate::vocab::{SimpleVocab, Vocab};
