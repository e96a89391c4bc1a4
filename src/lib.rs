//! Interactive word similarity queries over pretrained embeddings.
//!
//! wordsim reads word embeddings in the word2vec binary or text
//! formats once, then answers queries for the cosine similarity of
//! two words. The embeddings are l2-normalized while reading, so that
//! a similarity is a single dot product.

pub mod compat;

pub mod config;

pub mod embeddings;

pub mod error;

pub mod io;

pub mod model;

pub mod prelude;

pub mod provider;

pub mod repl;

pub mod similarity;

pub mod storage;

pub(crate) mod util;

pub mod vocab;
