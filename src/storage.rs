//! Embedding matrix representations.

use ndarray::{Array2, CowArray, Ix1};

/// Embedding matrix storage.
///
/// This trait abstracts over the representation of the *n x d*
/// embedding matrix.
pub trait Storage {
    /// Get the embedding of the word with index `idx`.
    fn embedding(&self, idx: usize) -> CowArray<f32, Ix1>;

    /// Get the shape of the embedding matrix.
    fn shape(&self) -> (usize, usize);
}

/// In-memory `ndarray` matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct NdArray {
    inner: Array2<f32>,
}

impl NdArray {
    pub fn new(arr: Array2<f32>) -> Self {
        NdArray { inner: arr }
    }
}

impl Storage for NdArray {
    fn embedding(&self, idx: usize) -> CowArray<f32, Ix1> {
        CowArray::from(self.inner.row(idx))
    }

    fn shape(&self) -> (usize, usize) {
        self.inner.dim()
    }
}
