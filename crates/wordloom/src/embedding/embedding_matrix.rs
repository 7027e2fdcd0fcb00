//! # Embedding Matrix

use ndarray::{Array2, ArrayView1};

/// Dense `(vocab size × dim)` embedding lookup table.
///
/// Row *i* holds the vector for the word with vocabulary index *i*.
/// Consumers read it as an index -> vector lookup table.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingMatrix {
    /// Embedding weights, `(vocab size × dim)`.
    weights: Array2<f32>,
}

impl From<Array2<f32>> for EmbeddingMatrix {
    fn from(weights: Array2<f32>) -> Self {
        Self::from_weights(weights)
    }
}

impl EmbeddingMatrix {
    /// Create a matrix from existing weights.
    pub fn from_weights(weights: Array2<f32>) -> Self {
        Self { weights }
    }

    /// The number of rows; one per vocabulary index.
    pub fn vocab_size(&self) -> usize {
        self.weights.nrows()
    }

    /// The vector dimension.
    pub fn dim(&self) -> usize {
        self.weights.ncols()
    }

    /// Row view for a vocabulary index, if in range.
    pub fn lookup(
        &self,
        index: usize,
    ) -> Option<ArrayView1<'_, f32>> {
        (index < self.vocab_size()).then(|| self.weights.row(index))
    }

    /// Borrow the underlying weight array.
    pub fn weights(&self) -> &Array2<f32> {
        &self.weights
    }

    /// Unwrap into the underlying weight array.
    pub fn into_weights(self) -> Array2<f32> {
        self.weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedding_matrix() {
        let weights = Array2::from_shape_vec((2, 3), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let matrix: EmbeddingMatrix = weights.clone().into();

        assert_eq!(matrix.vocab_size(), 2);
        assert_eq!(matrix.dim(), 3);

        assert_eq!(matrix.lookup(0).unwrap().to_vec(), vec![1.0, 2.0, 3.0]);
        assert_eq!(matrix.lookup(1).unwrap().to_vec(), vec![4.0, 5.0, 6.0]);
        assert!(matrix.lookup(2).is_none());

        assert_eq!(matrix.weights(), &weights);
        assert_eq!(matrix.into_weights(), weights);
    }
}
