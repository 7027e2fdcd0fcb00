//! # Embedding Matrix Assembly
//!
//! This module provides the dense embedding matrix and its assembler.
//!
//! The assembler allocates a `(vocab size × dim)` matrix from a
//! zero-mean random initialization, then overwrites rows verbatim for
//! every vocabulary word present in the pretrained vector table. The
//! matrix is rebuilt in full on every assembly; it is never mutated
//! incrementally.

pub mod assembler;
pub mod embedding_matrix;

#[doc(inline)]
pub use assembler::{
    Coverage, EmbeddingAssembler, EmbeddingAssemblerOptions, EmbeddingAssembly,
};
#[doc(inline)]
pub use embedding_matrix::EmbeddingMatrix;
