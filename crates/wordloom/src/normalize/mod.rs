//! # Text Normalization
//!
//! This module provides the normalization rules shared by vocabulary
//! construction and inference-time encoding: lowercase, strip every
//! character outside the Latin alphabet and whitespace, and split the
//! remainder on whitespace.

pub mod text_normalizer;

#[doc(inline)]
pub use text_normalizer::TextNormalizer;
