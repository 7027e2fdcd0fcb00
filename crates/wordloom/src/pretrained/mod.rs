//! # Pretrained Vector Resources
//!
//! This module provides providers for publicly published pretrained
//! word-vector tables.
//!
//! Available providers:
//! * [`glove`] - the Stanford `GloVe` 6B tables.

pub mod glove;

/// A resource with constant mirror URLs and an optional hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstUrlResource {
    /// The mirror URLs for this resource.
    pub urls: &'static [&'static str],

    /// The hash associated with this resource, if available.
    pub hash: Option<&'static str>,
}

impl ConstUrlResource {
    /// Create a new [`ConstUrlResource`].
    pub const fn new(
        urls: &'static [&'static str],
        hash: Option<&'static str>,
    ) -> Self {
        Self { urls, hash }
    }
}
