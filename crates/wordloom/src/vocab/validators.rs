//! Validators for vocabulary configuration.
use crate::{errors::WordloomError, types::IndexType};

/// The number of reserved vocabulary entries.
pub const RESERVED_WORDS: usize = 2;

/// Validates and returns the vocabulary size, ensuring every index fits `T`.
pub fn try_vocab_size<T: IndexType>(vocab_size: usize) -> crate::errors::WLResult<usize> {
    if T::from_usize(vocab_size - 1).is_none() {
        Err(WordloomError::VocabSizeOverflow { size: vocab_size })
    } else {
        Ok(vocab_size)
    }
}
