//! # Word Vocabulary Index

use crate::{
    errors::WLResult,
    normalize::TextNormalizer,
    types::{IndexType, WLHashMap, WLHashSet, hash_map_with_capacity},
    vocab::validators::{RESERVED_WORDS, try_vocab_size},
};

/// The reserved padding word; always at index 0.
pub const PAD_WORD: &str = "<PAD>";

/// The reserved unknown-word marker; always at index 1.
pub const UNK_WORD: &str = "<UNK>";

/// Deterministic `{ word -> T }` vocabulary.
///
/// Invariants:
/// * indices are unique and contiguous from 0,
/// * [`PAD_WORD`] holds index 0 and [`UNK_WORD`] holds index 1,
/// * lookups for absent words fall back to the unknown index.
#[derive(Debug, Clone, PartialEq)]
pub struct WordVocab<T: IndexType> {
    /// The `{ word -> index }` map.
    word_index: WLHashMap<String, T>,

    /// The words, in index order.
    words: Vec<String>,
}

impl<T: IndexType> Default for WordVocab<T> {
    fn default() -> Self {
        Self::with_reserved()
    }
}

impl<T: IndexType> WordVocab<T> {
    /// Create a vocabulary holding only the reserved entries.
    pub fn with_reserved() -> Self {
        let mut word_index = hash_map_with_capacity(RESERVED_WORDS);
        word_index.insert(PAD_WORD.to_owned(), T::zero());
        word_index.insert(UNK_WORD.to_owned(), T::one());

        Self {
            word_index,
            words: vec![PAD_WORD.to_owned(), UNK_WORD.to_owned()],
        }
    }

    /// Build a vocabulary from non-reserved words in index order.
    ///
    /// Words are assigned consecutive indices starting after the
    /// reserved entries; duplicates are ignored after their first
    /// occurrence.
    ///
    /// ## Arguments
    /// * `words` - the non-reserved words, in assignment order.
    ///
    /// ## Returns
    /// The vocabulary, or [`crate::errors::WordloomError::VocabSizeOverflow`]
    /// if the resulting size exceeds the capacity of `T`.
    pub fn from_ordered_words<I>(words: I) -> WLResult<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut vocab = Self::with_reserved();

        let mut seen: WLHashSet<String> = vocab.word_index.keys().cloned().collect();
        let mut ordered: Vec<String> = Vec::new();
        for word in words {
            let word = word.as_ref();
            if !seen.contains(word) {
                seen.insert(word.to_owned());
                ordered.push(word.to_owned());
            }
        }

        try_vocab_size::<T>(ordered.len() + RESERVED_WORDS)?;

        for word in ordered {
            let index = T::from_usize(vocab.words.len()).unwrap();
            vocab.word_index.insert(word.clone(), index);
            vocab.words.push(word);
        }

        Ok(vocab)
    }

    /// Returns the number of words in the vocabulary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the vocabulary is empty.
    ///
    /// The reserved entries are always present, so this is never true.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The index of the padding word.
    pub fn pad_index(&self) -> T {
        T::zero()
    }

    /// The index of the unknown-word marker.
    pub fn unknown_index(&self) -> T {
        T::one()
    }

    /// Return the associated index for the word, if any.
    pub fn lookup(
        &self,
        word: &str,
    ) -> Option<T> {
        self.word_index.get(word).copied()
    }

    /// Return the associated index for the word, falling back to the
    /// unknown index.
    pub fn index_or_unknown(
        &self,
        word: &str,
    ) -> T {
        self.lookup(word).unwrap_or_else(|| self.unknown_index())
    }

    /// Check if the word is present in the vocabulary.
    pub fn contains(
        &self,
        word: &str,
    ) -> bool {
        self.word_index.contains_key(word)
    }

    /// Get the associated word for an index, if any.
    pub fn word(
        &self,
        index: T,
    ) -> Option<&str> {
        index
            .to_usize()
            .and_then(|i| self.words.get(i))
            .map(String::as_str)
    }

    /// The words, in index order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterate over all `(word, index)` pairs, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> {
        self.words
            .iter()
            .enumerate()
            .map(|(i, word)| (word.as_str(), T::from_usize(i).unwrap()))
    }

    /// Encode a document as a fixed-length index sequence.
    ///
    /// Normalizes the text, maps each word to its index (falling back
    /// to the unknown index), and pads with the padding index or
    /// truncates to `max_len`.
    ///
    /// ## Arguments
    /// * `normalizer` - the normalization rules to apply.
    /// * `text` - the document to encode.
    /// * `max_len` - the fixed output length.
    pub fn encode<S: AsRef<str>>(
        &self,
        normalizer: &TextNormalizer,
        text: S,
        max_len: usize,
    ) -> Vec<T> {
        let mut indices = Vec::with_capacity(max_len);

        normalizer.for_each_word(text, &mut |word| {
            if indices.len() < max_len {
                indices.push(self.index_or_unknown(word));
            }
        });

        indices.resize(max_len, self.pad_index());
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_entries() {
        type T = u32;

        let vocab: WordVocab<T> = WordVocab::default();
        assert_eq!(vocab.len(), 2);
        assert!(!vocab.is_empty());

        assert_eq!(vocab.lookup(PAD_WORD), Some(0));
        assert_eq!(vocab.lookup(UNK_WORD), Some(1));
        assert_eq!(vocab.pad_index(), 0);
        assert_eq!(vocab.unknown_index(), 1);

        assert_eq!(vocab.word(0), Some(PAD_WORD));
        assert_eq!(vocab.word(1), Some(UNK_WORD));
        assert_eq!(vocab.word(2), None);
    }

    #[test]
    fn test_from_ordered_words() {
        type T = u32;

        let vocab: WordVocab<T> =
            WordVocab::from_ordered_words(["the", "cat", "the"]).unwrap();

        assert_eq!(vocab.len(), 4);
        assert_eq!(vocab.lookup("the"), Some(2));
        assert_eq!(vocab.lookup("cat"), Some(3));

        assert_eq!(
            vocab.iter().collect::<Vec<_>>(),
            vec![(PAD_WORD, 0), (UNK_WORD, 1), ("the", 2), ("cat", 3)]
        );
    }

    #[test]
    fn test_index_capacity() {
        type T = u8;

        let words: Vec<String> = (0..300).map(|i| format!("w{i}")).collect();
        assert!(WordVocab::<T>::from_ordered_words(&words).is_err());

        let words: Vec<String> = (0..10).map(|i| format!("w{i}")).collect();
        assert!(WordVocab::<T>::from_ordered_words(&words).is_ok());
    }

    #[test]
    fn test_unknown_fallback() {
        type T = u32;

        let vocab: WordVocab<T> = WordVocab::from_ordered_words(["cat"]).unwrap();
        assert_eq!(vocab.index_or_unknown("cat"), 2);
        assert_eq!(vocab.index_or_unknown("dog"), vocab.unknown_index());
    }

    #[test]
    fn test_encode_pads_and_truncates() {
        type T = u32;

        let vocab: WordVocab<T> = WordVocab::from_ordered_words(["the", "cat"]).unwrap();
        let normalizer = TextNormalizer::default();

        // Padded to max_len.
        assert_eq!(
            vocab.encode(&normalizer, "The cat sat!", 6),
            vec![2, 3, 1, 0, 0, 0]
        );

        // Truncated to max_len.
        assert_eq!(vocab.encode(&normalizer, "the cat sat on the mat", 3), vec![
            2, 3, 1
        ]);

        assert_eq!(vocab.encode(&normalizer, "", 3), vec![0, 0, 0]);
    }
}
