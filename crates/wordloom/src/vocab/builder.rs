//! # Vocabulary Builder

use crate::{
    errors::WLResult,
    normalize::TextNormalizer,
    types::{CountType, IndexType, WLHashMap, hash_map_with_capacity},
    vocab::WordVocab,
};

/// The default minimum occurrence count for vocabulary admission.
pub const DEFAULT_MIN_COUNT: usize = 2;

/// Options for [`WordVocabBuilder`].
#[derive(Debug, Clone)]
pub struct WordVocabBuilderOptions {
    /// Minimum occurrence count for a word to enter the vocabulary.
    ///
    /// Values of 0 and 1 both admit every observed word.
    pub min_count: usize,
}

impl Default for WordVocabBuilderOptions {
    fn default() -> Self {
        Self {
            min_count: DEFAULT_MIN_COUNT,
        }
    }
}

impl WordVocabBuilderOptions {
    /// Sets the minimum occurrence count.
    ///
    /// ## Arguments
    /// * `min_count` - the new admission threshold.
    ///
    /// ## Returns
    /// The updated `WordVocabBuilderOptions` instance.
    pub fn with_min_count(
        self,
        min_count: usize,
    ) -> Self {
        Self { min_count }
    }

    /// Initializes a [`WordVocabBuilder`] from these options.
    ///
    /// ## Returns
    /// A new `WordVocabBuilder` instance.
    pub fn init<C: CountType>(self) -> WordVocabBuilder<C> {
        WordVocabBuilder::new(self)
    }
}

/// Streaming word counter and vocabulary builder.
///
/// Words are counted across all observed documents; the order in which
/// distinct words are first encountered is recorded, and determines the
/// index assignment order of [`Self::build`].
///
/// # Parameters
/// * `C` - the type used to store word counts.
pub struct WordVocabBuilder<C = u64>
where
    C: CountType,
{
    /// Builder options.
    pub options: WordVocabBuilderOptions,

    /// The text normalizer.
    normalizer: TextNormalizer,

    /// The word counts.
    word_counts: WLHashMap<String, C>,

    /// Distinct words, in first-encounter order.
    word_order: Vec<String>,
}

impl<C: CountType> WordVocabBuilder<C> {
    /// Initializes a [`WordVocabBuilder`].
    ///
    /// ## Arguments
    /// * `options` - the builder options.
    ///
    /// ## Returns
    /// A new `WordVocabBuilder` instance.
    pub fn new(options: WordVocabBuilderOptions) -> Self {
        Self {
            options,
            normalizer: TextNormalizer::default(),
            word_counts: hash_map_with_capacity(100_000),
            word_order: Vec::new(),
        }
    }

    /// The number of distinct words observed so far.
    pub fn distinct_words(&self) -> usize {
        self.word_order.len()
    }

    /// The observed count for a word.
    pub fn word_count(
        &self,
        word: &str,
    ) -> C {
        self.word_counts.get(word).copied().unwrap_or_default()
    }

    /// Update word counts inplace from a document.
    ///
    /// ## Arguments
    /// * `text` - the raw document text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        let word_counts = &mut self.word_counts;
        let word_order = &mut self.word_order;

        self.normalizer.for_each_word(text, &mut |word| {
            match word_counts.get_mut(word) {
                Some(count) => *count += C::one(),
                None => {
                    word_counts.insert(word.to_owned(), C::one());
                    word_order.push(word.to_owned());
                }
            }
        });
    }

    /// Update word counts inplace from a sample iterator.
    ///
    /// ## Arguments
    /// * `samples` - an iterator over string-like documents.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample);
        }
    }

    /// Builds a [`WordVocab<T>`].
    ///
    /// Words with a count below `min_count` are excluded; the rest are
    /// assigned consecutive indices after the reserved entries, in
    /// first-encounter order.
    ///
    /// ## Returns
    /// A `Result` containing the `WordVocab<T>` or an error.
    pub fn build<T: IndexType>(&self) -> WLResult<WordVocab<T>> {
        let min_count = C::from_usize(self.options.min_count).unwrap_or_else(C::max_value);

        let admitted = self
            .word_order
            .iter()
            .filter(|word| self.word_counts[word.as_str()] >= min_count);

        let vocab = WordVocab::from_ordered_words(admitted)?;

        log::info!(
            "built vocabulary: {} of {} distinct words (min_count={})",
            vocab.len(),
            self.distinct_words(),
            self.options.min_count,
        );

        Ok(vocab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{PAD_WORD, UNK_WORD};

    #[test]
    fn test_builder_options() {
        let options = WordVocabBuilderOptions::default();
        assert_eq!(options.min_count, DEFAULT_MIN_COUNT);

        let options = options.with_min_count(3);
        assert_eq!(options.min_count, 3);
    }

    #[test]
    fn test_build_vocab() {
        type T = u32;
        type C = u64;

        let mut builder = WordVocabBuilderOptions::default().init::<C>();
        builder.update_from_samples(["the cat sat", "the cat ran"]);

        assert_eq!(builder.distinct_words(), 4);
        assert_eq!(builder.word_count("the"), 2);
        assert_eq!(builder.word_count("sat"), 1);
        assert_eq!(builder.word_count("missing"), 0);

        let vocab = builder.build::<T>().unwrap();

        assert_eq!(
            vocab.iter().collect::<Vec<_>>(),
            vec![(PAD_WORD, 0), (UNK_WORD, 1), ("the", 2), ("cat", 3)]
        );
        assert_eq!(vocab.lookup("sat"), None);
        assert_eq!(vocab.index_or_unknown("ran"), vocab.unknown_index());
    }

    #[test]
    fn test_empty_corpus() {
        type T = u32;
        type C = u32;

        let builder = WordVocabBuilderOptions::default().init::<C>();
        let vocab = builder.build::<T>().unwrap();

        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.lookup(PAD_WORD), Some(0));
        assert_eq!(vocab.lookup(UNK_WORD), Some(1));
    }

    #[test]
    fn test_low_thresholds_admit_everything() {
        type T = u32;
        type C = u32;

        for min_count in [0, 1] {
            let mut builder = WordVocabBuilderOptions::default()
                .with_min_count(min_count)
                .init::<C>();
            builder.update_from_text("a b c a");

            let vocab = builder.build::<T>().unwrap();
            assert_eq!(vocab.len(), 5);
        }
    }

    #[test]
    fn test_threshold_monotonicity() {
        type T = u32;
        type C = u32;

        let samples = ["the cat sat on the mat", "the cat ran", "a dog ran fast"];

        let mut sizes = Vec::new();
        for min_count in 0..5 {
            let mut builder = WordVocabBuilderOptions::default()
                .with_min_count(min_count)
                .init::<C>();
            builder.update_from_samples(samples);
            sizes.push(builder.build::<T>().unwrap().len());
        }

        for pair in sizes.windows(2) {
            assert!(pair[0] >= pair[1], "sizes must be non-increasing: {sizes:?}");
        }
    }

    #[test]
    fn test_normalization_folds_case_and_punctuation() {
        type T = u32;
        type C = u32;

        let mut builder = WordVocabBuilderOptions::default().init::<C>();
        builder.update_from_samples(["The cat!", "THE c-a-t?"]);

        assert_eq!(builder.word_count("the"), 2);
        assert_eq!(builder.word_count("cat"), 2);

        let vocab = builder.build::<T>().unwrap();
        assert_eq!(vocab.len(), 4);
    }
}
