//! # Text Normalizer

use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern matching every character outside the Latin alphabet and whitespace.
const STRIP_EXPR: &str = r"[^a-zA-Z\s]";

static STRIP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(STRIP_EXPR).expect("strip pattern compilation failed"));

/// Normalizes raw text into vocabulary words.
///
/// Normalization lowercases the input, strips every character outside
/// the Latin alphabet and whitespace, and splits the remainder on
/// whitespace; so ``"Don't stop!"`` normalizes to ``["dont", "stop"]``.
#[derive(Clone, Debug)]
pub struct TextNormalizer {
    /// The compiled strip pattern.
    strip_re: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    /// Create a new text normalizer.
    pub fn new() -> Self {
        Self {
            strip_re: STRIP_REGEX.clone(),
        }
    }

    /// Apply each normalized word of `text` to `f`.
    ///
    /// ## Arguments
    /// * `text` - the document to normalize.
    /// * `f` - the function to apply to each word.
    pub fn for_each_word<S, F>(
        &self,
        text: S,
        f: &mut F,
    ) where
        S: AsRef<str>,
        F: FnMut(&str),
    {
        let lowered = text.as_ref().to_lowercase();
        let stripped = self.strip_re.replace_all(&lowered, "");
        for word in stripped.split_whitespace() {
            f(word);
        }
    }

    /// Normalize a document into its word sequence.
    ///
    /// ## Arguments
    /// * `text` - the document to normalize.
    ///
    /// ## Returns
    /// The normalized words, in document order.
    pub fn words<S: AsRef<str>>(
        &self,
        text: S,
    ) -> Vec<String> {
        let mut words = Vec::new();
        self.for_each_word(text, &mut |word| words.push(word.to_owned()));
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_words() {
        let normalizer = TextNormalizer::new();

        assert_eq!(
            normalizer.words("The quick brown FOX!"),
            vec!["the", "quick", "brown", "fox"]
        );

        // Stripped characters join their neighbors; they do not split words.
        assert_eq!(normalizer.words("Don't stop."), vec!["dont", "stop"]);

        assert_eq!(
            normalizer.words("  tabs\tand\nnewlines  "),
            vec!["tabs", "and", "newlines"]
        );

        assert_eq!(normalizer.words("123 ... $$$"), Vec::<String>::new());
        assert_eq!(normalizer.words(""), Vec::<String>::new());
    }

    #[test]
    fn test_for_each_word() {
        let normalizer = TextNormalizer::new();

        let mut count = 0;
        normalizer.for_each_word("a b c", &mut |_| count += 1);
        assert_eq!(count, 3);
    }
}
