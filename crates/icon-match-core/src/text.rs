//! Passage preprocessing: lowercase, split into words, drop stop words.

use std::collections::HashSet;

use regex::Regex;

/// Stop words removed from every passage.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "and", "a", "an", "in", "on", "at", "for", "with", "without", "to", "of", "by", "as",
    "is", "are", "was", "were", "be", "being", "been",
];

/// Compiled word pattern plus stop-word set.
///
/// # Example
///
/// ```rust
/// use icon_match_core::Preprocessor;
///
/// let pre = Preprocessor::new();
/// assert_eq!(pre.words("The Future of Software!"), vec!["future", "software"]);
/// assert!(pre.words("to be or not to be").contains(&"or".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct Preprocessor {
    word: Regex,
    stop_words: HashSet<String>,
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Preprocessor {
    /// Preprocessor with [`DEFAULT_STOP_WORDS`].
    pub fn new() -> Self {
        Self {
            word: Regex::new(r"\b\w+\b").expect("word regex must compile"),
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Add stop words on top of the defaults. Matching is case-insensitive.
    pub fn with_extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Lowercased non-stop words of `text`, in order of appearance.
    pub fn words(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.word
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|w| !self.is_stop_word(w))
            .map(str::to_string)
            .collect()
    }
}

/// [`Preprocessor::words`] with the default stop words.
pub fn preprocess_text(text: &str) -> Vec<String> {
    Preprocessor::new().words(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let words = preprocess_text(
            "A discussion on the future of technology and innovation in software development.",
        );
        assert_eq!(
            words,
            vec!["discussion", "future", "technology", "innovation", "software", "development"]
        );
    }

    #[test]
    fn test_apostrophes_split_words() {
        let words = preprocess_text("The organization's view");
        assert_eq!(words, vec!["organization", "s", "view"]);
    }

    #[test]
    fn test_only_stop_words_yields_nothing() {
        assert!(preprocess_text("The and of, to be - is was were!").is_empty());
        assert!(preprocess_text("").is_empty());
    }

    #[test]
    fn test_extra_stop_words() {
        let pre = Preprocessor::new().with_extra_stop_words([" Business ", "IT"]);
        assert_eq!(pre.words("Business strategy for IT"), vec!["strategy"]);
    }

    #[test]
    fn test_unicode_words_kept() {
        assert_eq!(preprocess_text("Café Übersicht"), vec!["café", "übersicht"]);
    }
}
