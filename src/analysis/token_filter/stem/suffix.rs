//! Suffix-stripping stemmer for Kazakh word forms.
//!
//! The stemmer removes at most one ending from a fixed, ordered list of
//! plural, possessive, personal and case suffixes. The list is scanned in
//! order and the first suffix that fits wins, so the order of
//! [`KAZAKH_SUFFIXES`] is significant: "дәптерлер" loses "лер", while
//! "дәптер" loses "тер".

use super::Stemmer;

/// Ordered suffix list. The first matching entry is stripped.
pub const KAZAKH_SUFFIXES: &[&str] = &[
    "лар", "лер", "дар", "дер", "тар", "тер", "мын", "мін", "сың", "сің", "міз", "мыз", "сыз",
    "сіз", "дық", "дік", "тық", "тік", "лық", "лік", "ды", "ді", "ты", "ті", "ны", "ні",
];

/// Default minimum number of characters a stem must keep.
pub const DEFAULT_MIN_STEM_LEN: usize = 2;

/// Stemmer that strips the first matching suffix from an ordered list.
#[derive(Debug, Clone)]
pub struct SuffixStemmer {
    suffixes: Vec<String>,
    min_stem_len: usize,
}

impl SuffixStemmer {
    /// Create a stemmer over [`KAZAKH_SUFFIXES`].
    pub fn new() -> Self {
        Self::with_suffixes(KAZAKH_SUFFIXES.iter().map(|s| s.to_string()).collect())
    }

    /// Create a stemmer with a custom ordered suffix list.
    pub fn with_suffixes(suffixes: Vec<String>) -> Self {
        SuffixStemmer {
            suffixes,
            min_stem_len: DEFAULT_MIN_STEM_LEN,
        }
    }

    /// Set the minimum stem length (in characters) left after stripping.
    pub fn with_min_stem_len(mut self, min_stem_len: usize) -> Self {
        self.min_stem_len = min_stem_len;
        self
    }

    /// The ordered suffix list.
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// The minimum stem length.
    pub fn min_stem_len(&self) -> usize {
        self.min_stem_len
    }
}

impl Default for SuffixStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for SuffixStemmer {
    fn stem(&self, word: &str) -> String {
        let word_len = word.chars().count();

        for suffix in &self.suffixes {
            if let Some(stem) = word.strip_suffix(suffix.as_str()) {
                if word_len - suffix.chars().count() >= self.min_stem_len {
                    return stem.to_string();
                }
            }
        }

        word.to_string()
    }

    fn name(&self) -> &'static str {
        "suffix"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_suffixes() {
        let stemmer = SuffixStemmer::new();

        assert_eq!(stemmer.stem("балалар"), "бала");
        assert_eq!(stemmer.stem("үйлер"), "үй");
        assert_eq!(stemmer.stem("кітаптар"), "кітап");
        assert_eq!(stemmer.stem("дәптерлер"), "дәптер");
    }

    #[test]
    fn test_ending_inside_root_is_stripped() {
        let stemmer = SuffixStemmer::new();

        // No linguistic check: a root that happens to end in "тер" loses it.
        assert_eq!(stemmer.stem("дәптер"), "дәп");
        assert_eq!(stemmer.stem("балалық"), "бала");
    }

    #[test]
    fn test_first_match_wins_for_custom_order() {
        let stemmer = SuffixStemmer::with_suffixes(vec!["ар".to_string(), "лар".to_string()]);

        assert_eq!(stemmer.stem("балалар"), "балал");
    }

    #[test]
    fn test_single_pass() {
        let stemmer = SuffixStemmer::new();

        // Only one suffix is removed even if the stem ends with another one.
        assert_eq!(stemmer.stem("тауларды"), "таулар");
    }

    #[test]
    fn test_minimum_stem_length() {
        let stemmer = SuffixStemmer::new();

        // Removing "лар" would leave nothing.
        assert_eq!(stemmer.stem("лар"), "лар");
        // Removing "ды" would leave a single character.
        assert_eq!(stemmer.stem("оды"), "оды");
        // Two characters are enough.
        assert_eq!(stemmer.stem("үйді"), "үй");
    }

    #[test]
    fn test_unmatched_word_unchanged() {
        let stemmer = SuffixStemmer::new();

        assert_eq!(stemmer.stem("қалам"), "қалам");
        assert_eq!(stemmer.stem("бала"), "бала");
        assert_eq!(stemmer.stem(""), "");
    }

    #[test]
    fn test_custom_min_stem_len() {
        let stemmer = SuffixStemmer::new().with_min_stem_len(3);

        assert_eq!(stemmer.stem("үйлер"), "үйлер");
        assert_eq!(stemmer.stem("балалар"), "бала");
    }

    #[test]
    fn test_suffix_order_is_preserved() {
        let stemmer = SuffixStemmer::new();
        let listed: Vec<&str> = stemmer.suffixes().iter().map(String::as_str).collect();

        assert_eq!(listed, KAZAKH_SUFFIXES);
        assert_eq!(listed.first(), Some(&"лар"));
        assert_eq!(listed.last(), Some(&"ні"));
    }
}
