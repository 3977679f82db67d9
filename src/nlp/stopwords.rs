//! Stop-word filtering
//!
//! Wraps the `stop-words` crate word lists behind a small lookup filter.
//! The English list is loaded once per process and reused on every request;
//! other languages are loaded on demand.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

static ENGLISH: Lazy<FxHashSet<String>> =
    Lazy::new(|| get(LANGUAGE::English).into_iter().collect());

/// A stop-word lookup filter.
///
/// Lookups are exact; callers are expected to lowercase tokens first (the
/// word tokenizer already does).
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    words: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// English filter backed by the process-wide cached list. Repeated
    /// calls reuse the already-loaded data.
    pub fn english() -> Self {
        Self {
            words: ENGLISH.clone(),
        }
    }

    /// Filter for a language code (e.g. "en", "de", "fr").
    ///
    /// Returns `None` for codes the word lists do not cover; callers decide
    /// whether that is an error.
    pub fn for_language(code: &str) -> Option<Self> {
        let lang = match code.to_lowercase().as_str() {
            "en" | "english" => return Some(Self::english()),
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => return None,
        };
        Some(Self {
            words: get(lang).into_iter().collect(),
        })
    }

    /// Filter with no stop words (nothing is filtered out).
    pub fn none() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    /// Filter from a custom word list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Whether `word` is a stop word.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of stop words in the filter.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the filter contains no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::english();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("is"));
        assert!(!filter.is_stopword("machine"));
        assert!(!filter.is_stopword("mat"));
    }

    #[test]
    fn test_lookup_is_exact() {
        // Tokens arrive lowercased; the filter does no folding of its own.
        let filter = StopwordFilter::english();
        assert!(!filter.is_stopword("The"));
    }

    #[test]
    fn test_known_language_codes() {
        let german = StopwordFilter::for_language("de").unwrap();
        assert!(german.is_stopword("und"));

        let by_name = StopwordFilter::for_language("German").unwrap();
        assert_eq!(by_name.len(), german.len());
    }

    #[test]
    fn test_unknown_language_is_none() {
        assert!(StopwordFilter::for_language("tlh").is_none());
        assert!(StopwordFilter::for_language("").is_none());
    }

    #[test]
    fn test_cached_english_is_stable() {
        let a = StopwordFilter::english();
        let b = StopwordFilter::english();
        assert_eq!(a.len(), b.len());
        assert!(!a.is_empty());
    }

    #[test]
    fn test_custom_list_and_none() {
        let filter = StopwordFilter::from_list(&["Foo", "bar"]);
        assert!(filter.is_stopword("foo"));
        assert!(filter.is_stopword("bar"));
        assert!(!filter.is_stopword("the"));

        assert!(StopwordFilter::none().is_empty());
    }
}
