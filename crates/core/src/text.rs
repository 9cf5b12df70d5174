//! Text folding shared by query synthesis and candidate matching.
//!
//! Both sides must split titles the same way, otherwise a title that builds
//! a query can fail to match the filenames that query returns.

use deunicode::deunicode;

/// Low-information words, dropped from long titles.
pub const STOP_WORDS: &[&str] = &[
    "the", "of", "and", "a", "an", "to", "in", "for", "on", "at", "by", "with", "from", "as",
    "is", "it",
];

/// Whether `word` is a stop-word (case-insensitive).
pub fn is_stop_word(word: &str) -> bool {
    let lower = word.to_lowercase();
    STOP_WORDS.contains(&lower.as_str())
}

/// Transliterate to ASCII and turn every non-alphanumeric character into a
/// word break. `Carpenter's` becomes `Carpenter s`, never `Carpenters`.
pub fn strip_punctuation(text: &str) -> String {
    deunicode(text)
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect()
}

/// Split text into case-preserved words.
pub fn words(text: &str) -> Vec<String> {
    strip_punctuation(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Split text into lowercase words for comparisons.
pub fn folded_words(text: &str) -> Vec<String> {
    strip_punctuation(text)
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Whether a token is made only of ASCII digits.
pub fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

/// Drop single-letter words such as the `s` left behind by `Schindler's`.
/// Digits are kept, and a title made only of single letters is returned as is.
pub fn significant_words(words: &[String]) -> Vec<String> {
    let kept: Vec<String> = words
        .iter()
        .filter(|w| w.chars().count() > 1 || is_numeric(w))
        .cloned()
        .collect();
    if kept.is_empty() {
        words.to_vec()
    } else {
        kept
    }
}

/// Whether a contiguous run of `words` concatenates to exactly `target`.
///
/// Lets `Schindlers List` spell `schindlerslist` when the title was written
/// `Schindler's List`.
pub fn spells(words: &[String], target: &str) -> bool {
    if target.is_empty() {
        return false;
    }
    (0..words.len()).any(|start| {
        let mut joined = String::new();
        for word in &words[start..] {
            joined.push_str(word);
            if joined.len() >= target.len() || !target.starts_with(joined.as_str()) {
                break;
            }
        }
        joined == target
    })
}

/// Whether a trailing run of `words` concatenates to exactly `target`.
pub fn ends_spelling(words: &[String], target: &str) -> bool {
    !target.is_empty() && (0..words.len()).any(|start| words[start..].concat() == target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apostrophe_splits_words() {
        assert_eq!(words("The Carpenter's Son"), vec!["The", "Carpenter", "s", "Son"]);
    }

    #[test]
    fn test_diacritics_are_folded() {
        assert_eq!(folded_words("Amélie"), vec!["amelie"]);
        assert_eq!(folded_words("Léon: The Professional"), vec!["leon", "the", "professional"]);
    }

    #[test]
    fn test_scene_separators() {
        assert_eq!(
            folded_words("Blade.Runner.2049.2017.1080p"),
            vec!["blade", "runner", "2049", "2017", "1080p"]
        );
    }

    #[test]
    fn test_stop_words() {
        assert!(is_stop_word("The"));
        assert!(is_stop_word("of"));
        assert!(!is_stop_word("Rip"));
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("2049"));
        assert!(!is_numeric("1080p"));
        assert!(!is_numeric(""));
    }

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_significant_words() {
        assert_eq!(
            significant_words(&folded_words("Schindler's List")),
            vec!["schindler", "list"]
        );
        assert_eq!(significant_words(&owned(&["toy", "story", "3"])), vec!["toy", "story", "3"]);
        assert_eq!(significant_words(&owned(&["m"])), vec!["m"]);
    }

    #[test]
    fn test_spells_joins_contiguous_words() {
        let words = owned(&["schindlers", "list", "1993"]);
        assert!(spells(&words, "schindlerslist"));
        assert!(spells(&owned(&["schindler", "s", "list"]), "schindlerslist"));
        assert!(!spells(&owned(&["schindlers", "1993", "list"]), "schindlerslist"));
        assert!(!spells(&owned(&["virus"]), "us"));
        assert!(!spells(&words, ""));
    }

    #[test]
    fn test_ends_spelling() {
        assert!(ends_spelling(&owned(&["the", "oceans", "eleven"]), "oceanseleven"));
        assert!(!ends_spelling(&owned(&["oceans", "eleven", "extended"]), "oceanseleven"));
    }
}
