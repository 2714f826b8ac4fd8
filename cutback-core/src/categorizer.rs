//! Keyword categorization of free-text descriptions.
//!
//! Matching is literal, case-sensitive substring containment. The first
//! dictionary keyword found wins, so overlapping entries (a store name and
//! a shorter prefix of it) resolve by dictionary order. Descriptions that
//! match nothing become their own category.

use crate::transaction::Dictionary;

/// Categorize a description against the dictionary.
pub fn categorize<'a>(description: &'a str, dictionary: &'a Dictionary) -> &'a str {
    matching_keyword(description, dictionary).unwrap_or(description)
}

/// First keyword contained in `description`, if any.
pub fn matching_keyword<'a>(description: &str, dictionary: &'a Dictionary) -> Option<&'a str> {
    dictionary.iter().find(|keyword| description.contains(keyword))
}

/// True if `label` contains any of `keywords`.
pub(crate) fn contains_any(label: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| label.contains(k.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::new(words.iter().copied())
    }

    #[test]
    fn test_first_match_wins() {
        let d = dict(&["WALMART", "WAL"]);
        assert_eq!(categorize("WALMART #123", &d), "WALMART");

        let reversed = dict(&["WAL", "WALMART"]);
        assert_eq!(categorize("WALMART #123", &reversed), "WAL");
    }

    #[test]
    fn test_unmatched_is_own_category() {
        let d = dict(&["SHELL"]);
        assert_eq!(categorize("CHIPOTLE 0421", &d), "CHIPOTLE 0421");
        assert_eq!(matching_keyword("CHIPOTLE 0421", &d), None);
    }

    #[test]
    fn test_case_sensitive() {
        let d = dict(&["shell"]);
        assert_eq!(categorize("SHELL OIL 5512", &d), "SHELL OIL 5512");
    }

    #[test]
    fn test_empty_dictionary() {
        assert_eq!(categorize("ANYTHING", &Dictionary::default()), "ANYTHING");
    }

    #[test]
    fn test_keyword_in_middle_of_description() {
        let d = dict(&["NETFLIX"]);
        assert_eq!(categorize("RECURRING NETFLIX.COM CA", &d), "NETFLIX");
    }

    #[test]
    fn test_contains_any() {
        let ex = vec!["RESIDENT".to_string(), "BKOFAMERICA ATM".to_string()];
        assert!(contains_any("BKOFAMERICA ATM 0412", &ex));
        assert!(contains_any("RESIDENT", &ex));
        assert!(!contains_any("SAFEWAY", &ex));
        assert!(!contains_any("SAFEWAY", &[]));
    }
}
