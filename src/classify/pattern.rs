//! Pattern classifier - maps a match kind to its base feedback.

use super::classify_dictionary;
use crate::types::{Feedback, Match, Pattern};

const RECENT_YEAR: &str = "recent_year";

/// Produces the base feedback for a single match.
///
/// Kinds without messaging (unknown kinds, regex hits other than
/// `recent_year`) yield an empty [`Feedback`].
pub fn classify(m: &Match, is_sole_match: bool) -> Feedback {
    match &m.pattern {
        Pattern::Dictionary(_) => classify_dictionary(m, is_sole_match),
        Pattern::Spatial { turns } => {
            let warning = if *turns == 1 {
                "Straight rows of keys are easy to guess."
            } else {
                "Short keyboard patterns are easy to guess."
            };
            Feedback::new(warning, &["Use a longer keyboard pattern with more turns."])
        }
        Pattern::Repeat { repeat_count } => {
            let warning = if *repeat_count == 1 {
                "Repeats like \"aaa\" are easy to guess."
            } else {
                "Repeats like \"abcabcabc\" are only slightly harder to guess than \"abc\"."
            };
            Feedback::new(warning, &["Avoid repeated words and characters."])
        }
        Pattern::Sequence => Feedback::new(
            "Sequences like \"abc\" or \"6543\" are easy to guess.",
            &["Avoid sequences."],
        ),
        Pattern::Regex { regex_name } if regex_name == RECENT_YEAR => Feedback::new(
            "Recent years are easy to guess.",
            &[
                "Avoid recent years.",
                "Avoid years that are associated with you.",
            ],
        ),
        Pattern::Date => Feedback::new(
            "Dates are often easy to guess.",
            &["Avoid dates and years that are associated with you."],
        ),
        Pattern::Regex { .. } | Pattern::Other(_) => Feedback::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DictionaryMatch;

    #[test]
    fn test_classify_spatial_straight_row() {
        let feedback = classify(&Match::spatial("qwerty", 1), true);
        assert_eq!(feedback.warning, "Straight rows of keys are easy to guess.");
        assert_eq!(
            feedback.suggestions,
            vec!["Use a longer keyboard pattern with more turns."]
        );
    }

    #[test]
    fn test_classify_spatial_with_turns() {
        let feedback = classify(&Match::spatial("qwedsa", 3), false);
        assert_eq!(feedback.warning, "Short keyboard patterns are easy to guess.");
        assert_eq!(
            feedback.suggestions,
            vec!["Use a longer keyboard pattern with more turns."]
        );
    }

    #[test]
    fn test_classify_repeat_single_char() {
        let feedback = classify(&Match::repeat("aaa", 1), true);
        assert_eq!(feedback.warning, "Repeats like \"aaa\" are easy to guess.");
        assert_eq!(feedback.suggestions, vec!["Avoid repeated words and characters."]);
    }

    #[test]
    fn test_classify_repeat_multi_unit() {
        let feedback = classify(&Match::repeat("abcabcabc", 3), true);
        assert_eq!(
            feedback.warning,
            "Repeats like \"abcabcabc\" are only slightly harder to guess than \"abc\"."
        );
    }

    #[test]
    fn test_classify_sequence() {
        let feedback = classify(&Match::sequence("6543"), true);
        assert_eq!(
            feedback.warning,
            "Sequences like \"abc\" or \"6543\" are easy to guess."
        );
        assert_eq!(feedback.suggestions, vec!["Avoid sequences."]);
    }

    #[test]
    fn test_classify_recent_year() {
        let feedback = classify(&Match::regex("2019", "recent_year"), true);
        assert_eq!(feedback.warning, "Recent years are easy to guess.");
        assert_eq!(
            feedback.suggestions,
            vec!["Avoid recent years.", "Avoid years that are associated with you."]
        );
    }

    #[test]
    fn test_classify_other_regex_is_empty() {
        let feedback = classify(&Match::regex("1234", "digits"), true);
        assert!(feedback.is_empty());
    }

    #[test]
    fn test_classify_date() {
        let feedback = classify(&Match::date("13.05.1987"), false);
        assert_eq!(feedback.warning, "Dates are often easy to guess.");
        assert_eq!(
            feedback.suggestions,
            vec!["Avoid dates and years that are associated with you."]
        );
    }

    #[test]
    fn test_classify_unknown_kind_is_empty() {
        let m = Match::new("x7#k", Pattern::Other("bruteforce".to_string()));
        assert_eq!(classify(&m, true), Feedback::default());
    }

    #[test]
    fn test_classify_delegates_dictionary() {
        let m = Match::dictionary("password", DictionaryMatch::new("passwords", 2, 2.0));
        let feedback = classify(&m, true);
        assert_eq!(feedback.warning, "This is a top-10 common password.");
    }
}
