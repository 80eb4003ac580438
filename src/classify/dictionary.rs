//! Dictionary sub-classifier - common-password tiers, words and names,
//! plus suggestions about capitalization, reversal and substitutions.

use super::shape::{is_all_upper, is_start_upper};
use crate::types::{DictionaryMatch, DictionaryName, Feedback, Match, Pattern};

const TOP_10_RANK: usize = 10;
const TOP_100_RANK: usize = 100;
const SIMILAR_PASSWORD_GUESSES: f64 = 10_000.0;
const MIN_REVERSED_LEN: usize = 4;

/// Builds feedback for a dictionary match.
///
/// Any other kind of match yields an empty [`Feedback`].
pub fn classify_dictionary(m: &Match, is_sole_match: bool) -> Feedback {
    let Pattern::Dictionary(dictionary) = &m.pattern else {
        return Feedback::default();
    };

    let warning = dictionary_warning(dictionary, is_sole_match);

    let mut suggestions = Vec::new();
    let word = m.token();

    if is_start_upper(word) {
        suggestions.push("Capitalization doesn't help very much.".to_string());
    } else if is_all_upper(word) {
        suggestions.push("All-uppercase is almost as easy to guess as all-lowercase.".to_string());
    }

    if dictionary.reversed && m.token_len() >= MIN_REVERSED_LEN {
        suggestions.push("Reversed words aren't much harder to guess.".to_string());
    }
    if dictionary.l33t {
        suggestions.push(
            "Predictable substitutions like '@' instead of 'a' don't help very much.".to_string(),
        );
    }

    Feedback {
        warning: warning.to_string(),
        suggestions,
    }
}

fn dictionary_warning(dictionary: &DictionaryMatch, is_sole_match: bool) -> &'static str {
    match dictionary.dictionary_name {
        DictionaryName::Passwords => {
            if is_sole_match && !dictionary.l33t && !dictionary.reversed {
                if dictionary.rank <= TOP_10_RANK {
                    "This is a top-10 common password."
                } else if dictionary.rank <= TOP_100_RANK {
                    "This is a top-100 common password."
                } else {
                    "This is a very common password."
                }
            } else if dictionary.guesses <= SIMILAR_PASSWORD_GUESSES {
                "This is similar to a commonly used password."
            } else {
                ""
            }
        }
        DictionaryName::EnglishWikipedia => {
            if is_sole_match {
                "A word by itself is easy to guess."
            } else {
                ""
            }
        }
        DictionaryName::Surnames | DictionaryName::MaleNames | DictionaryName::FemaleNames => {
            if is_sole_match {
                "Names and surnames by themselves are easy to guess."
            } else {
                "Common names and surnames are easy to guess."
            }
        }
        DictionaryName::Other(_) => "",
    }
}
