//! Match and feedback types.
//!
//! A [`Match`] is produced by an upstream password matcher and is only read
//! here. [`Feedback`] is the single output value of the engine.

use secrecy::{ExposeSecret, SecretString};

/// Which dictionary a dictionary match was found in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DictionaryName {
    Passwords,
    EnglishWikipedia,
    Surnames,
    MaleNames,
    FemaleNames,
    /// Any dictionary the matcher defines that carries no special messaging.
    Other(String),
}

impl DictionaryName {
    /// Returns the upstream identifier of this dictionary.
    pub fn as_str(&self) -> &str {
        match self {
            DictionaryName::Passwords => "passwords",
            DictionaryName::EnglishWikipedia => "english_wikipedia",
            DictionaryName::Surnames => "surnames",
            DictionaryName::MaleNames => "male_names",
            DictionaryName::FemaleNames => "female_names",
            DictionaryName::Other(name) => name,
        }
    }
}

impl From<&str> for DictionaryName {
    fn from(name: &str) -> Self {
        match name {
            "passwords" => DictionaryName::Passwords,
            "english_wikipedia" => DictionaryName::EnglishWikipedia,
            "surnames" => DictionaryName::Surnames,
            "male_names" => DictionaryName::MaleNames,
            "female_names" => DictionaryName::FemaleNames,
            other => DictionaryName::Other(other.to_string()),
        }
    }
}

/// Attributes of a dictionary match.
#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryMatch {
    pub dictionary_name: DictionaryName,
    /// Frequency rank, 1 = most common.
    pub rank: usize,
    /// Estimated guess count.
    pub guesses: f64,
    pub reversed: bool,
    pub l33t: bool,
}

impl DictionaryMatch {
    /// Creates a plain (not reversed, no substitutions) dictionary match.
    pub fn new(dictionary_name: impl Into<DictionaryName>, rank: usize, guesses: f64) -> Self {
        Self {
            dictionary_name: dictionary_name.into(),
            rank,
            guesses,
            reversed: false,
            l33t: false,
        }
    }

    pub fn reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    pub fn l33t(mut self, l33t: bool) -> Self {
        self.l33t = l33t;
        self
    }
}

/// Pattern kind of a match, with the attributes each kind carries.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    Dictionary(DictionaryMatch),
    /// Keyboard-adjacency walk; `turns` counts direction changes.
    Spatial { turns: u32 },
    /// A base unit repeated `repeat_count` times.
    Repeat { repeat_count: u32 },
    Sequence,
    /// Named regex hit, e.g. `recent_year`.
    Regex { regex_name: String },
    Date,
    /// A kind this crate has no messaging for, keyed by its upstream name.
    Other(String),
}

impl Pattern {
    /// Returns the upstream identifier of the pattern kind.
    pub fn kind(&self) -> &str {
        match self {
            Pattern::Dictionary(_) => "dictionary",
            Pattern::Spatial { .. } => "spatial",
            Pattern::Repeat { .. } => "repeat",
            Pattern::Sequence => "sequence",
            Pattern::Regex { .. } => "regex",
            Pattern::Date => "date",
            Pattern::Other(kind) => kind,
        }
    }
}

/// A labeled substring of a password.
///
/// The token is a fragment of the password, so it is kept behind
/// [`SecretString`] and redacted from `Debug` output.
#[derive(Debug)]
pub struct Match {
    pub pattern: Pattern,
    token: SecretString,
}

impl Match {
    pub fn new(token: impl Into<String>, pattern: Pattern) -> Self {
        let token: String = token.into();
        Self {
            pattern,
            token: SecretString::new(token.into_boxed_str()),
        }
    }

    pub fn dictionary(token: impl Into<String>, dictionary: DictionaryMatch) -> Self {
        Self::new(token, Pattern::Dictionary(dictionary))
    }

    pub fn spatial(token: impl Into<String>, turns: u32) -> Self {
        Self::new(token, Pattern::Spatial { turns })
    }

    pub fn repeat(token: impl Into<String>, repeat_count: u32) -> Self {
        Self::new(token, Pattern::Repeat { repeat_count })
    }

    pub fn sequence(token: impl Into<String>) -> Self {
        Self::new(token, Pattern::Sequence)
    }

    pub fn regex(token: impl Into<String>, regex_name: impl Into<String>) -> Self {
        Self::new(
            token,
            Pattern::Regex {
                regex_name: regex_name.into(),
            },
        )
    }

    pub fn date(token: impl Into<String>) -> Self {
        Self::new(token, Pattern::Date)
    }

    /// The covered substring of the password.
    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }

    /// Length of the token in UTF-8 bytes.
    pub fn token_len(&self) -> usize {
        self.token().len()
    }

    pub fn kind(&self) -> &str {
        self.pattern.kind()
    }
}

/// Warning and suggestions for a password.
///
/// The default value (empty warning, no suggestions) means "no feedback".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    /// Empty when there is nothing to warn about.
    pub warning: String,
    pub suggestions: Vec<String>,
}

impl Feedback {
    pub(crate) fn new(warning: &str, suggestions: &[&str]) -> Self {
        Self {
            warning: warning.to_string(),
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Returns `true` if there is neither a warning nor any suggestion.
    pub fn is_empty(&self) -> bool {
        self.warning.is_empty() && self.suggestions.is_empty()
    }
}
