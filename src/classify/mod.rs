//! Match classifiers
//!
//! Each classifier turns one match into a base [`Feedback`](crate::Feedback).

mod dictionary;
mod pattern;
mod shape;

pub use dictionary::classify_dictionary;
pub use pattern::classify;
