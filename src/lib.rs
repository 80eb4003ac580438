//! Password feedback library
//!
//! Turns the output of a password-strength analysis (a score on the 0..=4
//! scale and the sequence of pattern matches covering the password) into a
//! warning and an ordered list of suggestions for the user.
//!
//! # Features
//!
//! - `async` (default): Enables channel delivery with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_feedback::{derive_feedback, DictionaryMatch, Match};
//!
//! let sequence = vec![Match::dictionary(
//!     "password",
//!     DictionaryMatch::new("passwords", 2, 2.0),
//! )];
//!
//! let feedback = derive_feedback(0, &sequence);
//! assert_eq!(feedback.warning, "This is a top-10 common password.");
//! assert_eq!(
//!     feedback.suggestions,
//!     vec!["Add another word or two. Uncommon words are better."]
//! );
//! ```

// Internal modules
mod classify;
mod feedback;
mod types;

// Public API
pub use classify::{classify, classify_dictionary};
pub use feedback::derive_feedback;
pub use types::{DictionaryMatch, DictionaryName, Feedback, Match, Pattern};

#[cfg(feature = "async")]
pub use feedback::{derive_feedback_tx, derive_feedback_with_cancel, FeedbackError};
