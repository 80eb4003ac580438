//! Feedback derivation - picks the match that drives the messaging.

#[cfg(feature = "async")]
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::classify::classify;
use crate::types::{Feedback, Match};

/// Scores above this get no feedback.
const MAX_SCORE_WITH_FEEDBACK: u8 = 2;

const EXTRA_SUGGESTION: &str = "Add another word or two. Uncommon words are better.";

#[cfg(feature = "async")]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FeedbackError {
    #[error("Feedback derivation cancelled")]
    Cancelled,
    #[error("Feedback receiver dropped before delivery")]
    ChannelClosed,
}

/// Derives a warning and suggestions from a score and a match sequence.
///
/// # Arguments
/// * `score` - Strength score on the 0..=4 scale
/// * `sequence` - Matches covering the password, in order
///
/// # Returns
/// - Two generic suggestions if `sequence` is empty, whatever the score
/// - An empty `Feedback` if `score` is above 2
/// - Otherwise the feedback of the longest match, followed by one generic
///   suggestion
pub fn derive_feedback(score: u8, sequence: &[Match]) -> Feedback {
    let Some((first, rest)) = sequence.split_first() else {
        return Feedback::new(
            "",
            &[
                "Use a few words, avoid common phrases.",
                "No need for symbols, digits, or uppercase letters.",
            ],
        );
    };

    if score > MAX_SCORE_WITH_FEEDBACK {
        return Feedback::default();
    }

    // Ties keep the earlier match
    let mut longest = first;
    let mut longest_len = first.token_len();
    for m in rest {
        let len = m.token_len();
        if len > longest_len {
            longest = m;
            longest_len = len;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "deriving feedback from {} match (score {}, {} matches)",
        longest.kind(),
        score,
        sequence.len()
    );

    let mut feedback = classify(longest, sequence.len() == 1);
    feedback.suggestions.push(EXTRA_SUGGESTION.to_string());
    feedback
}

/// Like [`derive_feedback`], but gives up if `token` is already cancelled.
#[cfg(feature = "async")]
pub fn derive_feedback_with_cancel(
    score: u8,
    sequence: &[Match],
    token: Option<CancellationToken>,
) -> Result<Feedback, FeedbackError> {
    if let Some(ref t) = token {
        if t.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::info!("feedback derivation cancelled");
            return Err(FeedbackError::Cancelled);
        }
    }
    Ok(derive_feedback(score, sequence))
}

/// Async version that sends the feedback via channel.
///
/// Nothing is sent when `token` is cancelled.
#[cfg(feature = "async")]
pub async fn derive_feedback_tx(
    score: u8,
    sequence: &[Match],
    token: CancellationToken,
    tx: mpsc::Sender<Feedback>,
) -> Result<(), FeedbackError> {
    let feedback = derive_feedback_with_cancel(score, sequence, Some(token))?;

    if let Err(_e) = tx.send(feedback).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password feedback: {}", _e);
        return Err(FeedbackError::ChannelClosed);
    }
    Ok(())
}
