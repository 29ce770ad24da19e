//! The submission session state machine.
//!
//! One tagged enum replaces the scattered loading/error/result flags
//! the page would otherwise juggle, so inconsistent combinations (a
//! spinner shown next to a finished result, an error with a stale
//! CID) are unrepresentable.
//!
//! ```text
//! Idle -> Validating -> Encoding -> Detecting -> Detected
//!                                                   |
//!                                        (publish)  v
//!                                   Uploading -> Stored(cid)
//! ```
//!
//! Any stage moves to `Error` on its failure. `Stored` and `Error`
//! are terminal for the current submission; a new file selection
//! re-enters `Validating`, and a failed publish may be retried
//! without re-selecting.

use crate::types::{Cid, SubmitError};

/// Progress of the current photo submission.
///
/// Owned by the page controller; mutated only by the stage currently
/// executing and read by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No submission yet.
    Idle,
    /// A selection arrived and is being checked.
    Validating,
    /// The accepted file is being read and encoded.
    Encoding,
    /// The detection request is in flight.
    Detecting,
    /// An annotated result is displayed and may be published.
    Detected,
    /// The publish request is in flight.
    Uploading,
    /// The result was published; carries the network-minted CID.
    Stored(Cid),
    /// A stage failed; carries the classified error.
    Error(SubmitError),
}

impl SessionState {
    /// Short status label for the UI.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Validating => "Validating",
            Self::Encoding => "Encoding",
            Self::Detecting => "Detecting",
            Self::Detected => "Detected",
            Self::Uploading => "Uploading",
            Self::Stored(_) => "Stored",
            Self::Error(_) => "Error",
        }
    }

    /// Whether a pipeline stage is currently running.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(
            self,
            Self::Validating | Self::Encoding | Self::Detecting | Self::Uploading
        )
    }

    /// Whether a detection result is currently displayable.
    ///
    /// A failed publish keeps the result on screen; every other error
    /// means no result was produced (or a newer submission replaced
    /// the pipeline before producing one).
    #[must_use]
    pub const fn has_result(&self) -> bool {
        matches!(
            self,
            Self::Detected
                | Self::Uploading
                | Self::Stored(_)
                | Self::Error(SubmitError::Upload(_))
        )
    }

    /// Whether the publish action is available.
    ///
    /// True in `Detected`, and again after a failed publish so the
    /// visitor can retry without re-selecting a file.
    #[must_use]
    pub const fn can_publish(&self) -> bool {
        matches!(self, Self::Detected | Self::Error(SubmitError::Upload(_)))
    }

    /// The CID to display, once stored.
    #[must_use]
    pub const fn cid(&self) -> Option<&Cid> {
        match self {
            Self::Stored(cid) => Some(cid),
            _ => None,
        }
    }

    /// The user-visible error message, if the session is in `Error`.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Error(err) => Some(err.to_string()),
            _ => None,
        }
    }
}

/// Check the publish precondition.
///
/// # Errors
///
/// Returns [`SubmitError::NoResultToUpload`] when no detection result
/// is available to publish (the state is anything other than
/// `Detected` or a retryable publish failure).
pub fn ensure_publishable(state: &SessionState) -> Result<(), SubmitError> {
    if state.can_publish() {
        Ok(())
    } else {
        Err(SubmitError::NoResultToUpload)
    }
}
