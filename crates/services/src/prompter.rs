//! Confirmation and notification prompts raised by user-initiated operations.

use std::collections::VecDeque;
use std::sync::Mutex;

use status_core::model::MISSING_TITLE_MESSAGE;

pub const MSG_MISSING_TITLE: &str = MISSING_TITLE_MESSAGE;
pub const MSG_SAVED: &str = "Report saved successfully!";
pub const MSG_CONFIRM_DELETE: &str = "Are you sure you want to delete this report?";
pub const MSG_CONFIRM_CLEAR: &str = "Are you sure you want to clear the form?";
pub const MSG_MISSING_REPORT: &str = "That report no longer exists.";

/// Capability for asking the user to confirm an action and for telling
/// them about the outcome.
pub trait Prompter: Send + Sync {
    /// Ask the user to confirm. Returning `false` vetoes the operation.
    fn confirm(&self, message: &str) -> bool;

    /// Show a message to the user.
    fn notify(&self, message: &str);
}

/// Prompter that answers from a script and records everything it was shown.
///
/// Used for headless callers (tests, already-confirmed UI actions).
#[derive(Debug, Default)]
pub struct RecordingPrompter {
    answers: Mutex<VecDeque<bool>>,
    fallback: bool,
    confirmations: Mutex<Vec<String>>,
    notices: Mutex<Vec<String>>,
}

impl RecordingPrompter {
    /// Confirms every prompt.
    #[must_use]
    pub fn approving() -> Self {
        Self {
            fallback: true,
            ..Self::default()
        }
    }

    /// Vetoes every prompt.
    #[must_use]
    pub fn declining() -> Self {
        Self::default()
    }

    /// Answers prompts in order, then falls back to declining.
    #[must_use]
    pub fn scripted(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn confirmations(&self) -> Vec<String> {
        self.confirmations
            .lock()
            .map(|items| items.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn notices(&self) -> Vec<String> {
        self.notices
            .lock()
            .map(|items| items.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn last_notice(&self) -> Option<String> {
        self.notices().pop()
    }
}

impl Prompter for RecordingPrompter {
    fn confirm(&self, message: &str) -> bool {
        if let Ok(mut seen) = self.confirmations.lock() {
            seen.push(message.to_owned());
        }
        self.answers
            .lock()
            .ok()
            .and_then(|mut answers| answers.pop_front())
            .unwrap_or(self.fallback)
    }

    fn notify(&self, message: &str) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(message.to_owned());
        }
    }
}
