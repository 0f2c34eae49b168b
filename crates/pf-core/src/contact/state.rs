use serde::{Deserialize, Serialize};

use super::fields::ContactFields;

pub const SUCCESS_MESSAGE: &str = "Messaggio inviato con successo!";
pub const FAILURE_MESSAGE: &str =
    "C'è stato un errore nell'invio del messaggio. Riprova più tardi.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FeedbackLevel {
    #[default]
    Success,
    Error,
}

/// Banner shown after a submission completes.
///
/// `generation` increases every time a new banner is raised, so a timeout
/// armed for an older banner can be told apart from the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub visible: bool,
    pub message: String,
    pub level: FeedbackLevel,
    pub generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormState {
    pub fields: ContactFields,
    pub submission: SubmissionStatus,
    pub feedback: Feedback,
}

impl ContactFormState {
    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionStatus::Submitting
    }

    /// Label of the submit control.
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Inviando..."
        } else {
            "Invia Messaggio"
        }
    }
}
