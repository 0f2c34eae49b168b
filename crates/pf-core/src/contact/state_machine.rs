//! Contact submission state machine.
//!
//! Defines a pure transition function for the contact form. Side effects are
//! returned as [`ContactAction`]s and executed by the application layer.

use super::fields::{ContactField, ContactFields};
use super::state::{
    ContactFormState, Feedback, FeedbackLevel, SubmissionStatus, FAILURE_MESSAGE, SUCCESS_MESSAGE,
};

/// Events that drive the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactEvent {
    /// Visitor typed into a field.
    EditField { field: ContactField, value: String },
    /// Visitor pressed the submit control.
    Submit,
    /// The email provider accepted the message.
    DeliverySucceeded,
    /// The email provider rejected the message or could not be reached.
    DeliveryFailed,
    /// Visitor closed the banner.
    DismissFeedback,
    /// Auto-hide timer fired for the banner of the given generation.
    FeedbackTimedOut { generation: u64 },
}

impl ContactEvent {
    /// Short name for logs. Never includes field values.
    pub fn name(&self) -> &'static str {
        match self {
            ContactEvent::EditField { .. } => "edit_field",
            ContactEvent::Submit => "submit",
            ContactEvent::DeliverySucceeded => "delivery_succeeded",
            ContactEvent::DeliveryFailed => "delivery_failed",
            ContactEvent::DismissFeedback => "dismiss_feedback",
            ContactEvent::FeedbackTimedOut { .. } => "feedback_timed_out",
        }
    }
}

/// Side effects produced by transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactAction {
    /// Send exactly one message carrying these values.
    SendEmail { fields: ContactFields },
    /// Arm the auto-hide timer for the banner of the given generation.
    ScheduleFeedbackHide { generation: u64 },
}

/// Pure contact form state machine.
pub struct ContactStateMachine;

impl ContactStateMachine {
    pub fn transition(
        state: ContactFormState,
        event: ContactEvent,
    ) -> (ContactFormState, Vec<ContactAction>) {
        match (state.submission, event) {
            (_, ContactEvent::EditField { field, value }) => {
                let mut next = state;
                next.fields.set(field, value);
                (next, Vec::new())
            }
            (SubmissionStatus::Idle, ContactEvent::Submit) => {
                if !state.fields.is_complete() {
                    return (state, Vec::new());
                }
                let fields = state.fields.clone();
                (
                    ContactFormState {
                        submission: SubmissionStatus::Submitting,
                        ..state
                    },
                    vec![ContactAction::SendEmail { fields }],
                )
            }
            (SubmissionStatus::Submitting, ContactEvent::DeliverySucceeded) => {
                let generation = state.feedback.generation + 1;
                (
                    ContactFormState {
                        fields: ContactFields::default(),
                        submission: SubmissionStatus::Idle,
                        feedback: Feedback {
                            visible: true,
                            message: SUCCESS_MESSAGE.to_string(),
                            level: FeedbackLevel::Success,
                            generation,
                        },
                    },
                    vec![ContactAction::ScheduleFeedbackHide { generation }],
                )
            }
            (SubmissionStatus::Submitting, ContactEvent::DeliveryFailed) => {
                let generation = state.feedback.generation + 1;
                (
                    ContactFormState {
                        fields: state.fields,
                        submission: SubmissionStatus::Idle,
                        feedback: Feedback {
                            visible: true,
                            message: FAILURE_MESSAGE.to_string(),
                            level: FeedbackLevel::Error,
                            generation,
                        },
                    },
                    vec![ContactAction::ScheduleFeedbackHide { generation }],
                )
            }
            (_, ContactEvent::DismissFeedback) => (hide_feedback(state), Vec::new()),
            (_, ContactEvent::FeedbackTimedOut { generation })
                if generation == state.feedback.generation =>
            {
                (hide_feedback(state), Vec::new())
            }
            (_, _event) => (state, Vec::new()),
        }
    }
}

fn hide_feedback(mut state: ContactFormState) -> ContactFormState {
    state.feedback.visible = false;
    state
}
