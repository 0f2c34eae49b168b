//! Contact form domain.
//!
//! Holds the form state and a pure state machine for the submission flow.
//! Delivery itself happens behind [`crate::ports::EmailSenderPort`].

mod fields;
mod state;
pub mod state_machine;

pub use fields::{ContactField, ContactFields};
pub use state::{
    ContactFormState, Feedback, FeedbackLevel, SubmissionStatus, FAILURE_MESSAGE, SUCCESS_MESSAGE,
};
pub use state_machine::{ContactAction, ContactEvent, ContactStateMachine};
