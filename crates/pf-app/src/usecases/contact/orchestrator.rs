//! Contact form orchestrator.
//!
//! Drives [`ContactStateMachine`] and executes its side effects: one email
//! delivery per submission and the feedback auto-hide timer.
//!
//! ## Behavior
//! - A second submit while one is in flight is rejected, whatever the UI shows.
//! - After every await the mount guard is checked; completions for an
//!   unmounted form are dropped and logged.
//! - [`ContactOrchestrator::submit`] resolves once the banner it raised has
//!   been hidden or superseded. The single-flight slot is released as soon as
//!   the delivery outcome is applied.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, info_span, trace, warn, Instrument};

use pf_core::contact::{
    ContactAction, ContactEvent, ContactField, ContactFormState, ContactStateMachine,
    SubmissionStatus,
};
use pf_core::ports::{ContactEventPort, DelayPort, EmailSenderPort};

use crate::lifecycle::MountGuard;
use crate::usecases::contact::context::ContactContext;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("name, email and message are all required")]
    IncompleteFields,
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("contact form is no longer mounted")]
    Unmounted,
}

pub struct ContactOrchestrator {
    context: Arc<ContactContext>,
    email_sender: Arc<dyn EmailSenderPort>,
    delay: Arc<dyn DelayPort>,
    event_port: Arc<dyn ContactEventPort>,
    feedback_auto_hide: Duration,
}

impl ContactOrchestrator {
    pub fn new(
        email_sender: Arc<dyn EmailSenderPort>,
        delay: Arc<dyn DelayPort>,
        event_port: Arc<dyn ContactEventPort>,
        feedback_auto_hide: Duration,
    ) -> Self {
        Self {
            context: Arc::new(ContactContext::new(MountGuard::new())),
            email_sender,
            delay,
            event_port,
            feedback_auto_hide,
        }
    }

    pub fn get_state(&self) -> ContactFormState {
        self.context.get_state()
    }

    pub fn is_mounted(&self) -> bool {
        self.context.is_mounted()
    }

    pub fn mount_guard(&self) -> MountGuard {
        self.context.mount().clone()
    }

    pub fn edit_field(
        &self,
        field: ContactField,
        value: String,
    ) -> Result<ContactFormState, ContactError> {
        self.dispatch(ContactEvent::EditField { field, value })
            .map(|(state, _)| state)
    }

    pub fn dismiss_feedback(&self) -> Result<ContactFormState, ContactError> {
        self.dispatch(ContactEvent::DismissFeedback)
            .map(|(state, _)| state)
    }

    /// Submits the current fields.
    ///
    /// # Returns
    /// - `Ok(Succeeded | Failed)` with the delivery outcome
    /// - `Err(IncompleteFields)` when the guard blocked the submission
    /// - `Err(AlreadySubmitting)` when another submission holds the slot
    /// - `Err(Unmounted)` when the form went away before completion
    pub async fn submit(&self) -> Result<SubmissionStatus, ContactError> {
        let span = info_span!("usecase.contact_form.submit");

        async {
            let (status, follow_ups) = {
                let _in_flight = self.context.try_begin_submission().ok_or_else(|| {
                    warn!("submit ignored: a submission is already in flight");
                    ContactError::AlreadySubmitting
                })?;

                let (_, actions) = self.dispatch(ContactEvent::Submit)?;
                let fields = actions
                    .into_iter()
                    .find_map(|action| match action {
                        ContactAction::SendEmail { fields } => Some(fields),
                        _ => None,
                    })
                    .ok_or_else(|| {
                        debug!("submit blocked: required fields are empty");
                        ContactError::IncompleteFields
                    })?;

                let (event, status) = match self.email_sender.send(&fields).await {
                    Ok(receipt) => {
                        info!(receipt = %receipt.text, "contact message delivered");
                        (ContactEvent::DeliverySucceeded, SubmissionStatus::Succeeded)
                    }
                    Err(err) => {
                        warn!(error = %err, "contact message delivery failed");
                        (ContactEvent::DeliveryFailed, SubmissionStatus::Failed)
                    }
                };

                if !self.context.is_mounted() {
                    warn!(
                        outcome = ?status,
                        "dropping delivery outcome for unmounted contact form"
                    );
                    return Err(ContactError::Unmounted);
                }

                let (_, follow_ups) = self.dispatch(event)?;
                (status, follow_ups)
            };

            self.execute_follow_ups(follow_ups).await;
            Ok(status)
        }
        .instrument(span)
        .await
    }

    /// Marks the form as gone. Pending completions are dropped.
    pub fn unmount(&self) {
        self.context.mount().unmount();
    }

    fn dispatch(
        &self,
        event: ContactEvent,
    ) -> Result<(ContactFormState, Vec<ContactAction>), ContactError> {
        if !self.context.is_mounted() {
            return Err(ContactError::Unmounted);
        }

        let event_name = event.name();
        let (previous, next, actions) = self
            .context
            .apply(|current| ContactStateMachine::transition(current, event));

        if previous.submission != next.submission {
            info!(
                from = ?previous.submission,
                to = ?next.submission,
                event = event_name,
                "contact state transition"
            );
        } else {
            trace!(event = event_name, "contact state update");
        }

        if previous != next {
            self.event_port.emit_contact_state_changed(&next);
        }

        Ok((next, actions))
    }

    async fn execute_follow_ups(&self, actions: Vec<ContactAction>) {
        for action in actions {
            match action {
                ContactAction::ScheduleFeedbackHide { generation } => {
                    self.delay.sleep(self.feedback_auto_hide).await;
                    if !self.context.is_mounted() {
                        debug!(generation, "feedback timer fired after unmount");
                        continue;
                    }
                    if let Err(err) =
                        self.dispatch(ContactEvent::FeedbackTimedOut { generation })
                    {
                        debug!(error = %err, generation, "feedback auto-hide skipped");
                    }
                }
                ContactAction::SendEmail { .. } => {
                    warn!("send request outside of a submission ignored");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use pf_core::contact::ContactFields;
    use pf_core::ports::{EmailReceipt, EmailSendError};

    use super::*;

    struct AcceptingSender;

    #[async_trait(?Send)]
    impl EmailSenderPort for AcceptingSender {
        async fn send(&self, _fields: &ContactFields) -> Result<EmailReceipt, EmailSendError> {
            Ok(EmailReceipt { text: "OK".into() })
        }
    }

    struct NoDelay;

    #[async_trait(?Send)]
    impl DelayPort for NoDelay {
        async fn sleep(&self, _duration: Duration) {}
    }

    #[derive(Default)]
    struct RecordingEvents(Mutex<Vec<ContactFormState>>);

    impl ContactEventPort for RecordingEvents {
        fn emit_contact_state_changed(&self, state: &ContactFormState) {
            self.0.lock().unwrap().push(state.clone());
        }
    }

    fn orchestrator(events: Arc<RecordingEvents>) -> ContactOrchestrator {
        ContactOrchestrator::new(
            Arc::new(AcceptingSender),
            Arc::new(NoDelay),
            events,
            Duration::from_secs(6),
        )
    }

    #[test]
    fn edits_are_emitted_only_when_state_changes() {
        let events = Arc::new(RecordingEvents::default());
        let orchestrator = orchestrator(events.clone());

        orchestrator
            .edit_field(ContactField::Name, "Ada".into())
            .unwrap();
        orchestrator
            .edit_field(ContactField::Name, "Ada".into())
            .unwrap();

        assert_eq!(events.0.lock().unwrap().len(), 1);
        assert_eq!(orchestrator.get_state().fields.name, "Ada");
    }

    #[test]
    fn unmounted_form_rejects_edits() {
        let orchestrator = orchestrator(Arc::new(RecordingEvents::default()));
        orchestrator.unmount();
        assert_eq!(
            orchestrator.edit_field(ContactField::Email, "x".into()),
            Err(ContactError::Unmounted)
        );
    }

    #[test]
    fn dismiss_after_unmount_reports_the_error_without_emitting() {
        let events = Arc::new(RecordingEvents::default());
        let orchestrator = orchestrator(events.clone());
        orchestrator.unmount();

        assert_eq!(orchestrator.dismiss_feedback(), Err(ContactError::Unmounted));
        assert!(events.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn incomplete_submit_is_rejected_without_state_change() {
        let events = Arc::new(RecordingEvents::default());
        let orchestrator = orchestrator(events.clone());
        orchestrator
            .edit_field(ContactField::Name, "Ada".into())
            .unwrap();

        assert_eq!(
            orchestrator.submit().await,
            Err(ContactError::IncompleteFields)
        );
        assert_eq!(
            orchestrator.get_state().submission,
            SubmissionStatus::Idle
        );
        assert_eq!(events.0.lock().unwrap().len(), 1);
    }
}
