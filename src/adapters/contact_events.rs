use leptos::prelude::*;

use pf_core::contact::ContactFormState;
use pf_core::ports::ContactEventPort;

/// Publishes contact form state into a reactive signal the form view reads.
#[derive(Debug, Clone, Copy)]
pub struct SignalContactEvents {
    state: RwSignal<ContactFormState>,
}

impl SignalContactEvents {
    pub fn new(state: RwSignal<ContactFormState>) -> Self {
        Self { state }
    }
}

impl ContactEventPort for SignalContactEvents {
    fn emit_contact_state_changed(&self, state: &ContactFormState) {
        // The signal is gone once the form's owner is disposed.
        if self.state.try_set(state.clone()).is_some() {
            tracing::trace!("contact state emitted after the form was disposed");
        }
    }
}
