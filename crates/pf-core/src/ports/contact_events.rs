use crate::contact::ContactFormState;

/// Receives every state change of a mounted contact form.
pub trait ContactEventPort: Send + Sync {
    fn emit_contact_state_changed(&self, state: &ContactFormState);
}
