//! Shared fakes for the integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use pf_core::contact::{ContactFields, ContactFormState};
use pf_core::ports::{
    ClockPort, ContactEventPort, DelayPort, EmailReceipt, EmailSendError, EmailSenderPort,
};

static TRACE_INIT: Once = Once::new();

/// Routes use case logs to the test output; filter with `RUST_LOG`.
pub fn init_tracing() {
    TRACE_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Records every emitted form state.
#[derive(Default)]
pub struct RecordingEvents {
    states: Mutex<Vec<ContactFormState>>,
}

impl RecordingEvents {
    pub fn states(&self) -> Vec<ContactFormState> {
        self.states.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<ContactFormState> {
        self.states.lock().unwrap().last().cloned()
    }
}

impl ContactEventPort for RecordingEvents {
    fn emit_contact_state_changed(&self, state: &ContactFormState) {
        self.states.lock().unwrap().push(state.clone());
    }
}

/// Sender that blocks until the test opens the gate.
#[derive(Default)]
pub struct GatedSender {
    gate: Notify,
    calls: AtomicUsize,
    sent: Mutex<Vec<ContactFields>>,
}

impl GatedSender {
    pub fn open(&self) {
        self.gate.notify_one();
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<ContactFields> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl EmailSenderPort for GatedSender {
    async fn send(&self, fields: &ContactFields) -> Result<EmailReceipt, EmailSendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(fields.clone());
        self.gate.notified().await;
        Ok(EmailReceipt {
            text: "OK".to_string(),
        })
    }
}

/// Returns immediately and remembers the requested durations.
#[derive(Default)]
pub struct RecordingDelay {
    requested: Mutex<Vec<Duration>>,
}

impl RecordingDelay {
    pub fn requested(&self) -> Vec<Duration> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl DelayPort for RecordingDelay {
    async fn sleep(&self, duration: Duration) {
        self.requested.lock().unwrap().push(duration);
    }
}

pub struct FixedClock(pub i64);

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

pub fn filled_fields() -> ContactFields {
    ContactFields {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        message: "Ciao!".to_string(),
    }
}
