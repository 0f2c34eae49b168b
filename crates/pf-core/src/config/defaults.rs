use super::{EmailConfig, RevealConfig, TimingConfig};
use crate::reveal::DEFAULT_VISIBILITY_THRESHOLD;

pub const DEFAULT_EMAILJS_API_BASE: &str = "https://api.emailjs.com";
pub const DEFAULT_DETAIL_LOAD_DELAY_MS: u64 = 500;
pub const DEFAULT_FEEDBACK_AUTO_HIDE_MS: u64 = 6000;

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_EMAILJS_API_BASE.to_string(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            detail_load_delay_ms: DEFAULT_DETAIL_LOAD_DELAY_MS,
            feedback_auto_hide_ms: DEFAULT_FEEDBACK_AUTO_HIDE_MS,
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_VISIBILITY_THRESHOLD,
        }
    }
}
