use chrono::Utc;
use pf_core::ports::ClockPort;

/// Wall clock. Uses `chrono` so it also works in the browser.
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_after_2024() {
        assert!(SystemClock.now_ms() > 1_704_067_200_000);
    }
}
