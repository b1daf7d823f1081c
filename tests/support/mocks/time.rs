// tests/support/mocks/time.rs
use chrono::{DateTime, TimeZone, Utc};
use compass_core::application::ports::time::Clock;
use once_cell::sync::Lazy;

pub static FIXED_NOW: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap());

/// Deterministic clock so timestamps in assertions are stable.
#[derive(Default, Clone)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *FIXED_NOW
    }
}
