//! Clock
//!
//! Wall-clock source for status timestamps.

use chrono::{DateTime, Duration, Local};
use std::sync::Mutex;

/// Clock interface (for dependency injection).
pub trait Clock: Send + Sync {
    /// Current local time.
    fn now(&self) -> DateTime<Local>;

    /// Current local time rendered with a strftime layout.
    fn timestamp(&self, format: &str) -> String {
        self.now().format(format).to_string()
    }
}

/// System clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Settable clock for testing.
pub struct FixedClock {
    now: Mutex<DateTime<Local>>,
}

impl FixedClock {
    /// Create clock frozen at `now`.
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Move the clock to `now`.
    pub fn set(&self, now: DateTime<Local>) {
        *self.now.lock().unwrap() = now;
    }

    /// Advance the clock.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        *self.now.lock().unwrap()
    }
}
