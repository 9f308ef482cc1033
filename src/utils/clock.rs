//! Source of "now" for the store, the engine and the live timer.
//! Swapping the clock lets tests pin the calendar day.

use chrono::{DateTime, Duration, Local};
use std::sync::{Arc, Mutex, PoisonError};

pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Local>;
}

pub type SharedClock = Arc<dyn Clock>;

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

pub fn system_clock() -> SharedClock {
    Arc::new(SystemClock)
}

/// Manually driven clock.
#[derive(Debug)]
pub struct FixedClock {
    current: Mutex<DateTime<Local>>,
}

impl FixedClock {
    pub fn new(at: DateTime<Local>) -> Self {
        Self {
            current: Mutex::new(at),
        }
    }

    pub fn set(&self, at: DateTime<Local>) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = at;
    }

    pub fn advance(&self, by: Duration) {
        let mut guard = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        *guard += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
