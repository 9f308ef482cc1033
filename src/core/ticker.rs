//! Live tick session: a background thread that redraws the elapsed time of the
//! tracking entry once per interval.
//!
//! The session is a plain owned value. `cancel` flips the flag under the same
//! mutex the redraw runs under, then joins the thread, so once it returns no
//! further redraw can happen.

use crate::utils::clock::SharedClock;
use crate::utils::time::elapsed_seconds;
use chrono::{DateTime, Local};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Receives the elapsed seconds of the live entry on every tick.
pub type TickSink = Box<dyn FnMut(i64) + Send + 'static>;

type Signal = Arc<(Mutex<bool>, Condvar)>;

pub struct TickSession {
    entry_id: i64,
    signal: Signal,
    handle: Option<JoinHandle<()>>,
}

impl TickSession {
    /// Start ticking for `entry_id`; the sink sees the seconds elapsed since
    /// `started_at`.
    pub fn spawn(
        entry_id: i64,
        started_at: DateTime<Local>,
        clock: SharedClock,
        sink: TickSink,
    ) -> Self {
        Self::spawn_with_interval(entry_id, started_at, clock, sink, TICK_INTERVAL)
    }

    pub fn spawn_with_interval(
        entry_id: i64,
        started_at: DateTime<Local>,
        clock: SharedClock,
        mut sink: TickSink,
        interval: Duration,
    ) -> Self {
        let signal: Signal = Arc::new((Mutex::new(false), Condvar::new()));
        let thread_signal = Arc::clone(&signal);

        let handle = thread::spawn(move || {
            let (lock, cvar) = &*thread_signal;
            let mut cancelled = lock.lock().unwrap_or_else(PoisonError::into_inner);
            loop {
                if *cancelled {
                    break;
                }
                sink(elapsed_seconds(started_at, clock.now()));

                let (guard, _) = cvar
                    .wait_timeout_while(cancelled, interval, |c| !*c)
                    .unwrap_or_else(PoisonError::into_inner);
                cancelled = guard;
            }
            tracing::debug!(entry_id, "tick session finished");
        });

        tracing::debug!(entry_id, "tick session started");
        Self {
            entry_id,
            signal,
            handle: Some(handle),
        }
    }

    pub fn entry_id(&self) -> i64 {
        self.entry_id
    }

    /// Stop the session and wait for the thread to exit.
    pub fn cancel(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        {
            let (lock, cvar) = &*self.signal;
            let mut cancelled = lock.lock().unwrap_or_else(PoisonError::into_inner);
            *cancelled = true;
            cvar.notify_all();
        }
        if handle.join().is_err() {
            tracing::warn!(entry_id = self.entry_id, "tick thread panicked");
        }
    }
}

impl Drop for TickSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}
