//! Cancellable one-shot timers
//!
//! The SOS driver only needs "run this after N milliseconds, unless I cancel
//! it first". [`ThreadScheduler`] does that in real time; [`ManualScheduler`]
//! does it against a virtual clock so timing behavior can be tested without
//! sleeping.

pub mod manual;
pub mod thread;

pub use manual::ManualScheduler;
pub use thread::ThreadScheduler;

use anyhow::Result;
use parking_lot::{Condvar, Mutex};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Work run once when a timer fires
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Something that can run a task after a delay
pub trait Scheduler: Send + Sync + 'static {
    /// Arrange for `task` to run once after `delay`.
    ///
    /// The task is dropped without running if the returned handle is
    /// cancelled before the delay elapses. An error means the task will
    /// never run.
    fn schedule(&self, delay: Duration, task: Task) -> Result<TimerHandle>;
}

/// Handle to a scheduled task
#[derive(Clone)]
pub struct TimerHandle {
    token: Arc<CancelToken>,
}

struct CancelToken {
    cancelled: Mutex<bool>,
    wake: Condvar,
}

impl TimerHandle {
    pub(crate) fn new() -> Self {
        Self {
            token: Arc::new(CancelToken {
                cancelled: Mutex::new(false),
                wake: Condvar::new(),
            }),
        }
    }

    /// Cancel the task. Safe to call more than once.
    pub fn cancel(&self) {
        let mut cancelled = self.token.cancelled.lock();
        *cancelled = true;
        self.token.wake.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        *self.token.cancelled.lock()
    }

    /// Block until `delay` has elapsed or the handle is cancelled.
    ///
    /// Returns true if the handle was cancelled.
    pub(crate) fn wait_cancelled(&self, delay: Duration) -> bool {
        let deadline = Instant::now() + delay;
        let mut cancelled = self.token.cancelled.lock();
        while !*cancelled {
            if self
                .token
                .wake
                .wait_until(&mut cancelled, deadline)
                .timed_out()
            {
                break;
            }
        }
        *cancelled
    }
}

impl std::fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerHandle")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
