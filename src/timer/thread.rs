use super::{Scheduler, Task, TimerHandle};
use anyhow::{Context, Result};
use log::trace;
use std::thread;
use std::time::Duration;

/// Real-time scheduler that parks each pending task on its own thread
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadScheduler;

impl ThreadScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for ThreadScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> Result<TimerHandle> {
        let handle = TimerHandle::new();
        let waiter = handle.clone();

        thread::Builder::new()
            .name("illumine-timer".to_string())
            .spawn(move || {
                if waiter.wait_cancelled(delay) {
                    trace!("Timer cancelled before {:?} elapsed", delay);
                    return;
                }
                task();
            })
            .context("Failed to spawn timer thread")?;

        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_task_runs_after_delay() {
        let scheduler = ThreadScheduler::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();

        scheduler.schedule(
            Duration::from_millis(30),
            Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        )
        .unwrap();

        assert_eq!(fired.load(Ordering::SeqCst), 0, "Should not fire immediately");
        thread::sleep(Duration::from_millis(300));
        assert_eq!(fired.load(Ordering::SeqCst), 1, "Should fire exactly once");
    }

    #[test]
    fn test_cancelled_task_never_runs() {
        let scheduler = ThreadScheduler::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();

        let handle = scheduler.schedule(
            Duration::from_millis(100),
            Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        )
        .unwrap();
        handle.cancel();

        thread::sleep(Duration::from_millis(300));
        assert_eq!(fired.load(Ordering::SeqCst), 0, "Cancelled task must not run");
    }
}
