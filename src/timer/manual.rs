//! Virtual-clock scheduler
//!
//! Time only moves when [`ManualScheduler::advance`] is called. Tasks due
//! inside the advanced window fire in deadline order, and a task scheduled by
//! a firing task still fires in the same call if its deadline falls inside
//! the window.

use super::{Scheduler, Task, TimerHandle};
use anyhow::Result;
use parking_lot::Mutex;
use std::time::Duration;

struct Pending {
    due: Duration,
    seq: u64,
    task: Task,
    handle: TimerHandle,
}

#[derive(Default)]
struct ManualInner {
    now: Duration,
    next_seq: u64,
    queue: Vec<Pending>,
}

#[derive(Default)]
pub struct ManualScheduler {
    inner: Mutex<ManualInner>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock
    pub fn now(&self) -> Duration {
        self.inner.lock().now
    }

    /// Number of scheduled tasks that have not fired or been cancelled
    pub fn pending(&self) -> usize {
        self.inner
            .lock()
            .queue
            .iter()
            .filter(|p| !p.handle.is_cancelled())
            .count()
    }

    /// Move the clock forward by `by`, firing everything that falls due.
    ///
    /// Returns the number of tasks that ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        self.advance_to(target)
    }

    /// Move the clock forward to `target` (no-op if it is in the past).
    pub fn advance_to(&self, target: Duration) -> usize {
        let mut fired = 0;
        loop {
            // The lock must be released before running a task, since tasks
            // usually schedule their successor.
            let next = {
                let mut inner = self.inner.lock();
                inner.queue.retain(|p| !p.handle.is_cancelled());

                let earliest = inner
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(i, _)| i);

                match earliest {
                    Some(i) => {
                        let pending = inner.queue.swap_remove(i);
                        inner.now = pending.due;
                        Some(pending)
                    }
                    None => {
                        if target > inner.now {
                            inner.now = target;
                        }
                        None
                    }
                }
            };

            match next {
                Some(pending) => {
                    if !pending.handle.is_cancelled() {
                        (pending.task)();
                        fired += 1;
                    }
                }
                None => break,
            }
        }
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> Result<TimerHandle> {
        let handle = TimerHandle::new();
        let mut inner = self.inner.lock();
        let seq = inner.next_seq;
        inner.next_seq += 1;
        let due = inner.now + delay;
        inner.queue.push(Pending {
            due,
            seq,
            task,
            handle: handle.clone(),
        });
        Ok(handle)
    }
}
