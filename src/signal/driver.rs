//! SOS signal driver
//!
//! Walks [`SOS_PATTERN`] one step at a time while the driver is active.
//! Each step arms a single timer for its own duration; when it fires the
//! index moves forward by one and the next timer is armed. Deactivating
//! cancels the pending timer and turns the light off, and the next
//! activation starts again from the first step.
//!
//! If the scheduler cannot arm a timer the driver goes inert: it stays
//! active but dark until the next deactivate/activate pair retries.

use super::pattern::{step_at, SOS_PATTERN};
use crate::timer::{Scheduler, TimerHandle};
use anyhow::Result;
use log::{debug, error, trace};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::Duration;

/// Observable state of the driver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriverState {
    /// Position in the pattern, always below the pattern length
    pub current_index: usize,
    /// Whether the light should be emitting right now
    pub light_on: bool,
    /// SOS mode is selected and the torch is powered
    pub active: bool,
}

struct DriverInner {
    state: DriverState,
    /// Bumped on every activation edge; timers armed under an older
    /// generation are ignored when they fire.
    generation: u64,
    pending: Option<TimerHandle>,
}

pub struct SosDriver<S: Scheduler> {
    scheduler: Arc<S>,
    inner: Arc<Mutex<DriverInner>>,
}

impl<S: Scheduler> SosDriver<S> {
    pub fn new(scheduler: Arc<S>) -> Self {
        Self {
            scheduler,
            inner: Arc::new(Mutex::new(DriverInner {
                state: DriverState::default(),
                generation: 0,
                pending: None,
            })),
        }
    }

    /// Feed the gating signal.
    ///
    /// A rising edge restarts the pattern at step 0 with the light on. A
    /// falling edge turns the light off and cancels the pending advance
    /// before returning. Repeating the current value does nothing.
    pub fn set_active(&self, active: bool) {
        let mut inner = self.inner.lock();
        if inner.state.active == active {
            return;
        }

        inner.generation = inner.generation.wrapping_add(1);
        if let Some(pending) = inner.pending.take() {
            pending.cancel();
        }

        if active {
            let first = step_at(0);
            inner.state = DriverState {
                current_index: 0,
                light_on: first.on,
                active: true,
            };
            let generation = inner.generation;
            match arm(&self.scheduler, &self.inner, generation, first.duration()) {
                Ok(handle) => {
                    inner.pending = Some(handle);
                    debug!("SOS signal started");
                }
                Err(e) => go_inert(&mut inner, &e),
            }
        } else {
            inner.state = DriverState::default();
            debug!("SOS signal stopped");
        }
    }

    pub fn light_on(&self) -> bool {
        self.inner.lock().state.light_on
    }

    pub fn current_index(&self) -> usize {
        self.inner.lock().state.current_index
    }

    pub fn state(&self) -> DriverState {
        self.inner.lock().state
    }
}

impl<S: Scheduler> Drop for SosDriver<S> {
    fn drop(&mut self) {
        if let Some(pending) = self.inner.lock().pending.take() {
            pending.cancel();
        }
    }
}

/// Schedule the advance out of the current step.
///
/// The task only holds weak references so a pending timer never keeps the
/// driver or its scheduler alive.
fn arm<S: Scheduler>(
    scheduler: &Arc<S>,
    inner: &Arc<Mutex<DriverInner>>,
    generation: u64,
    delay: Duration,
) -> Result<TimerHandle> {
    let weak_inner = Arc::downgrade(inner);
    let weak_scheduler = Arc::downgrade(scheduler);
    scheduler.schedule(
        delay,
        Box::new(move || advance(weak_inner, weak_scheduler, generation)),
    )
}

fn advance<S: Scheduler>(inner: Weak<Mutex<DriverInner>>, scheduler: Weak<S>, generation: u64) {
    let (Some(inner), Some(scheduler)) = (inner.upgrade(), scheduler.upgrade()) else {
        return;
    };

    let mut guard = inner.lock();
    if !guard.state.active || guard.generation != generation {
        trace!("Ignoring stale SOS timer (generation {})", generation);
        return;
    }

    let next = (guard.state.current_index + 1) % SOS_PATTERN.len();
    let step = step_at(next);
    guard.state.current_index = next;
    guard.state.light_on = step.on;
    trace!(
        "SOS step {} ({} ms, {})",
        next,
        step.duration_ms,
        if step.on { "on" } else { "off" }
    );

    match arm(&scheduler, &inner, generation, step.duration()) {
        Ok(handle) => guard.pending = Some(handle),
        Err(e) => go_inert(&mut guard, &e),
    }
}

fn go_inert(inner: &mut DriverInner, err: &anyhow::Error) {
    error!("SOS signal halted at step {}: {:#}", inner.state.current_index, err);
    inner.state.light_on = false;
    inner.pending = None;
}
