// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss timers.
//!
//! The manager never sleeps itself. It asks a [`DismissScheduler`] to run a
//! callback after a delay and keeps the returned [`TimerHandle`] next to the
//! record. Removing the record cancels the handle, so an expiry can never act
//! on a notification that is already gone.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;

/// Callback run when a timer expires.
pub type ExpireFn = Box<dyn FnOnce() + Send + 'static>;

/// Schedules one-shot dismiss callbacks.
pub trait DismissScheduler: Send + Sync + fmt::Debug {
    /// Runs `on_expire` once after `delay`, unless the handle is canceled first.
    fn schedule(&self, delay: Duration, on_expire: ExpireFn) -> TimerHandle;
}

/// Cancellation token for a scheduled dismiss.
#[derive(Debug)]
pub struct TimerHandle {
    cancelled: Arc<AtomicBool>,
    abort: Option<AbortHandle>,
}

impl TimerHandle {
    fn new(cancelled: Arc<AtomicBool>, abort: Option<AbortHandle>) -> Self {
        Self { cancelled, abort }
    }

    /// Cancels the timer. Safe to call after it already fired.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        if let Some(abort) = &self.abort {
            abort.abort();
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Runs dismiss timers as tasks on a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Uses the runtime the caller is running on.
    pub fn current() -> crate::error::Result<Self> {
        Ok(Self::new(Handle::try_current()?))
    }
}

impl DismissScheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, on_expire: ExpireFn) -> TimerHandle {
        let cancelled = Arc::new(AtomicBool::new(false));
        let guard = Arc::clone(&cancelled);
        let deadline = tokio::time::Instant::now() + delay;

        let task = self.handle.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if !guard.load(Ordering::Acquire) {
                on_expire();
            }
        });

        TimerHandle::new(cancelled, Some(task.abort_handle()))
    }
}

/// A scheduler driven by hand, for hosts without an async runtime and for tests.
///
/// Time only moves when [`ManualScheduler::advance`] is called.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    state: Arc<Mutex<ManualState>>,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    timers: Vec<ManualTimer>,
}

struct ManualTimer {
    deadline: Duration,
    cancelled: Arc<AtomicBool>,
    on_expire: ExpireFn,
}

impl fmt::Debug for ManualState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualState")
            .field("now", &self.now)
            .field("timers", &self.timers.len())
            .finish()
    }
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the scheduler was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Number of timers neither fired nor canceled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.lock()
            .timers
            .iter()
            .filter(|timer| !timer.cancelled.load(Ordering::Acquire))
            .count()
    }

    /// Moves time forward and fires every due timer in deadline order.
    ///
    /// Callbacks run without the scheduler lock held, so they may schedule
    /// new timers.
    pub fn advance(&self, by: Duration) {
        let due = {
            let mut state = self.lock();
            state.now += by;
            let now = state.now;
            let (mut due, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut state.timers)
                .into_iter()
                .filter(|timer| !timer.cancelled.load(Ordering::Acquire))
                .partition(|timer| timer.deadline <= now);
            state.timers = rest;
            due.sort_by_key(|timer| timer.deadline);
            due
        };

        for timer in due {
            if !timer.cancelled.load(Ordering::Acquire) {
                (timer.on_expire)();
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ManualState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DismissScheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, on_expire: ExpireFn) -> TimerHandle {
        let cancelled = Arc::new(AtomicBool::new(false));
        let mut state = self.lock();
        state
            .timers
            .retain(|timer| !timer.cancelled.load(Ordering::Acquire));
        let deadline = state.now + delay;
        state.timers.push(ManualTimer {
            deadline,
            cancelled: Arc::clone(&cancelled),
            on_expire,
        });
        TimerHandle::new(cancelled, None)
    }
}
