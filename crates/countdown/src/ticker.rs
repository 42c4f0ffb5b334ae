//! Fixed-period tick loop with cooperative cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

/// Upper bound on how long the loop sleeps before re-checking cancellation.
const POLL_SLICE: Duration = Duration::from_millis(50);

/// Shared flag that stops a [`Ticker`] before its next tick.
///
/// Cloning shares the flag. It is safe to trigger from another thread or a
/// signal handler (see [`CancelHandle::flag`]).
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    flag: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// The underlying flag, for registration with a signal handler.
    pub fn flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.flag)
    }
}

/// What the tick callback wants next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Stop,
}

/// Runs a callback once per period on the calling thread.
///
/// Each tick completes before the next one is scheduled, so ticks never
/// overlap.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    cancel: CancelHandle,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            cancel: CancelHandle::new(),
        }
    }

    pub fn every_second() -> Self {
        Self::new(Duration::from_secs(1))
    }

    /// Replace the cancel handle, e.g. with one already wired to Ctrl-C.
    pub fn with_cancel(mut self, cancel: CancelHandle) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Calls `on_tick` with the tick index until it returns [`Tick::Stop`] or
    /// the handle is cancelled. Returns the number of ticks run.
    pub fn run<F>(&self, mut on_tick: F) -> u64
    where
        F: FnMut(u64) -> Tick,
    {
        let mut ticks = 0;
        while !self.cancel.is_cancelled() {
            let started = Instant::now();
            let next = on_tick(ticks);
            ticks += 1;
            trace!(tick = ticks, "tick");
            if next == Tick::Stop {
                break;
            }
            self.wait_rest_of_period(started);
        }
        debug!(ticks, cancelled = self.cancel.is_cancelled(), "ticker stopped");
        ticks
    }

    fn wait_rest_of_period(&self, started: Instant) {
        loop {
            if self.cancel.is_cancelled() {
                return;
            }
            let elapsed = started.elapsed();
            if elapsed >= self.period {
                return;
            }
            thread::sleep((self.period - elapsed).min(POLL_SLICE));
        }
    }
}
