#![forbid(unsafe_code)]

//! Single-deadline recompute throttle.
//!
//! Scroll and resize notifications arrive in bursts. [`RecomputeThrottle`]
//! turns a burst into one deferred recompute:
//!
//! - The first notification of a burst is deferred by `interval`, never
//!   dropped, so a quiet page always ends with a fresh position.
//! - Each further notification cancels the pending deadline and reschedules
//!   it `interval` after itself.
//! - The deadline is capped at `max_wait` after the first notification of
//!   the burst, so a continuous scroll still recomputes at a bounded rate.
//!
//! At most one deadline is pending at a time. Time is injected by the caller
//! (`now` arguments), which keeps the type free of timers and lets tests run
//! against a fake clock.
//!
//! ```
//! use std::time::Duration;
//! use anchorage_runtime::throttle::RecomputeThrottle;
//! use web_time::Instant;
//!
//! let mut throttle = RecomputeThrottle::default();
//! let t0 = Instant::now();
//! for i in 0..10 {
//!     throttle.schedule(t0 + Duration::from_millis(i));
//! }
//! assert!(!throttle.poll(t0 + Duration::from_millis(20)));
//! assert!(throttle.poll(t0 + Duration::from_millis(25)));
//! assert!(!throttle.is_pending());
//! ```

use std::time::Duration;

use web_time::Instant;

/// Default delay between a notification and the recompute it schedules.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(16);

/// Default upper bound between the first notification of a burst and its
/// recompute.
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_millis(64);

/// Timing parameters for [`RecomputeThrottle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottleConfig {
    /// Delay after the latest notification. Default: 16 ms.
    pub interval: Duration,
    /// Cap measured from the first notification of a burst. Default: 64 ms.
    pub max_wait: Duration,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            max_wait: DEFAULT_MAX_WAIT,
        }
    }
}

/// Coalesces notifications into at most one pending recompute deadline.
#[derive(Debug, Clone, Default)]
pub struct RecomputeThrottle {
    config: ThrottleConfig,
    deadline: Option<Instant>,
    burst_start: Option<Instant>,
    coalesced: u32,
}

impl RecomputeThrottle {
    /// Create a throttle with the given timing.
    #[must_use]
    pub fn new(config: ThrottleConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The timing parameters.
    #[must_use]
    pub fn config(&self) -> ThrottleConfig {
        self.config
    }

    /// Record a notification at `now` and return the (re)scheduled deadline.
    pub fn schedule(&mut self, now: Instant) -> Instant {
        let burst_start = *self.burst_start.get_or_insert(now);
        let cap = burst_start + self.config.max_wait;
        let deadline = (now + self.config.interval).min(cap);
        self.deadline = Some(deadline);
        self.coalesced = self.coalesced.saturating_add(1);
        deadline
    }

    /// Drop the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
        self.burst_start = None;
        self.coalesced = 0;
    }

    /// Returns `true` exactly once when the pending deadline has been
    /// reached, clearing it.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.cancel();
                true
            }
            _ => false,
        }
    }

    /// Check whether a recompute is scheduled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Number of notifications folded into the pending deadline.
    ///
    /// Returns 0 if nothing is pending.
    #[must_use]
    pub fn coalesced(&self) -> u32 {
        self.coalesced
    }
}
