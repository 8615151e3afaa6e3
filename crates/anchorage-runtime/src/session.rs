#![forbid(unsafe_code)]

//! Position session: keeps one open panel correctly placed.
//!
//! # Lifecycle
//!
//! ```text
//!            activate (trigger present)
//!   ┌──────┐ ─────────────────────────▶ ┌────────┐ ──┐ notify / tick / refresh
//!   │ Idle │                            │ Active │ ◀─┘
//!   └──────┘ ◀───────────────────────── └────────┘
//!                    deactivate
//! ```
//!
//! - [`PositionSession::activate`] reads the trigger rectangle and viewport
//!   from the [`SessionHost`] at call time, resolves synchronously, stores the
//!   result and attaches the host's scroll/resize listeners. The first render
//!   therefore already has a valid position.
//! - [`PositionSession::notify`] feeds scroll/resize notifications into the
//!   [`RecomputeThrottle`]; [`PositionSession::tick`] runs the recompute once
//!   its deadline is reached, re-reading the trigger at execution time.
//! - [`PositionSession::deactivate`] cancels the pending recompute before
//!   detaching listeners. The last position is kept; callers discard it.
//!
//! A host without a trigger rectangle is not positionable. Activation is then
//! a no-op returning the previous (or default) position, and callers must not
//! render the panel.

use anchorage_core::{PlacementOptions, Position, Rect, Size, resolve_position};
use tracing::{debug, debug_span, trace};
use web_time::Instant;

use crate::throttle::{RecomputeThrottle, ThrottleConfig};

/// The host UI layer a session reads layout from and registers listeners on.
pub trait SessionHost {
    /// Current viewport-relative rectangle of the trigger element, or `None`
    /// if the trigger is missing or detached.
    fn trigger_rect(&self) -> Option<Rect>;

    /// Current viewport size.
    fn viewport(&self) -> Size;

    /// Start forwarding scroll and resize notifications to the session.
    fn attach_listeners(&mut self) {}

    /// Stop forwarding scroll and resize notifications.
    fn detach_listeners(&mut self) {}
}

/// Layout-affecting notification from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportEvent {
    /// A scroll container (or the page) scrolled.
    Scroll,
    /// The window was resized.
    Resize,
}

/// Observable session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No listeners attached.
    Idle,
    /// Listeners attached, position maintained.
    Active,
}

/// Stateful wrapper that owns one panel's position.
#[derive(Debug)]
pub struct PositionSession<H: SessionHost> {
    host: Option<H>,
    position: Position,
    size: Size,
    options: PlacementOptions,
    throttle: RecomputeThrottle,
    recomputes: u64,
}

impl<H: SessionHost> Default for PositionSession<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: SessionHost> PositionSession<H> {
    /// Create an idle session with the default throttle.
    #[must_use]
    pub fn new() -> Self {
        Self::with_throttle(ThrottleConfig::default())
    }

    /// Create an idle session with custom throttle timing.
    #[must_use]
    pub fn with_throttle(config: ThrottleConfig) -> Self {
        Self {
            host: None,
            position: Position::default(),
            size: anchorage_core::DEFAULT_PANEL_SIZE,
            options: PlacementOptions::default(),
            throttle: RecomputeThrottle::new(config),
            recomputes: 0,
        }
    }

    /// Open the session for `host`, returning the freshly resolved position.
    ///
    /// Activating an already active session replaces its host; the previous
    /// host's listeners are detached first. A `host` without a trigger
    /// rectangle is dropped and leaves the session, including an active
    /// host and any pending recompute, untouched.
    pub fn activate(&mut self, mut host: H, size: Size, options: PlacementOptions) -> Position {
        let _span = debug_span!(
            "position_session.activate",
            preferred = %options.preferred_placement,
            width = size.width,
            height = size.height
        )
        .entered();

        let Some(trigger) = host.trigger_rect() else {
            debug!(active = self.host.is_some(), "trigger not attached; session unchanged");
            return self.position;
        };

        if self.host.is_some() {
            debug!("replacing active host");
            self.deactivate();
        }

        self.size = size;
        self.options = options;
        self.position = self.compute(&trigger, host.viewport());
        host.attach_listeners();
        self.host = Some(host);
        self.position
    }

    /// Record a scroll/resize notification at `now`.
    ///
    /// Returns the deadline of the scheduled recompute, or `None` while idle.
    pub fn notify(&mut self, event: ViewportEvent, now: Instant) -> Option<Instant> {
        if self.host.is_none() {
            trace!(?event, "notification ignored while idle");
            return None;
        }
        let deadline = self.throttle.schedule(now);
        trace!(?event, coalesced = self.throttle.coalesced(), "recompute scheduled");
        Some(deadline)
    }

    /// Run the scheduled recompute if its deadline has been reached.
    ///
    /// Returns the new position when a recompute ran. A trigger that has
    /// disappeared since activation keeps the previous position and yields
    /// `None`.
    pub fn tick(&mut self, now: Instant) -> Option<Position> {
        if self.host.is_none() || !self.throttle.poll(now) {
            return None;
        }
        self.recompute()
    }

    /// Recompute immediately, for explicit trigger or size changes.
    ///
    /// Cancels any pending throttled recompute. While idle this returns the
    /// stored position unchanged.
    pub fn refresh(&mut self) -> Position {
        if self.host.is_some() {
            self.throttle.cancel();
            self.recompute();
        }
        self.position
    }

    /// Change the panel size and refresh.
    pub fn set_size(&mut self, size: Size) -> Position {
        self.size = size;
        self.refresh()
    }

    /// Change the placement options and refresh.
    pub fn set_options(&mut self, options: PlacementOptions) -> Position {
        self.options = options;
        self.refresh()
    }

    /// Close the session and hand the host back.
    ///
    /// The pending recompute is cancelled before listeners are detached, so
    /// no callback can observe a detached trigger. The last position is kept.
    pub fn deactivate(&mut self) -> Option<H> {
        self.throttle.cancel();
        let mut host = self.host.take()?;
        host.detach_listeners();
        debug!(recomputes = self.recomputes, "position session deactivated");
        Some(host)
    }

    /// Most recently resolved position.
    #[must_use]
    pub fn current_position(&self) -> Position {
        self.position
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.host.is_some() {
            SessionPhase::Active
        } else {
            SessionPhase::Idle
        }
    }

    /// Check whether the session is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.host.is_some()
    }

    /// When the host should next call [`tick`](Self::tick), if a recompute
    /// is pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.throttle.deadline()
    }

    /// Number of positions computed since the session was created.
    #[must_use]
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    /// Panel size used for computations.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Placement options used for computations.
    #[must_use]
    pub fn options(&self) -> &PlacementOptions {
        &self.options
    }

    /// The active host.
    #[must_use]
    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    /// The active host, mutably.
    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.host.as_mut()
    }

    fn recompute(&mut self) -> Option<Position> {
        let host = self.host.as_ref()?;
        let Some(trigger) = host.trigger_rect() else {
            debug!("trigger detached; keeping previous position");
            return None;
        };
        let viewport = host.viewport();
        self.position = self.compute(&trigger, viewport);
        Some(self.position)
    }

    fn compute(&mut self, trigger: &Rect, viewport: Size) -> Position {
        let _span = debug_span!("position_session.recompute").entered();
        let position = resolve_position(trigger, self.size, viewport, &self.options);
        self.recomputes += 1;
        debug!(
            placement = %position.placement,
            flipped = position.placement != self.options.preferred_placement,
            top = position.top,
            left = position.left,
            "position resolved"
        );
        position
    }
}

impl<H: SessionHost> Drop for PositionSession<H> {
    fn drop(&mut self) {
        // Never leak listeners past the session.
        self.deactivate();
    }
}
