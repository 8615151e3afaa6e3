#![forbid(unsafe_code)]

//! Anchorage Runtime
//!
//! Stateful pieces that keep an open panel next to its trigger while the
//! page scrolls and the window resizes.
//!
//! # Key Components
//!
//! - [`PositionSession`] - Owns one panel's position across its open lifetime
//! - [`SessionHost`] - Trait the UI layer implements to expose layout and listeners
//! - [`RecomputeThrottle`] - Coalesces scroll/resize bursts into one recompute
//! - [`OverlayRegistry`] - Lazily created, shared render target for panels
//! - [`PositionPolicy`] - Policy-as-data configuration (TOML/JSON with `policy-config`)
//!
//! # Role in Anchorage
//! `anchorage-core` answers "where does the panel go" for one frozen layout.
//! This crate re-asks that question at the right moments: synchronously on
//! open, throttled on scroll and resize, never after close.
//!
//! Nothing here owns a timer or a thread. Callers pass `now` into
//! [`PositionSession::notify`] and [`PositionSession::tick`] and schedule the
//! next tick from [`PositionSession::next_deadline`].

pub mod overlay;
pub mod policy_config;
pub mod session;
pub mod throttle;

pub use overlay::{
    OVERLAY_CONTAINER_ID, OverlayBackend, OverlayContainerSpec, OverlayRegistry, panel_css_text,
};
pub use policy_config::{
    BoundaryPolicyConfig, PanelPolicyConfig, PlacementPolicyConfig, PolicyConfigError,
    PositionPolicy, ThrottlePolicyConfig,
};
pub use session::{PositionSession, SessionHost, SessionPhase, ViewportEvent};
pub use throttle::{DEFAULT_INTERVAL, DEFAULT_MAX_WAIT, RecomputeThrottle, ThrottleConfig};
