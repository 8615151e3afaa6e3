#![forbid(unsafe_code)]

//! Render-target registry for floating panels.
//!
//! Panels render into one shared, full-viewport container that sits above
//! normal page layout with `position: fixed` and ignores pointer events, so
//! ancestor `overflow: hidden` or scroll containers never clip them. Panels
//! re-enable pointer events on themselves (see [`panel_css_text`]).
//!
//! The container is created lazily by an [`OverlayBackend`] on first use and
//! cached for the life of the [`OverlayRegistry`]. The registry is an explicit
//! object owned by the UI root and handed to whatever renders panels; there
//! is no process-wide global.

use std::cell::OnceCell;
use std::fmt;

use anchorage_core::Position;
use tracing::info;

/// Default element id of the overlay container.
pub const OVERLAY_CONTAINER_ID: &str = "anchorage-overlay-root";

/// Description of the overlay container a backend must create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayContainerSpec {
    /// Stable element id.
    pub id: String,
}

impl Default for OverlayContainerSpec {
    fn default() -> Self {
        Self {
            id: OVERLAY_CONTAINER_ID.to_string(),
        }
    }
}

impl OverlayContainerSpec {
    /// Container description with a custom element id.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Inline style for DOM-like hosts: fixed, full-viewport, click-through.
    #[must_use]
    pub fn css_text(&self) -> &'static str {
        "position:fixed;top:0;left:0;width:100vw;height:100vh;pointer-events:none;"
    }
}

/// Inline style placing one panel at `position` inside the overlay container.
///
/// `position` must be finite. [`anchorage_core::resolve_position`] only
/// yields finite coordinates for finite inputs, so validate policies (see
/// [`PositionPolicy::validate`](crate::policy_config::PositionPolicy::validate))
/// before their values reach the solver.
#[must_use]
pub fn panel_css_text(position: &Position) -> String {
    format!(
        "position:fixed;top:{}px;left:{}px;pointer-events:auto;",
        position.top, position.left
    )
}

/// Platform side of the registry: creates the actual container.
pub trait OverlayBackend {
    /// Opaque handle to the created container (a DOM node, a layer id, ...).
    type Handle;

    /// Create and mount the container described by `spec`.
    fn create_container(&self, spec: &OverlayContainerSpec) -> Self::Handle;
}

/// Lazily creates and caches the single overlay container.
pub struct OverlayRegistry<B: OverlayBackend> {
    backend: B,
    spec: OverlayContainerSpec,
    container: OnceCell<B::Handle>,
}

impl<B: OverlayBackend> OverlayRegistry<B> {
    /// Registry using the default container spec.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self::with_spec(backend, OverlayContainerSpec::default())
    }

    /// Registry with a custom container spec.
    #[must_use]
    pub fn with_spec(backend: B, spec: OverlayContainerSpec) -> Self {
        Self {
            backend,
            spec,
            container: OnceCell::new(),
        }
    }

    /// Return the container, creating it on first call.
    ///
    /// Repeated calls return the same handle; the backend is asked exactly
    /// once.
    pub fn get_or_create(&self) -> &B::Handle {
        self.container.get_or_init(|| {
            info!(id = %self.spec.id, "overlay container created");
            self.backend.create_container(&self.spec)
        })
    }

    /// The container, if it has been created.
    #[must_use]
    pub fn get(&self) -> Option<&B::Handle> {
        self.container.get()
    }

    /// Check whether the container exists yet.
    #[must_use]
    pub fn is_created(&self) -> bool {
        self.container.get().is_some()
    }

    /// The container spec.
    #[must_use]
    pub fn spec(&self) -> &OverlayContainerSpec {
        &self.spec
    }

    /// The platform backend.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: OverlayBackend> fmt::Debug for OverlayRegistry<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayRegistry")
            .field("spec", &self.spec)
            .field("created", &self.is_created())
            .finish()
    }
}
