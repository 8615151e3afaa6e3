#![forbid(unsafe_code)]

//! Anchorage public facade crate.
//!
//! Re-exports the positioning solver from `anchorage-core` and, with the
//! default `runtime` feature, the session, throttle and overlay types from
//! `anchorage-runtime`. Most applications only need the prelude:
//!
//! ```
//! use anchorage::prelude::*;
//!
//! let trigger = Rect::from_edges(100.0, 400.0, 500.0, 130.0);
//! let position = resolve_position(
//!     &trigger,
//!     Size::new(256.0, 400.0),
//!     Size::new(1024.0, 768.0),
//!     &PlacementOptions::new("bottom-end".parse()?),
//! );
//! assert_eq!(position.left, 500.0 - 256.0);
//! # Ok::<(), anchorage::Error>(())
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use anchorage_core::{
    Alignment, BoundaryInset, DEFAULT_BOUNDARY, DEFAULT_OFFSET, DEFAULT_PANEL_SIZE,
    ParsePlacementError, Placement, PlacementOptions, Point, Position, Rect, Side, Sides, Size,
    resolve_position,
};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "runtime")]
pub use anchorage_runtime::{
    OverlayBackend, OverlayContainerSpec, OverlayRegistry, PolicyConfigError, PositionPolicy,
    PositionSession, RecomputeThrottle, SessionHost, SessionPhase, ThrottleConfig, ViewportEvent,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for Anchorage integrations.
#[derive(Debug)]
pub enum Error {
    /// A placement string did not name one of the eight placements.
    Placement(ParsePlacementError),
    /// A policy file could not be loaded or failed validation.
    #[cfg(feature = "runtime")]
    Config(PolicyConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placement(err) => write!(f, "{err}"),
            #[cfg(feature = "runtime")]
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Placement(err) => Some(err),
            #[cfg(feature = "runtime")]
            Self::Config(err) => Some(err),
        }
    }
}

impl From<ParsePlacementError> for Error {
    fn from(err: ParsePlacementError) -> Self {
        Self::Placement(err)
    }
}

#[cfg(feature = "runtime")]
impl From<PolicyConfigError> for Error {
    fn from(err: PolicyConfigError) -> Self {
        Self::Config(err)
    }
}

/// Standard result type for Anchorage APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Error, Placement, PlacementOptions, Position, Rect, Result, Sides, Size,
        resolve_position,
    };

    #[cfg(feature = "runtime")]
    pub use crate::{PositionSession, SessionHost, ViewportEvent};

    pub use crate::core;
    #[cfg(feature = "runtime")]
    pub use crate::runtime;
}

pub use anchorage_core as core;
#[cfg(feature = "runtime")]
pub use anchorage_runtime as runtime;
