#![forbid(unsafe_code)]

//! Policy-as-data configuration for panel positioning.
//!
//! Captures every tunable of the engine as a single [`PositionPolicy`] that
//! can be loaded from TOML or JSON at startup.
//!
//! # Loading
//!
//! ```toml
//! # anchorage.toml
//! [placement]
//! preferred = "bottom-end"
//! offset = 6.0
//!
//! [placement.boundary]
//! top = 8.0
//! right = 16.0
//! bottom = 8.0
//! left = 16.0
//!
//! [throttle]
//! interval_ms = 16
//! ```
//!
//! ```rust,ignore
//! let policy = PositionPolicy::from_toml_file("anchorage.toml")?;
//! let options = policy.to_placement_options();
//! ```
//!
//! # Defaults
//!
//! Every field defaults to the engine defaults, so
//! `PositionPolicy::default()` behaves exactly like the built-in constants.

#[cfg(feature = "policy-config")]
use std::path::Path;

#[cfg(feature = "policy-config")]
use serde::{Deserialize, Serialize};

use std::time::Duration;

use anchorage_core::{DEFAULT_PANEL_SIZE, Placement, PlacementOptions, Sides, Size};

use crate::throttle::ThrottleConfig;

// ---------------------------------------------------------------------------
// Top-level PositionPolicy
// ---------------------------------------------------------------------------

/// Top-level positioning policy.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct PositionPolicy {
    /// Placement, offset, boundary and strategy switches.
    pub placement: PlacementPolicyConfig,

    /// Recompute throttle timing.
    pub throttle: ThrottlePolicyConfig,

    /// Panel size used when the caller has not measured its content.
    pub panel: PanelPolicyConfig,
}

impl PositionPolicy {
    /// Load from a TOML string.
    #[cfg(feature = "policy-config")]
    pub fn from_toml_str(s: &str) -> Result<Self, PolicyConfigError> {
        toml::from_str(s).map_err(PolicyConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "policy-config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, PolicyConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(PolicyConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "policy-config")]
    pub fn from_json_str(s: &str) -> Result<Self, PolicyConfigError> {
        serde_json::from_str(s).map_err(PolicyConfigError::Json)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "policy-config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PolicyConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(PolicyConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Load from a TOML file and reject invalid values.
    #[cfg(feature = "policy-config")]
    pub fn load_toml_file(path: impl AsRef<Path>) -> Result<Self, PolicyConfigError> {
        Self::from_toml_file(path)?.validated()
    }

    /// Load from a JSON file and reject invalid values.
    #[cfg(feature = "policy-config")]
    pub fn load_json_file(path: impl AsRef<Path>) -> Result<Self, PolicyConfigError> {
        Self::from_json_file(path)?.validated()
    }

    /// Return `self` if [`validate`](Self::validate) finds nothing.
    pub fn validated(self) -> Result<Self, PolicyConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(PolicyConfigError::Validation(errors))
        }
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the policy
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.placement.offset.is_finite() || self.placement.offset < 0.0 {
            errors.push(format!(
                "placement.offset must be a finite value >= 0, got {}",
                self.placement.offset
            ));
        }

        let boundary = &self.placement.boundary;
        for (edge, value) in [
            ("top", boundary.top),
            ("right", boundary.right),
            ("bottom", boundary.bottom),
            ("left", boundary.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                errors.push(format!(
                    "placement.boundary.{edge} must be a finite value >= 0, got {value}"
                ));
            }
        }

        if self.throttle.max_wait_ms < self.throttle.interval_ms {
            errors.push(format!(
                "throttle.max_wait_ms ({}) must be >= throttle.interval_ms ({})",
                self.throttle.max_wait_ms, self.throttle.interval_ms
            ));
        }

        if !(self.panel.width.is_finite() && self.panel.width > 0.0) {
            errors.push(format!("panel.width must be > 0, got {}", self.panel.width));
        }
        if !(self.panel.height.is_finite() && self.panel.height > 0.0) {
            errors.push(format!(
                "panel.height must be > 0, got {}",
                self.panel.height
            ));
        }

        errors
    }

    /// Build [`PlacementOptions`] from this policy.
    #[must_use]
    pub fn to_placement_options(&self) -> PlacementOptions {
        let boundary = &self.placement.boundary;
        PlacementOptions {
            preferred_placement: self.placement.preferred,
            offset: self.placement.offset,
            boundary: Sides::new(boundary.top, boundary.right, boundary.bottom, boundary.left),
            allow_flip: self.placement.allow_flip,
            allow_shift: self.placement.allow_shift,
        }
    }

    /// Build a [`ThrottleConfig`] from this policy.
    #[must_use]
    pub fn to_throttle_config(&self) -> ThrottleConfig {
        ThrottleConfig {
            interval: Duration::from_millis(self.throttle.interval_ms),
            max_wait: Duration::from_millis(self.throttle.max_wait_ms),
        }
    }

    /// Default panel size.
    #[must_use]
    pub fn panel_size(&self) -> Size {
        Size::new(self.panel.width, self.panel.height)
    }

    /// Format as a JSONL line for structured logging.
    ///
    /// Works on unvalidated policies too: non-finite numbers are written as
    /// `null` so the line stays valid JSON.
    #[must_use]
    pub fn to_jsonl(&self) -> String {
        let b = &self.placement.boundary;
        format!(
            r#"{{"schema":"position-policy-v1","preferred":"{}","offset":{},"boundary":[{},{},{},{}],"allow_flip":{},"allow_shift":{},"interval_ms":{},"max_wait_ms":{},"panel":[{},{}]}}"#,
            self.placement.preferred,
            json_number(self.placement.offset),
            json_number(b.top),
            json_number(b.right),
            json_number(b.bottom),
            json_number(b.left),
            self.placement.allow_flip,
            self.placement.allow_shift,
            self.throttle.interval_ms,
            self.throttle.max_wait_ms,
            json_number(self.panel.width),
            json_number(self.panel.height),
        )
    }
}

/// JSON has no NaN or infinity literals.
fn json_number(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        "null".to_string()
    }
}

// ---------------------------------------------------------------------------
// Sub-configs (flat, serde-friendly)
// ---------------------------------------------------------------------------

/// Placement policy parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct PlacementPolicyConfig {
    /// Placement tried first. Default: `bottom-start`.
    pub preferred: Placement,
    /// Gap between trigger and panel in pixels. Default: 4.
    pub offset: f64,
    /// Minimum distance from each viewport edge. Default: 8 on every side.
    pub boundary: BoundaryPolicyConfig,
    /// Mirror the side on overflow. Default: true.
    pub allow_flip: bool,
    /// Clamp into the safe area. Default: true.
    pub allow_shift: bool,
}

impl Default for PlacementPolicyConfig {
    fn default() -> Self {
        let options = PlacementOptions::default();
        Self {
            preferred: options.preferred_placement,
            offset: options.offset,
            boundary: BoundaryPolicyConfig::default(),
            allow_flip: options.allow_flip,
            allow_shift: options.allow_shift,
        }
    }
}

/// Boundary inset parameters, in pixels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct BoundaryPolicyConfig {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for BoundaryPolicyConfig {
    fn default() -> Self {
        let b = PlacementOptions::default().boundary;
        Self {
            top: b.top,
            right: b.right,
            bottom: b.bottom,
            left: b.left,
        }
    }
}

/// Recompute throttle parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct ThrottlePolicyConfig {
    /// Delay after the latest notification. Default: 16.
    pub interval_ms: u64,
    /// Cap from the first notification of a burst. Default: 64.
    pub max_wait_ms: u64,
}

impl Default for ThrottlePolicyConfig {
    fn default() -> Self {
        let config = ThrottleConfig::default();
        Self {
            interval_ms: config.interval.as_millis() as u64,
            max_wait_ms: config.max_wait.as_millis() as u64,
        }
    }
}

/// Default panel dimensions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct PanelPolicyConfig {
    /// Default: 256.
    pub width: f64,
    /// Default: 400.
    pub height: f64,
}

impl Default for PanelPolicyConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_PANEL_SIZE.width,
            height: DEFAULT_PANEL_SIZE.height,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from loading or validating a [`PositionPolicy`].
#[derive(Debug)]
pub enum PolicyConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "policy-config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "policy-config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for PolicyConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "policy-config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "policy-config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for PolicyConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "policy-config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "policy-config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
