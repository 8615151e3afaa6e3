#![forbid(unsafe_code)]

//! Named side/alignment combinations for anchored panels.
//!
//! A [`Placement`] is the cross product of the trigger [`Side`] the panel sits
//! on and the [`Alignment`] along the cross axis. The textual form is
//! `side-alignment` (`bottom-start`, `left-end`, ...), which is what
//! configuration files and logs use.

use std::fmt;
use std::str::FromStr;

/// Which side of the trigger the panel is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// The mirrored side on the same axis.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Whether this side stacks the panel above or below the trigger.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Alignment of the panel along the cross axis of its side.
///
/// For `top`/`bottom` placements `Start` aligns left edges and `End` aligns
/// right edges; for `left`/`right` placements `Start` aligns top edges and
/// `End` aligns bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    Start,
    End,
}

impl Alignment {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// Where to place a panel relative to its trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Placement {
    /// Above the trigger, left edges aligned.
    TopStart,
    /// Above the trigger, right edges aligned.
    TopEnd,
    /// Below the trigger, left edges aligned.
    #[default]
    BottomStart,
    /// Below the trigger, right edges aligned.
    BottomEnd,
    /// Left of the trigger, top edges aligned.
    LeftStart,
    /// Left of the trigger, bottom edges aligned.
    LeftEnd,
    /// Right of the trigger, top edges aligned.
    RightStart,
    /// Right of the trigger, bottom edges aligned.
    RightEnd,
}

impl Placement {
    /// Every placement, in declaration order.
    pub const ALL: [Placement; 8] = [
        Self::TopStart,
        Self::TopEnd,
        Self::BottomStart,
        Self::BottomEnd,
        Self::LeftStart,
        Self::LeftEnd,
        Self::RightStart,
        Self::RightEnd,
    ];

    /// Combine a side and an alignment.
    #[must_use]
    pub const fn from_parts(side: Side, alignment: Alignment) -> Self {
        match (side, alignment) {
            (Side::Top, Alignment::Start) => Self::TopStart,
            (Side::Top, Alignment::End) => Self::TopEnd,
            (Side::Bottom, Alignment::Start) => Self::BottomStart,
            (Side::Bottom, Alignment::End) => Self::BottomEnd,
            (Side::Left, Alignment::Start) => Self::LeftStart,
            (Side::Left, Alignment::End) => Self::LeftEnd,
            (Side::Right, Alignment::Start) => Self::RightStart,
            (Side::Right, Alignment::End) => Self::RightEnd,
        }
    }

    /// The primary side.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Self::TopStart | Self::TopEnd => Side::Top,
            Self::BottomStart | Self::BottomEnd => Side::Bottom,
            Self::LeftStart | Self::LeftEnd => Side::Left,
            Self::RightStart | Self::RightEnd => Side::Right,
        }
    }

    /// The cross-axis alignment.
    #[must_use]
    pub const fn alignment(self) -> Alignment {
        match self {
            Self::TopStart | Self::BottomStart | Self::LeftStart | Self::RightStart => {
                Alignment::Start
            }
            Self::TopEnd | Self::BottomEnd | Self::LeftEnd | Self::RightEnd => Alignment::End,
        }
    }

    /// Whether this placement stacks the panel above or below the trigger.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        self.side().is_vertical()
    }

    /// Mirror the side, keeping the alignment.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::from_parts(self.side().opposite(), self.alignment())
    }

    /// Canonical `side-alignment` name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopStart => "top-start",
            Self::TopEnd => "top-end",
            Self::BottomStart => "bottom-start",
            Self::BottomEnd => "bottom-end",
            Self::LeftStart => "left-start",
            Self::LeftEnd => "left-end",
            Self::RightStart => "right-start",
            Self::RightEnd => "right-end",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a valid `side-alignment` name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePlacementError {
    input: String,
}

impl ParsePlacementError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParsePlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid placement {:?}: expected <top|bottom|left|right>-<start|end>",
            self.input
        )
    }
}

impl std::error::Error for ParsePlacementError {}

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePlacementError {
            input: s.to_string(),
        };
        let (side, alignment) = s.trim().split_once('-').ok_or_else(err)?;
        let side = match side.to_ascii_lowercase().as_str() {
            "top" => Side::Top,
            "bottom" => Side::Bottom,
            "left" => Side::Left,
            "right" => Side::Right,
            _ => return Err(err()),
        };
        let alignment = match alignment.to_ascii_lowercase().as_str() {
            "start" => Alignment::Start,
            "end" => Alignment::End,
            _ => return Err(err()),
        };
        Ok(Self::from_parts(side, alignment))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Placement {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Placement {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
