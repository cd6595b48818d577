//! Anchor-side, text-direction and position-mode enums.
//!
//! These are closed enums everywhere inside the crate; the only runtime
//! guard is at the string/serde boundary, where anchor-side names can
//! arrive from untyped input (config files, test fixtures).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlacementError;

/// Which side of the anchor a popup is requested on.
///
/// `Before`/`After` are logical reading-order sides: in left-to-right text
/// `Before` is physically left of the anchor, in right-to-left text it is
/// physically right. `Above`/`Below` are unaffected by direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorType {
    /// Above the anchor
    Above,
    /// Below the anchor
    Below,
    /// Before the anchor in reading order
    Before,
    /// After the anchor in reading order
    After,
}

impl AnchorType {
    /// Swap `Before` and `After`; `Above`/`Below` are unchanged.
    pub fn mirrored(self) -> Self {
        match self {
            Self::Before => Self::After,
            Self::After => Self::Before,
            other => other,
        }
    }

    /// Whether this side resolves on the vertical primary axis.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Above | Self::Below)
    }

    /// The lowercase name used at the string boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Above => "above",
            Self::Below => "below",
            Self::Before => "before",
            Self::After => "after",
        }
    }
}

impl FromStr for AnchorType {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "above" => Ok(Self::Above),
            "below" => Ok(Self::Below),
            "before" => Ok(Self::Before),
            "after" => Ok(Self::After),
            other => Err(PlacementError::InvalidAnchorType(other.to_string())),
        }
    }
}

/// Resolved text direction of the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left-to-right text
    #[default]
    Ltr,
    /// Right-to-left text
    Rtl,
}

/// Resolved layout position of the popup, which selects its available
/// rectangle: `Fixed` popups are bounded by the viewport, `Flow` popups by
/// their containing positioned ancestor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionMode {
    /// Positioned relative to the viewport
    Fixed,
    /// Positioned relative to a containing ancestor
    #[default]
    Flow,
}
