//! The placement engine.
//!
//! `place` decides where a popup goes relative to an anchor rectangle:
//! direction-aware inversion, logical Before/After flip, overflow-driven
//! flip to the opposite side when the requested side has no room, then a
//! primary-axis offset and a cross-axis edge alignment. Pure computation
//! over the request; the caller applies the returned offsets after
//! clearing all four edges.

use serde::{Deserialize, Serialize};

use crate::anchor::{AnchorType, Direction};
use crate::config::DEFAULT_RESERVED_BOTTOM_INSET;
use crate::geometry::{Rect, Size};

/// Everything the engine needs for one placement decision.
///
/// The engine is stateless: each request is a self-contained snapshot of
/// the geometry at the moment of placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementRequest {
    /// Bounding rectangle of the anchor, in the same space as
    /// `available_rect`.
    pub anchor_rect: Rect,

    /// Pre-measured intrinsic size of the popup. The engine never resizes
    /// the popup.
    pub popup_size: Size,

    /// The side of the anchor the caller wants.
    pub requested_type: AnchorType,

    /// Whether to invert the left/right alignment preference. Toggled once
    /// more when `direction` is RTL.
    pub invert_left_right: bool,

    /// Resolved text direction of the popup.
    pub direction: Direction,

    /// The rectangle the popup must stay within.
    pub available_rect: Rect,

    /// Height of a strip at the bottom of the available area that a popup
    /// placed below must not cover (e.g. a bookmark bar).
    pub reserved_bottom_inset: f32,
}

impl PlacementRequest {
    /// Create a request with LTR direction, no inversion, and the default
    /// reserved bottom inset.
    pub fn new(
        anchor_rect: Rect,
        popup_size: Size,
        available_rect: Rect,
        requested_type: AnchorType,
    ) -> Self {
        Self {
            anchor_rect,
            popup_size,
            requested_type,
            invert_left_right: false,
            direction: Direction::default(),
            available_rect,
            reserved_bottom_inset: DEFAULT_RESERVED_BOTTOM_INSET,
        }
    }

    /// Set the text direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the left/right alignment inversion flag.
    pub fn with_invert_left_right(mut self, invert: bool) -> Self {
        self.invert_left_right = invert;
        self
    }

    /// Set the reserved bottom inset.
    pub fn with_reserved_bottom_inset(mut self, inset: f32) -> Self {
        self.reserved_bottom_inset = inset;
        self
    }
}

/// The placement decision: pixel offsets for the edges to pin.
///
/// Exactly one of `top`/`bottom` and one of `left`/`right` is set. Unset
/// edges stay `None` and must be applied as "auto" by the consumer, which
/// should clear all four edges before applying.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeOffsets {
    pub left: Option<f32>,
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
}

/// Whether left/right preferences are inverted once direction is applied.
fn effective_inversion(request: &PlacementRequest) -> bool {
    request.invert_left_right != (request.direction == Direction::Rtl)
}

/// The anchor side actually used for layout: the requested side after
/// direction-aware inversion and overflow-driven flipping.
pub fn resolve_anchor_type(request: &PlacementRequest) -> AnchorType {
    let anchor = &request.anchor_rect;
    let avail = &request.available_rect;
    let popup = &request.popup_size;

    let mut resolved = request.requested_type;
    if effective_inversion(request) {
        resolved = resolved.mirrored();
    }

    // Flip to the opposite side when the requested side has no room but the
    // opposite one does.
    let flipped = match resolved {
        // Below never flips; the primary-axis step clamps to the reserved
        // inset instead.
        AnchorType::Below => AnchorType::Below,
        AnchorType::Above => {
            if popup.height > anchor.top && anchor.bottom + popup.height <= avail.height {
                AnchorType::Below
            } else {
                AnchorType::Above
            }
        }
        AnchorType::After => {
            if anchor.right + popup.width > avail.width && popup.width <= anchor.left {
                AnchorType::Before
            } else {
                AnchorType::After
            }
        }
        AnchorType::Before => {
            if popup.width > anchor.left && anchor.right + popup.width <= avail.width {
                AnchorType::After
            } else {
                AnchorType::Before
            }
        }
    };

    if flipped != resolved {
        tracing::trace!(
            "Flipping anchor side {} -> {}: no room on the requested side",
            resolved.as_str(),
            flipped.as_str()
        );
    }
    flipped
}

/// Compute the edge offsets that place the popup on the resolved side of
/// the anchor, within the available rectangle.
///
/// Degenerate geometry is not an error: branches that would produce an
/// offscreen placement pin the popup to a boundary instead.
pub fn place(request: &PlacementRequest) -> EdgeOffsets {
    let anchor = &request.anchor_rect;
    let avail = &request.available_rect;
    let popup = &request.popup_size;

    let invert = effective_inversion(request);
    let resolved = resolve_anchor_type(request);

    let mut offsets = EdgeOffsets::default();

    // Primary axis.
    match resolved {
        AnchorType::Below => {
            if anchor.bottom + popup.height <= avail.height - request.reserved_bottom_inset {
                offsets.top = Some(anchor.bottom);
            } else {
                // Pin just above the reserved strip; overlapping the anchor
                // is allowed, covering the strip is not.
                tracing::debug!(
                    "Popup below anchor would cover the reserved inset ({}); pinning to bottom",
                    request.reserved_bottom_inset
                );
                offsets.bottom = Some(request.reserved_bottom_inset);
            }
        }
        AnchorType::Above => {
            if avail.height - anchor.top >= 0.0 {
                offsets.bottom = Some(avail.height - anchor.top);
            } else {
                // Anchor is below the available area entirely.
                offsets.top = Some(0.0);
            }
        }
        AnchorType::After => {
            if anchor.right + popup.width <= avail.width {
                offsets.left = Some(anchor.right);
            } else {
                offsets.right = Some(0.0);
            }
        }
        AnchorType::Before => {
            if avail.width - anchor.left >= 0.0 {
                offsets.right = Some(avail.width - anchor.left);
            } else {
                offsets.left = Some(0.0);
            }
        }
    }

    // Cross axis.
    match resolved {
        AnchorType::Below | AnchorType::Above => {
            if invert {
                if anchor.right - popup.width >= 0.0 {
                    // align right edges
                    offsets.right = Some(avail.width - anchor.right);
                } else if anchor.left + popup.width <= avail.width {
                    // align left edges
                    offsets.left = Some(anchor.left);
                } else {
                    // not enough room on either side
                    offsets.right = Some(0.0);
                }
            } else if anchor.left + popup.width <= avail.width {
                // align left edges
                offsets.left = Some(anchor.left);
            } else if anchor.right - popup.width >= 0.0 {
                // align right edges
                offsets.right = Some(avail.width - anchor.right);
            } else {
                // not enough room on either side
                offsets.left = Some(0.0);
            }
        }
        AnchorType::After | AnchorType::Before => {
            if anchor.top + popup.height <= avail.height {
                // align top edges
                offsets.top = Some(anchor.top);
            } else if anchor.bottom - popup.height >= 0.0 {
                // align bottom edges
                offsets.bottom = Some(avail.height - anchor.bottom);
            } else {
                // not enough room on either side
                offsets.top = Some(0.0);
            }
        }
    }

    offsets
}
