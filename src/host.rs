//! Adapters between host UI elements and the placement engine.
//!
//! The host implements two small traits describing its measurement
//! capabilities; the adapters read geometry synchronously, build a
//! `PlacementRequest`, and delegate to `place`. Placement is not
//! re-invoked automatically: after any layout-affecting mutation the
//! caller measures and places again.

use crate::anchor::{AnchorType, Direction, PositionMode};
use crate::config::PlacementConfig;
use crate::geometry::Rect;
use crate::placement::{EdgeOffsets, PlacementRequest, place};

/// Anything that can serve as a placement anchor.
pub trait AnchorSource {
    /// Bounding rectangle of the anchor, in the same coordinate space as
    /// the popup's available rectangle.
    fn bounding_rect(&self) -> Rect;
}

/// A rect is its own anchor.
impl AnchorSource for Rect {
    fn bounding_rect(&self) -> Rect {
        *self
    }
}

/// The popup side of the measurement boundary.
///
/// `viewport_rect` bounds popups in `Fixed` position mode;
/// `container_rect` (the containing positioned ancestor) bounds everything
/// else.
pub trait PopupSurface {
    /// Bounding rectangle of the popup; only its size is used.
    fn bounding_rect(&self) -> Rect;

    /// Resolved layout position mode of the popup.
    fn position_mode(&self) -> PositionMode;

    /// Resolved text direction of the popup.
    fn direction(&self) -> Direction;

    /// The viewport rectangle.
    fn viewport_rect(&self) -> Rect;

    /// Bounding rectangle of the containing positioned ancestor.
    fn container_rect(&self) -> Rect;
}

/// Place a popup around an anchor rectangle.
///
/// Derives the available rectangle from the popup's position mode and the
/// alignment preference from its text direction, then delegates to
/// [`place`]. The caller applies the returned offsets after clearing all
/// four edges.
pub fn place_around_rect(
    anchor_rect: Rect,
    popup: &impl PopupSurface,
    requested_type: AnchorType,
    invert_left_right: bool,
    config: &PlacementConfig,
) -> EdgeOffsets {
    let available_rect = match popup.position_mode() {
        PositionMode::Fixed => popup.viewport_rect(),
        PositionMode::Flow => popup.container_rect(),
    };

    let request = PlacementRequest::new(
        anchor_rect,
        popup.bounding_rect().size(),
        available_rect,
        requested_type,
    )
    .with_direction(popup.direction())
    .with_invert_left_right(invert_left_right)
    .with_reserved_bottom_inset(config.reserved_bottom_inset);

    place(&request)
}

/// Place a popup around an anchor element.
pub fn place_around_element(
    anchor: &impl AnchorSource,
    popup: &impl PopupSurface,
    requested_type: AnchorType,
    invert_left_right: bool,
    config: &PlacementConfig,
) -> EdgeOffsets {
    place_around_rect(
        anchor.bounding_rect(),
        popup,
        requested_type,
        invert_left_right,
        config,
    )
}

/// Place a popup below a point.
///
/// The point becomes a zero-size anchor and the requested side is always
/// `Below` with no inversion, matching element-relative placement of a
/// collapsed anchor.
pub fn place_at_point(
    x: f32,
    y: f32,
    popup: &impl PopupSurface,
    config: &PlacementConfig,
) -> EdgeOffsets {
    place_around_rect(
        Rect::at_point(x, y),
        popup,
        AnchorType::Below,
        false,
        config,
    )
}
