//! Anchored placement for floating UI elements.
//!
//! Given an anchor rectangle, a popup's intrinsic size, a requested side,
//! a text direction and the available space, the engine decides which
//! edges to pin and at what pixel values:
//! - prefers the requested side but flips to the opposite one when it has
//!   no room (placement below an anchor never flips),
//! - honors logical reading order (`Before`/`After` invert under RTL),
//! - aligns the cross axis by matching anchor edges, pinning to a boundary
//!   as a last resort,
//! - keeps popups placed below an anchor off a reserved strip at the
//!   bottom of the available area.
//!
//! The engine is a pure function over value types; the `host` module
//! adapts it to element- and point-relative placement via two small
//! measurement traits.
//!
//! ```
//! use perch::{place, AnchorType, PlacementRequest, Rect, Size};
//!
//! let request = PlacementRequest::new(
//!     Rect::new(10.0, 100.0, 90.0, 20.0),
//!     Size::new(90.0, 150.0),
//!     Rect::from_size(800.0, 600.0),
//!     AnchorType::Below,
//! );
//! let offsets = place(&request);
//! assert_eq!(offsets.top, Some(120.0));
//! ```

pub mod anchor;
pub mod config;
pub mod error;
pub mod geometry;
pub mod host;
pub mod placement;

pub use anchor::{AnchorType, Direction, PositionMode};
pub use config::{DEFAULT_RESERVED_BOTTOM_INSET, PlacementConfig};
pub use error::PlacementError;
pub use geometry::{Rect, Size};
pub use host::{
    AnchorSource, PopupSurface, place_around_element, place_around_rect, place_at_point,
};
pub use placement::{EdgeOffsets, PlacementRequest, place, resolve_anchor_type};
