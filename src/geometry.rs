//! Rectangle and size value types consumed by the placement engine.
//!
//! Coordinates are f32 layout units (pixels). A `Rect` carries the
//! redundant `right`/`bottom` fields because the engine reads them as
//! supplied and never recomputes them; callers constructing rects by hand
//! are responsible for keeping the six fields consistent.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in a 2D layout space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    /// Always `left + width` for rects built through the constructors.
    pub right: f32,
    /// Always `top + height` for rects built through the constructors.
    pub bottom: f32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size, deriving
    /// `right` and `bottom`.
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
            right: left + width,
            bottom: top + height,
        }
    }

    /// Create a zero-size rectangle at a point. Used for point-anchored
    /// placement.
    pub fn at_point(x: f32, y: f32) -> Self {
        Self::new(x, y, 0.0, 0.0)
    }

    /// Create a rectangle spanning `(0, 0)` to `(width, height)`, e.g. a
    /// viewport.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// The intrinsic size of this rectangle.
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }
}

/// An intrinsic width/height pair, measured before placement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a size.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_new_derives_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.right, 40.0);
        assert_eq!(rect.bottom, 60.0);
        assert_eq!(rect.size(), Size::new(30.0, 40.0));
    }

    #[test]
    fn test_rect_at_point_is_zero_size() {
        let rect = Rect::at_point(40.0, 40.0);
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 0.0);
        assert_eq!(rect.left, rect.right);
        assert_eq!(rect.top, rect.bottom);
    }

    #[test]
    fn test_rect_from_size_starts_at_origin() {
        let rect = Rect::from_size(800.0, 600.0);
        assert_eq!(rect.left, 0.0);
        assert_eq!(rect.top, 0.0);
        assert_eq!(rect.right, 800.0);
        assert_eq!(rect.bottom, 600.0);
    }

    #[test]
    fn test_rect_negative_size_is_representable() {
        // Degenerate geometry is accepted as given; the engine treats it as
        // best-effort input rather than rejecting it.
        let rect = Rect::new(100.0, 100.0, -20.0, -20.0);
        assert_eq!(rect.right, 80.0);
        assert_eq!(rect.bottom, 80.0);
    }
}
