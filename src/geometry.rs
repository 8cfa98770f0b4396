//! Geometry primitives for dock items.
//!
//! Dock items track their on-panel placement as a `{left, top, size}` triple.
//! `size` is the item's extent along the zoom axis; the cross-axis extent is
//! derived from the icon's aspect ratio.

/// Panel orientation. Decides which axis the zoom effect scales along.
///
/// A horizontal dock lays icons out in a row and zooms their *height*;
/// a vertical dock lays them out in a column and zooms their *width*.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Returns true for a horizontal (row) layout.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Orientation::Horizontal)
    }
}

/// An item's rendered placement: pixel origin plus zoom-axis size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    /// X coordinate of the item's top-left corner on the panel canvas.
    pub left: i32,
    /// Y coordinate of the item's top-left corner on the panel canvas.
    pub top: i32,
    /// Extent along the zoom axis, in pixels.
    pub size: i32,
}

impl Geometry {
    /// Creates a geometry from its parts.
    pub fn new(left: i32, top: i32, size: i32) -> Self {
        Self { left, top, size }
    }
}

/// Computes the dimensions of a `src_width` x `src_height` bitmap scaled so
/// that its zoom-axis extent equals `size`.
///
/// The cross axis preserves the source aspect ratio, rounded to nearest and
/// floored at one pixel. An empty source stays empty.
pub fn scaled_dimensions(
    src_width: u32,
    src_height: u32,
    size: u32,
    orientation: Orientation,
) -> (u32, u32) {
    if src_width == 0 || src_height == 0 {
        return (0, 0);
    }
    match orientation {
        Orientation::Horizontal => {
            let width = (src_width as f64 * size as f64 / src_height as f64).round() as u32;
            (width.max(1), size)
        }
        Orientation::Vertical => {
            let height = (src_height as f64 * size as f64 / src_width as f64).round() as u32;
            (size, height.max(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_new() {
        let g = Geometry::new(10, 20, 48);
        assert_eq!(g.left, 10);
        assert_eq!(g.top, 20);
        assert_eq!(g.size, 48);
    }

    #[test]
    fn orientation_axis() {
        assert!(Orientation::Horizontal.is_horizontal());
        assert!(!Orientation::Vertical.is_horizontal());
    }

    #[test]
    fn scaled_dimensions_horizontal_scales_height() {
        // 200x100 source at zoom size 50: height pinned, width proportional.
        let (w, h) = scaled_dimensions(200, 100, 50, Orientation::Horizontal);
        assert_eq!((w, h), (100, 50));
    }

    #[test]
    fn scaled_dimensions_vertical_scales_width() {
        let (w, h) = scaled_dimensions(200, 100, 50, Orientation::Vertical);
        assert_eq!((w, h), (50, 25));
    }

    #[test]
    fn scaled_dimensions_empty_source_stays_empty() {
        assert_eq!(scaled_dimensions(0, 0, 32, Orientation::Horizontal), (0, 0));
        assert_eq!(scaled_dimensions(64, 0, 32, Orientation::Vertical), (0, 0));
    }

    #[test]
    fn scaled_dimensions_cross_axis_floors_at_one() {
        // Extremely tall source: proportional width rounds to 0, floored to 1.
        let (w, h) = scaled_dimensions(1, 100, 10, Orientation::Horizontal);
        assert_eq!((w, h), (1, 10));
    }
}
