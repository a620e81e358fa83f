//! Width and height of one coordinate space.

use std::fmt;

/// A `width × height` rectangle anchored at the origin.
///
/// Every canvas has two: `output` in terminal cells and `screen` in pixels
/// (twice as wide, four times as tall).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Surface {
    width: i32,
    height: i32,
}

impl Surface {
    #[inline]
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[inline]
    #[must_use]
    pub const fn width(self) -> i32 {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(self) -> i32 {
        self.height
    }

    /// True when `(x, y)` lies in `[0, width) × [0, height)`.
    #[inline]
    #[must_use]
    pub const fn contains(self, x: i32, y: i32) -> bool {
        0 <= x && x < self.width && 0 <= y && y < self.height
    }

    /// `(x, y)` as grid indices, or `None` when outside.
    #[inline]
    #[must_use]
    pub fn index(self, x: i32, y: i32) -> Option<(usize, usize)> {
        if !self.contains(x, y) {
            return None;
        }
        Some((usize::try_from(x).ok()?, usize::try_from(y).ok()?))
    }

    /// `(width, height)` as grid dimensions.
    #[must_use]
    pub fn dims(self) -> (usize, usize) {
        (
            usize::try_from(self.width).unwrap_or(0),
            usize::try_from(self.height).unwrap_or(0),
        )
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Surface({}×{})", self.width, self.height)
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let s = Surface::new(4, 2);
        assert!(s.contains(0, 0));
        assert!(s.contains(3, 1));
        assert!(!s.contains(4, 1));
        assert!(!s.contains(3, 2));
        assert!(!s.contains(-1, 0));
        assert!(!s.contains(0, -1));
    }

    #[test]
    fn index_converts_in_bounds_only() {
        let s = Surface::new(4, 2);
        assert_eq!(s.index(3, 1), Some((3, 1)));
        assert_eq!(s.index(4, 0), None);
        assert_eq!(s.index(i32::MIN, 0), None);
    }

    #[test]
    fn dims_and_display() {
        let s = Surface::new(30, 20);
        assert_eq!(s.dims(), (30, 20));
        assert_eq!(s.to_string(), "30×20");
        assert_eq!(format!("{s:?}"), "Surface(30×20)");
    }
}
