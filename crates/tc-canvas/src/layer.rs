//! Lazily activated per-cell overlays.
//!
//! A canvas starts with pixels only. The color and text overlays come into
//! existence the first time something needs them, fully populated with a
//! fill value, and from then on are only ever reset in place. Anything
//! holding a view of an overlay between two frames keeps seeing the same
//! grid.

use tc_term::Color;

/// Per-cell color overlay.
pub type ColorLayer = Layer<Color>;

/// Per-cell text overlay. Each cell is empty or holds one glyph, possibly
/// wrapped in color escapes.
pub type TextLayer = Layer<String>;

/// An overlay grid indexed `[y][x]` that may not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layer<T> {
    Inactive,
    Active(Vec<Vec<T>>),
}

impl<T> Default for Layer<T> {
    fn default() -> Self {
        Self::Inactive
    }
}

impl<T: Clone> Layer<T> {
    /// Allocate a `width × height` grid of `fill`.
    ///
    /// Returns `false` without touching anything if already active.
    pub fn activate(&mut self, width: usize, height: usize, fill: &T) -> bool {
        if self.is_active() {
            return false;
        }
        *self = Self::Active(vec![vec![fill.clone(); width]; height]);
        true
    }

    /// Overwrite every cell with `fill`, keeping the allocation.
    ///
    /// An inactive layer stays inactive.
    pub fn reset(&mut self, fill: &T) {
        if let Self::Active(rows) = self {
            for cell in rows.iter_mut().flatten() {
                cell.clone_from(fill);
            }
        }
    }
}

impl<T> Layer<T> {
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        match self {
            Self::Inactive => None,
            Self::Active(rows) => rows.get(y)?.get(x),
        }
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        match self {
            Self::Inactive => None,
            Self::Active(rows) => rows.get_mut(y)?.get_mut(x),
        }
    }

    /// The grid, or an empty slice while inactive.
    #[must_use]
    pub fn rows(&self) -> &[Vec<T>] {
        match self {
            Self::Inactive => &[],
            Self::Active(rows) => rows,
        }
    }
}
