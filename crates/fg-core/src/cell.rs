//! Grid cell coordinate.

use std::fmt;

/// A cell coordinate on the toroidal grid.
///
/// A `Cell` carries no bounds of its own; the grid checks it on placement
/// and wraps every offset it computes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// `true` if the cell lies inside a `width × height` grid.
    #[inline]
    pub fn within(self, width: u32, height: u32) -> bool {
        self.x < width && self.y < height
    }

    /// The cell reached by moving `(dx, dy)` on a `width × height` torus.
    ///
    /// Wraps on both axes, so any offset resolves to an in-bounds cell.
    pub fn wrapping_offset(self, dx: i64, dy: i64, width: u32, height: u32) -> Cell {
        let x = (i64::from(self.x) + dx).rem_euclid(i64::from(width));
        let y = (i64::from(self.y) + dy).rem_euclid(i64::from(height));
        // rem_euclid by a u32 modulus always fits back into u32.
        Cell::new(x as u32, y as u32)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for Cell {
    fn from((x, y): (u32, u32)) -> Self {
        Cell::new(x, y)
    }
}
