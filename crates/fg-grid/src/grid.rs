//! Toroidal multi-occupancy grid.
//!
//! # Data layout
//!
//! Cells are stored row-major in one `Vec`, `cells[y * width + x]`, each a
//! small `Vec<Occupant>` kept free of duplicates.  A reverse index
//! `Occupant → Cell` makes `remove` and `position_of` O(1) without scanning.
//!
//! Per-cell vectors keep insertion order, so iteration over a cell's
//! occupants is deterministic for a given sequence of operations.

use fg_core::{Cell, SimRng};

use crate::{GridError, GridResult, Occupant};

#[cfg(feature = "fx-hash")]
type PositionIndex = rustc_hash::FxHashMap<Occupant, Cell>;
#[cfg(not(feature = "fx-hash"))]
type PositionIndex = std::collections::HashMap<Occupant, Cell>;

/// A `width × height` torus of cells, each holding zero or more occupants.
pub struct Grid {
    width:     u32,
    height:    u32,
    cells:     Vec<Vec<Occupant>>,
    positions: PositionIndex,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// # Errors
    ///
    /// `GridError::InvalidDimensions` if either dimension is zero.
    pub fn new(width: u32, height: u32) -> GridResult<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let cell_count = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            cells: vec![Vec::new(); cell_count],
            positions: PositionIndex::default(),
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of occupants currently registered anywhere on the grid.
    #[inline]
    pub fn occupant_count(&self) -> usize {
        self.positions.len()
    }

    /// Every cell, column by column: `x` outer, `y` inner.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let height = self.height;
        (0..self.width).flat_map(move |x| (0..height).map(move |y| Cell::new(x, y)))
    }

    // ── Placement ─────────────────────────────────────────────────────────

    /// Register `occupant` at `cell`.
    ///
    /// If the occupant is already on the grid it is moved, so it is never
    /// registered in two cells at once.
    ///
    /// # Errors
    ///
    /// `GridError::InvalidPosition` if `cell` lies outside the grid.  No
    /// wraparound is applied to caller-supplied coordinates.
    pub fn place(&mut self, occupant: Occupant, cell: Cell) -> GridResult<()> {
        let slot = self.slot(cell)?;
        self.remove(occupant);
        self.cells[slot].push(occupant);
        self.positions.insert(occupant, cell);
        Ok(())
    }

    /// Unregister `occupant`.
    ///
    /// Returns `false` if it was not on the grid; removing an absent
    /// occupant is a no-op.
    pub fn remove(&mut self, occupant: Occupant) -> bool {
        let Some(cell) = self.positions.remove(&occupant) else {
            return false;
        };
        let slot = self.slot_unchecked(cell);
        self.cells[slot].retain(|&o| o != occupant);
        true
    }

    /// Move `occupant` to `cell`.  Same as `remove` followed by `place`.
    pub fn move_to(&mut self, occupant: Occupant, cell: Cell) -> GridResult<()> {
        self.place(occupant, cell)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The cell `occupant` is registered at, or `None` if it is off-grid.
    #[inline]
    pub fn position_of(&self, occupant: Occupant) -> Option<Cell> {
        self.positions.get(&occupant).copied()
    }

    #[inline]
    pub fn contains(&self, occupant: Occupant) -> bool {
        self.positions.contains_key(&occupant)
    }

    /// All occupants of `cell`, in registration order.
    pub fn occupants_at(&self, cell: Cell) -> GridResult<&[Occupant]> {
        let slot = self.slot(cell)?;
        Ok(&self.cells[slot])
    }

    /// `true` if any patch is registered at `cell`.
    pub fn has_patch(&self, cell: Cell) -> GridResult<bool> {
        Ok(self
            .occupants_at(cell)?
            .iter()
            .any(|o| matches!(o, Occupant::Patch(_))))
    }

    /// Cells within Chebyshev distance `radius` of `cell`, excluding the
    /// zero offset, with toroidal wraparound.
    ///
    /// For `radius = 1` on a grid of at least 3×3 this is the 8-cell Moore
    /// neighborhood.  On smaller grids several offsets wrap to the same cell
    /// (possibly `cell` itself); duplicates are collapsed, keeping the first
    /// occurrence.  A 1×1 grid yields `[cell]`.  Radii past the longer side
    /// only revisit wrapped cells and are clamped to it.
    pub fn neighbors(&self, cell: Cell, radius: u32) -> GridResult<Vec<Cell>> {
        self.slot(cell)?;
        let r = i64::from(radius.min(self.width.max(self.height)));
        let side = 2 * r + 1;
        let capacity = side.saturating_mul(side).saturating_sub(1).min(self.cell_count() as i64);
        let mut out: Vec<Cell> = Vec::with_capacity(capacity as usize);
        for dx in -r..=r {
            for dy in -r..=r {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let n = cell.wrapping_offset(dx, dy, self.width, self.height);
                if !out.contains(&n) {
                    out.push(n);
                }
            }
        }
        Ok(out)
    }

    /// A uniformly random cell from `neighbors(cell, 1)`.
    ///
    /// Always draws exactly one value from `rng`.
    pub fn random_neighbor(&self, cell: Cell, rng: &mut SimRng) -> GridResult<Cell> {
        let options = self.neighbors(cell, 1)?;
        // neighbors() never returns an empty list for radius 1.
        Ok(rng.choose(&options).copied().unwrap_or(cell))
    }

    /// A uniformly random cell anywhere on the grid (x drawn first).
    pub fn random_cell(&self, rng: &mut SimRng) -> Cell {
        let x = rng.gen_range(0..self.width);
        let y = rng.gen_range(0..self.height);
        Cell::new(x, y)
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn slot(&self, cell: Cell) -> GridResult<usize> {
        if !cell.within(self.width, self.height) {
            return Err(GridError::InvalidPosition {
                cell,
                width:  self.width,
                height: self.height,
            });
        }
        Ok(self.slot_unchecked(cell))
    }

    #[inline]
    fn slot_unchecked(&self, cell: Cell) -> usize {
        cell.y as usize * self.width as usize + cell.x as usize
    }
}
