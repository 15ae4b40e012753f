#![forbid(unsafe_code)]

//! Occupancy index: which icon covers which cell, for one surface.
//!
//! An [`Occupancy`] is derived fresh for every resolver call and thrown away
//! afterwards. Occupants are recorded as indices into the icon slice the
//! index was built from.

use rustc_hash::FxHashMap;

use crate::grid::{Footprint, Grid};
use crate::icon::{Icon, Surface};

/// Cell → occupant map scoped to one surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Occupancy {
    cells: FxHashMap<usize, usize>,
}

impl Occupancy {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every icon on `surface`, skipping the icon at index `exclude`.
    ///
    /// Icons whose footprint does not fit the grid contribute no cells.
    #[must_use]
    pub fn build(grid: &Grid, icons: &[Icon], surface: Surface, exclude: Option<usize>) -> Self {
        let mut occupancy = Self::new();
        for (idx, icon) in icons.iter().enumerate() {
            if icon.surface != surface || Some(idx) == exclude {
                continue;
            }
            occupancy.reserve(&icon.cells(grid), idx);
        }
        occupancy
    }

    /// Icon index covering `cell`, if any.
    #[inline]
    #[must_use]
    pub fn occupant(&self, cell: usize) -> Option<usize> {
        self.cells.get(&cell).copied()
    }

    #[inline]
    #[must_use]
    pub fn is_free(&self, cell: usize) -> bool {
        !self.cells.contains_key(&cell)
    }

    #[must_use]
    pub fn all_free(&self, cells: &[usize]) -> bool {
        cells.iter().all(|&cell| self.is_free(cell))
    }

    /// Distinct occupants of `cells`, in order of first appearance.
    #[must_use]
    pub fn conflicts(&self, cells: &[usize]) -> Vec<usize> {
        let mut found = Vec::new();
        for &cell in cells {
            if let Some(owner) = self.occupant(cell)
                && !found.contains(&owner)
            {
                found.push(owner);
            }
        }
        found
    }

    /// Free every cell held by `owner`.
    pub fn release(&mut self, owner: usize) {
        self.cells.retain(|_, held_by| *held_by != owner);
    }

    /// Mark `cells` as held by `owner`.
    pub fn reserve(&mut self, cells: &[usize], owner: usize) {
        for &cell in cells {
            self.cells.insert(cell, owner);
        }
    }

    /// Number of occupied cells.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Nearest position to `origin` where `footprint` fits entirely in free cells.
///
/// `origin` itself is tried first, then offsets `+1, -1, +2, -2, ...` up to
/// the grid size, forward before backward at equal distance. Returns `None`
/// when no position fits.
#[must_use]
pub fn nearest_free_position(
    grid: &Grid,
    origin: usize,
    footprint: Footprint,
    occupancy: &Occupancy,
) -> Option<usize> {
    let count = grid.cell_count();
    let fits_free = |position: usize| {
        let cells = grid.cells_for(position, footprint);
        !cells.is_empty() && occupancy.all_free(&cells)
    };

    if origin < count && fits_free(origin) {
        return Some(origin);
    }
    for offset in 1..count {
        if let Some(forward) = origin.checked_add(offset)
            && forward < count
            && fits_free(forward)
        {
            return Some(forward);
        }
        if let Some(backward) = origin.checked_sub(offset)
            && backward < count
            && fits_free(backward)
        {
            return Some(backward);
        }
    }
    None
}
