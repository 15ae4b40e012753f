#![forbid(unsafe_code)]

//! Grid geometry: the single source of truth for "does this footprint fit here".
//!
//! Cells are addressed by a linear index, `row * columns + col`. A footprint
//! is anchored at its top-left cell and never rotates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rectangular extent of an icon in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Footprint {
    pub cols: u16,
    pub rows: u16,
}

impl Footprint {
    /// A single cell.
    pub const UNIT: Self = Self { cols: 1, rows: 1 };

    /// Create a footprint of `cols × rows` cells.
    #[inline]
    #[must_use]
    pub const fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    /// Number of cells covered.
    #[inline]
    #[must_use]
    pub const fn area(self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// A zero-sized footprint covers nothing and fits nowhere.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.cols == 0 || self.rows == 0
    }
}

impl Default for Footprint {
    fn default() -> Self {
        Self::UNIT
    }
}

impl fmt::Display for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

/// Errors from grid construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Columns or rows is zero.
    ZeroDimension { columns: u16, rows: u16 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { columns, rows } => {
                write!(f, "grid dimensions must be non-zero (got {columns}x{rows})")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Fixed cell grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    columns: u16,
    rows: u16,
}

impl Grid {
    /// Launcher default: 4 columns by 6 rows.
    pub const DEFAULT: Self = Self {
        columns: 4,
        rows: 6,
    };

    /// Create a grid. Both dimensions must be non-zero.
    pub fn new(columns: u16, rows: u16) -> Result<Self, GridError> {
        if columns == 0 || rows == 0 {
            return Err(GridError::ZeroDimension { columns, rows });
        }
        Ok(Self { columns, rows })
    }

    #[inline]
    #[must_use]
    pub const fn columns(&self) -> u16 {
        self.columns
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> u16 {
        self.rows
    }

    /// Total number of cells, `N = columns × rows`.
    #[inline]
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Linear index of `(row, col)`.
    #[inline]
    #[must_use]
    pub const fn position_of(&self, row: usize, col: usize) -> usize {
        row * self.columns as usize + col
    }

    #[inline]
    #[must_use]
    pub const fn row_of(&self, position: usize) -> usize {
        position / self.columns as usize
    }

    #[inline]
    #[must_use]
    pub const fn col_of(&self, position: usize) -> usize {
        position % self.columns as usize
    }

    /// Cells covered by `footprint` anchored at `position`, in row-major order.
    ///
    /// Returns an empty vector if the footprint would cross the right or
    /// bottom edge, if `position` is outside the grid, or if the footprint is
    /// zero-sized. Never returns a partial cell set.
    #[must_use]
    pub fn cells_for(&self, position: usize, footprint: Footprint) -> Vec<usize> {
        if !self.fits(position, footprint) {
            return Vec::new();
        }
        let (row, col) = (self.row_of(position), self.col_of(position));
        let (width, height) = (usize::from(footprint.cols), usize::from(footprint.rows));
        let mut cells = Vec::with_capacity(footprint.area());
        for r in row..row + height {
            for c in col..col + width {
                cells.push(self.position_of(r, c));
            }
        }
        cells
    }

    /// Whether `footprint` anchored at `position` lies entirely inside the grid.
    #[must_use]
    pub fn fits(&self, position: usize, footprint: Footprint) -> bool {
        if footprint.is_empty() || position >= self.cell_count() {
            return false;
        }
        let (row, col) = (self.row_of(position), self.col_of(position));
        col + usize::from(footprint.cols) <= usize::from(self.columns)
            && row + usize::from(footprint.rows) <= usize::from(self.rows)
    }

    /// Shift `anchor` by a signed row/column offset.
    ///
    /// Returns `None` when the result leaves the grid; columns do not wrap
    /// into the neighbouring row.
    #[must_use]
    pub fn offset_position(&self, anchor: usize, d_row: i32, d_col: i32) -> Option<usize> {
        if anchor >= self.cell_count() {
            return None;
        }
        let row = i64::try_from(self.row_of(anchor)).ok()? + i64::from(d_row);
        let col = i64::try_from(self.col_of(anchor)).ok()? + i64::from(d_col);
        if row < 0 || col < 0 || row >= i64::from(self.rows) || col >= i64::from(self.columns) {
            return None;
        }
        Some(self.position_of(usize::try_from(row).ok()?, usize::try_from(col).ok()?))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::DEFAULT
    }
}
