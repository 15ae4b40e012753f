#![forbid(unsafe_code)]

//! Placement resolver: move one icon and displace whatever it lands on.
//!
//! # Policy
//!
//! Only icons whose cells intersect the moving icon's target cells are
//! relocated. Each of them goes to the free position nearest its *original*
//! position (see [`nearest_free_position`]), processed in ascending order of
//! original position and committed one at a time, so later relocations never
//! collide with earlier ones. Every other icon keeps its position.
//!
//! # Invariants
//!
//! 1. On success, no two icons on the same surface share a cell.
//! 2. A move into cells that are all free changes only the moving icon.
//! 3. Icons on surfaces other than the target surface are never modified.
//! 4. Failure never yields a partially relocated arrangement: the caller
//!    keeps the list it passed in.

use std::fmt;

use crate::grid::{Footprint, Grid};
use crate::icon::{Icon, IconId, Surface};
use crate::occupancy::{Occupancy, nearest_free_position};

/// Why a placement could not be computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The moving id is not present in the icon list.
    UnknownIcon { id: IconId },
    /// The moving icon's footprint does not fit the grid at the target.
    OutOfBounds {
        id: IconId,
        position: usize,
        footprint: Footprint,
    },
    /// A displaced icon could not be relocated anywhere on the surface.
    NoAvailableSlot { id: IconId },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownIcon { id } => write!(f, "icon {id} is not in the arrangement"),
            Self::OutOfBounds {
                id,
                position,
                footprint,
            } => write!(
                f,
                "icon {id} ({footprint}) does not fit the grid at position {position}"
            ),
            Self::NoAvailableSlot { id } => {
                write!(f, "no free slot left to relocate displaced icon {id}")
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// Move `moving` to `target` on `surface`, displacing conflicting icons.
///
/// Returns the complete new icon list, in the same order as `icons`.
pub fn place(
    grid: &Grid,
    icons: &[Icon],
    moving: &IconId,
    target: usize,
    surface: Surface,
) -> Result<Vec<Icon>, PlacementError> {
    let Some(moving_idx) = icons.iter().position(|icon| &icon.id == moving) else {
        return Err(PlacementError::UnknownIcon { id: moving.clone() });
    };
    let footprint = icons[moving_idx].footprint;
    let target_cells = grid.cells_for(target, footprint);
    if target_cells.is_empty() {
        return Err(PlacementError::OutOfBounds {
            id: moving.clone(),
            position: target,
            footprint,
        });
    }

    let mut updated = icons.to_vec();
    updated[moving_idx].surface = surface;
    updated[moving_idx].position = target;

    let mut occupancy = Occupancy::build(grid, &updated, surface, Some(moving_idx));
    let mut conflicted = occupancy.conflicts(&target_cells);
    if conflicted.is_empty() {
        tracing::debug!(icon = %moving, target, %surface, "placed into free cells");
        return Ok(updated);
    }

    for &idx in &conflicted {
        occupancy.release(idx);
    }
    occupancy.reserve(&target_cells, moving_idx);
    conflicted.sort_by_key(|&idx| (updated[idx].position, idx));

    for idx in conflicted {
        let icon = &updated[idx];
        let Some(next) = nearest_free_position(grid, icon.position, icon.footprint, &occupancy)
        else {
            tracing::debug!(icon = %moving, displaced = %icon.id, "no slot for displaced icon");
            return Err(PlacementError::NoAvailableSlot {
                id: icon.id.clone(),
            });
        };
        tracing::debug!(displaced = %icon.id, from = icon.position, to = next, "relocated");
        occupancy.reserve(&grid.cells_for(next, icon.footprint), idx);
        updated[idx].position = next;
    }

    Ok(updated)
}

// =========================================================================
// Arrangement validation
// =========================================================================

/// A structural problem in an icon list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrangementIssue {
    /// Two icons share an id.
    DuplicateId { id: IconId },
    /// An icon's footprint does not fit the grid at its position.
    OutOfBounds { id: IconId, position: usize },
    /// Two icons on the same surface cover `cell`.
    Overlap {
        first: IconId,
        second: IconId,
        cell: usize,
    },
}

impl fmt::Display for ArrangementIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId { id } => write!(f, "duplicate icon id {id}"),
            Self::OutOfBounds { id, position } => {
                write!(f, "icon {id} does not fit the grid at position {position}")
            }
            Self::Overlap {
                first,
                second,
                cell,
            } => write!(f, "icons {first} and {second} both cover cell {cell}"),
        }
    }
}

/// Every structural issue in `icons`. An empty result means the arrangement
/// satisfies the no-overlap invariant.
///
/// Each overlapping pair is reported once, at the lowest shared cell.
#[must_use]
pub fn arrangement_issues(grid: &Grid, icons: &[Icon]) -> Vec<ArrangementIssue> {
    let mut issues = Vec::new();

    for (idx, icon) in icons.iter().enumerate() {
        if icons[..idx].iter().any(|other| other.id == icon.id) {
            issues.push(ArrangementIssue::DuplicateId {
                id: icon.id.clone(),
            });
        }
        if !grid.fits(icon.position, icon.footprint) {
            issues.push(ArrangementIssue::OutOfBounds {
                id: icon.id.clone(),
                position: icon.position,
            });
        }
    }

    for surface in Surface::ALL {
        let mut occupancy = Occupancy::new();
        let mut reported: Vec<(usize, usize)> = Vec::new();
        for (idx, icon) in icons.iter().enumerate() {
            if icon.surface != surface {
                continue;
            }
            let cells = icon.cells(grid);
            for &cell in &cells {
                if let Some(owner) = occupancy.occupant(cell)
                    && !reported.contains(&(owner, idx))
                {
                    reported.push((owner, idx));
                    issues.push(ArrangementIssue::Overlap {
                        first: icons[owner].id.clone(),
                        second: icon.id.clone(),
                        cell,
                    });
                }
            }
            for &cell in &cells {
                if occupancy.is_free(cell) {
                    occupancy.reserve(&[cell], idx);
                }
            }
        }
    }

    issues
}
