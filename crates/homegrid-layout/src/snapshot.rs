#![forbid(unsafe_code)]

//! Persisted layout schema v1.
//!
//! A [`LayoutSnapshot`] is the durable form of a [`LayoutState`]. Documents
//! written before the schema was versioned (`{"icons": [...], "page": 1}`)
//! load as version 1.
//!
//! Loaders reject unknown versions and structurally invalid arrangements;
//! the caller decides what to fall back to.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::icon::{Icon, Surface};
use crate::placement::arrangement_issues;

/// Current layout schema version.
pub const LAYOUT_SCHEMA_VERSION: u16 = 1;

/// Committed arrangement plus the surface currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayoutState {
    pub icons: Vec<Icon>,
    pub surface: Surface,
}

impl LayoutState {
    /// Icons on the currently shown surface.
    pub fn visible(&self) -> impl Iterator<Item = &Icon> {
        self.icons.iter().filter(move |icon| icon.surface == self.surface)
    }
}

/// On-disk layout document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    #[serde(default = "default_layout_version")]
    pub schema_version: u16,
    #[serde(default, alias = "page")]
    pub surface: Surface,
    pub icons: Vec<Icon>,
}

fn default_layout_version() -> u16 {
    LAYOUT_SCHEMA_VERSION
}

impl LayoutSnapshot {
    #[must_use]
    pub fn from_state(state: &LayoutState) -> Self {
        Self {
            schema_version: LAYOUT_SCHEMA_VERSION,
            surface: state.surface,
            icons: state.icons.clone(),
        }
    }

    /// Check version and arrangement invariants against `grid`.
    pub fn validate(&self, grid: &Grid) -> Result<(), SnapshotError> {
        if self.schema_version != LAYOUT_SCHEMA_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.schema_version,
                expected: LAYOUT_SCHEMA_VERSION,
            });
        }
        if self.icons.is_empty() {
            return Err(SnapshotError::NoIcons);
        }
        let issues = arrangement_issues(grid, &self.icons);
        if let Some(first) = issues.first() {
            return Err(SnapshotError::InvalidArrangement {
                issue_count: issues.len(),
                first_issue: first.to_string(),
            });
        }
        Ok(())
    }

    /// Validate and convert into live state.
    pub fn into_state(self, grid: &Grid) -> Result<LayoutState, SnapshotError> {
        self.validate(grid)?;
        Ok(LayoutState {
            icons: self.icons,
            surface: self.surface,
        })
    }
}

/// Why a persisted layout was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// Schema version is not supported.
    UnsupportedVersion { found: u16, expected: u16 },
    /// The document carries no icons.
    NoIcons,
    /// Icons overlap, overflow the grid, or repeat an id.
    InvalidArrangement {
        issue_count: usize,
        first_issue: String,
    },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedVersion { found, expected } => write!(
                f,
                "unsupported layout schema version {found} (expected {expected})"
            ),
            Self::NoIcons => f.write_str("layout has no icons"),
            Self::InvalidArrangement {
                issue_count,
                first_issue,
            } => write!(
                f,
                "layout has {issue_count} arrangement issue(s), first: {first_issue}"
            ),
        }
    }
}

impl std::error::Error for SnapshotError {}
