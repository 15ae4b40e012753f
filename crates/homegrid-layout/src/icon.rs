#![forbid(unsafe_code)]

//! Icon model.
//!
//! Identity, label, glyph, route, and footprint are fixed when an icon is
//! created from static configuration. Only the placement fields
//! (`surface`, `position`) change afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::{Footprint, Grid};

/// Stable unique icon identifier (e.g. `"timer"`, `"company:strava"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconId(String);

impl IconId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IconId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for IconId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One page of the home screen. Serialized as `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Surface {
    #[default]
    First,
    Second,
}

impl Surface {
    /// All surfaces in page order.
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    /// 1-based page number.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }

    /// The page to the right; saturates on the last page.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::First | Self::Second => Self::Second,
        }
    }

    /// The page to the left; saturates on the first page.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::First | Self::Second => Self::First,
        }
    }
}

impl TryFrom<u8> for Surface {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            other => Err(format!("surface must be 1 or 2, got {other}")),
        }
    }
}

impl From<Surface> for u8 {
    fn from(surface: Surface) -> Self {
        surface.number()
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A launcher icon and its current placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub id: IconId,
    pub label: String,
    /// Display glyph (emoji or short text).
    #[serde(alias = "icon")]
    pub glyph: String,
    /// Navigation target opened on tap.
    pub route: String,
    #[serde(default, alias = "size")]
    pub footprint: Footprint,
    #[serde(alias = "page")]
    pub surface: Surface,
    /// Linear cell index of the top-left anchor.
    pub position: usize,
}

impl Icon {
    /// Create a 1×1 icon at position 0 of the first surface.
    #[must_use]
    pub fn new(
        id: impl Into<IconId>,
        label: impl Into<String>,
        glyph: impl Into<String>,
        route: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            glyph: glyph.into(),
            route: route.into(),
            footprint: Footprint::UNIT,
            surface: Surface::First,
            position: 0,
        }
    }

    #[must_use]
    pub fn with_footprint(mut self, footprint: Footprint) -> Self {
        self.footprint = footprint;
        self
    }

    #[must_use]
    pub fn at(mut self, surface: Surface, position: usize) -> Self {
        self.surface = surface;
        self.position = position;
        self
    }

    /// Cells this icon covers on its surface; empty if it does not fit.
    #[must_use]
    pub fn cells(&self, grid: &Grid) -> Vec<usize> {
        grid.cells_for(self.position, self.footprint)
    }
}
