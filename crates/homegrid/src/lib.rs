#![forbid(unsafe_code)]

//! homegrid public facade crate.
//!
//! Re-exports the launcher engine's common types and offers a prelude for
//! day-to-day usage.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use homegrid_core::event::{PointerEvent, PointerId, PointerKind};
pub use homegrid_core::geometry::{Point, Rect};
pub use homegrid_core::gesture::{
    GestureConfig, GestureIntent, GesturePhase, GestureRecognizer, SwipeDirection,
};
pub use homegrid_core::timer::{OneShotTimer, TimerId};

// --- Layout re-exports -----------------------------------------------------

pub use homegrid_layout::catalog::{default_icons, default_state};
pub use homegrid_layout::{
    ArrangementIssue, Footprint, Grid, GridError, GridMetrics, Icon, IconId, LayoutSnapshot,
    LayoutState, PlacementError, SnapshotError, Surface, arrangement_issues, place,
};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "runtime")]
pub use homegrid_runtime::{
    ConfigError, FileStore, HomeAction, HomeConfig, HomeSession, LayoutStore, MemoryStore,
    StorageError, TelemetryEvent, TelemetrySink, TracingTelemetry, write_atomic,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for homegrid hosts.
#[derive(Debug)]
pub enum Error {
    Placement(PlacementError),
    Snapshot(SnapshotError),
    #[cfg(feature = "runtime")]
    Config(ConfigError),
    #[cfg(feature = "runtime")]
    Storage(StorageError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placement(err) => write!(f, "{err}"),
            Self::Snapshot(err) => write!(f, "{err}"),
            #[cfg(feature = "runtime")]
            Self::Config(err) => write!(f, "{err}"),
            #[cfg(feature = "runtime")]
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Placement(err) => Some(err),
            Self::Snapshot(err) => Some(err),
            #[cfg(feature = "runtime")]
            Self::Config(err) => Some(err),
            #[cfg(feature = "runtime")]
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<PlacementError> for Error {
    fn from(err: PlacementError) -> Self {
        Self::Placement(err)
    }
}

impl From<SnapshotError> for Error {
    fn from(err: SnapshotError) -> Self {
        Self::Snapshot(err)
    }
}

#[cfg(feature = "runtime")]
impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

#[cfg(feature = "runtime")]
impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        Self::Storage(err)
    }
}

/// Standard result type for homegrid APIs.
pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use crate::{
        Error, Footprint, GestureIntent, Grid, GridMetrics, Icon, IconId, LayoutState,
        PlacementError, Point, PointerEvent, Result, Surface, place,
    };

    #[cfg(feature = "runtime")]
    pub use crate::{HomeAction, HomeConfig, HomeSession, MemoryStore, TracingTelemetry};

    pub use crate::{core, layout};

    #[cfg(feature = "runtime")]
    pub use crate::runtime;
}

pub use homegrid_core as core;
pub use homegrid_layout as layout;
#[cfg(feature = "runtime")]
pub use homegrid_runtime as runtime;
