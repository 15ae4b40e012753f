#![forbid(unsafe_code)]

//! Grid placement and conflict resolution.
//!
//! # Role in homegrid
//! `homegrid-layout` is the engine. It owns the fixed cell grid
//! ([`grid::Grid`]), the icon model ([`icon::Icon`]), the per-call occupancy
//! index, and the resolver ([`placement::place`]) that relocates one icon and
//! displaces whatever it lands on to the nearest free slots.
//!
//! Every function here is pure: callers hand in an icon list and get a new
//! one back (or an error), and nothing is mutated in place.

pub mod catalog;
pub mod grid;
pub mod hit_test;
pub mod icon;
pub mod occupancy;
pub mod placement;
pub mod snapshot;

pub use grid::{Footprint, Grid, GridError};
pub use hit_test::GridMetrics;
pub use icon::{Icon, IconId, Surface};
pub use occupancy::{Occupancy, nearest_free_position};
pub use placement::{ArrangementIssue, PlacementError, arrangement_issues, place};
pub use snapshot::{LAYOUT_SCHEMA_VERSION, LayoutSnapshot, LayoutState, SnapshotError};
