#![forbid(unsafe_code)]

//! A single in-progress drag relocation.
//!
//! The session snapshots the full icon list when the drag is armed. Every
//! hover recomputes the placement from that snapshot, never from the
//! previous hover result, so speculative errors cannot compound. Finishing
//! the drag either commits the last successful hover result or hands the
//! untouched snapshot back for rollback.

use homegrid_layout::{Grid, Icon, IconId, PlacementError, Surface, place};

/// Result of a hover recomputation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverOutcome {
    /// Same pointer cell as the previous sample; nothing recomputed.
    Unchanged,
    /// A new speculative arrangement is displayed.
    Updated,
    /// The resolver refused this cell; the previous result stays displayed.
    Rejected(PlacementError),
    /// The grab offset would put the anchor off the grid.
    OffGrid,
}

/// How a drag ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// The last hover result becomes the committed arrangement.
    Committed(Vec<Icon>),
    /// The pre-drag arrangement, element-wise identical to what was passed
    /// to [`DragSession::begin`].
    Cancelled(Vec<Icon>),
}

#[derive(Debug, Clone)]
pub struct DragSession {
    moving: IconId,
    origin: Vec<Icon>,
    hover: Option<Vec<Icon>>,
    /// `(rows, cols)` from the icon's anchor to the grabbed cell.
    grab_offset: (i32, i32),
    last_cell: Option<(usize, Surface)>,
}

impl DragSession {
    /// Start a drag of `moving`, with `origin` as the rollback target.
    #[must_use]
    pub fn begin(moving: IconId, origin: Vec<Icon>, grab_offset: (i32, i32)) -> Self {
        tracing::debug!(icon = %moving, ?grab_offset, "drag armed");
        Self {
            moving,
            origin,
            hover: None,
            grab_offset,
            last_cell: None,
        }
    }

    /// Offset from `anchor` to `grabbed`, in `(rows, cols)`.
    #[must_use]
    pub fn grab_offset_for(grid: &Grid, anchor: usize, grabbed: usize) -> (i32, i32) {
        let delta = |to: usize, from: usize| {
            let to = i64::try_from(to).unwrap_or(0);
            let from = i64::try_from(from).unwrap_or(0);
            i32::try_from(to - from).unwrap_or(0)
        };
        (
            delta(grid.row_of(grabbed), grid.row_of(anchor)),
            delta(grid.col_of(grabbed), grid.col_of(anchor)),
        )
    }

    #[must_use]
    pub fn moving(&self) -> &IconId {
        &self.moving
    }

    #[must_use]
    pub fn origin(&self) -> &[Icon] {
        &self.origin
    }

    #[must_use]
    pub fn grab_offset(&self) -> (i32, i32) {
        self.grab_offset
    }

    /// Last successful speculative arrangement, if any.
    #[must_use]
    pub fn hover_result(&self) -> Option<&[Icon]> {
        self.hover.as_deref()
    }

    /// The arrangement to render right now.
    #[must_use]
    pub fn displayed(&self) -> &[Icon] {
        self.hover.as_deref().unwrap_or(&self.origin)
    }

    /// Recompute the placement for the pointer over `pointer_cell`.
    pub fn hover(&mut self, grid: &Grid, pointer_cell: usize, surface: Surface) -> HoverOutcome {
        if self.last_cell == Some((pointer_cell, surface)) {
            return HoverOutcome::Unchanged;
        }
        self.last_cell = Some((pointer_cell, surface));

        let (d_row, d_col) = self.grab_offset;
        let Some(anchor) = grid.offset_position(pointer_cell, -d_row, -d_col) else {
            tracing::debug!(icon = %self.moving, pointer_cell, "anchor off grid");
            return HoverOutcome::OffGrid;
        };

        match place(grid, &self.origin, &self.moving, anchor, surface) {
            Ok(icons) => {
                tracing::debug!(icon = %self.moving, anchor, %surface, "hover updated");
                self.hover = Some(icons);
                HoverOutcome::Updated
            }
            Err(error) => {
                tracing::debug!(icon = %self.moving, anchor, %error, "hover rejected");
                HoverOutcome::Rejected(error)
            }
        }
    }

    /// End the drag. Commits only if a hover succeeded and the pointer was
    /// released inside the grid.
    #[must_use]
    pub fn finish(self, inside_grid: bool) -> DragOutcome {
        match self.hover {
            Some(icons) if inside_grid => DragOutcome::Committed(icons),
            _ => DragOutcome::Cancelled(self.origin),
        }
    }
}
