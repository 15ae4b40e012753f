#![forbid(unsafe_code)]

//! Pixel → cell hit testing.
//!
//! The renderer lays the grid out as `columns × rows` cells of equal size
//! separated by a uniform gap. A point inside a gap belongs to the cell on
//! its top/left so that dragging across a gap never flickers to "no cell".

use homegrid_core::geometry::{Point, Rect};

use crate::grid::Grid;
use crate::icon::{Icon, Surface};

/// Pixel geometry of the rendered grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    /// Top-left corner of cell 0.
    pub origin: Point,
    pub cell_width: f32,
    pub cell_height: f32,
    /// Spacing between adjacent cells, both axes.
    pub gap: f32,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            origin: Point::new(0.0, 0.0),
            cell_width: 80.0,
            cell_height: 80.0,
            gap: 16.0,
        }
    }
}

impl GridMetrics {
    /// Outer bounds of the whole grid (no trailing gap).
    #[must_use]
    pub fn bounds(&self, grid: &Grid) -> Rect {
        let cols = f32::from(grid.columns());
        let rows = f32::from(grid.rows());
        Rect::new(
            self.origin.x,
            self.origin.y,
            cols * self.cell_width + (cols - 1.0) * self.gap,
            rows * self.cell_height + (rows - 1.0) * self.gap,
        )
    }

    /// Cell under `point`, or `None` outside the grid.
    #[must_use]
    pub fn cell_at(&self, grid: &Grid, point: Point) -> Option<usize> {
        if !self.bounds(grid).contains(point) {
            return None;
        }
        let col = axis_index(point.x - self.origin.x, self.cell_width + self.gap, grid.columns());
        let row = axis_index(point.y - self.origin.y, self.cell_height + self.gap, grid.rows());
        Some(grid.position_of(row, col))
    }

    /// Center of `position` in pixels, or `None` past the end of the grid.
    #[must_use]
    pub fn cell_center(&self, grid: &Grid, position: usize) -> Option<Point> {
        if position >= grid.cell_count() {
            return None;
        }
        let col = grid.col_of(position) as f32;
        let row = grid.row_of(position) as f32;
        Some(Point::new(
            self.origin.x + col * (self.cell_width + self.gap) + self.cell_width / 2.0,
            self.origin.y + row * (self.cell_height + self.gap) + self.cell_height / 2.0,
        ))
    }

    /// The icon on `surface` whose footprint covers the cell under `point`.
    #[must_use]
    pub fn icon_at<'a>(
        &self,
        grid: &Grid,
        icons: &'a [Icon],
        surface: Surface,
        point: Point,
    ) -> Option<&'a Icon> {
        let cell = self.cell_at(grid, point)?;
        icons
            .iter()
            .filter(|icon| icon.surface == surface)
            .find(|icon| icon.cells(grid).contains(&cell))
    }
}

fn axis_index(offset: f32, pitch: f32, count: u16) -> usize {
    let last = usize::from(count.saturating_sub(1));
    if pitch <= 0.0 {
        return 0;
    }
    let index = (offset / pitch).floor();
    if index <= 0.0 {
        0
    } else {
        (index as usize).min(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Footprint;

    fn metrics() -> GridMetrics {
        GridMetrics {
            origin: Point::new(10.0, 20.0),
            cell_width: 50.0,
            cell_height: 40.0,
            gap: 10.0,
        }
    }

    #[test]
    fn bounds_exclude_trailing_gap() {
        let rect = metrics().bounds(&Grid::DEFAULT);
        assert_eq!(rect, Rect::new(10.0, 20.0, 230.0, 290.0));
    }

    #[test]
    fn cell_at_maps_rows_and_columns() {
        let m = metrics();
        let g = Grid::DEFAULT;
        assert_eq!(m.cell_at(&g, Point::new(10.0, 20.0)), Some(0));
        assert_eq!(m.cell_at(&g, Point::new(75.0, 25.0)), Some(1));
        assert_eq!(m.cell_at(&g, Point::new(239.0, 309.0)), Some(23));
        assert_eq!(m.cell_at(&g, Point::new(135.0, 75.0)), Some(6));
    }

    #[test]
    fn gap_belongs_to_top_left_cell() {
        let m = metrics();
        // x = 65 is inside the gap between columns 0 and 1.
        assert_eq!(m.cell_at(&Grid::DEFAULT, Point::new(65.0, 25.0)), Some(0));
        // y = 65 is inside the gap between rows 0 and 1.
        assert_eq!(m.cell_at(&Grid::DEFAULT, Point::new(15.0, 65.0)), Some(0));
    }

    #[test]
    fn outside_and_nan_miss() {
        let m = metrics();
        let g = Grid::DEFAULT;
        assert_eq!(m.cell_at(&g, Point::new(9.0, 30.0)), None);
        assert_eq!(m.cell_at(&g, Point::new(240.0, 30.0)), None);
        assert_eq!(m.cell_at(&g, Point::new(30.0, 310.0)), None);
        assert_eq!(m.cell_at(&g, Point::new(f32::NAN, 30.0)), None);
    }

    #[test]
    fn center_round_trips_through_cell_at() {
        let m = metrics();
        let g = Grid::DEFAULT;
        for position in 0..g.cell_count() {
            let center = m.cell_center(&g, position).unwrap();
            assert_eq!(m.cell_at(&g, center), Some(position));
        }
        assert_eq!(m.cell_center(&g, 24), None);
    }

    #[test]
    fn icon_at_covers_whole_footprint() {
        let m = GridMetrics::default();
        let g = Grid::DEFAULT;
        let icons = vec![
            Icon::new("clock", "Clock", "C", "/app/clock").with_footprint(Footprint::new(2, 2)),
            Icon::new("timer", "Timer", "T", "/app/timer").at(Surface::First, 2),
            Icon::new("far", "Far", "F", "/far").at(Surface::Second, 5),
        ];
        let lower_right = m.cell_center(&g, 5).unwrap();
        assert_eq!(
            m.icon_at(&g, &icons, Surface::First, lower_right).map(|i| i.id.as_str()),
            Some("clock")
        );
        let empty = m.cell_center(&g, 3).unwrap();
        assert!(m.icon_at(&g, &icons, Surface::First, empty).is_none());
        assert_eq!(
            m.icon_at(&g, &icons, Surface::Second, lower_right).map(|i| i.id.as_str()),
            Some("far")
        );
    }
}
