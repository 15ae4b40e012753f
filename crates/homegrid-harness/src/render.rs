//! Plain-text grid rendering.
//!
//! Every cell shows the id of the icon covering it, or `.` when free. Cells
//! of a multi-cell icon repeat its id, so footprints are visible at a glance.

use std::fmt::Write as _;

use homegrid::layout::Occupancy;
use homegrid::{Grid, Icon, Surface};

const CELL_WIDTH: usize = 14;

/// Render `surface` of `icons` as one line per grid row.
#[must_use]
pub fn render_grid(grid: &Grid, icons: &[Icon], surface: Surface) -> String {
    let occupancy = Occupancy::build(grid, icons, surface, None);
    let mut out = String::new();
    let _ = writeln!(out, "surface {surface}");

    for row in 0..usize::from(grid.rows()) {
        let mut line = String::new();
        for col in 0..usize::from(grid.columns()) {
            let cell = grid.position_of(row, col);
            let label = occupancy
                .occupant(cell)
                .map_or(".", |idx| icons[idx].id.as_str());
            let label: String = label.chars().take(CELL_WIDTH - 1).collect();
            let _ = write!(line, "{label:<CELL_WIDTH$}");
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use homegrid::{Footprint, default_icons};

    #[test]
    fn widget_repeats_across_its_cells() {
        let text = render_grid(&Grid::DEFAULT, &default_icons(), Surface::First);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "surface 1");
        assert!(lines[1].starts_with("clock-widget  clock-widget  timer"));
        assert!(lines[2].starts_with("clock-widget  clock-widget  resume"));
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[6], ".             .             .             .");
    }

    #[test]
    fn other_surface_is_empty() {
        let text = render_grid(&Grid::DEFAULT, &default_icons(), Surface::Second);
        assert!(text.lines().skip(1).all(|line| line.split_whitespace().all(|c| c == ".")));
    }

    #[test]
    fn long_ids_are_truncated() {
        let grid = Grid::new(2, 1).unwrap();
        let icons = vec![
            Icon::new("an-extremely-long-identifier", "x", "*", "/x")
                .with_footprint(Footprint::UNIT),
        ];
        let text = render_grid(&grid, &icons, Surface::First);
        assert!(text.contains("an-extremely-"));
        assert!(!text.contains("an-extremely-l"));
    }
}
