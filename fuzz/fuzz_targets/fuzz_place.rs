#![no_main]

use arbitrary::Arbitrary;
use homegrid_layout::{Footprint, Grid, Icon, IconId, Occupancy, Surface, arrangement_issues, place};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    columns: u8,
    rows: u8,
    icons: Vec<(u8, u8, bool, u8)>,
    moves: Vec<(u8, u8, bool)>,
}

fuzz_target!(|input: Input| {
    let columns = u16::from(input.columns % 6) + 2; // 2..8
    let rows = u16::from(input.rows % 7) + 2; // 2..9
    let Ok(grid) = Grid::new(columns, rows) else {
        return;
    };

    // Seed an overlap-free arrangement: each icon takes its requested cell
    // only when every covered cell is free on its surface.
    let mut icons: Vec<Icon> = Vec::new();
    for (i, &(cols, rows, second, at)) in input.icons.iter().take(24).enumerate() {
        let footprint = Footprint::new(u16::from(cols % 2) + 1, u16::from(rows % 2) + 1);
        let surface = if second { Surface::Second } else { Surface::First };
        let position = usize::from(at) % grid.cell_count();
        if !grid.fits(position, footprint) {
            continue;
        }
        let occupancy = Occupancy::build(&grid, &icons, surface, None);
        if !occupancy.all_free(&grid.cells_for(position, footprint)) {
            continue;
        }
        icons.push(
            Icon::new(format!("i{i}"), "icon", "*", "/")
                .with_footprint(footprint)
                .at(surface, position),
        );
    }
    if icons.is_empty() {
        return;
    }
    assert!(arrangement_issues(&grid, &icons).is_empty());

    for &(which, to, second) in input.moves.iter().take(16) {
        let moving: IconId = icons[usize::from(which) % icons.len()].id.clone();
        let surface = if second { Surface::Second } else { Surface::First };
        let target = usize::from(to) % (grid.cell_count() + 2);
        if let Ok(next) = place(&grid, &icons, &moving, target, surface) {
            assert_eq!(next.len(), icons.len(), "icon count changed");
            assert!(
                arrangement_issues(&grid, &next).is_empty(),
                "overlap after moving {moving} to {target}"
            );
            icons = next;
        }
    }
});
