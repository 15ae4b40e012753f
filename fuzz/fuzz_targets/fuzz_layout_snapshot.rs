#![no_main]

use homegrid_layout::{Grid, LayoutSnapshot, arrangement_issues};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(snapshot) = serde_json::from_slice::<LayoutSnapshot>(data) else {
        return;
    };
    // Anything accepted must be safe to render and edit.
    if let Ok(state) = snapshot.into_state(&Grid::DEFAULT) {
        assert!(!state.icons.is_empty());
        assert!(arrangement_issues(&Grid::DEFAULT, &state.icons).is_empty());
    }
});
