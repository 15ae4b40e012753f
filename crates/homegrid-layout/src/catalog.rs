#![forbid(unsafe_code)]

//! Static default arrangement, used on first launch and whenever the
//! persisted layout cannot be trusted.

use crate::grid::Footprint;
use crate::icon::{Icon, Surface};
use crate::snapshot::LayoutState;

fn company(name: &str, label: &str, glyph: &str, position: usize) -> Icon {
    Icon::new(
        format!("company:{name}"),
        label,
        glyph,
        format!("/app/company/{name}"),
    )
    .at(Surface::First, position)
}

/// The launcher's built-in icons, in catalog order.
#[must_use]
pub fn default_icons() -> Vec<Icon> {
    vec![
        Icon::new("clock-widget", "Clock", "🕒", "/app/clock")
            .with_footprint(Footprint::new(2, 2))
            .at(Surface::First, 0),
        Icon::new("timer", "Timer", "⏱️", "/app/timer").at(Surface::First, 2),
        Icon::new("settings", "Settings", "⚙️", "/app/settings").at(Surface::First, 3),
        Icon::new("resume", "Resume", "📄", "/app/resume").at(Surface::First, 6),
        company("salesforce", "Salesforce", "🏢", 7),
        company("strava", "Strava", "🏃", 8),
        company("lowes", "Lowe's", "🏠", 9),
        company("consulting", "Consulting", "💼", 10),
    ]
}

/// Default icons showing the first surface.
#[must_use]
pub fn default_state() -> LayoutState {
    LayoutState {
        icons: default_icons(),
        surface: Surface::First,
    }
}
