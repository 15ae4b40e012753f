//! Scripted pointer traces.
//!
//! A trace is a JSON array of steps ordered by `t_ms` (milliseconds since
//! the trace started):
//!
//! ```json
//! [
//!   { "t_ms": 0,   "kind": "down", "x": 232, "y": 40 },
//!   { "t_ms": 450, "timer": true },
//!   { "t_ms": 460, "kind": "up",   "x": 232, "y": 40 }
//! ]
//! ```
//!
//! `pointer` defaults to 1. Before every step the session's long-press
//! deadline is polled at the step's timestamp, so a `timer` step is only
//! needed to fire a long press that is not followed by another sample.

use homegrid::{HomeAction, HomeSession, LayoutStore, PointerEvent, PointerKind, TelemetrySink};
use serde::{Deserialize, Serialize};
use web_time::{Duration, Instant};

use crate::error::{HarnessError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Down,
    Move,
    Up,
    Cancel,
}

impl From<TraceKind> for PointerKind {
    fn from(kind: TraceKind) -> Self {
        match kind {
            TraceKind::Down => Self::Down,
            TraceKind::Move => Self::Move,
            TraceKind::Up => Self::Up,
            TraceKind::Cancel => Self::Cancel,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TraceStep {
    Timer {
        t_ms: u64,
        timer: bool,
    },
    Pointer {
        t_ms: u64,
        #[serde(default = "default_pointer")]
        pointer: u32,
        kind: TraceKind,
        x: f32,
        y: f32,
    },
}

fn default_pointer() -> u32 {
    1
}

impl TraceStep {
    #[must_use]
    pub fn t_ms(&self) -> u64 {
        match self {
            Self::Timer { t_ms, .. } | Self::Pointer { t_ms, .. } => *t_ms,
        }
    }
}

/// One action emitted during replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayEntry {
    pub t_ms: u64,
    #[serde(flatten)]
    pub action: HomeAction,
}

/// Parse a trace and check that timestamps never go backwards.
pub fn parse_trace(json: &str) -> Result<Vec<TraceStep>> {
    let steps: Vec<TraceStep> = serde_json::from_str(json)?;
    if let Some(pair) = steps.windows(2).find(|w| w[1].t_ms() < w[0].t_ms()) {
        return Err(HarnessError::invalid(format!(
            "trace timestamps go backwards ({} ms after {} ms)",
            pair[1].t_ms(),
            pair[0].t_ms()
        )));
    }
    Ok(steps)
}

/// Feed `steps` into `session`, returning every action it emitted.
pub fn replay<S: LayoutStore, T: TelemetrySink>(
    session: &mut HomeSession<S, T>,
    steps: &[TraceStep],
    start: Instant,
) -> Vec<ReplayEntry> {
    let mut entries = Vec::new();
    for step in steps {
        let t_ms = step.t_ms();
        let now = start + Duration::from_millis(t_ms);
        let mut actions = session.tick(now);
        if let TraceStep::Pointer {
            pointer,
            kind,
            x,
            y,
            ..
        } = *step
        {
            let event = PointerEvent::new(
                homegrid::PointerId(pointer),
                kind.into(),
                homegrid::Point::new(x, y),
            );
            actions.extend(session.handle_pointer(&event, now));
        }
        tracing::debug!(t_ms, actions = actions.len(), "replayed step");
        entries.extend(actions.into_iter().map(|action| ReplayEntry { t_ms, action }));
    }
    entries
}
