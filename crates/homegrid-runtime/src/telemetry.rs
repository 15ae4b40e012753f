#![forbid(unsafe_code)]

//! Fire-and-forget usage events.
//!
//! Sinks are notified after the session has already decided what to do;
//! nothing a sink does can change an outcome.

use homegrid_layout::{IconId, Surface};

/// A discrete, reportable user intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelemetryEvent {
    IconOpened {
        id: IconId,
        route: String,
        surface: Surface,
    },
    EditModeEntered { id: IconId },
    LayoutCommitted { moved: IconId, surface: Surface },
    SurfaceChanged { from: Surface, to: Surface },
}

impl TelemetryEvent {
    /// Stable event name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::IconOpened { .. } => "icon_opened",
            Self::EditModeEntered { .. } => "edit_mode_entered",
            Self::LayoutCommitted { .. } => "layout_committed",
            Self::SurfaceChanged { .. } => "surface_changed",
        }
    }
}

pub trait TelemetrySink {
    fn record(&mut self, event: &TelemetryEvent);
}

impl<T: TelemetrySink + ?Sized> TelemetrySink for Box<T> {
    fn record(&mut self, event: &TelemetryEvent) {
        (**self).record(event);
    }
}

/// Reports events as structured `tracing` records at INFO.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTelemetry;

impl TelemetrySink for TracingTelemetry {
    fn record(&mut self, event: &TelemetryEvent) {
        let name = event.name();
        match event {
            TelemetryEvent::IconOpened { id, route, surface } => {
                tracing::info!(
                    event = name,
                    icon = %id,
                    route = %route,
                    surface = %surface,
                    "telemetry"
                );
            }
            TelemetryEvent::EditModeEntered { id } => {
                tracing::info!(event = name, icon = %id, "telemetry");
            }
            TelemetryEvent::LayoutCommitted { moved, surface } => {
                tracing::info!(event = name, icon = %moved, surface = %surface, "telemetry");
            }
            TelemetryEvent::SurfaceChanged { from, to } => {
                tracing::info!(event = name, from = %from, to = %to, "telemetry");
            }
        }
    }
}

/// Drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTelemetry;

impl TelemetrySink for NullTelemetry {
    fn record(&mut self, _event: &TelemetryEvent) {}
}

/// Keeps every event in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingTelemetry {
    events: Vec<TelemetryEvent>,
}

impl RecordingTelemetry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[TelemetryEvent] {
        &self.events
    }

    /// Event names in arrival order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.events.iter().map(TelemetryEvent::name).collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TelemetrySink for RecordingTelemetry {
    fn record(&mut self, event: &TelemetryEvent) {
        self.events.push(event.clone());
    }
}
