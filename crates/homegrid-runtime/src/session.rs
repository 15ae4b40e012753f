#![forbid(unsafe_code)]

//! The home-screen session: one owner for the arrangement, the current
//! surface, the gesture recognizer, and the drag in flight.
//!
//! Hosts feed pointer samples and timer callbacks in; the session returns
//! [`HomeAction`]s describing what changed. All transitions happen
//! synchronously inside those calls.
//!
//! The committed arrangement in [`HomeSession::state`] is only replaced on a
//! successful drop. While a drag is active, [`HomeSession::displayed_icons`]
//! returns the speculative hover result instead.

use homegrid_core::event::PointerEvent;
use homegrid_core::geometry::Point;
use homegrid_core::gesture::{GestureIntent, GestureRecognizer, SwipeDirection};
use homegrid_core::timer::TimerId;
use homegrid_layout::{Grid, GridMetrics, Icon, IconId, LayoutState, Surface};
use serde::Serialize;
use web_time::Instant;

use crate::config::{ConfigError, HomeConfig};
use crate::drag::{DragOutcome, DragSession, HoverOutcome};
use crate::persistence::{load_layout, save_layout};
use crate::storage::LayoutStore;
use crate::telemetry::{TelemetryEvent, TelemetrySink};

/// What the host should react to after feeding the session an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum HomeAction {
    /// Navigate to `route`.
    OpenApp { id: IconId, route: String },
    EditModeChanged(bool),
    /// The displayed arrangement changed; the committed one did not.
    PreviewChanged,
    /// A drop committed a new arrangement.
    Committed,
    /// A drag ended without committing; the pre-drag arrangement is shown.
    Reverted,
    SurfaceChanged(Surface),
}

pub struct HomeSession<S, T> {
    config: HomeConfig,
    grid: Grid,
    metrics: GridMetrics,
    recognizer: GestureRecognizer<IconId>,
    state: LayoutState,
    drag: Option<DragSession>,
    store: S,
    telemetry: T,
}

impl<S: LayoutStore, T: TelemetrySink> HomeSession<S, T> {
    /// Validate `config` and load the persisted layout from `store`.
    pub fn new(config: HomeConfig, store: S, telemetry: T) -> Result<Self, ConfigError> {
        let config = config.validated()?;
        let grid = config.grid()?;
        let state = load_layout(&store, &config.home.storage_key, &grid);
        tracing::info!(
            icons = state.icons.len(),
            surface = %state.surface,
            columns = grid.columns(),
            rows = grid.rows(),
            "home session started"
        );
        Ok(Self {
            metrics: config.metrics(),
            recognizer: GestureRecognizer::new(config.gesture_config()),
            grid,
            state,
            drag: None,
            store,
            telemetry,
            config,
        })
    }

    // -----------------------------------------------------------------------
    // Inputs
    // -----------------------------------------------------------------------

    /// Feed one pointer sample.
    pub fn handle_pointer(&mut self, event: &PointerEvent, now: Instant) -> Vec<HomeAction> {
        let hit = self
            .metrics
            .icon_at(&self.grid, self.displayed_icons(), self.state.surface, event.point)
            .map(|icon| icon.id.clone());
        let intents = self.recognizer.process(event, hit, now);
        self.apply(intents)
    }

    /// Deliver the host's long-press timer callback. Stale ids are ignored.
    pub fn fire_timer(&mut self, id: TimerId) -> Vec<HomeAction> {
        let intents = self.recognizer.fire_timer(id);
        self.apply(intents)
    }

    /// Poll the long-press deadline, for hosts that drive a periodic tick.
    pub fn tick(&mut self, now: Instant) -> Vec<HomeAction> {
        let intents = self.recognizer.check_long_press(now);
        self.apply(intents)
    }

    /// Show `surface`. Ignored while a drag is in flight.
    pub fn set_surface(&mut self, surface: Surface) -> Vec<HomeAction> {
        let mut actions = Vec::new();
        if self.drag.is_some() {
            tracing::debug!(%surface, "surface change ignored during drag");
            return actions;
        }
        self.switch_surface(surface, &mut actions);
        actions
    }

    /// Enter edit mode without a long press.
    pub fn enter_edit_mode(&mut self) -> Vec<HomeAction> {
        if self.recognizer.is_editing() || !self.recognizer.enter_edit_mode() {
            return Vec::new();
        }
        vec![HomeAction::EditModeChanged(true)]
    }

    /// Leave edit mode, reverting any drag in flight.
    pub fn exit_edit_mode(&mut self) -> Vec<HomeAction> {
        let intents = self.recognizer.exit_edit_mode();
        self.apply(intents)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Committed arrangement and current surface.
    #[must_use]
    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    /// Arrangement to render: the hover result during a drag, otherwise the
    /// committed one.
    #[must_use]
    pub fn displayed_icons(&self) -> &[Icon] {
        self.drag
            .as_ref()
            .map_or(self.state.icons.as_slice(), DragSession::displayed)
    }

    /// Displayed icons on the current surface.
    #[must_use]
    pub fn visible_icons(&self) -> Vec<&Icon> {
        self.displayed_icons()
            .iter()
            .filter(|icon| icon.surface == self.state.surface)
            .collect()
    }

    #[must_use]
    pub fn surface(&self) -> Surface {
        self.state.surface
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.recognizer.is_editing()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.recognizer.is_dragging()
    }

    /// Pending long-press deadline, for hosts that schedule callbacks.
    #[must_use]
    pub fn long_press_deadline(&self) -> Option<(TimerId, Instant)> {
        self.recognizer.long_press_deadline()
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn metrics(&self) -> &GridMetrics {
        &self.metrics
    }

    #[must_use]
    pub fn config(&self) -> &HomeConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn telemetry(&self) -> &T {
        &self.telemetry
    }

    // -----------------------------------------------------------------------
    // Intent handling
    // -----------------------------------------------------------------------

    fn apply(&mut self, intents: Vec<GestureIntent<IconId>>) -> Vec<HomeAction> {
        let mut actions = Vec::new();
        for intent in intents {
            match intent {
                GestureIntent::Tap { target } => self.open(&target, &mut actions),
                GestureIntent::EnterEditMode { target } => {
                    tracing::info!(icon = %target, "edit mode entered");
                    self.telemetry
                        .record(&TelemetryEvent::EditModeEntered { id: target });
                    actions.push(HomeAction::EditModeChanged(true));
                }
                GestureIntent::ExitEditMode => {
                    tracing::info!("edit mode exited");
                    actions.push(HomeAction::EditModeChanged(false));
                }
                GestureIntent::Swipe { direction } => self.swipe(direction, &mut actions),
                GestureIntent::DragArmed { target, origin } => self.arm_drag(target, origin),
                GestureIntent::DragStart { at, .. } | GestureIntent::DragMove { at, .. } => {
                    self.hover_at(at, &mut actions);
                }
                GestureIntent::Drop { at, .. } => {
                    let inside = self.metrics.cell_at(&self.grid, at).is_some();
                    self.finish_drag(inside, &mut actions);
                }
                GestureIntent::DragCancel { .. } => self.finish_drag(false, &mut actions),
            }
        }
        actions
    }

    fn open(&mut self, id: &IconId, actions: &mut Vec<HomeAction>) {
        let Some(icon) = self.state.icons.iter().find(|icon| &icon.id == id) else {
            return;
        };
        let route = icon.route.clone();
        tracing::debug!(icon = %id, %route, "open");
        self.telemetry.record(&TelemetryEvent::IconOpened {
            id: id.clone(),
            route: route.clone(),
            surface: self.state.surface,
        });
        actions.push(HomeAction::OpenApp {
            id: id.clone(),
            route,
        });
    }

    fn swipe(&mut self, direction: SwipeDirection, actions: &mut Vec<HomeAction>) {
        if !self.config.home.enable_swipe || self.drag.is_some() {
            tracing::debug!(?direction, "swipe ignored");
            return;
        }
        let target = match direction {
            SwipeDirection::Left => self.state.surface.next(),
            SwipeDirection::Right => self.state.surface.previous(),
        };
        self.switch_surface(target, actions);
    }

    fn switch_surface(&mut self, to: Surface, actions: &mut Vec<HomeAction>) {
        let from = self.state.surface;
        if from == to {
            return;
        }
        self.state.surface = to;
        tracing::info!(%from, %to, "surface changed");
        self.persist();
        self.telemetry
            .record(&TelemetryEvent::SurfaceChanged { from, to });
        actions.push(HomeAction::SurfaceChanged(to));
    }

    fn arm_drag(&mut self, target: IconId, origin: Point) {
        let Some(icon) = self.state.icons.iter().find(|icon| icon.id == target) else {
            return;
        };
        let grabbed = self
            .metrics
            .cell_at(&self.grid, origin)
            .unwrap_or(icon.position);
        let offset = DragSession::grab_offset_for(&self.grid, icon.position, grabbed);
        self.drag = Some(DragSession::begin(target, self.state.icons.clone(), offset));
    }

    fn hover_at(&mut self, at: Point, actions: &mut Vec<HomeAction>) {
        let Some(cell) = self.metrics.cell_at(&self.grid, at) else {
            return;
        };
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        if drag.hover(&self.grid, cell, self.state.surface) == HoverOutcome::Updated {
            actions.push(HomeAction::PreviewChanged);
        }
    }

    fn finish_drag(&mut self, inside_grid: bool, actions: &mut Vec<HomeAction>) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let moved = drag.moving().clone();
        match drag.finish(inside_grid) {
            DragOutcome::Committed(icons) => {
                self.state.icons = icons;
                tracing::info!(icon = %moved, surface = %self.state.surface, "layout committed");
                self.persist();
                self.telemetry.record(&TelemetryEvent::LayoutCommitted {
                    moved,
                    surface: self.state.surface,
                });
                actions.push(HomeAction::Committed);
            }
            DragOutcome::Cancelled(origin) => {
                self.state.icons = origin;
                tracing::debug!(icon = %moved, "drag reverted");
                actions.push(HomeAction::Reverted);
            }
        }
    }

    fn persist(&mut self) {
        if let Err(error) = save_layout(&mut self.store, &self.config.home.storage_key, &self.state)
        {
            tracing::warn!(%error, "failed to persist layout");
        }
    }
}
