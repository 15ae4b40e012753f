#![forbid(unsafe_code)]

//! Gesture recognition: transforms raw pointer samples into launcher intents.
//!
//! [`GestureRecognizer`] is a stateful processor that converts
//! [`PointerEvent`] sequences into high-level [`GestureIntent`]s: open an
//! icon, enter edit mode, arm/start/move/drop a drag, or swipe between pages.
//!
//! The recognizer is generic over the hit-target key `K`. The caller performs
//! hit testing and passes the target under the pointer with each sample, so
//! this module has no knowledge of icons or grids.
//!
//! # State Machine
//!
//! ```text
//! browse:  Idle --down on target--> PressPending --timer--> Suppressed --up--> Idle(edit)
//!                                     |--up over same target--> Tap
//!                                     |--up after long horizontal travel--> Swipe
//! edit:    Idle --down on target--> Armed --move > tolerance--> Dragging --up--> Drop
//!                                     |--up/cancel--> DragCancel      |--cancel--> DragCancel
//!          Idle --down on empty--> Dismissing --up--> ExitEditMode
//! ```
//!
//! # Invariants
//!
//! 1. Only one pointer is captured at a time. Samples from any other pointer
//!    (including a second `Down`) are ignored until the captured one is
//!    released or cancelled.
//! 2. The long-press timer is armed only in `PressPending` and is cancelled
//!    synchronously on movement beyond the press tolerance, on release, and on
//!    cancel. A stale [`TimerId`] passed to [`fire_timer`] is a no-op.
//! 3. Tap and EnterEditMode never both emit for the same press: once the long
//!    press fires, the held pointer's release is swallowed.
//! 4. Every `DragArmed` is followed by exactly one `Drop` or `DragCancel`,
//!    even when the captured pointer goes down again without releasing.
//! 5. After [`reset`](GestureRecognizer::reset), all state returns to browse-mode idle.
//!
//! [`fire_timer`]: GestureRecognizer::fire_timer

use std::fmt::Debug;

use web_time::{Duration, Instant};

use crate::event::{PointerEvent, PointerId, PointerKind};
use crate::geometry::Point;
use crate::timer::{OneShotTimer, TimerId};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Thresholds and timeouts for gesture recognition.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    /// Hold duration before a stationary press enters edit mode (default: 400ms).
    pub long_press: Duration,
    /// Movement radius (px) that cancels a pending long press (default: 10).
    pub press_tolerance: f32,
    /// Movement radius (px) an armed drag must exceed to start (default: 6).
    pub drag_tolerance: f32,
    /// Horizontal travel (px) for a release to count as a page swipe (default: 50).
    pub swipe_threshold: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            long_press: Duration::from_millis(400),
            press_tolerance: 10.0,
            drag_tolerance: 6.0,
            swipe_threshold: 50.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Intents
// ---------------------------------------------------------------------------

/// Direction of a horizontal page swipe (direction of finger travel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// High-level gesture produced by the recognizer.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureIntent<K> {
    /// Press and release on the same target without a long press: open it.
    Tap { target: K },
    /// The long press fired on `target`.
    EnterEditMode { target: K },
    /// Edit mode was dismissed.
    ExitEditMode,
    /// Horizontal swipe released outside edit mode.
    Swipe { direction: SwipeDirection },
    /// Pointer captured on `target` in edit mode; the caller should snapshot
    /// its arrangement for rollback.
    DragArmed { target: K, origin: Point },
    /// Movement exceeded the drag tolerance.
    DragStart { target: K, at: Point },
    /// Pointer moved while dragging.
    DragMove { target: K, at: Point },
    /// Pointer released while dragging.
    Drop { target: K, at: Point },
    /// Drag aborted (released before the drag started, pointer cancel, or
    /// edit mode exited mid-drag). The caller should roll back.
    DragCancel { target: K },
}

/// Coarse recognizer phase, for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    Idle,
    PressPending,
    Suppressed,
    Armed,
    Dragging,
    Dismissing,
}

// ---------------------------------------------------------------------------
// Internal state
// ---------------------------------------------------------------------------

/// A captured pointer and where it went down.
#[derive(Debug, Clone, Copy)]
struct Press {
    pointer: PointerId,
    origin: Point,
}

#[derive(Debug, Clone)]
enum Phase<K> {
    Idle,
    /// Browse mode. `target` is `None` for presses on empty space, which only
    /// track a potential swipe and never arm the long-press timer.
    PressPending { press: Press, target: Option<K> },
    /// Long press fired; the still-held pointer is swallowed.
    Suppressed { pointer: PointerId },
    Armed { press: Press, target: K },
    Dragging { press: Press, target: K },
    Dismissing { press: Press },
}

// ---------------------------------------------------------------------------
// GestureRecognizer
// ---------------------------------------------------------------------------

/// Stateful gesture recognizer for the launcher grid.
///
/// Call [`process`](GestureRecognizer::process) for each incoming
/// [`PointerEvent`]. Deliver the long press either by scheduling a callback
/// for [`long_press_deadline`](GestureRecognizer::long_press_deadline) and
/// calling [`fire_timer`](GestureRecognizer::fire_timer), or by calling
/// [`check_long_press`](GestureRecognizer::check_long_press) on every tick.
pub struct GestureRecognizer<K> {
    config: GestureConfig,
    phase: Phase<K>,
    editing: bool,
    long_press: OneShotTimer,
}

impl<K: Clone + PartialEq + Debug> Debug for GestureRecognizer<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureRecognizer")
            .field("phase", &self.phase())
            .field("editing", &self.editing)
            .field("long_press_armed", &self.long_press.is_armed())
            .finish()
    }
}

impl<K: Clone + PartialEq + Debug> GestureRecognizer<K> {
    /// Create a new gesture recognizer with the given configuration.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            editing: false,
            long_press: OneShotTimer::new(),
        }
    }

    /// Process a pointer sample, returning any intents produced.
    ///
    /// `hit` is the target under `event.point`, as determined by the caller.
    /// It is only consulted for `Down` and `Up` samples.
    pub fn process(
        &mut self,
        event: &PointerEvent,
        hit: Option<K>,
        now: Instant,
    ) -> Vec<GestureIntent<K>> {
        let mut out = Vec::with_capacity(2);

        if let Some(captured) = self.captured_pointer()
            && captured != event.pointer
        {
            return out;
        }

        match event.kind {
            PointerKind::Down => self.on_down(event, hit, now, &mut out),
            PointerKind::Move => self.on_move(event, &mut out),
            PointerKind::Up => self.on_up(event, hit, &mut out),
            PointerKind::Cancel => self.on_cancel(&mut out),
        }

        out
    }

    /// Deliver the host's timer callback for `id`.
    ///
    /// A cancelled or superseded id is a no-op.
    pub fn fire_timer(&mut self, id: TimerId) -> Vec<GestureIntent<K>> {
        if !self.long_press.fire(id) {
            return Vec::new();
        }
        self.on_long_press()
    }

    /// Check for long press timeout. Call periodically (e.g., on tick).
    pub fn check_long_press(&mut self, now: Instant) -> Vec<GestureIntent<K>> {
        match self.long_press.poll(now) {
            Some(_) => self.on_long_press(),
            None => Vec::new(),
        }
    }

    /// Pending long-press deadline, for hosts that schedule callbacks.
    #[inline]
    #[must_use]
    pub fn long_press_deadline(&self) -> Option<(TimerId, Instant)> {
        self.long_press.deadline()
    }

    /// Enter edit mode programmatically (e.g. from an "Edit" button).
    ///
    /// Returns `false` (and does nothing) while a pointer is captured.
    pub fn enter_edit_mode(&mut self) -> bool {
        if self.captured_pointer().is_some() {
            return false;
        }
        self.editing = true;
        true
    }

    /// Leave edit mode, cancelling any drag in flight.
    pub fn exit_edit_mode(&mut self) -> Vec<GestureIntent<K>> {
        let mut out = Vec::new();
        if !self.editing {
            return out;
        }
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Armed { target, .. } | Phase::Dragging { target, .. } => {
                out.push(GestureIntent::DragCancel { target });
            }
            _ => {}
        }
        self.long_press.cancel();
        self.editing = false;
        out.push(GestureIntent::ExitEditMode);
        out
    }

    /// Whether edit mode is active.
    #[inline]
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Whether a drag is currently in progress (past the drag tolerance).
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// The pointer currently captured, if any.
    #[must_use]
    pub fn captured_pointer(&self) -> Option<PointerId> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Suppressed { pointer } => Some(*pointer),
            Phase::PressPending { press, .. }
            | Phase::Armed { press, .. }
            | Phase::Dragging { press, .. }
            | Phase::Dismissing { press } => Some(press.pointer),
        }
    }

    /// Coarse phase of the state machine.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match self.phase {
            Phase::Idle => GesturePhase::Idle,
            Phase::PressPending { .. } => GesturePhase::PressPending,
            Phase::Suppressed { .. } => GesturePhase::Suppressed,
            Phase::Armed { .. } => GesturePhase::Armed,
            Phase::Dragging { .. } => GesturePhase::Dragging,
            Phase::Dismissing { .. } => GesturePhase::Dismissing,
        }
    }

    /// Reset all gesture state to browse-mode idle.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.editing = false;
        self.long_press.cancel();
    }

    /// Get a reference to the current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Update the configuration.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }
}

// ---------------------------------------------------------------------------
// Internal event handlers
// ---------------------------------------------------------------------------

impl<K: Clone + PartialEq + Debug> GestureRecognizer<K> {
    fn on_down(
        &mut self,
        event: &PointerEvent,
        hit: Option<K>,
        now: Instant,
        out: &mut Vec<GestureIntent<K>>,
    ) {
        let press = Press {
            pointer: event.pointer,
            origin: event.point,
        };

        // A repeated down from the captured pointer means its release was
        // lost; close the abandoned press before starting the new one.
        self.long_press.cancel();
        if let Phase::Armed { target, .. } | Phase::Dragging { target, .. } =
            std::mem::replace(&mut self.phase, Phase::Idle)
        {
            #[cfg(feature = "tracing")]
            tracing::debug!(icon = ?target, "drag abandoned by repeated down");
            out.push(GestureIntent::DragCancel { target });
        }

        if self.editing {
            self.phase = match hit {
                Some(target) => {
                    out.push(GestureIntent::DragArmed {
                        target: target.clone(),
                        origin: event.point,
                    });
                    Phase::Armed { press, target }
                }
                None => Phase::Dismissing { press },
            };
            return;
        }

        if hit.is_some() {
            let _id = self.long_press.arm(now, self.config.long_press);
            #[cfg(feature = "tracing")]
            tracing::debug!(timer = _id.get(), hit = ?hit, "long press armed");
        }
        self.phase = Phase::PressPending { press, target: hit };
    }

    fn on_move(&mut self, event: &PointerEvent, out: &mut Vec<GestureIntent<K>>) {
        match &self.phase {
            Phase::PressPending { press, .. } => {
                if self.long_press.is_armed()
                    && press.origin.distance(event.point) > self.config.press_tolerance
                {
                    self.long_press.cancel();
                    #[cfg(feature = "tracing")]
                    tracing::debug!("long press cancelled by movement");
                }
            }
            Phase::Armed { press, target } => {
                if press.origin.distance(event.point) > self.config.drag_tolerance {
                    let (press, target) = (*press, target.clone());
                    out.push(GestureIntent::DragStart {
                        target: target.clone(),
                        at: event.point,
                    });
                    self.phase = Phase::Dragging { press, target };
                }
            }
            Phase::Dragging { target, .. } => {
                out.push(GestureIntent::DragMove {
                    target: target.clone(),
                    at: event.point,
                });
            }
            Phase::Idle | Phase::Suppressed { .. } | Phase::Dismissing { .. } => {}
        }
    }

    fn on_up(&mut self, event: &PointerEvent, hit: Option<K>, out: &mut Vec<GestureIntent<K>>) {
        self.long_press.cancel();

        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::PressPending { press, target } => {
                if let Some(direction) = self.swipe_direction(press.origin, event.point) {
                    out.push(GestureIntent::Swipe { direction });
                } else if let Some(target) = target
                    && hit.as_ref() == Some(&target)
                {
                    out.push(GestureIntent::Tap { target });
                }
            }
            Phase::Armed { target, .. } => {
                out.push(GestureIntent::DragCancel { target });
            }
            Phase::Dragging { target, .. } => {
                out.push(GestureIntent::Drop {
                    target,
                    at: event.point,
                });
            }
            Phase::Dismissing { press } => {
                if press.origin.distance(event.point) <= self.config.press_tolerance {
                    self.editing = false;
                    out.push(GestureIntent::ExitEditMode);
                }
            }
            Phase::Idle | Phase::Suppressed { .. } => {}
        }
    }

    fn on_cancel(&mut self, out: &mut Vec<GestureIntent<K>>) {
        self.long_press.cancel();

        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Armed { target, .. } | Phase::Dragging { target, .. } => {
                out.push(GestureIntent::DragCancel { target });
            }
            _ => {}
        }
    }

    fn on_long_press(&mut self) -> Vec<GestureIntent<K>> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::PressPending {
                press,
                target: Some(target),
            } => {
                #[cfg(feature = "tracing")]
                tracing::debug!(pressed = ?target, "long press fired, entering edit mode");
                self.editing = true;
                self.phase = Phase::Suppressed {
                    pointer: press.pointer,
                };
                vec![GestureIntent::EnterEditMode { target }]
            }
            other => {
                self.phase = other;
                Vec::new()
            }
        }
    }

    fn swipe_direction(&self, origin: Point, end: Point) -> Option<SwipeDirection> {
        let (dx, dy) = end.delta(origin);
        if dx.abs() < self.config.swipe_threshold || dx.abs() <= dy.abs() {
            return None;
        }
        Some(if dx < 0.0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    type Recognizer = GestureRecognizer<&'static str>;

    fn recognizer() -> Recognizer {
        GestureRecognizer::new(GestureConfig::default())
    }

    fn down(x: f32, y: f32) -> PointerEvent {
        PointerEvent::down(1, x, y)
    }

    fn moved(x: f32, y: f32) -> PointerEvent {
        PointerEvent::moved(1, x, y)
    }

    fn up(x: f32, y: f32) -> PointerEvent {
        PointerEvent::up(1, x, y)
    }

    const MS_50: Duration = Duration::from_millis(50);
    const MS_100: Duration = Duration::from_millis(100);
    const MS_400: Duration = Duration::from_millis(400);
    const MS_500: Duration = Duration::from_millis(500);

    /// Long-press `target` and release, leaving the recognizer in edit mode.
    fn enter_edit(gr: &mut Recognizer, t: Instant) {
        gr.process(&down(5.0, 5.0), Some("timer"), t);
        let events = gr.check_long_press(t + MS_500);
        assert_eq!(
            events,
            vec![GestureIntent::EnterEditMode { target: "timer" }]
        );
        assert!(gr.process(&up(5.0, 5.0), Some("timer"), t + MS_500).is_empty());
    }

    // --- Tap tests ---

    #[test]
    fn quick_press_is_tap() {
        let mut gr = recognizer();
        let t = Instant::now();

        assert!(gr.process(&down(5.0, 5.0), Some("timer"), t).is_empty());
        assert_eq!(gr.phase(), GesturePhase::PressPending);
        let events = gr.process(&up(5.0, 5.0), Some("timer"), t + MS_100);

        assert_eq!(events, vec![GestureIntent::Tap { target: "timer" }]);
        assert_eq!(gr.phase(), GesturePhase::Idle);
        assert!(!gr.is_editing());
    }

    #[test]
    fn release_over_other_target_is_not_tap() {
        let mut gr = recognizer();
        let t = Instant::now();

        gr.process(&down(5.0, 5.0), Some("timer"), t);
        let events = gr.process(&up(9.0, 5.0), Some("settings"), t + MS_100);
        assert!(events.is_empty());
    }

    #[test]
    fn press_on_empty_space_never_taps() {
        let mut gr = recognizer();
        let t = Instant::now();

        gr.process(&down(5.0, 5.0), None, t);
        assert!(gr.long_press_deadline().is_none());
        let events = gr.process(&up(5.0, 5.0), None, t + MS_50);
        assert!(events.is_empty());
    }

    #[test]
    fn movement_beyond_tolerance_cancels_long_press_but_still_taps() {
        let mut gr = recognizer();
        let t = Instant::now();

        gr.process(&down(100.0, 100.0), Some("timer"), t);
        assert!(gr.long_press_deadline().is_some());

        // 15px travel with a 10px tolerance
        gr.process(&moved(115.0, 100.0), None, t + MS_100);
        assert!(gr.long_press_deadline().is_none());

        // Timer would have fired by now; nothing happens.
        assert!(gr.check_long_press(t + MS_500).is_empty());
        assert!(!gr.is_editing());

        let events = gr.process(&up(115.0, 100.0), Some("timer"), t + MS_500);
        assert_eq!(events, vec![GestureIntent::Tap { target: "timer" }]);
    }

    #[test]
    fn movement_within_tolerance_keeps_long_press() {
        let mut gr = recognizer();
        let t = Instant::now();

        gr.process(&down(100.0, 100.0), Some("timer"), t);
        gr.process(&moved(106.0, 108.0), None, t + MS_100);
        assert!(gr.long_press_deadline().is_some());
        let events = gr.check_long_press(t + MS_400);
        assert_eq!(
            events,
            vec![GestureIntent::EnterEditMode { target: "timer" }]
        );
    }

    // --- Long press tests ---

    #[test]
    fn long_press_enters_edit_mode_and_suppresses_click() {
        let mut gr = recognizer();
        let t = Instant::now();

        gr.process(&down(5.0, 5.0), Some("timer"), t);
        assert!(gr.check_long_press(t + Duration::from_millis(399)).is_empty());

        let events = gr.check_long_press(t + MS_400);
        assert_eq!(
            events,
            vec![GestureIntent::EnterEditMode { target: "timer" }]
        );
        assert!(gr.is_editing());
        assert_eq!(gr.phase(), GesturePhase::Suppressed);

        // The release of the held pointer must not open the icon.
        let events = gr.process(&up(5.0, 5.0), Some("timer"), t + MS_500);
        assert!(events.is_empty());
        assert_eq!(gr.phase(), GesturePhase::Idle);
        assert!(gr.is_editing());
    }

    #[test]
    fn long_press_not_repeated() {
        let mut gr = recognizer();
        let t = Instant::now();

        gr.process(&down(5.0, 5.0), Some("timer"), t);
        assert_eq!(gr.check_long_press(t + MS_500).len(), 1);
        assert!(gr.check_long_press(t + Duration::from_millis(900)).is_empty());
    }

    #[test]
    fn fire_timer_with_deadline_id() {
        let mut gr = recognizer();
        let t = Instant::now();

        gr.process(&down(5.0, 5.0), Some("timer"), t);
        let (id, deadline) = gr.long_press_deadline().unwrap();
        assert_eq!(deadline, t + MS_400);

        let events = gr.fire_timer(id);
        assert_eq!(
            events,
            vec![GestureIntent::EnterEditMode { target: "timer" }]
        );
    }

    #[test]
    fn stray_timer_after_release_is_noop() {
        let mut gr = recognizer();
        let t = Instant::now();

        gr.process(&down(5.0, 5.0), Some("timer"), t);
        let (id, _) = gr.long_press_deadline().unwrap();
        gr.process(&up(5.0, 5.0), Some("timer"), t + MS_50);

        assert!(gr.fire_timer(id).is_empty());
        assert!(!gr.is_editing());
    }

    #[test]
    fn stray_timer_from_previous_press_is_noop() {
        let mut gr = recognizer();
        let t = Instant::now();

        gr.process(&down(5.0, 5.0), Some("timer"), t);
        let (stale, _) = gr.long_press_deadline().unwrap();
        gr.process(&up(5.0, 5.0), Some("timer"), t + MS_50);

        gr.process(&down(5.0, 5.0), Some("settings"), t + MS_100);
        assert!(gr.fire_timer(stale).is_empty());
        assert_eq!(gr.phase(), GesturePhase::PressPending);
    }

    #[test]
    fn pointer_cancel_clears_pending_press() {
        let mut gr = recognizer();
        let t = Instant::now();

        gr.process(&down(5.0, 5.0), Some("timer"), t);
        let events = gr.process(&PointerEvent::cancel(1, 5.0, 5.0), None, t + MS_50);
        assert!(events.is_empty());
        assert!(gr.long_press_deadline().is_none());
        assert_eq!(gr.phase(), GesturePhase::Idle);
    }

    // --- Swipe tests ---

    #[test]
    fn horizontal_travel_is_swipe() {
        let mut gr = recognizer();
        let t = Instant::now();

        gr.process(&down(200.0, 100.0), None, t);
        let events = gr.process(&up(120.0, 110.0), None, t + MS_100);
        assert_eq!(
            events,
            vec![GestureIntent::Swipe {
                direction: SwipeDirection::Left
            }]
        );

        gr.process(&down(100.0, 100.0), Some("timer"), t + MS_400);
        let events = gr.process(&up(180.0, 100.0), None, t + MS_500);
        assert_eq!(
            events,
            vec![GestureIntent::Swipe {
                direction: SwipeDirection::Right
            }]
        );
    }

    #[test]
    fn vertical_travel_is_not_swipe() {
        let mut gr = recognizer();
        let t = Instant::now();

        gr.process(&down(100.0, 100.0), None, t);
        let events = gr.process(&up(160.0, 200.0), None, t + MS_100);
        assert!(events.is_empty());
    }

    // --- Drag tests ---

    #[test]
    fn edit_mode_press_arms_drag() {
        let mut gr = recognizer();
        let t = Instant::now();
        enter_edit(&mut gr, t);

        let events = gr.process(&down(40.0, 40.0), Some("settings"), t + Duration::from_secs(1));
        assert_eq!(
            events,
            vec![GestureIntent::DragArmed {
                target: "settings",
                origin: Point::new(40.0, 40.0)
            }]
        );
        assert_eq!(gr.phase(), GesturePhase::Armed);
        assert!(gr.long_press_deadline().is_none());
    }

    #[test]
    fn drag_starts_after_tolerance() {
        let mut gr = recognizer();
        let t = Instant::now();
        enter_edit(&mut gr, t);

        gr.process(&down(40.0, 40.0), Some("settings"), t);
        // 3px: below 6px tolerance
        assert!(gr.process(&moved(43.0, 40.0), None, t).is_empty());
        assert!(!gr.is_dragging());

        let events = gr.process(&moved(50.0, 40.0), None, t);
        assert_eq!(
            events,
            vec![GestureIntent::DragStart {
                target: "settings",
                at: Point::new(50.0, 40.0)
            }]
        );
        assert!(gr.is_dragging());

        let events = gr.process(&moved(90.0, 40.0), None, t);
        assert_eq!(
            events,
            vec![GestureIntent::DragMove {
                target: "settings",
                at: Point::new(90.0, 40.0)
            }]
        );
    }

    #[test]
    fn release_while_dragging_drops() {
        let mut gr = recognizer();
        let t = Instant::now();
        enter_edit(&mut gr, t);

        gr.process(&down(40.0, 40.0), Some("settings"), t);
        gr.process(&moved(90.0, 40.0), None, t);
        let events = gr.process(&up(95.0, 42.0), Some("timer"), t);
        assert_eq!(
            events,
            vec![GestureIntent::Drop {
                target: "settings",
                at: Point::new(95.0, 42.0)
            }]
        );
        assert_eq!(gr.phase(), GesturePhase::Idle);
        assert!(gr.is_editing());
    }

    #[test]
    fn release_before_drag_starts_cancels() {
        let mut gr = recognizer();
        let t = Instant::now();
        enter_edit(&mut gr, t);

        gr.process(&down(40.0, 40.0), Some("settings"), t);
        let events = gr.process(&up(41.0, 40.0), Some("settings"), t);
        assert_eq!(
            events,
            vec![GestureIntent::DragCancel { target: "settings" }]
        );
    }

    #[test]
    fn pointer_cancel_while_dragging_cancels() {
        let mut gr = recognizer();
        let t = Instant::now();
        enter_edit(&mut gr, t);

        gr.process(&down(40.0, 40.0), Some("settings"), t);
        gr.process(&moved(90.0, 40.0), None, t);
        let events = gr.process(&PointerEvent::cancel(1, 90.0, 40.0), None, t);
        assert_eq!(
            events,
            vec![GestureIntent::DragCancel { target: "settings" }]
        );
        assert!(!gr.is_dragging());
    }

    #[test]
    fn repeated_down_cancels_abandoned_drag() {
        let mut gr = recognizer();
        let t = Instant::now();
        enter_edit(&mut gr, t);

        gr.process(&down(40.0, 40.0), Some("settings"), t);
        gr.process(&moved(90.0, 40.0), None, t);
        assert!(gr.is_dragging());

        // Same pointer goes down again; its release never arrived.
        let events = gr.process(&down(200.0, 40.0), Some("timer"), t);
        assert_eq!(
            events,
            vec![
                GestureIntent::DragCancel { target: "settings" },
                GestureIntent::DragArmed {
                    target: "timer",
                    origin: Point::new(200.0, 40.0)
                },
            ]
        );
        assert_eq!(gr.phase(), GesturePhase::Armed);

        let events = gr.process(&up(200.0, 40.0), Some("timer"), t);
        assert_eq!(events, vec![GestureIntent::DragCancel { target: "timer" }]);
        assert_eq!(gr.captured_pointer(), None);
    }

    #[test]
    fn repeated_down_while_armed_on_empty_space_only_cancels() {
        let mut gr = recognizer();
        let t = Instant::now();
        enter_edit(&mut gr, t);

        gr.process(&down(40.0, 40.0), Some("settings"), t);
        let events = gr.process(&down(300.0, 500.0), None, t);
        assert_eq!(
            events,
            vec![GestureIntent::DragCancel { target: "settings" }]
        );
        assert_eq!(gr.phase(), GesturePhase::Dismissing);
    }

    #[test]
    fn second_pointer_ignored_while_captured() {
        let mut gr = recognizer();
        let t = Instant::now();
        enter_edit(&mut gr, t);

        gr.process(&down(40.0, 40.0), Some("settings"), t);
        gr.process(&moved(90.0, 40.0), None, t);

        let other_down = PointerEvent::down(2, 10.0, 10.0);
        assert!(gr.process(&other_down, Some("timer"), t).is_empty());
        let other_up = PointerEvent::up(2, 10.0, 10.0);
        assert!(gr.process(&other_up, Some("timer"), t).is_empty());

        assert!(gr.is_dragging());
        assert_eq!(gr.captured_pointer(), Some(PointerId(1)));
    }

    // --- Edit mode exit tests ---

    #[test]
    fn tap_on_empty_space_exits_edit_mode() {
        let mut gr = recognizer();
        let t = Instant::now();
        enter_edit(&mut gr, t);

        gr.process(&down(300.0, 300.0), None, t);
        assert_eq!(gr.phase(), GesturePhase::Dismissing);
        let events = gr.process(&up(302.0, 300.0), None, t);
        assert_eq!(events, vec![GestureIntent::ExitEditMode]);
        assert!(!gr.is_editing());
    }

    #[test]
    fn exit_edit_mode_mid_drag_cancels_drag() {
        let mut gr = recognizer();
        let t = Instant::now();
        enter_edit(&mut gr, t);

        gr.process(&down(40.0, 40.0), Some("settings"), t);
        gr.process(&moved(90.0, 40.0), None, t);
        let events = gr.exit_edit_mode();
        assert_eq!(
            events,
            vec![
                GestureIntent::DragCancel { target: "settings" },
                GestureIntent::ExitEditMode
            ]
        );
        assert_eq!(gr.captured_pointer(), None);
    }

    #[test]
    fn exit_edit_mode_when_browsing_is_silent() {
        let mut gr = recognizer();
        assert!(gr.exit_edit_mode().is_empty());
    }

    #[test]
    fn enter_edit_mode_programmatically() {
        let mut gr = recognizer();
        let t = Instant::now();
        assert!(gr.enter_edit_mode());
        assert!(gr.is_editing());

        let events = gr.process(&down(40.0, 40.0), Some("timer"), t);
        assert!(matches!(events[0], GestureIntent::DragArmed { .. }));
    }

    // --- Reset / config tests ---

    #[test]
    fn reset_clears_all_state() {
        let mut gr = recognizer();
        let t = Instant::now();
        enter_edit(&mut gr, t);
        gr.process(&down(40.0, 40.0), Some("settings"), t);
        gr.process(&moved(90.0, 40.0), None, t);

        gr.reset();
        assert!(!gr.is_dragging());
        assert!(!gr.is_editing());
        assert_eq!(gr.captured_pointer(), None);
        assert!(gr.long_press_deadline().is_none());
    }

    #[test]
    fn custom_long_press_duration() {
        let config = GestureConfig {
            long_press: Duration::from_millis(1000),
            ..Default::default()
        };
        let mut gr: Recognizer = GestureRecognizer::new(config);
        let t = Instant::now();

        gr.process(&down(5.0, 5.0), Some("timer"), t);
        assert!(gr.check_long_press(t + MS_500).is_empty());
        assert_eq!(gr.check_long_press(t + Duration::from_millis(1000)).len(), 1);
    }

    #[test]
    fn default_config_values() {
        let config = GestureConfig::default();
        assert_eq!(config.long_press, Duration::from_millis(400));
        assert!((config.press_tolerance - 10.0).abs() < f32::EPSILON);
        assert!((config.drag_tolerance - 6.0).abs() < f32::EPSILON);
        assert!((config.swipe_threshold - 50.0).abs() < f32::EPSILON);
    }

    #[test]
    fn debug_format() {
        let gr = recognizer();
        let dbg = format!("{gr:?}");
        assert!(dbg.contains("GestureRecognizer"));
        assert!(dbg.contains("Idle"));
    }
}
