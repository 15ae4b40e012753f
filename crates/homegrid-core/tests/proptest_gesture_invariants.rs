//! Property-based invariant tests for the gesture recognizer.
//!
//! Input is a sequence of strokes (down, moves, up or cancel), each from one
//! pointer, optionally interleaved with samples from a second pointer.
//!
//! 1. Without a long press, browse mode never produces drag intents.
//! 2. In edit mode every `DragArmed` is closed by exactly one `Drop` or
//!    `DragCancel`, and drag movement only happens in between.
//! 3. Once a stroke ends, no pointer is captured.
//! 4. Samples from a second pointer never change the output.
//! 5. A stroke whose release is lost still closes its drag when the same
//!    pointer goes down again.

use homegrid_core::event::{PointerEvent, PointerId, PointerKind};
use homegrid_core::geometry::Point;
use homegrid_core::gesture::{GestureConfig, GestureIntent, GesturePhase, GestureRecognizer};
use proptest::prelude::*;
use web_time::Instant;

// ── Strategies ────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct Stroke {
    start: (f32, f32),
    down_hit: Option<u8>,
    moves: Vec<(f32, f32)>,
    cancel: bool,
    up_hit: Option<u8>,
}

fn stroke() -> impl Strategy<Value = Stroke> {
    (
        (0.0f32..400.0, 0.0f32..600.0),
        prop::option::of(0u8..4),
        prop::collection::vec((-80.0f32..80.0, -80.0f32..80.0), 0..6),
        any::<bool>(),
        prop::option::of(0u8..4),
    )
        .prop_map(|(start, down_hit, moves, cancel, up_hit)| Stroke {
            start,
            down_hit,
            moves,
            cancel,
            up_hit,
        })
}

fn sample(pointer: u32, kind: PointerKind, x: f32, y: f32) -> PointerEvent {
    PointerEvent::new(PointerId(pointer), kind, Point::new(x, y))
}

/// Feed one stroke from `pointer`; when `noise` is set, a second pointer
/// touches down and moves between every sample.
fn feed(
    gr: &mut GestureRecognizer<u8>,
    s: &Stroke,
    pointer: u32,
    noise: bool,
    now: Instant,
) -> Vec<GestureIntent<u8>> {
    let mut out = feed_press(gr, s, pointer, noise, now);
    let (x, y) = s
        .moves
        .iter()
        .fold(s.start, |(x, y), &(dx, dy)| (x + dx, y + dy));
    let kind = if s.cancel {
        PointerKind::Cancel
    } else {
        PointerKind::Up
    };
    out.extend(gr.process(&sample(pointer, kind, x, y), s.up_hit, now));
    out
}

/// The down and moves of a stroke, without its release.
fn feed_press(
    gr: &mut GestureRecognizer<u8>,
    s: &Stroke,
    pointer: u32,
    noise: bool,
    now: Instant,
) -> Vec<GestureIntent<u8>> {
    let mut out = Vec::new();
    let (mut x, mut y) = s.start;
    let intrude = |gr: &mut GestureRecognizer<u8>, out: &mut Vec<GestureIntent<u8>>| {
        if noise {
            out.extend(gr.process(&sample(99, PointerKind::Down, 5.0, 5.0), Some(0), now));
            out.extend(gr.process(&sample(99, PointerKind::Move, 300.0, 5.0), None, now));
        }
    };

    out.extend(gr.process(&sample(pointer, PointerKind::Down, x, y), s.down_hit, now));
    intrude(gr, &mut out);
    for &(dx, dy) in &s.moves {
        x += dx;
        y += dy;
        out.extend(gr.process(&sample(pointer, PointerKind::Move, x, y), None, now));
        intrude(gr, &mut out);
    }
    out
}

fn is_drag(intent: &GestureIntent<u8>) -> bool {
    matches!(
        intent,
        GestureIntent::DragArmed { .. }
            | GestureIntent::DragStart { .. }
            | GestureIntent::DragMove { .. }
            | GestureIntent::Drop { .. }
            | GestureIntent::DragCancel { .. }
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// 1. Browse mode never drags
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn browse_mode_never_drags(strokes in prop::collection::vec(stroke(), 1..8)) {
        let mut gr = GestureRecognizer::new(GestureConfig::default());
        let now = Instant::now();
        for s in &strokes {
            let intents = feed(&mut gr, s, 1, false, now);
            prop_assert!(!intents.iter().any(is_drag), "{:?}", intents);
            prop_assert!(!gr.is_editing());
            prop_assert_eq!(gr.captured_pointer(), None);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// 2. Drag intents are balanced in edit mode
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn edit_mode_drags_are_balanced(strokes in prop::collection::vec(stroke(), 1..8)) {
        let mut gr = GestureRecognizer::new(GestureConfig::default());
        prop_assert!(gr.enter_edit_mode());
        let now = Instant::now();
        let mut armed = false;

        for s in &strokes {
            for intent in feed(&mut gr, s, 1, false, now) {
                match intent {
                    GestureIntent::DragArmed { .. } => {
                        prop_assert!(!armed, "armed twice");
                        armed = true;
                    }
                    GestureIntent::DragStart { .. } | GestureIntent::DragMove { .. } => {
                        prop_assert!(armed, "movement outside a drag");
                    }
                    GestureIntent::Drop { .. } | GestureIntent::DragCancel { .. } => {
                        prop_assert!(armed, "drag closed without arming");
                        armed = false;
                    }
                    _ => {}
                }
            }
            prop_assert!(!armed, "stroke ended with an open drag");
            prop_assert_eq!(gr.captured_pointer(), None);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// 3. A second pointer is ignored while one is captured
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn second_pointer_does_not_change_output(
        s in stroke().prop_filter("needs a captured press", |s| s.down_hit.is_some()),
        editing in any::<bool>(),
    ) {
        let now = Instant::now();
        let mut quiet = GestureRecognizer::new(GestureConfig::default());
        let mut noisy = GestureRecognizer::new(GestureConfig::default());
        if editing {
            quiet.enter_edit_mode();
            noisy.enter_edit_mode();
        }

        let expected = feed(&mut quiet, &s, 1, false, now);
        let actual = feed(&mut noisy, &s, 1, true, now);
        prop_assert_eq!(actual, expected);
        prop_assert_eq!(quiet.is_editing(), noisy.is_editing());
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// 4. Lost releases never leave a drag open
// ═══════════════════════════════════════════════════════════════════════════

/// Track open drags across `intents`, failing on any imbalance.
fn check_balance(intents: &[GestureIntent<u8>], armed: &mut bool) -> Result<(), TestCaseError> {
    for intent in intents {
        match intent {
            GestureIntent::DragArmed { .. } => {
                prop_assert!(!*armed, "armed twice");
                *armed = true;
            }
            GestureIntent::DragStart { .. } | GestureIntent::DragMove { .. } => {
                prop_assert!(*armed, "movement outside a drag");
            }
            GestureIntent::Drop { .. } | GestureIntent::DragCancel { .. } => {
                prop_assert!(*armed, "drag closed without arming");
                *armed = false;
            }
            _ => {}
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn repeated_down_closes_open_drag(
        strokes in prop::collection::vec((stroke(), any::<bool>()), 1..8),
    ) {
        let mut gr = GestureRecognizer::new(GestureConfig::default());
        prop_assert!(gr.enter_edit_mode());
        let now = Instant::now();
        let mut armed = false;

        for (s, released) in &strokes {
            let intents = if *released {
                feed(&mut gr, s, 1, false, now)
            } else {
                feed_press(&mut gr, s, 1, false, now)
            };
            check_balance(&intents, &mut armed)?;
            prop_assert_eq!(armed, gr.captured_pointer().is_some() && matches!(
                gr.phase(),
                GesturePhase::Armed | GesturePhase::Dragging
            ));
        }

        let last = gr.process(&sample(1, PointerKind::Cancel, 0.0, 0.0), None, now);
        check_balance(&last, &mut armed)?;
        prop_assert!(!armed, "drag left open");
        prop_assert_eq!(gr.captured_pointer(), None);
    }
}
