#![forbid(unsafe_code)]

//! Canonical pointer input events.
//!
//! Mouse, pen, and touch input are all normalized into [`PointerEvent`]. Each
//! contact carries a [`PointerId`] so that a second finger touching down while
//! a drag is captured can be told apart and ignored.

use crate::geometry::Point;

/// Identifier of one pointer contact (mouse, pen, or a single finger).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PointerId(pub u32);

/// Phase of a pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Contact started (button pressed / finger down).
    Down,
    /// Contact moved while held.
    Move,
    /// Contact released.
    Up,
    /// Contact aborted by the platform (system gesture, focus loss).
    Cancel,
}

/// A single pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer: PointerId,
    pub kind: PointerKind,
    pub point: Point,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(pointer: PointerId, kind: PointerKind, point: Point) -> Self {
        Self {
            pointer,
            kind,
            point,
        }
    }

    #[must_use]
    pub const fn down(pointer: u32, x: f32, y: f32) -> Self {
        Self::new(PointerId(pointer), PointerKind::Down, Point::new(x, y))
    }

    #[must_use]
    pub const fn moved(pointer: u32, x: f32, y: f32) -> Self {
        Self::new(PointerId(pointer), PointerKind::Move, Point::new(x, y))
    }

    #[must_use]
    pub const fn up(pointer: u32, x: f32, y: f32) -> Self {
        Self::new(PointerId(pointer), PointerKind::Up, Point::new(x, y))
    }

    #[must_use]
    pub const fn cancel(pointer: u32, x: f32, y: f32) -> Self {
        Self::new(PointerId(pointer), PointerKind::Cancel, Point::new(x, y))
    }
}
