#![forbid(unsafe_code)]

//! Core: pointer events, pixel geometry, timers, and gesture recognition.
//!
//! # Role in homegrid
//! `homegrid-core` is the input layer. It normalizes raw pointer/touch samples
//! into [`event::PointerEvent`] values and turns sequences of them into
//! high-level [`gesture::GestureIntent`]s (tap, long-press-to-edit, drag, drop,
//! swipe).
//!
//! # How it fits in the system
//! The recognizer is generic over the hit-target key, so this crate knows
//! nothing about icons or grids. `homegrid-layout` owns placement, and
//! `homegrid-runtime` wires intents from this crate into the placement
//! resolver.

pub mod event;
pub mod geometry;
pub mod gesture;
pub mod timer;
