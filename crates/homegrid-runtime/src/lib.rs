#![forbid(unsafe_code)]

//! Interactive home-screen runtime.
//!
//! # Role in homegrid
//! `homegrid-runtime` owns the mutable side of the launcher: the committed
//! arrangement, the current surface, and the single drag in flight. It wires
//! [`homegrid_core::gesture`] intents into [`homegrid_layout::place`] and
//! talks to two external collaborators:
//!
//! - a [`storage::LayoutStore`] that persists the committed layout, and
//! - a [`telemetry::TelemetrySink`] notified of user intents.
//!
//! # Key Components
//! - [`session::HomeSession`]: the owning session object.
//! - [`drag::DragSession`]: rollback snapshot plus speculative hover result.
//! - [`config::HomeConfig`]: TOML/JSON configuration.

pub mod config;
pub mod drag;
pub mod persistence;
pub mod session;
pub mod storage;
pub mod telemetry;

pub use config::{ConfigError, HomeConfig};
pub use drag::{DragOutcome, DragSession, HoverOutcome};
pub use persistence::{load_layout, save_layout};
pub use session::{HomeAction, HomeSession};
pub use storage::{FileStore, LayoutStore, MemoryStore, StorageError, write_atomic};
pub use telemetry::{
    NullTelemetry, RecordingTelemetry, TelemetryEvent, TelemetrySink, TracingTelemetry,
};
