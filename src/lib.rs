//! Control room core — deterministic incident classification and map-pin layout.
//!
//! Modular structure:
//! - [`events`] — Raw incident records and the mock source list
//! - [`classify`] — Seeded hashing, type normalization, stage/resolution/priority, insight
//! - [`layout`] — Priority-interleaved ring placement on the map canvas
//! - [`stats`] — Per-tier, per-domain, per-stage tallies
//! - [`pipeline`] — Memoized enrich → layout → summary over a snapshot
//! - [`logging`] — Structured logging and ndjson output

pub mod config;
pub mod error;
pub mod events;
pub mod classify;
pub mod layout;
pub mod stats;
pub mod pipeline;
pub mod logging;

pub use config::CoreConfig;
pub use error::CoreError;
pub use events::{Domain, RawEvent, Risk, Status};
pub use classify::{EnrichedEvent, Enricher, Priority, ProcessingStage};
pub use layout::{Layout, LayoutEngine, Position};
pub use stats::DashboardSummary;
pub use pipeline::{ControlRoomPipeline, Snapshot};
pub use logging::StructuredLogger;
