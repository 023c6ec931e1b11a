//! Structured logging setup and ndjson snapshot output.

mod format;

pub use format::{StructuredLogger, SummaryLine};
