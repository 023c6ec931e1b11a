//! JSON lines: one object per line for the render layer and for audit.

use crate::pipeline::Snapshot;
use crate::stats::DashboardSummary;
use chrono::Utc;
use serde::Serialize;
use std::io::Write;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Trailing line after the positioned events of one snapshot
#[derive(Serialize)]
pub struct SummaryLine<'a> {
    pub ts: String,
    pub kind: &'static str,
    pub fingerprint: &'a str,
    pub rings: usize,
    pub summary: &'a DashboardSummary,
}

impl<'a> SummaryLine<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self {
            ts: Utc::now().to_rfc3339(),
            kind: "summary",
            fingerprint: &snapshot.fingerprint,
            rings: snapshot.layout.ring_count(),
            summary: &snapshot.summary,
        }
    }
}

pub struct StructuredLogger;

impl StructuredLogger {
    /// Install the global subscriber on stderr, level from RUST_LOG or `default_level`.
    /// Stdout is left to the snapshot lines. A second call is a no-op.
    pub fn init(json: bool, default_level: &str) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
        let result = if json {
            let fmt = tracing_subscriber::fmt::layer()
                .json()
                .with_span_events(FmtSpan::NONE)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry().with(filter).with(fmt).try_init()
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init()
        };
        if result.is_err() {
            tracing::debug!("global subscriber already installed");
        }
    }

    /// Write one value as a single JSON line.
    pub fn emit_json(value: &impl Serialize, w: &mut impl Write) -> std::io::Result<()> {
        let line = serde_json::to_string(value)?;
        writeln!(w, "{}", line)
    }

    /// Positioned events in input order, then the summary line.
    pub fn emit_snapshot(snapshot: &Snapshot, w: &mut impl Write) -> std::io::Result<()> {
        for row in snapshot.positioned() {
            Self::emit_json(&row, w)?;
        }
        Self::emit_json(&SummaryLine::new(snapshot), w)
    }
}
