//! Snapshot pipeline: raw events -> enrich -> layout -> summary.
//! Memoized on a fingerprint of the whole input snapshot; any change recomputes from scratch.

use crate::classify::{EnrichedEvent, Enricher};
use crate::config::CoreConfig;
use crate::events::RawEvent;
use crate::layout::{Layout, LayoutEngine, Position};
use crate::stats::DashboardSummary;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};

/// Everything the map view and list need for one render
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub fingerprint: String,
    pub events: Vec<EnrichedEvent>,
    pub layout: Layout,
    pub summary: DashboardSummary,
}

/// One row of output: an enriched event with its pin position
#[derive(Debug, Clone, Serialize)]
pub struct PositionedEvent<'a> {
    #[serde(flatten)]
    pub event: &'a EnrichedEvent,
    pub position: Position,
}

impl Snapshot {
    /// Events in input order, each paired with its final position.
    pub fn positioned(&self) -> impl Iterator<Item = PositionedEvent<'_>> {
        self.events.iter().map(|event| PositionedEvent {
            event,
            position: self.layout.position_of(event.id()),
        })
    }
}

const FIELD_SEP: &[u8] = &[0x1f];
const RECORD_SEP: &[u8] = &[0x1e];

/// SHA-256 over every input field, hex-encoded.
pub fn fingerprint(events: &[RawEvent]) -> String {
    let mut h = Sha256::new();
    for e in events {
        for field in [
            e.event_id.as_str(),
            e.id.as_str(),
            e.event_type.as_str(),
            e.title.as_str(),
            e.risk.as_str(),
            e.location.as_str(),
            e.time.as_str(),
            e.description.as_str(),
            e.source.as_str(),
        ] {
            h.update(field.as_bytes());
            h.update(FIELD_SEP);
        }
        h.update([e.domain.code() as u8]);
        h.update(format!("{:?}", e.status).as_bytes());
        match e.p_score {
            Some(p) => h.update(p.to_bits().to_le_bytes()),
            None => h.update(b"-"),
        }
        h.update(RECORD_SEP);
    }
    format!("{:x}", h.finalize())
}

pub struct ControlRoomPipeline {
    enricher: Enricher,
    layout: LayoutEngine,
    cache: Mutex<Option<Arc<Snapshot>>>,
}

impl ControlRoomPipeline {
    pub fn new(config: &CoreConfig) -> Self {
        Self {
            enricher: Enricher::new(&config.overrides),
            layout: LayoutEngine::new(config.layout.clone(), config.overrides.position_swaps.clone()),
            cache: Mutex::new(None),
        }
    }

    /// Snapshot for `events`, reusing the previous one when the input is unchanged.
    pub fn run(&self, events: &[RawEvent]) -> Arc<Snapshot> {
        let key = fingerprint(events);
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(snapshot) = cache.as_ref().filter(|s| s.fingerprint == key) {
            debug!(fingerprint = %key, "snapshot cache hit");
            return Arc::clone(snapshot);
        }

        let snapshot = Arc::new(self.compute(key, events));
        info!(
            events = snapshot.events.len(),
            rings = snapshot.layout.ring_count(),
            urgent = snapshot.summary.priority_count(crate::classify::Priority::Urgent),
            "snapshot computed"
        );
        *cache = Some(Arc::clone(&snapshot));
        snapshot
    }

    /// Drop the memoized snapshot.
    pub fn invalidate(&self) {
        *self.cache.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn compute(&self, fingerprint: String, events: &[RawEvent]) -> Snapshot {
        let enriched = self.enricher.enrich(events);
        let layout = self.layout.layout(&enriched);
        let summary = DashboardSummary::from_events(&enriched);
        Snapshot {
            fingerprint,
            events: enriched,
            layout,
            summary,
        }
    }
}
