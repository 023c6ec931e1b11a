//! Raw event + list index -> enriched event. Derivation order is fixed:
//! type match, stage, resolution, base priority, content rule, id table.

use super::insight::{generate_insight_keywords, generate_insight_text};
use super::priority::{derive_priority, Priority};
use super::resolution::{derive_resolution, Resolution};
use super::stage::{derive_processing_stage, ProcessingStage};
use super::type_map::{classify_type, NormalizedType};
use crate::config::OverrideConfig;
use crate::events::RawEvent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const ORIGIN_LAT: f64 = 37.5665;
const ORIGIN_LNG: f64 = 126.9780;
const LAT_STEP: f64 = 0.0021;
const LNG_STEP: f64 = 0.0034;

/// Cosmetic coordinates; a linear offset from the list index, unrelated to `location`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn from_index(index: usize) -> Self {
        Self {
            lat: ORIGIN_LAT + index as f64 * LAT_STEP,
            lng: ORIGIN_LNG + index as f64 * LNG_STEP,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedEvent {
    #[serde(flatten)]
    pub raw: RawEvent,
    pub normalized_type: NormalizedType,
    pub category_label: String,
    pub processing_stage: ProcessingStage,
    pub resolution: Resolution,
    pub priority: Priority,
    pub insight: String,
    pub keywords: Vec<String>,
    pub coordinates: Coordinates,
}

impl EnrichedEvent {
    pub fn id(&self) -> &str {
        &self.raw.id
    }

    pub fn event_id(&self) -> &str {
        &self.raw.event_id
    }
}

pub struct Enricher {
    priority_by_id: BTreeMap<String, Priority>,
    stage_by_event_id: BTreeMap<String, ProcessingStage>,
}

impl Enricher {
    pub fn new(overrides: &OverrideConfig) -> Self {
        Self {
            priority_by_id: overrides.priority_by_id.clone(),
            stage_by_event_id: overrides.stage_by_event_id.clone(),
        }
    }

    /// No overrides at all; every field is the computed default.
    pub fn without_overrides() -> Self {
        Self {
            priority_by_id: BTreeMap::new(),
            stage_by_event_id: BTreeMap::new(),
        }
    }

    pub fn enrich_one(&self, event: &RawEvent, index: usize) -> EnrichedEvent {
        let normalized_type = classify_type(&event.event_type);
        let processing_stage = derive_processing_stage(event, &self.stage_by_event_id);
        let resolution = derive_resolution(normalized_type, &event.id);
        let priority = derive_priority(event, &self.priority_by_id);

        EnrichedEvent {
            raw: event.clone(),
            normalized_type,
            category_label: event.domain.label().to_string(),
            processing_stage,
            resolution,
            priority,
            insight: generate_insight_text(event),
            keywords: generate_insight_keywords(event),
            coordinates: Coordinates::from_index(index),
        }
    }

    /// Enrich a whole list; output order matches input order.
    pub fn enrich(&self, events: &[RawEvent]) -> Vec<EnrichedEvent> {
        let enriched: Vec<EnrichedEvent> = events
            .iter()
            .enumerate()
            .map(|(i, e)| self.enrich_one(e, i))
            .collect();
        tracing::debug!(count = enriched.len(), "enriched events");
        enriched
    }
}
