//! Processing stage assignment.

use super::hash::deterministic_choice;
use crate::events::RawEvent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Seven ordered lifecycle stages, display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProcessingStage {
    #[serde(rename = "생성")]
    Created,
    #[serde(rename = "선별")]
    Triage,
    #[serde(rename = "착수")]
    Dispatched,
    #[serde(rename = "사실 검증")]
    Verification,
    #[serde(rename = "추적 · 지원")]
    TrackingSupport,
    #[serde(rename = "전파")]
    Broadcast,
    #[serde(rename = "종결")]
    Closed,
}

impl ProcessingStage {
    pub const ALL: [ProcessingStage; 7] = [
        ProcessingStage::Created,
        ProcessingStage::Triage,
        ProcessingStage::Dispatched,
        ProcessingStage::Verification,
        ProcessingStage::TrackingSupport,
        ProcessingStage::Broadcast,
        ProcessingStage::Closed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProcessingStage::Created => "생성",
            ProcessingStage::Triage => "선별",
            ProcessingStage::Dispatched => "착수",
            ProcessingStage::Verification => "사실 검증",
            ProcessingStage::TrackingSupport => "추적 · 지원",
            ProcessingStage::Broadcast => "전파",
            ProcessingStage::Closed => "종결",
        }
    }
}

impl fmt::Display for ProcessingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub const STAGE_SALT: &str = "stage";

/// Hashed draw on `(id, "stage")`, replaced by an `eventId` override when one exists.
pub fn derive_processing_stage(
    event: &RawEvent,
    overrides: &BTreeMap<String, ProcessingStage>,
) -> ProcessingStage {
    if let Some(stage) = overrides.get(&event.event_id) {
        return *stage;
    }
    *deterministic_choice(&ProcessingStage::ALL, &event.id, STAGE_SALT)
}
