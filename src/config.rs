//! Core configuration. Override tables are demo-data tuning loaded at startup,
//! layered on top of the deterministic computation.

use crate::classify::{Priority, ProcessingStage};
use crate::error::CoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Ring placement constants
    pub layout: LayoutConfig,
    /// Identity-keyed overrides, applied after the computed defaults
    pub overrides: OverrideConfig,
    /// Mock data generation
    pub mock: MockConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Radius of ring 0, in canvas percent
    pub base_radius: f64,
    /// Radius increment per ring, in canvas percent
    pub ring_gap: f64,
    /// Members per ring
    pub ring_size: usize,
    /// Total angular jitter span as a fraction of the angle step
    pub jitter_fraction: f64,
    pub clamp_min: f64,
    pub clamp_max: f64,
    /// Canvas center on both axes, in percent
    pub center: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverrideConfig {
    /// `id` -> priority; wins over both the risk mapping and the content rule
    pub priority_by_id: BTreeMap<String, Priority>,
    /// `eventId` -> processing stage; wins over the hashed draw
    pub stage_by_event_id: BTreeMap<String, ProcessingStage>,
    /// Pairs of `id`s whose final positions are exchanged after layout
    pub position_swaps: Vec<(String, String)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    /// Date stamped into generated `eventId`s
    pub generated_on: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

/// Date the bundled mock set is generated for; the stage override is keyed to it.
pub const MOCK_DATE: (i32, u32, u32) = (2025, 10, 19);

fn mock_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(MOCK_DATE.0, MOCK_DATE.1, MOCK_DATE.2).unwrap_or_default()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_radius: 12.0,
            ring_gap: 9.0,
            ring_size: 6,
            jitter_fraction: 0.4,
            clamp_min: 5.0,
            clamp_max: 95.0,
            center: 50.0,
        }
    }
}

impl Default for OverrideConfig {
    fn default() -> Self {
        let priority_by_id = [
            ("evt-003", Priority::Caution),
            ("evt-008", Priority::Urgent),
            ("evt-015", Priority::Alert),
            ("evt-020", Priority::Alert),
            ("evt-023", Priority::Caution),
        ]
        .into_iter()
        .map(|(id, p)| (id.to_string(), p))
        .collect();

        let stage_by_event_id = [("C-20251019-011", ProcessingStage::TrackingSupport)]
            .into_iter()
            .map(|(id, s)| (id.to_string(), s))
            .collect();

        Self {
            priority_by_id,
            stage_by_event_id,
            position_swaps: vec![("evt-002".to_string(), "evt-011".to_string())],
        }
    }
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            generated_on: mock_date(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.ring_size == 0 {
            return Err(CoreError::InvalidConfig("layout.ring_size must be at least 1".into()));
        }
        if self.base_radius <= 0.0 || self.ring_gap < 0.0 {
            return Err(CoreError::InvalidConfig(
                "layout.base_radius must be positive and layout.ring_gap non-negative".into(),
            ));
        }
        if !(0.0..1.0).contains(&self.jitter_fraction) {
            return Err(CoreError::InvalidConfig(format!(
                "layout.jitter_fraction {} outside [0, 1)",
                self.jitter_fraction
            )));
        }
        if self.clamp_min >= self.clamp_max {
            return Err(CoreError::InvalidConfig(format!(
                "layout clamp bounds inverted: {} >= {}",
                self.clamp_min, self.clamp_max
            )));
        }
        Ok(())
    }
}

impl CoreConfig {
    /// Load from JSON file if present and valid; otherwise return default
    pub fn load(path: &Path) -> Self {
        Self::load_or_default(path).0
    }

    /// Like [`CoreConfig::load`], but hands back why a present file was rejected
    /// so the caller can report it once logging is up. A missing file is not an error.
    pub fn load_or_default(path: &Path) -> (Self, Option<CoreError>) {
        match Self::try_load(path) {
            Ok(c) => (c, None),
            Err(CoreError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => (Self::default(), None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn try_load(path: &Path) -> Result<Self, CoreError> {
        let data = std::fs::read_to_string(path)?;
        let config: CoreConfig = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        self.layout.validate()?;
        let mut swapped = std::collections::BTreeSet::new();
        for (a, b) in &self.overrides.position_swaps {
            if a == b {
                return Err(CoreError::InvalidConfig(format!("position swap pairs {a} with itself")));
            }
            for id in [a, b] {
                if !swapped.insert(id) {
                    return Err(CoreError::InvalidConfig(format!("{id} appears in more than one position swap")));
                }
            }
        }
        Ok(())
    }
}
