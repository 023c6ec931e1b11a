//! Tallies over an enriched snapshot: how the tiers, domains, stages and
//! resolution categories are populated after overrides.

use crate::classify::{EnrichedEvent, Priority, ProcessingStage, ResolutionCategory};
use crate::events::Domain;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub by_priority: BTreeMap<Priority, usize>,
    pub by_domain: BTreeMap<Domain, usize>,
    pub by_stage: BTreeMap<ProcessingStage, usize>,
    pub by_resolution: BTreeMap<ResolutionCategory, usize>,
    /// Mean detection confidence over events that carry one
    pub mean_p_score: Option<f32>,
}

impl DashboardSummary {
    pub fn from_events(events: &[EnrichedEvent]) -> Self {
        let mut s = DashboardSummary {
            total: events.len(),
            ..Default::default()
        };
        let mut scores: Vec<f32> = Vec::new();

        for e in events {
            *s.by_priority.entry(e.priority).or_default() += 1;
            *s.by_domain.entry(e.raw.domain).or_default() += 1;
            *s.by_stage.entry(e.processing_stage).or_default() += 1;
            *s.by_resolution.entry(e.resolution.category).or_default() += 1;
            if let Some(p) = e.raw.p_score {
                scores.push(p);
            }
        }

        s.mean_p_score = if scores.is_empty() {
            None
        } else {
            Some(scores.iter().sum::<f32>() / scores.len() as f32)
        };
        s
    }

    pub fn priority_count(&self, priority: Priority) -> usize {
        self.by_priority.get(&priority).copied().unwrap_or(0)
    }

    /// Largest minus smallest tier population, counting empty tiers as zero
    pub fn priority_spread(&self) -> usize {
        let counts = Priority::ALL.map(|p| self.priority_count(p));
        let max = counts.iter().copied().max().unwrap_or(0);
        let min = counts.iter().copied().min().unwrap_or(0);
        max - min
    }
}
