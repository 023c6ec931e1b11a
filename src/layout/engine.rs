//! Priority-interleaved ring placement of map pins on a percentage canvas.

use crate::classify::{seeded_hash, unit_interval, EnrichedEvent, Priority};
use crate::config::LayoutConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::f64::consts::TAU;

const RING_SALT: &str = "ring";
const JITTER_SALT: &str = "jitter";

/// Pin position in canvas percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub left: f64,
    pub top: f64,
}

/// How one event was placed, before clamping and swaps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub id: String,
    pub priority: Priority,
    /// Index in the interleaved sequence
    pub sequence: usize,
    pub ring: usize,
    /// Slot within the ring
    pub slot: usize,
    pub ring_len: usize,
    pub radius: f64,
    pub angle_step: f64,
    pub ring_offset: f64,
    pub jitter: f64,
    /// `ring_offset + slot * angle_step + jitter`
    pub angle: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// `id` -> final position
    pub positions: BTreeMap<String, Position>,
    /// Placement trace in interleaved order
    pub placements: Vec<Placement>,
    center: Position,
}

impl Layout {
    /// Final position for `id`, or the canvas center when the id was not laid out.
    pub fn position_of(&self, id: &str) -> Position {
        self.positions.get(id).copied().unwrap_or(self.center)
    }

    pub fn ring_count(&self) -> usize {
        self.placements.last().map(|p| p.ring + 1).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

pub struct LayoutEngine {
    config: LayoutConfig,
    swaps: Vec<(String, String)>,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig, swaps: Vec<(String, String)>) -> Self {
        Self { config, swaps }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Place every event. Positions are keyed by `id`; events sharing an `id`
    /// share one entry (the last placed wins), while `placements` keeps them all.
    pub fn layout(&self, events: &[EnrichedEvent]) -> Layout {
        let sequence = interleave(shuffled_buckets(events));
        let ring_size = self.config.ring_size.max(1);
        let total = sequence.len();

        let mut placements = Vec::with_capacity(total);
        let mut positions = BTreeMap::new();

        for (ring, members) in sequence.chunks(ring_size).enumerate() {
            let ring_len = members.len();
            let radius = self.config.base_radius + ring as f64 * self.config.ring_gap;
            let angle_step = TAU / ring_len as f64;
            let ring_offset = unit_interval(&ring.to_string(), RING_SALT) * TAU;

            for (slot, event) in members.iter().enumerate() {
                let jitter = (unit_interval(event.id(), JITTER_SALT) - 0.5)
                    * self.config.jitter_fraction
                    * angle_step;
                let angle = ring_offset + slot as f64 * angle_step + jitter;
                if positions
                    .insert(event.id().to_string(), self.to_canvas(radius, angle))
                    .is_some()
                {
                    tracing::debug!(id = event.id(), "duplicate id; later event replaces earlier position");
                }
                placements.push(Placement {
                    id: event.id().to_string(),
                    priority: event.priority,
                    sequence: ring * ring_size + slot,
                    ring,
                    slot,
                    ring_len,
                    radius,
                    angle_step,
                    ring_offset,
                    jitter,
                    angle,
                });
            }
        }

        self.apply_swaps(&mut positions);
        tracing::debug!(events = total, rings = total.div_ceil(ring_size), "layout computed");

        Layout {
            positions,
            placements,
            center: self.center(),
        }
    }

    fn center(&self) -> Position {
        Position {
            left: self.config.center,
            top: self.config.center,
        }
    }

    fn to_canvas(&self, radius: f64, angle: f64) -> Position {
        // Not f64::clamp; inverted bounds must not panic
        let clamp = |v: f64| v.max(self.config.clamp_min).min(self.config.clamp_max);
        Position {
            left: clamp(self.config.center + radius * angle.cos()),
            top: clamp(self.config.center + radius * angle.sin()),
        }
    }

    /// Exchange final positions for each configured pair present in this snapshot.
    /// Both sides are read from the computed, pre-swap positions.
    fn apply_swaps(&self, positions: &mut BTreeMap<String, Position>) {
        let computed = positions.clone();
        for (a, b) in &self.swaps {
            match (computed.get(a).copied(), computed.get(b).copied()) {
                (Some(pa), Some(pb)) => {
                    positions.insert(a.clone(), pb);
                    positions.insert(b.clone(), pa);
                }
                _ => tracing::debug!(a = %a, b = %b, "position swap skipped; pair not in snapshot"),
            }
        }
    }
}

/// Events grouped by tier, each group in seeded order.
fn shuffled_buckets(events: &[EnrichedEvent]) -> [Vec<&EnrichedEvent>; 3] {
    Priority::ALL.map(|tier| {
        let mut bucket: Vec<&EnrichedEvent> = events.iter().filter(|e| e.priority == tier).collect();
        bucket.sort_by(|x, y| {
            (seeded_hash(x.id(), tier.bucket()), x.id()).cmp(&(seeded_hash(y.id(), tier.bucket()), y.id()))
        });
        bucket
    })
}

/// Round-robin over the buckets (urgent, alert, caution), skipping exhausted ones.
fn interleave<'a>(buckets: [Vec<&'a EnrichedEvent>; 3]) -> Vec<&'a EnrichedEvent> {
    let longest = buckets.iter().map(Vec::len).max().unwrap_or(0);
    let mut out = Vec::with_capacity(buckets.iter().map(Vec::len).sum());
    for round in 0..longest {
        for bucket in &buckets {
            if let Some(event) = bucket.get(round) {
                out.push(*event);
            }
        }
    }
    out
}
