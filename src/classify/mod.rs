//! Event classification and enrichment: seeded hashing, type normalization,
//! stage / resolution / priority derivation, rule-based insight.

pub mod hash;
mod type_map;
mod stage;
mod resolution;
mod priority;
mod insight;
mod enricher;

pub use hash::{deterministic_choice, seeded_hash, unit_interval};
pub use type_map::{classify_type, match_rule, NormalizedType, TYPE_RULES};
pub use stage::{derive_processing_stage, ProcessingStage, STAGE_SALT};
pub use resolution::{derive_resolution, Resolution, ResolutionCategory, RESOLUTION_SALT};
pub use priority::{base_priority, content_override, derive_priority, Priority};
pub use insight::{generate_insight_keywords, generate_insight_text, select_rule, InsightRule, MAX_KEYWORDS};
pub use enricher::{Coordinates, EnrichedEvent, Enricher};
