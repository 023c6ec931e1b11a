//! Display priority. Base tier from `risk`, then the content rule, then the
//! `id` table. The table is applied last and always wins.

use crate::events::{RawEvent, Risk};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "긴급")]
    Urgent,
    #[serde(rename = "경계")]
    Alert,
    #[serde(rename = "주의")]
    Caution,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Urgent, Priority::Alert, Priority::Caution];

    pub fn label(self) -> &'static str {
        match self {
            Priority::Urgent => "긴급",
            Priority::Alert => "경계",
            Priority::Caution => "주의",
        }
    }

    /// Bucket name used to seed the layout shuffle
    pub fn bucket(self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::Alert => "alert",
            Priority::Caution => "caution",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn base_priority(risk: Risk) -> Priority {
    match risk {
        Risk::High => Priority::Urgent,
        Risk::Medium => Priority::Alert,
        Risk::Low => Priority::Caution,
    }
}

const ABDUCTION_SUSPECTED: &str = "유괴 의심";
const CHILD_KIDNAPPING: &str = "아동 납치";

/// Titles reporting a suspected child abduction are always urgent.
pub fn content_override(title: &str) -> Option<Priority> {
    (title.contains(ABDUCTION_SUSPECTED) && title.contains(CHILD_KIDNAPPING)).then_some(Priority::Urgent)
}

pub fn derive_priority(event: &RawEvent, by_id: &BTreeMap<String, Priority>) -> Priority {
    let mut priority = base_priority(event.risk);
    if let Some(forced) = content_override(&event.title) {
        priority = forced;
    }
    if let Some(pinned) = by_id.get(&event.id) {
        priority = *pinned;
    }
    priority
}
