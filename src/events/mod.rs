//! Raw incident records as they arrive from the (mock) source list.
//! Immutable input to the enricher; nothing downstream mutates them.

pub mod mock;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use mock::mock_events;

/// Responding agency taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Domain {
    /// Policing (112)
    A,
    /// Fire and rescue (119)
    B,
    /// Vulnerable persons
    C,
    /// AI behavior analysis
    D,
    /// Disaster
    E,
    /// City operations
    F,
}

impl Domain {
    pub const ALL: [Domain; 6] = [Domain::A, Domain::B, Domain::C, Domain::D, Domain::E, Domain::F];

    pub fn code(self) -> char {
        match self {
            Domain::A => 'A',
            Domain::B => 'B',
            Domain::C => 'C',
            Domain::D => 'D',
            Domain::E => 'E',
            Domain::F => 'F',
        }
    }

    /// Display category label for the domain
    pub fn label(self) -> &'static str {
        match self {
            Domain::A => "112 치안",
            Domain::B => "119 소방 · 구조",
            Domain::C => "사회적 약자 보호",
            Domain::D => "AI 행동 분석",
            Domain::E => "재난 · 재해",
            Domain::F => "도시 운영",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Risk {
    High,
    Medium,
    Low,
}

impl Risk {
    pub fn as_str(self) -> &'static str {
        match self {
            Risk::High => "HIGH",
            Risk::Medium => "MEDIUM",
            Risk::Low => "LOW",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Urgent,
    Active,
    New,
    InProgress,
    Closed,
}

/// One incident record. `event_type` is free text matched by substring, not an enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    /// `<Domain>-<YYYYMMDD>-<seq>`
    pub event_id: String,
    /// Stable internal identifier; seeds every hashed draw
    pub id: String,
    pub domain: Domain,
    #[serde(rename = "type")]
    pub event_type: String,
    pub title: String,
    pub risk: Risk,
    pub status: Status,
    /// Detection confidence, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p_score: Option<f32>,
    pub location: String,
    pub time: String,
    pub description: String,
    pub source: String,
}
