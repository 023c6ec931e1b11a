//! Free-text subtype -> normalized event type. Ordered keyword rules, first
//! match wins; unmatched text falls back to `112-치안`.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NormalizedType {
    #[serde(rename = "112-치안")]
    Crime,
    #[serde(rename = "112-교통")]
    Traffic,
    #[serde(rename = "119-화재")]
    Fire,
    #[serde(rename = "119-구조")]
    Rescue,
    #[serde(rename = "사회적약자")]
    Vulnerable,
    #[serde(rename = "AI-이상행동")]
    AiBehavior,
    #[serde(rename = "재난-재해")]
    Disaster,
    #[serde(rename = "도시-운영")]
    CityOps,
}

impl NormalizedType {
    pub const FALLBACK: NormalizedType = NormalizedType::Crime;

    pub fn label(self) -> &'static str {
        match self {
            NormalizedType::Crime => "112-치안",
            NormalizedType::Traffic => "112-교통",
            NormalizedType::Fire => "119-화재",
            NormalizedType::Rescue => "119-구조",
            NormalizedType::Vulnerable => "사회적약자",
            NormalizedType::AiBehavior => "AI-이상행동",
            NormalizedType::Disaster => "재난-재해",
            NormalizedType::CityOps => "도시-운영",
        }
    }
}

impl fmt::Display for NormalizedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Evaluated top to bottom. `아동` sits above `배회` so a wandering child is a
/// vulnerable-person case, not an AI behavior alert.
pub static TYPE_RULES: &[(&str, NormalizedType)] = &[
    ("화재", NormalizedType::Fire),
    ("연기", NormalizedType::Fire),
    ("산불", NormalizedType::Fire),
    ("구조", NormalizedType::Rescue),
    ("구급", NormalizedType::Rescue),
    ("갇힘", NormalizedType::Rescue),
    ("유괴", NormalizedType::Vulnerable),
    ("실종", NormalizedType::Vulnerable),
    ("미아", NormalizedType::Vulnerable),
    ("아동", NormalizedType::Vulnerable),
    ("이상행동", NormalizedType::AiBehavior),
    ("배회", NormalizedType::AiBehavior),
    ("쓰러짐", NormalizedType::AiBehavior),
    ("낙상", NormalizedType::AiBehavior),
    ("군집", NormalizedType::AiBehavior),
    ("밀집", NormalizedType::AiBehavior),
    ("침입", NormalizedType::AiBehavior),
    ("월담", NormalizedType::AiBehavior),
    ("교통", NormalizedType::Traffic),
    ("사고", NormalizedType::Traffic),
    ("폭행", NormalizedType::Crime),
    ("절도", NormalizedType::Crime),
    ("강도", NormalizedType::Crime),
    ("침수", NormalizedType::Disaster),
    ("호우", NormalizedType::Disaster),
    ("지진", NormalizedType::Disaster),
    ("산사태", NormalizedType::Disaster),
    ("붕괴", NormalizedType::Disaster),
    ("폭염", NormalizedType::Disaster),
    ("한파", NormalizedType::Disaster),
    ("시설", NormalizedType::CityOps),
    ("정전", NormalizedType::CityOps),
    ("싱크홀", NormalizedType::CityOps),
    ("누수", NormalizedType::CityOps),
];

/// First rule whose keyword occurs in `raw_type`, if any.
pub fn match_rule(raw_type: &str) -> Option<(&'static str, NormalizedType)> {
    TYPE_RULES
        .iter()
        .find(|(keyword, _)| raw_type.contains(*keyword))
        .copied()
}

pub fn classify_type(raw_type: &str) -> NormalizedType {
    match match_rule(raw_type) {
        Some((_, normalized)) => normalized,
        None => {
            tracing::debug!(raw_type, fallback = %NormalizedType::FALLBACK, "no type rule matched");
            NormalizedType::FALLBACK
        }
    }
}
