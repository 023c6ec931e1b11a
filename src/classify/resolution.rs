//! Closing-code assignment: category from the normalized type, code drawn
//! deterministically from the category's static code list.

use super::hash::deterministic_choice;
use super::type_map::NormalizedType;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResolutionCategory {
    #[serde(rename = "112")]
    Police,
    #[serde(rename = "119")]
    Fire,
    #[serde(rename = "약자보호")]
    Welfare,
    #[serde(rename = "AI분석")]
    AiAnalysis,
    #[serde(rename = "재난")]
    Disaster,
    #[serde(rename = "도시운영")]
    CityOps,
}

impl ResolutionCategory {
    pub const ALL: [ResolutionCategory; 6] = [
        ResolutionCategory::Police,
        ResolutionCategory::Fire,
        ResolutionCategory::Welfare,
        ResolutionCategory::AiAnalysis,
        ResolutionCategory::Disaster,
        ResolutionCategory::CityOps,
    ];

    pub fn for_type(normalized: NormalizedType) -> Self {
        match normalized {
            NormalizedType::Crime | NormalizedType::Traffic => ResolutionCategory::Police,
            NormalizedType::Fire | NormalizedType::Rescue => ResolutionCategory::Fire,
            NormalizedType::Vulnerable => ResolutionCategory::Welfare,
            NormalizedType::AiBehavior => ResolutionCategory::AiAnalysis,
            NormalizedType::Disaster => ResolutionCategory::Disaster,
            NormalizedType::CityOps => ResolutionCategory::CityOps,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResolutionCategory::Police => "112",
            ResolutionCategory::Fire => "119",
            ResolutionCategory::Welfare => "약자보호",
            ResolutionCategory::AiAnalysis => "AI분석",
            ResolutionCategory::Disaster => "재난",
            ResolutionCategory::CityOps => "도시운영",
        }
    }

    /// Closing codes; never empty.
    pub fn codes(self) -> &'static [&'static str] {
        match self {
            ResolutionCategory::Police => &["현장 종결", "형사 입건", "계도 조치", "타 기관 이첩"],
            ResolutionCategory::Fire => &["진화 완료", "구조 완료", "병원 이송", "오인 신고"],
            ResolutionCategory::Welfare => &["보호자 인계", "안전 귀가", "보호시설 연계"],
            ResolutionCategory::AiAnalysis => &["정상 행동 확인", "현장 확인 요청", "오탐 처리"],
            ResolutionCategory::Disaster => &["상황 해제", "통제 유지", "복구 완료"],
            ResolutionCategory::CityOps => &["보수 완료", "임시 조치", "담당 부서 이관"],
        }
    }

    fn description_prefix(self) -> &'static str {
        match self {
            ResolutionCategory::Police => "112 상황실 판단에 따라",
            ResolutionCategory::Fire => "119 출동대 현장 보고에 따라",
            ResolutionCategory::Welfare => "약자보호 담당 확인 결과",
            ResolutionCategory::AiAnalysis => "AI 분석 결과 재검토 후",
            ResolutionCategory::Disaster => "재난안전대책본부 판단에 따라",
            ResolutionCategory::CityOps => "도시운영 관제 확인 후",
        }
    }
}

impl fmt::Display for ResolutionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub category: ResolutionCategory,
    pub code: String,
    pub description: String,
}

pub const RESOLUTION_SALT: &str = "resolution";

pub fn derive_resolution(normalized: NormalizedType, id: &str) -> Resolution {
    let category = ResolutionCategory::for_type(normalized);
    let code = *deterministic_choice(category.codes(), id, RESOLUTION_SALT);
    Resolution {
        category,
        code: code.to_string(),
        description: format!("[{}] {} '{}'(으)로 처리되었습니다.", category, category.description_prefix(), code),
    }
}
