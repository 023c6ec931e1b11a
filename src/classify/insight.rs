//! Rule-based insight text and keywords. A decision table over domain and
//! subtype substrings; no branch fires without both.

use crate::events::{Domain, RawEvent, Risk, Status};

pub const MAX_KEYWORDS: usize = 3;

/// Branch selected for an event's insight text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightRule {
    Assault,
    Theft,
    TrafficCollision,
    Fire,
    Rescue,
    Missing,
    ChildAbduction,
    Wandering,
    AbnormalBehavior,
    Collapse,
    Crowd,
    Intrusion,
    Flood,
    Earthquake,
    Landslide,
    Heat,
    PowerOutage,
    Sinkhole,
    Facility,
    Generic,
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(*n))
}

pub fn select_rule(event: &RawEvent) -> InsightRule {
    let t = event.event_type.as_str();
    let rule = match event.domain {
        Domain::A if t.contains("폭행") => Some(InsightRule::Assault),
        Domain::A if contains_any(t, &["절도", "강도"]) => Some(InsightRule::Theft),
        Domain::A if contains_any(t, &["교통", "사고"]) => Some(InsightRule::TrafficCollision),
        Domain::B if contains_any(t, &["화재", "연기"]) => Some(InsightRule::Fire),
        Domain::B if contains_any(t, &["구조", "구급"]) => Some(InsightRule::Rescue),
        Domain::C if contains_any(t, &["유괴", "납치"]) => Some(InsightRule::ChildAbduction),
        Domain::C if t.contains("실종") => Some(InsightRule::Missing),
        Domain::C if contains_any(t, &["배회", "아동"]) => Some(InsightRule::Wandering),
        Domain::D if contains_any(t, &["이상행동", "배회"]) => Some(InsightRule::AbnormalBehavior),
        Domain::D if contains_any(t, &["쓰러짐", "낙상"]) => Some(InsightRule::Collapse),
        Domain::D if contains_any(t, &["군집", "밀집"]) => Some(InsightRule::Crowd),
        Domain::D if contains_any(t, &["침입", "월담"]) => Some(InsightRule::Intrusion),
        Domain::E if contains_any(t, &["침수", "호우"]) => Some(InsightRule::Flood),
        Domain::E if t.contains("지진") => Some(InsightRule::Earthquake),
        Domain::E if contains_any(t, &["산사태", "붕괴"]) => Some(InsightRule::Landslide),
        Domain::E if contains_any(t, &["폭염", "한파"]) => Some(InsightRule::Heat),
        Domain::F if t.contains("정전") => Some(InsightRule::PowerOutage),
        Domain::F if t.contains("싱크홀") => Some(InsightRule::Sinkhole),
        Domain::F if t.contains("시설") => Some(InsightRule::Facility),
        _ => None,
    };
    rule.unwrap_or(InsightRule::Generic)
}

fn score_text(p_score: Option<f32>) -> String {
    match p_score {
        Some(p) => format!("{p:.0}점"),
        None => "미산출".to_string(),
    }
}

pub fn generate_insight_text(event: &RawEvent) -> String {
    let RawEvent {
        title,
        description,
        location,
        ..
    } = event;
    let risk = event.risk.as_str();
    let score = score_text(event.p_score);

    match select_rule(event) {
        InsightRule::Assault => format!(
            "{location}에서 '{title}' 건이 접수되었습니다. {description}. 위험도 {risk}, 탐지 신뢰도 {score}로 인근 순찰차 우선 배치와 가해자 동선 CCTV 추적을 권고합니다."
        ),
        InsightRule::Theft => format!(
            "'{title}' 관련 {location} 주변 도주 경로 분석이 필요합니다. {description}. 위험도 {risk}, 신뢰도 {score}. 주요 교차로 CCTV 역추적을 권고합니다."
        ),
        InsightRule::TrafficCollision => format!(
            "{location} '{title}'. {description}. 2차 사고 방지를 위해 교통 통제와 우회 안내를 권고합니다 (위험도 {risk})."
        ),
        InsightRule::Fire => format!(
            "{location}에서 '{title}'. {description}. 위험도 {risk}, 신뢰도 {score}. 인접 건물 대피 안내와 소방차 진입로 확보가 필요합니다."
        ),
        InsightRule::Rescue => format!(
            "'{title}' ({location}). {description}. 구조대 도착 전까지 현장 CCTV로 요구조자 상태를 관찰하십시오 (위험도 {risk})."
        ),
        InsightRule::ChildAbduction => format!(
            "'{title}' 접수. {location} 일대 {description}. 신뢰도 {score}. 차량 번호 판독과 주변 CCTV 동시 추적, 인접 경찰서 공조를 즉시 요청하십시오."
        ),
        InsightRule::Missing => format!(
            "{location}에서 '{title}'. {description}. 최종 목격 지점 기준 반경 1km CCTV 검색과 인상착의 전파를 권고합니다 (위험도 {risk})."
        ),
        InsightRule::Wandering => format!(
            "'{title}' ({location}). {description}. 보호자 연락과 함께 주변 출입구 CCTV 확인을 권고합니다 (신뢰도 {score})."
        ),
        InsightRule::AbnormalBehavior => format!(
            "AI가 {location}에서 '{title}'을(를) 감지했습니다. {description}. 신뢰도 {score}, 위험도 {risk}. 관제 요원의 육안 확인이 필요합니다."
        ),
        InsightRule::Collapse => format!(
            "AI가 {location}에서 '{title}'을(를) 감지했습니다. {description}. 신뢰도 {score}. 119 연계 여부를 즉시 판단하십시오."
        ),
        InsightRule::Crowd => format!(
            "{location} '{title}'. {description}. 위험도 {risk}, 신뢰도 {score}. 분산 유도 방송과 현장 안전요원 증원을 권고합니다."
        ),
        InsightRule::Intrusion => format!(
            "AI가 {location}에서 '{title}'을(를) 감지했습니다. {description}. 신뢰도 {score}. 시설 관리자 통보와 순찰 요청을 권고합니다."
        ),
        InsightRule::Flood => format!(
            "{location} '{title}'. {description}. 위험도 {risk}. 지하차도 진입 통제와 배수 펌프 가동 상태 점검을 권고합니다."
        ),
        InsightRule::Earthquake => format!(
            "'{title}' ({location}). {description}. 여진 가능성에 대비해 주요 시설물 안전 점검을 권고합니다 (위험도 {risk})."
        ),
        InsightRule::Landslide => format!(
            "{location} '{title}'. {description}. 위험도 {risk}. 추가 붕괴에 대비해 통제 구간 확대를 검토하십시오."
        ),
        InsightRule::Heat => format!(
            "'{title}' ({location}). {description}. 취약계층 안부 확인과 쉼터 운영 현황 점검을 권고합니다 (위험도 {risk})."
        ),
        InsightRule::PowerOutage => format!(
            "{location} '{title}'. {description}. 야간 보행 안전을 위해 임시 조명 설치와 한전 연계를 권고합니다."
        ),
        InsightRule::Sinkhole => format!(
            "{location} '{title}'. {description}. 보행자 접근 차단과 지반 조사를 권고합니다 (위험도 {risk})."
        ),
        InsightRule::Facility => format!(
            "{location} '{title}'. {description}. 담당 부서 현장 확인 후 보수 일정을 등록하십시오 (위험도 {risk})."
        ),
        InsightRule::Generic => format!(
            "{location}에서 '{title}' 상황이 접수되었습니다. {description}. 위험도 {risk}, 신뢰도 {score}. 추가 정보 수집 후 대응 수준을 결정하십시오."
        ),
    }
}

static TYPE_KEYWORDS: &[(&str, &str)] = &[
    ("폭행", "폭력"),
    ("강도", "강력범죄"),
    ("절도", "재산범죄"),
    ("사고", "교통사고"),
    ("화재", "화재"),
    ("연기", "연기 감지"),
    ("구조", "인명구조"),
    ("유괴", "아동 안전"),
    ("실종", "실종자 수색"),
    ("아동", "아동 보호"),
    ("배회", "배회 감지"),
    ("쓰러짐", "응급 의심"),
    ("밀집", "인파 관리"),
    ("월담", "무단 침입"),
    ("침수", "침수"),
    ("지진", "지진"),
    ("붕괴", "낙석 · 붕괴"),
    ("폭염", "기상 특보"),
    ("정전", "전력 장애"),
    ("싱크홀", "지반 침하"),
    ("누수", "상수도"),
    ("시설", "시설물 점검"),
];

const HIGH_CONFIDENCE: f32 = 80.0;
const FALLBACK_KEYWORD: &str = "상황 관찰";

/// Up to three keywords, checked in a fixed order: subtype, risk, confidence, status.
pub fn generate_insight_keywords(event: &RawEvent) -> Vec<String> {
    let mut keywords: Vec<&'static str> = Vec::with_capacity(MAX_KEYWORDS);

    for (needle, keyword) in TYPE_KEYWORDS {
        if event.event_type.contains(*needle) {
            push_keyword(&mut keywords, *keyword);
        }
    }
    if event.risk == Risk::High {
        push_keyword(&mut keywords, "고위험");
    }
    if event.p_score.is_some_and(|p| p >= HIGH_CONFIDENCE) {
        push_keyword(&mut keywords, "AI 고신뢰");
    }
    if event.status == Status::Urgent {
        push_keyword(&mut keywords, "즉시 대응");
    }
    if keywords.is_empty() {
        push_keyword(&mut keywords, FALLBACK_KEYWORD);
    }
    keywords.into_iter().map(String::from).collect()
}

fn push_keyword(keywords: &mut Vec<&'static str>, keyword: &'static str) {
    if keywords.len() < MAX_KEYWORDS && !keywords.contains(&keyword) {
        keywords.push(keyword);
    }
}
