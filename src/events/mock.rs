//! Synthetic incident set. Built fresh from a static table on every call;
//! sequence numbers run monotonically across the whole generation run.

use super::{Domain, RawEvent, Risk, Status};
use chrono::{Duration, NaiveDate, NaiveTime};

struct Seed {
    domain: Domain,
    event_type: &'static str,
    title: &'static str,
    risk: Risk,
    status: Status,
    p_score: Option<f32>,
    location: &'static str,
    description: &'static str,
    source: &'static str,
}

#[allow(clippy::too_many_arguments)]
const fn seed(
    domain: Domain,
    event_type: &'static str,
    title: &'static str,
    risk: Risk,
    status: Status,
    p_score: Option<f32>,
    location: &'static str,
    description: &'static str,
    source: &'static str,
) -> Seed {
    Seed {
        domain,
        event_type,
        title,
        risk,
        status,
        p_score,
        location,
        description,
        source,
    }
}

use super::Domain::{A, B, C, D, E, F};
use super::Risk::{High, Low, Medium};
use super::Status::{Active, Closed, InProgress, New, Urgent};

static SEEDS: &[Seed] = &[
    seed(A, "폭행 · 상해", "심야 주점가 폭행 신고", High, Urgent, Some(92.0), "중앙로 먹자골목", "주점 앞 다수 인원 간 폭행 발생, 부상자 1명", "112 신고"),
    seed(B, "화재 · 연기", "상가 건물 3층 연기 발생", High, Urgent, Some(88.0), "시청역 상가동", "3층 음식점 주방에서 연기 다량 발생", "119 신고"),
    seed(D, "이상행동 · 배회", "지하보도 장시간 배회 감지", Medium, New, Some(64.0), "역전 지하보도", "동일 인물 40분 이상 반복 배회", "AI CCTV"),
    seed(C, "실종 · 치매노인", "치매 어르신 실종 신고", High, Active, Some(81.0), "햇살요양원 인근", "오후 산책 중 보호자와 이탈", "보호자 신고"),
    seed(E, "침수 · 호우", "저지대 도로 침수 우려", Medium, Active, None, "하천변 지하차도", "시간당 40mm 강우로 수위 상승", "재난 센서"),
    seed(F, "시설 · 정전", "가로등 구간 정전", Low, New, None, "공원로 3길", "가로등 12기 점등 불량", "시설 관제"),
    seed(A, "절도 · 강도", "편의점 강도 의심 신고", High, InProgress, Some(77.0), "북부 편의점", "흉기 소지 의심 남성 도주", "112 신고"),
    seed(D, "쓰러짐 · 낙상", "버스정류장 쓰러짐 감지", Medium, New, Some(71.0), "시장 앞 정류장", "고령자 추정 인물 쓰러진 뒤 움직임 없음", "AI CCTV"),
    seed(B, "구조 · 구급", "엘리베이터 갇힘 구조 요청", Medium, Active, None, "주공아파트 104동", "정전으로 엘리베이터 정지, 2명 갇힘", "119 신고"),
    seed(A, "교통 · 사고", "교차로 차량 추돌 사고", Medium, InProgress, Some(58.0), "신시가지 사거리", "승용차 2대 추돌, 경상자 발생", "교통 CCTV"),
    seed(C, "유괴 · 아동", "유괴 의심 · 아동 납치 제보", Medium, Urgent, Some(86.0), "초등학교 후문", "하교 중 아동이 낯선 차량에 탑승했다는 목격 제보", "시민 제보"),
    seed(E, "지진 · 진동", "지진 감지 알림", Low, Closed, None, "시 전역", "규모 2.1 지진 감지, 피해 없음", "기상청 연계"),
    seed(F, "시설 · 싱크홀", "보도 지반 침하 발견", Medium, New, None, "구도심 골목", "보도블록 함몰 직경 1m", "시민 제보"),
    seed(D, "군집 · 밀집", "광장 인파 밀집 경보", High, Active, Some(79.0), "시민광장", "축제 인파 밀집도 임계치 초과", "AI CCTV"),
    seed(A, "폭행 · 상해", "가정폭력 의심 신고", High, Active, Some(74.0), "남부 주택가", "이웃 주민이 비명 소리 신고", "112 신고"),
    seed(B, "화재 · 연기", "야산 연기 목격", Low, New, Some(42.0), "북쪽 야산", "산 중턱 연기 목격 제보, 확인 중", "산불 감시"),
    seed(C, "배회 · 아동", "미아 발생 신고", Medium, Active, Some(66.0), "대형마트 주차장", "5세 남아 보호자와 이탈", "현장 직원"),
    seed(E, "산사태 · 붕괴", "절개지 낙석 발생", High, InProgress, None, "외곽 순환도로", "절개지 낙석으로 1차로 통제", "도로 관제"),
    seed(F, "시설 · 신호기 고장", "보행 신호등 고장", Low, InProgress, None, "시청 앞 교차로", "보행 신호 미점등", "교통 관제"),
    seed(D, "침입 · 월담", "심야 학교 담장 월담 감지", Medium, New, Some(69.0), "중앙중학교", "심야 시간대 담장 월담 인물 감지", "AI CCTV"),
    seed(A, "절도 · 강도", "자전거 절도 신고", Low, Closed, Some(35.0), "대학가 원룸촌", "공용 거치대 자전거 도난", "112 신고"),
    seed(C, "실종 · 장애인", "발달장애인 실종 신고", High, Urgent, Some(84.0), "복지관 인근", "복지관 프로그램 후 귀가하지 않음", "보호자 신고"),
    seed(E, "폭염 · 한파", "폭염 경보 발효", Medium, Active, None, "시 전역", "낮 최고 35도, 무더위쉼터 운영", "기상청 연계"),
    seed(F, "시설 · 누수", "상수도 누수 신고", Low, New, None, "동부 주택가", "도로 위 상수도 누수", "시민 제보"),
];

const FIRST_REPORT: (u32, u32) = (6, 10);
const REPORT_SPACING_MINUTES: i64 = 37;

/// Number of records in the bundled mock set
pub fn mock_len() -> usize {
    SEEDS.len()
}

/// Build the mock incident list for `date`.
pub fn mock_events(date: NaiveDate) -> Vec<RawEvent> {
    let stamp = date.format("%Y%m%d").to_string();
    let first = NaiveTime::from_hms_opt(FIRST_REPORT.0, FIRST_REPORT.1, 0).unwrap_or_default();

    SEEDS
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let seq = i + 1;
            let (time, _) = first.overflowing_add_signed(Duration::minutes(REPORT_SPACING_MINUTES * i as i64));
            RawEvent {
                event_id: format!("{}-{}-{:03}", s.domain, stamp, seq),
                id: format!("evt-{:03}", seq),
                domain: s.domain,
                event_type: s.event_type.to_string(),
                title: s.title.to_string(),
                risk: s.risk,
                status: s.status,
                p_score: s.p_score,
                location: s.location.to_string(),
                time: time.format("%H:%M").to_string(),
                description: s.description.to_string(),
                source: s.source.to_string(),
            }
        })
        .collect()
}
