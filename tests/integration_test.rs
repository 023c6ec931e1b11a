//! Integration test: config load/validation, pipeline memoization, ndjson output, summary.

use control_room::{
    classify::{Priority, ProcessingStage},
    config::CoreConfig,
    events::{mock::mock_len, mock_events},
    pipeline::{fingerprint, ControlRoomPipeline},
    CoreError, StructuredLogger,
};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

fn write_config(json: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(json.as_bytes()).unwrap();
    f
}

#[test]
fn config_load_default() {
    let c = CoreConfig::load(Path::new("nonexistent.json"));
    assert_eq!(c.layout.ring_size, 6);
    assert_eq!(c.layout.clamp_min, 5.0);
    assert_eq!(c.layout.clamp_max, 95.0);
    assert_eq!(c.overrides.priority_by_id.get("evt-003"), Some(&Priority::Caution));
    assert_eq!(
        c.overrides.stage_by_event_id.get("C-20251019-011"),
        Some(&ProcessingStage::TrackingSupport)
    );
    assert_eq!(c.mock.generated_on.to_string(), "2025-10-19");
    assert!(c.validate().is_ok());
}

#[test]
fn config_missing_file_is_io_error() {
    let err = CoreConfig::try_load(Path::new("nonexistent.json")).unwrap_err();
    assert!(matches!(err, CoreError::Io(_)));
}

#[test]
fn config_partial_file_fills_defaults() {
    let f = write_config(
        r#"{
            "layout": { "ring_size": 4, "base_radius": 10.0 },
            "overrides": {
                "priority_by_id": { "evt-001": "주의" },
                "position_swaps": [["evt-004", "evt-005"]]
            },
            "log": { "level": "debug", "json": false }
        }"#,
    );
    let c = CoreConfig::try_load(f.path()).unwrap();
    assert_eq!(c.layout.ring_size, 4);
    assert_eq!(c.layout.base_radius, 10.0);
    assert_eq!(c.layout.ring_gap, 9.0);
    assert_eq!(c.overrides.priority_by_id.len(), 1);
    assert_eq!(c.overrides.priority_by_id.get("evt-001"), Some(&Priority::Caution));
    // Omitted tables keep their defaults
    assert_eq!(c.overrides.stage_by_event_id.len(), 1);
    assert_eq!(c.overrides.position_swaps, vec![("evt-004".to_string(), "evt-005".to_string())]);
    assert_eq!(c.log.level, "debug");
    assert!(!c.log.json);
}

#[test]
fn config_rejects_invalid_layout() {
    let f = write_config(r#"{ "layout": { "ring_size": 0 } }"#);
    let err = CoreConfig::try_load(f.path()).unwrap_err();
    assert!(matches!(err, CoreError::InvalidConfig(_)));
    // Lenient loader falls back to defaults
    assert_eq!(CoreConfig::load(f.path()).layout.ring_size, 6);

    let f = write_config(r#"{ "layout": { "clamp_min": 95.0, "clamp_max": 5.0 } }"#);
    assert!(matches!(CoreConfig::try_load(f.path()), Err(CoreError::InvalidConfig(_))));

    let f = write_config(r#"{ "layout": { "jitter_fraction": 1.5 } }"#);
    assert!(matches!(CoreConfig::try_load(f.path()), Err(CoreError::InvalidConfig(_))));
}

#[test]
fn config_rejects_self_swap_and_bad_json() {
    let f = write_config(r#"{ "overrides": { "position_swaps": [["evt-001", "evt-001"]] } }"#);
    assert!(matches!(CoreConfig::try_load(f.path()), Err(CoreError::InvalidConfig(_))));

    let f = write_config("{ not json");
    assert!(matches!(CoreConfig::try_load(f.path()), Err(CoreError::Json(_))));
}

#[test]
fn config_rejects_id_in_two_swap_pairs() {
    let f = write_config(
        r#"{ "overrides": { "position_swaps": [["evt-001", "evt-002"], ["evt-002", "evt-003"]] } }"#,
    );
    let err = CoreConfig::try_load(f.path()).unwrap_err();
    assert!(matches!(err, CoreError::InvalidConfig(ref m) if m.contains("evt-002")), "{err}");

    let f = write_config(
        r#"{ "overrides": { "position_swaps": [["evt-001", "evt-002"], ["evt-003", "evt-004"]] } }"#,
    );
    assert!(CoreConfig::try_load(f.path()).is_ok());
}

#[test]
fn rejected_config_is_reported_after_falling_back() {
    let f = write_config(r#"{ "layout": { "ring_size": 0 } }"#);
    let (c, rejected) = CoreConfig::load_or_default(f.path());
    assert_eq!(c.layout.ring_size, 6);
    assert!(matches!(rejected, Some(CoreError::InvalidConfig(_))));

    let f = write_config("{ not json");
    let (_, rejected) = CoreConfig::load_or_default(f.path());
    assert!(matches!(rejected, Some(CoreError::Json(_))));

    // No file is the normal case, not a rejection
    let (c, rejected) = CoreConfig::load_or_default(Path::new("nonexistent.json"));
    assert!(rejected.is_none());
    assert_eq!(c.layout.ring_size, 6);

    let f = write_config(r#"{ "log": { "level": "debug" } }"#);
    let (c, rejected) = CoreConfig::load_or_default(f.path());
    assert!(rejected.is_none());
    assert_eq!(c.log.level, "debug");
}

#[test]
fn mock_events_are_sequenced_and_unique() {
    let config = CoreConfig::default();
    let events = mock_events(config.mock.generated_on);
    assert_eq!(events.len(), mock_len());
    assert_eq!(events[0].event_id, "A-20251019-001");
    assert_eq!(events[0].id, "evt-001");
    assert_eq!(events[0].time, "06:10");
    assert_eq!(events[10].event_id, "C-20251019-011");

    let mut ids: Vec<&str> = events.iter().map(|e| e.event_id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), events.len());

    for (i, e) in events.iter().enumerate() {
        let parts: Vec<&str> = e.event_id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], e.domain.to_string());
        assert_eq!(parts[1], "20251019");
        assert_eq!(parts[2].parse::<usize>().unwrap(), i + 1);
    }
}

#[test]
fn pipeline_memoizes_on_unchanged_snapshot() {
    let config = CoreConfig::default();
    let pipeline = ControlRoomPipeline::new(&config);
    let events = mock_events(config.mock.generated_on);

    let first = pipeline.run(&events);
    let second = pipeline.run(&events.clone());
    assert!(Arc::ptr_eq(&first, &second));

    let mut changed = events.clone();
    changed[0].title.push_str(" (갱신)");
    let third = pipeline.run(&changed);
    assert!(!Arc::ptr_eq(&first, &third));
    assert_ne!(first.fingerprint, third.fingerprint);

    pipeline.invalidate();
    let fourth = pipeline.run(&changed);
    assert!(!Arc::ptr_eq(&third, &fourth));
    assert_eq!(third.layout, fourth.layout);
    assert_eq!(third.events, fourth.events);
}

#[test]
fn fingerprint_tracks_every_field() {
    let events = mock_events(CoreConfig::default().mock.generated_on);
    let base = fingerprint(&events);
    assert_eq!(base, fingerprint(&events));
    assert_eq!(base.len(), 64);

    let mut scored = events.clone();
    scored[5].p_score = Some(10.0);
    assert_ne!(base, fingerprint(&scored));

    let mut reordered = events.clone();
    reordered.swap(0, 1);
    assert_ne!(base, fingerprint(&reordered));

    assert_ne!(fingerprint(&[]), base);
}

#[test]
fn snapshot_summary_counts_every_event() {
    let config = CoreConfig::default();
    let pipeline = ControlRoomPipeline::new(&config);
    let snapshot = pipeline.run(&mock_events(config.mock.generated_on));
    let s = &snapshot.summary;

    assert_eq!(s.total, 24);
    assert_eq!(s.by_priority.values().sum::<usize>(), 24);
    assert_eq!(s.by_domain.values().sum::<usize>(), 24);
    assert_eq!(s.by_stage.values().sum::<usize>(), 24);
    assert_eq!(s.by_resolution.values().sum::<usize>(), 24);
    assert_eq!(s.priority_count(Priority::Urgent), 9);
    assert_eq!(s.priority_count(Priority::Alert), 7);
    assert_eq!(s.priority_count(Priority::Caution), 8);
    assert_eq!(s.priority_spread(), 2);
    assert!(s.mean_p_score.is_some());
}

#[test]
fn emit_snapshot_writes_one_line_per_event_plus_summary() {
    let config = CoreConfig::default();
    let pipeline = ControlRoomPipeline::new(&config);
    let snapshot = pipeline.run(&mock_events(config.mock.generated_on));

    let mut buf: Vec<u8> = Vec::new();
    StructuredLogger::emit_snapshot(&snapshot, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), snapshot.events.len() + 1);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["eventId"], "A-20251019-001");
    assert_eq!(first["type"], "폭행 · 상해");
    assert_eq!(first["normalizedType"], "112-치안");
    assert_eq!(first["resolution"]["category"], "112");
    assert!(first["position"]["left"].is_number());

    let last: serde_json::Value = serde_json::from_str(lines[lines.len() - 1]).unwrap();
    assert_eq!(last["kind"], "summary");
    assert_eq!(last["summary"]["total"], 24);
    assert_eq!(last["rings"], 4);
}
