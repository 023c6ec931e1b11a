//! Pipeline benchmark: mock snapshot → enrichment, and the full memoized pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use control_room::classify::Enricher;
use control_room::config::CoreConfig;
use control_room::events::mock_events;
use control_room::pipeline::ControlRoomPipeline;

fn bench_enrich(c: &mut Criterion) {
    let config = CoreConfig::default();
    let enricher = Enricher::new(&config.overrides);
    let events = mock_events(config.mock.generated_on);

    c.bench_function("enrich_mock_set", |b| b.iter(|| black_box(enricher.enrich(black_box(&events)))));
}

fn bench_pipeline_cold(c: &mut Criterion) {
    let config = CoreConfig::default();
    let pipeline = ControlRoomPipeline::new(&config);
    let events = mock_events(config.mock.generated_on);

    c.bench_function("pipeline_cold", |b| {
        b.iter(|| {
            pipeline.invalidate();
            black_box(pipeline.run(black_box(&events)))
        })
    });
}

fn bench_pipeline_cached(c: &mut Criterion) {
    let config = CoreConfig::default();
    let pipeline = ControlRoomPipeline::new(&config);
    let events = mock_events(config.mock.generated_on);
    pipeline.run(&events);

    c.bench_function("pipeline_cached", |b| b.iter(|| black_box(pipeline.run(black_box(&events)))));
}

criterion_group!(benches, bench_enrich, bench_pipeline_cold, bench_pipeline_cached);
criterion_main!(benches);
