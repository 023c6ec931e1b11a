//! Control room entrypoint: builds the mock incident set, runs one snapshot
//! through the pipeline, and writes positioned events as JSON lines to stdout.

use control_room::{config::CoreConfig, events::mock_events, ControlRoomPipeline, StructuredLogger};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("CONTROL_ROOM_CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.json"));
    let (config, rejected) = CoreConfig::load_or_default(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);
    if let Some(e) = rejected {
        warn!(path = %config_path.display(), error = %e, "config rejected; using defaults");
    }
    info!(config = %config_path.display(), generated_on = %config.mock.generated_on, "control room starting");

    let events = mock_events(config.mock.generated_on);
    let pipeline = ControlRoomPipeline::new(&config);
    let snapshot = pipeline.run(&events);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    StructuredLogger::emit_snapshot(&snapshot, &mut out)?;
    out.flush()?;

    info!(events = snapshot.events.len(), fingerprint = %snapshot.fingerprint, "snapshot written");
    Ok(())
}
