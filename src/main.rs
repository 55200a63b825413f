//! Replay a recorded event sequence against a label template.
//!
//! ```text
//! labelboard <template.json> <events.json>
//! ```
//!
//! Prints the resulting template payload as JSON on stdout. Logs go to
//! stderr; set `RUST_LOG=labelboard=debug` to see session transitions.

use anyhow::{Context, Result, bail};
use labelboard::bounds::NoMeasurements;
use labelboard::editor::LabelEditor;
use labelboard::input::CanvasEvent;
use labelboard::settings::EditorSettings;
use labelboard::template::LabelTemplate;
use std::fs;
use std::path::PathBuf;

fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,labelboard=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}

fn load_settings() -> EditorSettings {
    EditorSettings::load_default_location().unwrap_or_else(|err| {
        tracing::warn!("Using default settings: {}", err);
        EditorSettings::default()
    })
}

fn main() -> Result<()> {
    setup_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [template_path, events_path] = args.as_slice() else {
        bail!("usage: labelboard <template.json> <events.json>");
    };
    let template_path = PathBuf::from(template_path);
    let events_path = PathBuf::from(events_path);

    let template_json = fs::read_to_string(&template_path)
        .with_context(|| format!("Failed to read template {}", template_path.display()))?;
    let template = LabelTemplate::from_json(&template_json)
        .with_context(|| format!("Invalid template {}", template_path.display()))?;

    let events_json = fs::read_to_string(&events_path)
        .with_context(|| format!("Failed to read events {}", events_path.display()))?;
    let events: Vec<CanvasEvent> = serde_json::from_str(&events_json)
        .with_context(|| format!("Invalid event list {}", events_path.display()))?;

    tracing::info!(
        template = %template.name,
        items = template.items.len(),
        events = events.len(),
        "Replaying"
    );

    let mut editor = LabelEditor::from_template(&template, load_settings(), NoMeasurements);
    editor.replay(&events);

    let payload = editor.document().to_payload();
    let output = payload
        .to_json_pretty()
        .context("Failed to serialize payload")?;
    println!("{output}");
    Ok(())
}
