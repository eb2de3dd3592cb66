use anyhow::Result;
use serde::Serialize;
use serde_json::{json, Value};

use crate::render::RunOutcome;

/// Pretty-print any serializable value as JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

/// JSON shape for a render run: the record plus the preview contract.
pub fn run_json(outcome: &RunOutcome) -> Value {
    json!({
        "record": outcome.record,
        "subtitle_path": outcome.subtitle_path.display().to_string(),
        "recovery": outcome.recovery,
        "captions": outcome.preview.cues,
        "total_captions": outcome.preview.total,
    })
}
