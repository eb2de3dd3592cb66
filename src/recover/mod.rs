pub mod json;
pub mod text;

use tracing::{info, warn};

use crate::error::RecoveryError;
use crate::models::{RecoveryTier, Segment, Transcript};

/// Turn a raw transcription payload into a transcript. Never fails.
///
/// Tiers, in order of decreasing timing confidence:
/// 1. structural: a JSON object with a non-empty `segments` array;
/// 2. sentence: the text split on sentence terminators with synthetic pacing;
/// 3. emergency: one zero-length segment holding the raw text verbatim.
///
/// A span that looks like JSON but fails to decode goes straight to the
/// emergency tier.
pub fn recover(raw: &str, language: &str, language_name: &str) -> Transcript {
    match structural_tier(raw) {
        Ok(Some(segments)) => {
            info!("Recovered {} segments from JSON payload", segments.len());
            assemble(segments, RecoveryTier::Structural, language, language_name)
        }
        Ok(None) => match sentence_tier(raw, language_name) {
            Some(segments) => assemble(segments, RecoveryTier::Sentence, language, language_name),
            None => emergency(raw, language, language_name),
        },
        Err(e) => {
            let preview: String = raw.chars().take(500).collect();
            warn!("Could not decode transcription payload: {e}");
            warn!("Payload starts with: {preview}");
            emergency(raw, language, language_name)
        }
    }
}

/// `Ok(None)` means "no usable JSON here, try the next tier".
fn structural_tier(raw: &str) -> Result<Option<Vec<Segment>>, RecoveryError> {
    let cleaned = json::strip_code_fences(raw);

    let Some(span) = json::find_segments_span(cleaned) else {
        warn!("No JSON segments object in payload, using sentence fallback");
        return Ok(None);
    };

    let raw_segments = json::parse_segments(span)?;
    if raw_segments.is_empty() {
        warn!("JSON payload has no segments, using sentence fallback");
        return Ok(None);
    }

    Ok(Some(json::backfill(raw_segments)))
}

/// `None` for blank input, which only the emergency tier can represent.
fn sentence_tier(raw: &str, language_name: &str) -> Option<Vec<Segment>> {
    if raw.trim().is_empty() {
        return None;
    }
    let segments = text::fallback_segments(raw, language_name);
    (!segments.is_empty()).then_some(segments)
}

fn emergency(raw: &str, language: &str, language_name: &str) -> Transcript {
    warn!("Using emergency fallback for {language}");
    Transcript {
        text: raw.to_string(),
        language: language.to_string(),
        language_name: language_name.to_string(),
        duration: 0.0,
        segments: vec![Segment::new(0, 0.0, 0.0, raw)],
        recovery: RecoveryTier::Emergency,
    }
}

fn assemble(
    segments: Vec<Segment>,
    recovery: RecoveryTier,
    language: &str,
    language_name: &str,
) -> Transcript {
    let text = segments
        .iter()
        .map(|s| s.text.as_str())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let duration = segments.last().map(|s| s.end).unwrap_or(0.0);

    Transcript {
        text,
        language: language.to_string(),
        language_name: language_name.to_string(),
        duration,
        segments,
        recovery,
    }
}
