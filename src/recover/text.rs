use tracing::info;

use crate::models::Segment;

/// Pacing heuristic for synthetic timings, applied to every script alike.
pub const CHARS_PER_SECOND: f64 = 12.0;

/// Shortest synthetic fragment, in seconds.
pub const MIN_FRAGMENT_SECS: f64 = 1.0;

/// Latin, Devanagari (danda, double danda) and CJK full-width sentence enders.
pub const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?', '।', '॥', '。', '！', '？'];

/// Split text into trimmed, non-empty fragments.
///
/// Terminators first; text without any terminator is split on newlines; if
/// that still leaves nothing the whole trimmed text is the only fragment.
pub fn split_fragments(text: &str) -> Vec<&str> {
    let text = text.trim();

    if text.contains(SENTENCE_TERMINATORS) {
        let sentences = non_empty(text.split(SENTENCE_TERMINATORS));
        if !sentences.is_empty() {
            return sentences;
        }
    }

    let lines = non_empty(text.lines());
    if !lines.is_empty() {
        return lines;
    }

    vec![text]
}

fn non_empty<'a>(parts: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    parts.map(str::trim).filter(|s| !s.is_empty()).collect()
}

/// Synthetic duration for a fragment, from its character count.
pub fn fragment_duration(fragment: &str) -> f64 {
    (fragment.chars().count() as f64 / CHARS_PER_SECOND).max(MIN_FRAGMENT_SECS)
}

/// Build back-to-back segments starting at zero from unstructured text.
pub fn fallback_segments(text: &str, language_name: &str) -> Vec<Segment> {
    let fragments = split_fragments(text);

    let mut offset = 0.0;
    let segments: Vec<Segment> = fragments
        .into_iter()
        .enumerate()
        .map(|(i, fragment)| {
            let duration = fragment_duration(fragment);
            let seg = Segment {
                id: i as i64,
                start: offset,
                end: offset + duration,
                duration,
                text: fragment.to_string(),
            };
            offset += duration;
            seg
        })
        .collect();

    info!(
        "Created {} fallback segments for {}",
        segments.len(),
        language_name
    );
    segments
}
