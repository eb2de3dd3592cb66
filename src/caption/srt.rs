use std::path::Path;

use tracing::{error, info};

use crate::error::CaptionError;
use crate::models::Cue;

/// A cue read back from an SRT document, with its sequence number.
#[derive(Debug, Clone, PartialEq)]
pub struct SrtEntry {
    pub index: usize,
    pub cue: Cue,
}

/// Format seconds as `HH:MM:SS,mmm`.
///
/// The value is rounded to whole microseconds before being split, and the
/// millisecond field is truncated. Hours keep counting past 24 (`90000.0`
/// gives `25:00:00,000`); whole days are not dropped the way a day-wrapping
/// formatter would drop them.
pub fn format_timestamp(seconds: f64) -> String {
    let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
    let micros = (seconds * 1_000_000.0).round() as u64;
    let whole = micros / 1_000_000;
    let millis = (micros % 1_000_000) / 1000;

    let h = whole / 3600;
    let m = (whole % 3600) / 60;
    let s = whole % 60;
    format!("{h:02}:{m:02}:{s:02},{millis:03}")
}

/// Render cues as an SRT document, numbered from 1 in list order.
pub fn render_srt(cues: &[Cue]) -> String {
    let mut out = String::new();
    for (i, cue) in cues.iter().enumerate() {
        out.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            i + 1,
            format_timestamp(cue.start),
            format_timestamp(cue.end),
            cue.text
        ));
    }
    out
}

/// Write cues to `path` as UTF-8 SRT.
pub fn write_srt(cues: &[Cue], path: &Path) -> Result<(), CaptionError> {
    std::fs::write(path, render_srt(cues)).map_err(|source| {
        error!("Error generating SRT {}: {source}", path.display());
        CaptionError::Serialization {
            path: path.to_path_buf(),
            source,
        }
    })?;
    info!("SRT file generated: {} ({} cues)", path.display(), cues.len());
    Ok(())
}

/// Parse `HH:MM:SS,mmm` into seconds.
pub fn parse_timestamp(ts: &str) -> Option<f64> {
    let (hms, millis) = ts.trim().split_once(',')?;
    let parts: Vec<&str> = hms.split(':').collect();
    let [h, m, s] = parts.as_slice() else {
        return None;
    };
    let h: u64 = h.parse().ok()?;
    let m: u64 = m.parse().ok()?;
    let s: u64 = s.parse().ok()?;
    let ms: u64 = millis.parse().ok()?;
    Some((h * 3600 + m * 60 + s) as f64 + ms as f64 / 1000.0)
}

/// Read an SRT document back into numbered cues.
///
/// Text runs until the next blank line; multi-line text is joined with `\n`.
pub fn parse_srt(input: &str) -> Result<Vec<SrtEntry>, CaptionError> {
    let lines: Vec<&str> = input
        .trim_start_matches('\u{feff}')
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .collect();
    let malformed = |line: usize, reason: String| CaptionError::MalformedSubtitle {
        line: line + 1,
        reason,
    };

    let mut entries = Vec::new();
    let mut pos = 0;

    while pos < lines.len() {
        if lines[pos].trim().is_empty() {
            pos += 1;
            continue;
        }

        let index: usize = lines[pos]
            .trim()
            .parse()
            .map_err(|_| malformed(pos, format!("expected sequence number, got {:?}", lines[pos])))?;
        pos += 1;

        let ts_line = lines
            .get(pos)
            .ok_or_else(|| malformed(pos, "missing timestamp line".to_string()))?;
        let (start, end) = ts_line
            .split_once("-->")
            .and_then(|(a, b)| Some((parse_timestamp(a)?, parse_timestamp(b)?)))
            .ok_or_else(|| malformed(pos, format!("invalid timestamp line {ts_line:?}")))?;
        pos += 1;

        let text_start = pos;
        while pos < lines.len() && !lines[pos].is_empty() {
            pos += 1;
        }
        let text = lines[text_start..pos].join("\n");

        entries.push(SrtEntry {
            index,
            cue: Cue { start, end, text },
        });
    }

    Ok(entries)
}
