use unicode_width::UnicodeWidthStr;

use crate::caption::srt::{format_timestamp, SrtEntry};
use crate::caption::Style;
use crate::language::LANGUAGES;
use crate::models::{Cue, Transcript};
use crate::render::RunOutcome;

/// Format duration in seconds to human-readable string.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    if h > 0 {
        format!("{h}h{m:02}m")
    } else if m > 0 {
        format!("{m}m{s:02}s")
    } else {
        format!("{s}s")
    }
}

/// Truncate a string to fit within max_width (respecting unicode width).
pub fn truncate(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let cw = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + cw + 3 > max_width {
            result.push_str("...");
            break;
        }
        result.push(ch);
        width += cw;
    }
    result
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

fn print_cue_rows<'a>(rows: impl Iterator<Item = (usize, &'a Cue)>) {
    println!("  {:>4}  {:<29}  TEXT", "#", "TIME");
    println!("  {}", "-".repeat(76));
    for (n, cue) in rows {
        println!(
            "  {:>4}  {} --> {}  {}",
            n,
            format_timestamp(cue.start),
            format_timestamp(cue.end),
            truncate(&cue.text.replace('\n', " / "), 40)
        );
    }
}

/// Print the summary and cue preview for a completed run.
pub fn print_run(outcome: &RunOutcome) {
    let r = &outcome.record;
    let verb = if r.status == "dry-run" { "Would write" } else { "Wrote" };
    println!("{verb}: {}", outcome.subtitle_path.display());
    println!("  Source:   {}", r.source_filename);
    println!("  Style:    {}", r.style);
    println!("  Language: {}", r.language);
    println!("  Duration: {}", format_duration(r.duration));
    println!("  Recovery: {}", outcome.recovery.as_str());
    if let Some(user) = &r.user {
        println!("  User:     {user}");
    }

    let preview = &outcome.preview;
    if preview.total == 0 {
        println!("\n  (no captions)\n");
        return;
    }
    println!(
        "\nShowing {} of {} caption{}:\n",
        preview.cues.len(),
        preview.total,
        plural(preview.total)
    );
    print_cue_rows(preview.cues.iter().enumerate().map(|(i, c)| (i + 1, c)));
    println!();
}

/// Print a recovered transcript's segments.
pub fn print_transcript(t: &Transcript) {
    println!("Transcript ({}, {} tier)", t.language_name, t.recovery.as_str());
    println!("  Duration: {}", format_duration(t.duration));
    println!("  Segments: {}\n", t.segments.len());

    for seg in &t.segments {
        println!(
            "  [{} - {}] {}",
            format_timestamp(seg.start),
            format_timestamp(seg.end),
            truncate(&seg.text.replace('\n', " "), 60)
        );
    }
    println!();
}

/// Print cues read back from an SRT file.
pub fn print_entries(entries: &[SrtEntry]) {
    if entries.is_empty() {
        println!("No captions found.");
        return;
    }
    println!("{} caption{}:\n", entries.len(), plural(entries.len()));
    print_cue_rows(entries.iter().map(|e| (e.index, &e.cue)));
    println!();
}

pub fn print_styles() {
    for style in Style::ALL {
        println!(
            "  {:<10} {:<16} {}",
            style.as_str(),
            style.display_name(),
            style.description()
        );
    }
}

pub fn print_languages() {
    println!("{} languages:\n", LANGUAGES.len());
    for (code, name) in LANGUAGES {
        println!("  {code:<5} {name}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_read_naturally() {
        assert_eq!(format_duration(42.9), "42s");
        assert_eq!(format_duration(125.0), "2m05s");
        assert_eq!(format_duration(3720.0), "1h02m");
    }

    #[test]
    fn truncate_respects_wide_glyphs() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
        // CJK characters are two columns wide.
        assert_eq!(truncate("日本語のテキスト", 9), "日本語...");
    }
}
