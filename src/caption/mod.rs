pub mod srt;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CaptionError;
use crate::models::{Cue, Segment, Transcript};

/// Words per meme cue.
pub const MEME_CHUNK_WORDS: usize = 4;

/// Glyphs rotated through by the aesthetic style.
pub const AESTHETIC_GLYPHS: [&str; 5] = ["✨", "・", "☆", "♡", "✧"];

/// Ordered literal substitutions applied by the casual style.
pub const CASUAL_SUBSTITUTIONS: [(&str, &str); 4] = [
    (" and ", " & "),
    ("you are", "you're"),
    ("it is", "it's"),
    ("that is", "that's"),
];

const SENTENCE_ENDINGS: &[char] = &['.', '!', '?'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Meme,
    Formal,
    Casual,
    Aesthetic,
}

impl Style {
    pub const ALL: [Style; 4] = [Style::Meme, Style::Formal, Style::Casual, Style::Aesthetic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Meme => "meme",
            Style::Formal => "formal",
            Style::Casual => "casual",
            Style::Aesthetic => "aesthetic",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Style::Meme => "Meme Style",
            Style::Formal => "Formal Style",
            Style::Casual => "Casual Style",
            Style::Aesthetic => "Aesthetic Style",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Style::Meme => "ALL CAPS, SHORT BURSTS, EMOJI-FRIENDLY",
            Style::Formal => "Professional, complete sentences",
            Style::Casual => "Natural, conversational tone",
            Style::Aesthetic => "✨ Decorative and artistic ✨",
        }
    }

    /// Transform segments into cues. Every cue comes from exactly one segment.
    pub fn apply(&self, segments: &[Segment]) -> Vec<Cue> {
        match self {
            Style::Meme => meme(segments),
            Style::Formal => segments.iter().map(|s| retext(s, formal_text(&s.text))).collect(),
            Style::Casual => segments.iter().map(|s| retext(s, casual_text(&s.text))).collect(),
            Style::Aesthetic => segments
                .iter()
                .enumerate()
                .map(|(idx, s)| retext(s, aesthetic_text(&s.text, idx)))
                .collect(),
        }
    }
}

impl FromStr for Style {
    type Err = CaptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "meme" => Ok(Style::Meme),
            "formal" => Ok(Style::Formal),
            "casual" => Ok(Style::Casual),
            "aesthetic" => Ok(Style::Aesthetic),
            other => Err(CaptionError::InvalidStyle(other.to_string())),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Style a transcript's segments.
pub fn style(transcript: &Transcript, style: Style) -> Vec<Cue> {
    style.apply(&transcript.segments)
}

/// Style a transcript by style name, rejecting names outside the fixed set.
pub fn style_named(transcript: &Transcript, name: &str) -> Result<Vec<Cue>, CaptionError> {
    Ok(style(transcript, name.parse()?))
}

fn retext(segment: &Segment, text: String) -> Cue {
    Cue {
        start: segment.start,
        end: segment.end,
        text,
    }
}

fn meme(segments: &[Segment]) -> Vec<Cue> {
    let mut cues = Vec::new();

    for seg in segments {
        let words: Vec<&str> = seg.text.split_whitespace().collect();
        let chunks: Vec<&[&str]> = words.chunks(MEME_CHUNK_WORDS).collect();

        let span = seg.end - seg.start;
        let per_chunk = if chunks.is_empty() {
            span
        } else {
            span / chunks.len() as f64
        };

        for (i, chunk) in chunks.iter().enumerate() {
            let start = seg.start + i as f64 * per_chunk;
            cues.push(Cue {
                start,
                end: start + per_chunk,
                text: chunk.join(" ").to_uppercase(),
            });
        }
    }

    cues
}

fn formal_text(text: &str) -> String {
    let text = text.trim();
    let mut chars = text.chars();
    let mut out: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => return String::new(),
    };
    if !out.ends_with(SENTENCE_ENDINGS) {
        out.push('.');
    }
    out
}

fn casual_text(text: &str) -> String {
    CASUAL_SUBSTITUTIONS
        .iter()
        .fold(text.trim().to_lowercase(), |acc, (from, to)| acc.replace(from, to))
}

fn aesthetic_text(text: &str, idx: usize) -> String {
    let text = text.trim().to_lowercase();
    if idx % 3 == 0 {
        let glyph = AESTHETIC_GLYPHS[idx % AESTHETIC_GLYPHS.len()];
        format!("{glyph} {text} {glyph}")
    } else if idx % 2 == 0 {
        format!("~ {text} ~")
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(start: f64, end: f64, text: &str) -> Segment {
        Segment::new(0, start, end, text)
    }

    fn cue(start: f64, end: f64, text: &str) -> Cue {
        Cue {
            start,
            end,
            text: text.to_string(),
        }
    }

    #[test]
    fn parses_known_styles_only() {
        for s in Style::ALL {
            assert_eq!(s.as_str().parse::<Style>().unwrap(), s);
        }
        let err = "sarcastic".parse::<Style>().unwrap_err();
        assert!(matches!(err, CaptionError::InvalidStyle(ref name) if name == "sarcastic"));
        assert!("Meme".parse::<Style>().is_err());
    }

    #[test]
    fn meme_splits_into_four_word_chunks() {
        let cues = Style::Meme.apply(&[seg(0.0, 4.0, "one two three four five six seven eight")]);
        assert_eq!(
            cues,
            vec![
                cue(0.0, 2.0, "ONE TWO THREE FOUR"),
                cue(2.0, 4.0, "FIVE SIX SEVEN EIGHT"),
            ]
        );
    }

    #[test]
    fn meme_last_chunk_may_be_short() {
        let cues = Style::Meme.apply(&[seg(10.0, 13.0, "a b c d e f g h i")]);
        assert_eq!(cues.len(), 3);
        assert_eq!(cues[2].text, "I");
        assert_eq!(cues[0].start, 10.0);
        assert_eq!(cues[1].start, 11.0);
        assert_eq!(cues[2].end, 13.0);
    }

    #[test]
    fn meme_skips_empty_segments() {
        let cues = Style::Meme.apply(&[seg(0.0, 1.0, "   "), seg(1.0, 2.0, "hi")]);
        assert_eq!(cues, vec![cue(1.0, 2.0, "HI")]);
    }

    #[test]
    fn formal_capitalizes_and_terminates() {
        let cues = Style::Formal.apply(&[
            seg(0.0, 1.0, "hello world"),
            seg(1.0, 2.0, "  already done!  "),
            seg(2.0, 3.0, "   "),
            seg(3.0, 4.0, "élan vital?"),
        ]);
        assert_eq!(cues[0], cue(0.0, 1.0, "Hello world."));
        assert_eq!(cues[1].text, "Already done!");
        assert_eq!(cues[2].text, "");
        assert_eq!(cues[3].text, "Élan vital?");
    }

    #[test]
    fn casual_lowercases_and_contracts() {
        let cues = Style::Casual.apply(&[seg(0.0, 1.0, "You are great and it is fine")]);
        assert_eq!(cues, vec![cue(0.0, 1.0, "you're great & it's fine")]);

        let cues = Style::Casual.apply(&[seg(0.0, 1.0, "That is it")]);
        assert_eq!(cues[0].text, "that's it");
    }

    #[test]
    fn aesthetic_decorates_by_position() {
        let segments: Vec<Segment> = (0..7)
            .map(|i| Segment::new(i, i as f64, i as f64 + 1.0, format!("Line {i}")))
            .collect();
        let texts: Vec<String> = Style::Aesthetic
            .apply(&segments)
            .into_iter()
            .map(|c| c.text)
            .collect();
        assert_eq!(
            texts,
            vec![
                "✨ line 0 ✨",
                "line 1",
                "~ line 2 ~",
                "♡ line 3 ♡",
                "~ line 4 ~",
                "line 5",
                "・ line 6 ・",
            ]
        );
    }

    #[test]
    fn one_cue_styles_keep_timing() {
        let segments = vec![seg(1.25, 2.5, "a"), seg(2.5, 9.0, "b")];
        for s in [Style::Formal, Style::Casual, Style::Aesthetic] {
            let cues = s.apply(&segments);
            assert_eq!(cues.len(), 2);
            assert_eq!((cues[1].start, cues[1].end), (2.5, 9.0));
        }
    }
}
