use serde::{Deserialize, Serialize};

/// Number of cues returned in a preview.
pub const PREVIEW_LIMIT: usize = 10;

/// A timed unit of recognized speech after recovery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Position within the owning transcript (0-based unless the payload supplied one).
    pub id: i64,
    pub start: f64,
    pub end: f64,
    pub duration: f64,
    pub text: String,
}

impl Segment {
    /// Build a segment with `duration` derived from `start`/`end`, floored at zero.
    pub fn new(id: i64, start: f64, end: f64, text: impl Into<String>) -> Self {
        Segment {
            id,
            start,
            end,
            duration: (end - start).max(0.0),
            text: text.into(),
        }
    }
}

/// Which recovery tier produced a transcript's segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryTier {
    Structural,
    Sentence,
    Emergency,
}

impl RecoveryTier {
    pub fn as_str(&self) -> &str {
        match self {
            RecoveryTier::Structural => "structural",
            RecoveryTier::Sentence => "sentence",
            RecoveryTier::Emergency => "emergency",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
    pub language: String,
    pub language_name: String,
    pub duration: f64,
    pub segments: Vec<Segment>,
    pub recovery: RecoveryTier,
}

/// A timed, style-transformed caption ready for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// The head of a style run plus its total cue count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preview {
    pub cues: Vec<Cue>,
    pub total: usize,
}

impl Preview {
    pub fn from_cues(cues: &[Cue]) -> Self {
        Preview {
            cues: cues.iter().take(PREVIEW_LIMIT).cloned().collect(),
            total: cues.len(),
        }
    }
}

/// What a completed style run hands to whoever keeps processing history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub user: Option<String>,
    pub source_filename: String,
    pub original_filename: String,
    pub style: String,
    pub language: String,
    pub subtitle_filename: String,
    pub duration: f64,
    pub status: String,
    pub processed_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_duration_is_floored_at_zero() {
        let seg = Segment::new(0, 5.0, 3.0, "backwards");
        assert_eq!(seg.duration, 0.0);
        assert_eq!(Segment::new(1, 1.5, 4.0, "x").duration, 2.5);
    }

    #[test]
    fn preview_keeps_first_ten_and_total() {
        let cues: Vec<Cue> = (0..25)
            .map(|i| Cue {
                start: i as f64,
                end: i as f64 + 1.0,
                text: format!("cue {i}"),
            })
            .collect();
        let preview = Preview::from_cues(&cues);
        assert_eq!(preview.cues.len(), 10);
        assert_eq!(preview.total, 25);
        assert_eq!(preview.cues[9].text, "cue 9");
    }

    #[test]
    fn recovery_tier_serializes_lowercase() {
        let json = serde_json::to_string(&RecoveryTier::Emergency).unwrap();
        assert_eq!(json, "\"emergency\"");
    }
}
