use std::fs;
use std::path::Path;

use capgen::caption::{self, srt, Style};
use capgen::error::CaptionError;
use capgen::models::RecoveryTier;
use capgen::recover::recover;
use capgen::render::{render_paths, RenderOptions};

fn options(style: Style, out_dir: &Path) -> RenderOptions {
    RenderOptions {
        style,
        language: "en".to_string(),
        output_dir: Some(out_dir.to_path_buf()),
        output: None,
        user: Some("alice".to_string()),
        dry_run: false,
    }
}

const PAYLOAD: &str = r#"```json
{
  "segments": [
    {"start": 0.0, "end": 4.0, "text": "one two three four five six seven eight"},
    {"start": 4.0, "end": 6.5, "text": "you are great and it is fine"}
  ]
}
```"#;

#[test]
fn renders_meme_subtitles_from_fenced_payload() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ab12cd34_clip.json");
    fs::write(&input, PAYLOAD).unwrap();
    let out_dir = dir.path().join("subs");

    let outcomes = render_paths(
        &[input.display().to_string()],
        &options(Style::Meme, &out_dir),
    )
    .unwrap();

    assert_eq!(outcomes.len(), 1);
    let outcome = &outcomes[0];
    assert_eq!(outcome.recovery, RecoveryTier::Structural);
    assert_eq!(outcome.record.subtitle_filename, "ab12cd34_clip_meme.srt");
    assert_eq!(outcome.record.source_filename, "ab12cd34_clip.json");
    assert_eq!(outcome.record.duration, 6.5);
    assert_eq!(outcome.record.status, "completed");
    assert_eq!(outcome.record.user.as_deref(), Some("alice"));
    assert_eq!(outcome.preview.total, 4);

    let written = fs::read_to_string(out_dir.join("ab12cd34_clip_meme.srt")).unwrap();
    assert_eq!(
        written,
        "1\n00:00:00,000 --> 00:00:02,000\nONE TWO THREE FOUR\n\n\
         2\n00:00:02,000 --> 00:00:04,000\nFIVE SIX SEVEN EIGHT\n\n\
         3\n00:00:04,000 --> 00:00:05,250\nYOU ARE GREAT AND\n\n\
         4\n00:00:05,250 --> 00:00:06,500\nIT IS FINE\n\n"
    );
}

#[test]
fn casual_style_from_prose_payload() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("talk.txt");
    fs::write(&input, "You are great and it is fine. That is all!").unwrap();

    let outcomes = render_paths(
        &[input.display().to_string()],
        &options(Style::Casual, dir.path()),
    )
    .unwrap();
    assert_eq!(outcomes[0].recovery, RecoveryTier::Sentence);

    let written = fs::read_to_string(dir.path().join("talk_casual.srt")).unwrap();
    let entries = srt::parse_srt(&written).unwrap();
    let texts: Vec<&str> = entries.iter().map(|e| e.cue.text.as_str()).collect();
    assert_eq!(texts, vec!["you're great & it's fine", "that's all"]);
    assert_eq!(entries[0].cue.start, 0.0);
    assert_eq!(entries[0].cue.end, entries[1].cue.start);
}

#[test]
fn directory_walk_picks_up_payloads_only() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = dir.path().join("in");
    fs::create_dir_all(inputs.join("nested")).unwrap();
    fs::write(inputs.join("a.json"), PAYLOAD).unwrap();
    fs::write(inputs.join("nested").join("b.txt"), "Hello there.").unwrap();
    fs::write(inputs.join("old.srt"), "1\n00:00:00,000 --> 00:00:01,000\nx\n\n").unwrap();
    let out_dir = dir.path().join("out");

    let outcomes = render_paths(
        &[inputs.display().to_string()],
        &options(Style::Formal, &out_dir),
    )
    .unwrap();

    let names: Vec<&str> = outcomes
        .iter()
        .map(|o| o.record.subtitle_filename.as_str())
        .collect();
    assert_eq!(names, vec!["a_formal.srt", "b_formal.srt"]);
    assert!(out_dir.join("b_formal.srt").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("clip.json");
    fs::write(&input, PAYLOAD).unwrap();
    let out_dir = dir.path().join("out");

    let mut opts = options(Style::Aesthetic, &out_dir);
    opts.dry_run = true;
    let outcomes = render_paths(&[input.display().to_string()], &opts).unwrap();

    assert_eq!(outcomes[0].record.status, "dry-run");
    assert_eq!(outcomes[0].preview.cues[0].text, "✨ one two three four five six seven eight ✨");
    assert!(!out_dir.exists());
}

#[test]
fn output_flag_requires_single_input() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.json"), PAYLOAD).unwrap();
    fs::write(dir.path().join("b.json"), PAYLOAD).unwrap();

    let mut opts = options(Style::Meme, dir.path());
    opts.output = Some(dir.path().join("one.srt"));
    let pattern = dir.path().join("*.json").display().to_string();

    assert!(render_paths(&[pattern], &opts).is_err());
    assert!(!dir.path().join("one.srt").exists());
}

#[test]
fn unknown_style_is_rejected_before_rendering() {
    let transcript = recover(PAYLOAD, "en", "English");
    let err = caption::style_named(&transcript, "vaporwave").unwrap_err();
    assert!(matches!(err, CaptionError::InvalidStyle(ref name) if name == "vaporwave"));

    // RenderOptions only accepts a parsed Style, so a bad name never reaches render_paths.
    let parsed: Result<Style, CaptionError> = "vaporwave".parse();
    assert!(matches!(parsed, Err(CaptionError::InvalidStyle(_))));

    let dir = tempfile::tempdir().unwrap();
    let style: Style = "casual".parse().unwrap();
    let opts = options(style, dir.path());
    assert_eq!(opts.style, Style::Casual);
}

#[test]
fn empty_cue_list_writes_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.srt");
    srt::write_srt(&[], &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn empty_payload_still_produces_subtitles() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("silence.txt");
    fs::write(&input, "").unwrap();

    let outcomes = render_paths(
        &[input.display().to_string()],
        &options(Style::Formal, dir.path()),
    )
    .unwrap();
    assert_eq!(outcomes[0].recovery, RecoveryTier::Emergency);
    assert_eq!(outcomes[0].record.duration, 0.0);

    let written = fs::read_to_string(dir.path().join("silence_formal.srt")).unwrap();
    assert_eq!(written, "1\n00:00:00,000 --> 00:00:00,000\n\n\n");
}
