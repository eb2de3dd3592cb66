use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::caption::{self, srt, Style};
use crate::language;
use crate::models::{Preview, RecoveryTier, RunRecord};
use crate::recover;

/// Extensions picked up when walking a directory of transcription payloads.
const PAYLOAD_EXTENSIONS: &[&str] = &["json", "txt", "text"];

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub style: Style,
    pub language: String,
    /// Directory for subtitle files. `None` writes next to each input.
    pub output_dir: Option<PathBuf>,
    /// Exact subtitle path; only valid for a single input.
    pub output: Option<PathBuf>,
    pub user: Option<String>,
    pub dry_run: bool,
}

/// Result of one recover → style → write run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub record: RunRecord,
    pub subtitle_path: PathBuf,
    pub recovery: RecoveryTier,
    pub preview: Preview,
}

/// Subtitle filename for an input: `<stem>_<style>.srt`.
pub fn subtitle_filename(source: &Path, style: Style) -> String {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("captions");
    format!("{stem}_{}.srt", style.as_str())
}

/// Render one or more paths (files, directories, or glob patterns).
pub fn render_paths(paths: &[String], opts: &RenderOptions) -> Result<Vec<RunOutcome>> {
    let files = collect_inputs(paths)?;

    if opts.output.is_some() && files.len() != 1 {
        bail!(
            "--output needs exactly one input, got {}. Use --out-dir instead.",
            files.len()
        );
    }

    let mut outcomes = Vec::with_capacity(files.len());
    for file in &files {
        outcomes.push(render_file(file, opts)?);
    }
    Ok(outcomes)
}

/// Render a payload read from stdin.
pub fn render_stdin(opts: &RenderOptions) -> Result<RunOutcome> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read from stdin")?;

    let filename = subtitle_filename(Path::new("stdin"), opts.style);
    let subtitle_path = opts.output.clone().unwrap_or_else(|| match &opts.output_dir {
        Some(dir) => dir.join(&filename),
        None => PathBuf::from(&filename),
    });

    render_content(&content, "stdin", subtitle_path, opts)
}

fn collect_inputs(paths: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path_str in paths {
        let path = Path::new(path_str);
        if path.is_dir() {
            collect_directory(path, &mut files)?;
        } else if path.is_file() {
            files.push(path.to_path_buf());
        } else {
            // Try glob pattern
            let matches: Vec<_> = glob::glob(path_str)
                .with_context(|| format!("Invalid path or glob pattern: {path_str}"))?
                .filter_map(|r| r.ok())
                .filter(|p| p.is_file())
                .collect();

            if matches.is_empty() {
                bail!("No files found matching: {path_str}");
            }
            files.extend(matches);
        }
    }

    Ok(files)
}

fn collect_directory(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
        .filter_map(|e| e.ok())
        .collect();
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            collect_directory(&path, files)?;
        } else if is_payload(&path) {
            files.push(path);
        } else {
            info!("Skipping non-payload file: {}", path.display());
        }
    }
    Ok(())
}

fn is_payload(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| PAYLOAD_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

fn render_file(path: &Path, opts: &RenderOptions) -> Result<RunOutcome> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read: {}", path.display()))?;

    let filename = subtitle_filename(path, opts.style);
    let subtitle_path = match (&opts.output, &opts.output_dir) {
        (Some(output), _) => output.clone(),
        (None, Some(dir)) => dir.join(&filename),
        (None, None) => path.with_file_name(&filename),
    };

    let source = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown");

    render_content(&content, source, subtitle_path, opts)
}

fn render_content(
    content: &str,
    source: &str,
    subtitle_path: PathBuf,
    opts: &RenderOptions,
) -> Result<RunOutcome> {
    if !language::is_supported(&opts.language) {
        warn!(
            "Unknown language code {:?}, using {}",
            opts.language,
            language::FALLBACK_LANGUAGE_NAME
        );
    }
    let language_name = language::language_name(&opts.language);

    let transcript = recover::recover(content, &opts.language, language_name);
    info!(
        "Recovered {} segments from {} ({} tier)",
        transcript.segments.len(),
        source,
        transcript.recovery.as_str()
    );

    let cues = caption::style(&transcript, opts.style);
    info!("Formatted {} captions in {} style", cues.len(), opts.style);

    if opts.dry_run {
        info!("[dry-run] Would write: {}", subtitle_path.display());
    } else {
        if let Some(parent) = subtitle_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        srt::write_srt(&cues, &subtitle_path)?;
    }

    let subtitle_filename = subtitle_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();

    let record = RunRecord {
        user: opts.user.clone(),
        source_filename: source.to_string(),
        original_filename: source.to_string(),
        style: opts.style.as_str().to_string(),
        language: opts.language.clone(),
        subtitle_filename,
        duration: transcript.duration,
        status: if opts.dry_run { "dry-run" } else { "completed" }.to_string(),
        processed_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
    };

    Ok(RunOutcome {
        record,
        subtitle_path,
        recovery: transcript.recovery,
        preview: Preview::from_cues(&cues),
    })
}
