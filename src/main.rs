use anyhow::{bail, Context, Result};
use capgen::caption::{srt, Style};
use capgen::config::{self, CapgenConfig};
use capgen::output::{json as json_out, table};
use capgen::render::{self, RenderOptions};
use capgen::{language, recover};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "capgen", version, about = "Caption generator — turn transcription payloads into styled SRT subtitles")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Path to config file (default: ~/.capgen/config.toml)
    #[arg(long, global = true, env = "CAPGEN_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recover, style and write subtitles for transcription payloads
    Render {
        /// Payload files, directories, or glob patterns
        paths: Vec<String>,

        /// Read the payload from stdin
        #[arg(long)]
        stdin: bool,

        /// Caption style: meme, formal, casual, aesthetic
        #[arg(long)]
        style: Option<String>,

        /// Requested language code (e.g. en, hi, ta)
        #[arg(long)]
        language: Option<String>,

        /// Directory for subtitle files (default: next to each input)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Exact subtitle path (single input only)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// User to attribute the run to
        #[arg(long, env = "CAPGEN_USER")]
        user: Option<String>,

        /// Preview without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the transcript recovered from a payload
    Recover {
        /// Payload file
        path: Option<PathBuf>,

        /// Read the payload from stdin
        #[arg(long)]
        stdin: bool,

        /// Requested language code
        #[arg(long)]
        language: Option<String>,
    },

    /// List the captions in an SRT file
    Inspect {
        /// SRT file
        path: PathBuf,
    },

    /// List caption styles
    Styles,

    /// List supported languages
    Languages,

    /// Show or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective config
    Show,
    /// Write a commented config template if none exists
    Init,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let json_output = cli.json;
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Render {
            paths,
            stdin,
            style,
            language,
            out_dir,
            output,
            user,
            dry_run,
        } => {
            let cfg = CapgenConfig::load(config_path)?;

            // Reject the style before touching any input or output.
            let style: Style = cfg.style(style.as_deref()).parse()?;

            let opts = RenderOptions {
                style,
                language: cfg.language(language.as_deref()).to_string(),
                output_dir: cfg.output_dir(out_dir.as_deref()),
                output,
                user,
                dry_run,
            };

            let outcomes = if stdin {
                vec![render::render_stdin(&opts)?]
            } else if paths.is_empty() {
                bail!("No paths provided. Use --stdin to read from stdin.");
            } else {
                render::render_paths(&paths, &opts)?
            };

            if json_output {
                let runs: Vec<_> = outcomes.iter().map(json_out::run_json).collect();
                json_out::print_json(&serde_json::json!({
                    "total": runs.len(),
                    "runs": runs,
                }))?;
            } else {
                for outcome in &outcomes {
                    table::print_run(outcome);
                }
                let action = if dry_run { "Would render" } else { "Rendered" };
                println!(
                    "{action} {} subtitle file{}",
                    outcomes.len(),
                    if outcomes.len() == 1 { "" } else { "s" }
                );
            }
        }

        Commands::Recover {
            path,
            stdin,
            language,
        } => {
            let cfg = CapgenConfig::load(config_path)?;
            let content = match (stdin, path) {
                (true, _) => {
                    let mut content = String::new();
                    std::io::stdin()
                        .read_to_string(&mut content)
                        .context("Failed to read from stdin")?;
                    content
                }
                (false, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read: {}", path.display()))?,
                (false, None) => bail!("No path provided. Use --stdin to read from stdin."),
            };

            let code = cfg.language(language.as_deref());
            let transcript = recover::recover(&content, code, language::language_name(code));

            if json_output {
                json_out::print_json(&transcript)?;
            } else {
                table::print_transcript(&transcript);
            }
        }

        Commands::Inspect { path } => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read: {}", path.display()))?;
            let entries = srt::parse_srt(&content)
                .with_context(|| format!("Failed to parse: {}", path.display()))?;

            if json_output {
                let cues: Vec<_> = entries
                    .iter()
                    .map(|e| serde_json::json!({ "index": e.index, "start": e.cue.start, "end": e.cue.end, "text": e.cue.text }))
                    .collect();
                json_out::print_json(&serde_json::json!({
                    "total": cues.len(),
                    "captions": cues,
                }))?;
            } else {
                table::print_entries(&entries);
            }
        }

        Commands::Styles => {
            if json_output {
                let styles: Vec<_> = Style::ALL
                    .iter()
                    .map(|s| serde_json::json!({ "style": s, "name": s.display_name(), "description": s.description() }))
                    .collect();
                json_out::print_json(&styles)?;
            } else {
                table::print_styles();
            }
        }

        Commands::Languages => {
            if json_output {
                let map: serde_json::Map<String, serde_json::Value> = language::LANGUAGES
                    .iter()
                    .map(|(code, name)| (code.to_string(), serde_json::Value::from(*name)))
                    .collect();
                json_out::print_json(&map)?;
            } else {
                table::print_languages();
            }
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let cfg = CapgenConfig::load(config_path)?;
                if json_output {
                    json_out::print_json(&cfg)?;
                } else {
                    println!("{}", cfg.display());
                }
            }
            ConfigAction::Init => {
                let (path, created) = config::init_config(config_path)?;
                if created {
                    println!("Created {}", path.display());
                } else {
                    println!("Config already exists: {}", path.display());
                }
            }
        },
    }

    Ok(())
}
