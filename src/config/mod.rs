use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// `[defaults]` block from config.toml.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct Defaults {
    pub style: Option<String>,
    pub language: Option<String>,
    pub output_dir: Option<PathBuf>,
}

/// Top-level capgen config file structure.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct CapgenConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

impl CapgenConfig {
    /// Load config from `path`, or ~/.capgen/config.toml. Returns default if the file doesn't exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => config_path()?,
        };
        if !path.exists() {
            return Ok(CapgenConfig::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Resolve the style name: CLI flag > config > "meme".
    pub fn style<'a>(&'a self, cli_flag: Option<&'a str>) -> &'a str {
        cli_flag
            .or(self.defaults.style.as_deref())
            .unwrap_or("meme")
    }

    /// Resolve the language code: CLI flag > config > "en".
    pub fn language<'a>(&'a self, cli_flag: Option<&'a str>) -> &'a str {
        cli_flag
            .or(self.defaults.language.as_deref())
            .unwrap_or(crate::language::DEFAULT_LANGUAGE)
    }

    /// Resolve the output directory. `None` means next to each input file.
    pub fn output_dir(&self, cli_flag: Option<&Path>) -> Option<PathBuf> {
        cli_flag
            .map(Path::to_path_buf)
            .or_else(|| self.defaults.output_dir.clone())
    }

    /// Display the effective config.
    pub fn display(&self) -> String {
        let d = &self.defaults;
        let mut lines = vec!["[defaults]".to_string()];
        match &d.style {
            Some(s) => lines.push(format!("  style = \"{s}\"")),
            None => lines.push("  style = (meme)".to_string()),
        }
        match &d.language {
            Some(l) => lines.push(format!("  language = \"{l}\"")),
            None => lines.push("  language = (en)".to_string()),
        }
        match &d.output_dir {
            Some(o) => lines.push(format!("  output_dir = \"{}\"", o.display())),
            None => lines.push("  output_dir = (next to input)".to_string()),
        }
        lines.join("\n")
    }
}

/// Path to the config file: ~/.capgen/config.toml
pub fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".capgen").join("config.toml"))
}

/// Default config template content.
pub fn default_config_template() -> &'static str {
    r#"# ~/.capgen/config.toml
# Resolution order: CLI flag > this file > built-in default

[defaults]
# style = "meme"          # meme | formal | casual | aesthetic
# language = "en"         # see `capgen languages`
# output_dir = "/path/to/subtitles"
"#
}

/// Create the default config file if it doesn't already exist.
pub fn init_config(path: Option<&Path>) -> Result<(PathBuf, bool)> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config_path()?,
    };
    if path.exists() {
        return Ok((path, false));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, default_config_template())
        .with_context(|| format!("Failed to write config: {}", path.display()))?;
    Ok((path, true))
}
