use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "doomsday.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DoomsdayConfig {
    /// Input parsing settings.
    #[serde(default)]
    pub input: InputToml,

    /// Output formatting settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputToml {
    #[serde(default = "default_separator")]
    pub separator: char,
}

impl Default for InputToml {
    fn default() -> Self {
        Self {
            separator: default_separator(),
        }
    }
}

fn default_separator() -> char {
    '/'
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How a computed weekday is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `day of week: Thursday`
    #[default]
    Name,
    /// `4` (Sunday = 0)
    Index,
    /// `day of week: Thursday (4)`
    Both,
}

/// Parse a configuration from TOML text.
pub fn parse(toml_str: &str) -> Result<DoomsdayConfig> {
    toml::from_str(toml_str).context("failed to parse TOML config")
}

/// Load the configuration from `path`, or from [`DEFAULT_CONFIG`] when it
/// exists, falling back to built-in defaults.
pub fn load(path: Option<&Path>) -> Result<DoomsdayConfig> {
    let path: PathBuf = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG);
            if !fallback.is_file() {
                debug!("no config file, using defaults");
                return Ok(DoomsdayConfig::default());
            }
            fallback
        }
    };

    debug!(path = %path.display(), "loading config");
    let toml_str = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse(&toml_str).with_context(|| format!("in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.input.separator, '/');
        assert_eq!(cfg.output.format, OutputFormat::Name);
    }

    #[test]
    fn full_config() {
        let cfg = parse(
            r#"
            [input]
            separator = "-"

            [output]
            format = "both"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.input.separator, '-');
        assert_eq!(cfg.output.format, OutputFormat::Both);
    }

    #[test]
    fn unknown_field_rejected() {
        assert!(parse("[input]\norder = \"dmy\"\n").is_err());
        assert!(parse("[locale]\nlang = \"fr\"\n").is_err());
    }

    #[test]
    fn unknown_format_rejected() {
        assert!(parse("[output]\nformat = \"short\"\n").is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"index\"").unwrap();
        let cfg = load(Some(file.path())).unwrap();
        assert_eq!(cfg.output.format, OutputFormat::Index);
        assert_eq!(cfg.input.separator, '/');
    }

    #[test]
    fn load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(Some(dir.path().join("missing.toml").as_path())).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
