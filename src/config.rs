//! Layout configuration.
//!
//! The layout config picks the résumé file, the output language, the colour
//! palette, the heading labels and which sections go in which column.
//!
//! ## File Format
//!
//! YAML by default. A file ending in `.toml` is read as TOML with the same keys.
//!
//! ```yaml
//! json_resume_path: resume.json   # relative to this file
//! language: en                    # en | pt | anything else = platform locale
//! name: ""                        # overrides basics.name when non-empty
//!
//! colors:                         # emitted in this order
//!   accent: "8F0D0D"
//!   heading: "2E2E2E"
//!
//! composition:
//!   first-column: [work, new-page, education]
//!   second-column: [technical-skills, languages, soft-skills, interests]
//!
//! strings:                        # section headings
//!   work: Experience
//!   education: Education
//!   technical-skills: Technical Skills
//!   language: Languages
//!   soft-skills: Soft Skills
//!   interests: Interests
//!
//! ignore-certificates-of: [course]   # certificate categories to leave out
//! volunteer-dates: year              # year | month-year
//! ```
//!
//! Unknown top-level keys are rejected to catch typos early. Unknown section
//! tokens in a composition are not errors: they are reported as
//! [`ConfigWarning`]s and skipped when rendering.

use crate::normalize::{DateFormatter, DateGranularity};
use crate::section::{Block, Composition, Section, parse_composition};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Section heading labels keyed by display-string key.
pub type Strings = IndexMap<String, String>;

/// Layout configuration loaded from `config.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Path to the JSON Resume document.
    pub json_resume_path: PathBuf,
    /// Output language tag; selects month names and the output directory.
    pub language: String,
    /// Display name override.
    #[serde(default)]
    pub name: Option<String>,
    /// Colour name → 6-digit hex value, in definition order.
    #[serde(default, deserialize_with = "deserialize_colors")]
    pub colors: IndexMap<String, String>,
    pub composition: ColumnsConfig,
    #[serde(default, deserialize_with = "null_as_default")]
    pub strings: Strings,
    /// Certificate categories to leave out.
    #[serde(
        default,
        rename = "ignore-certificates-of",
        deserialize_with = "null_as_default"
    )]
    pub ignore_certificates_of: Vec<String>,
    /// Date granularity for volunteer entries.
    #[serde(default, rename = "volunteer-dates")]
    pub volunteer_dates: DateGranularity,
}

/// The two ordered column compositions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnsConfig {
    #[serde(default, rename = "first-column", deserialize_with = "null_as_default")]
    pub first_column: Vec<String>,
    #[serde(default, rename = "second-column", deserialize_with = "null_as_default")]
    pub second_column: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Left,
    Right,
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::Left => f.write_str("first-column"),
            Column::Right => f.write_str("second-column"),
        }
    }
}

/// A non-fatal config problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    UnknownSection { column: Column, token: String },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::UnknownSection { column, token } => write!(
                f,
                "composition.{column}: unknown section '{token}' will be skipped"
            ),
        }
    }
}

impl LayoutConfig {
    /// The name override, if set to something non-blank.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }

    pub fn column(&self, column: Column) -> Composition {
        match column {
            Column::Left => parse_composition(&self.composition.first_column),
            Column::Right => parse_composition(&self.composition.second_column),
        }
    }

    pub fn date_formatter(&self) -> DateFormatter {
        DateFormatter::for_language(&self.language)
    }

    /// Heading label for a section, trying each of its display-string keys.
    pub fn label(&self, section: Section) -> Option<&str> {
        lookup_label(&self.strings, section)
    }

    /// Check values and collect warnings.
    ///
    /// Fails on an empty language tag, a non-hex colour, or a composed
    /// section without a heading label. Unknown composition tokens become
    /// warnings (also logged).
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, ConfigError> {
        if self.language.trim().is_empty() {
            return Err(ConfigError::Validation("language must not be empty".into()));
        }
        for (name, value) in &self.colors {
            if !is_hex_color(value) {
                return Err(ConfigError::Validation(format!(
                    "colors.{name} must be a 6-digit hex value, got '{value}'"
                )));
            }
        }

        let mut warnings = Vec::new();
        for column in [Column::Left, Column::Right] {
            let composition = self.column(column);
            for block in &composition.blocks {
                if let Block::Section(section) = block {
                    if self.label(*section).is_none() {
                        return Err(ConfigError::Validation(format!(
                            "strings.{} is required by composition.{column}",
                            section.label_keys()[0]
                        )));
                    }
                }
            }
            for unknown in composition.unknown {
                let warning = ConfigWarning::UnknownSection {
                    column,
                    token: unknown.0,
                };
                tracing::warn!("{warning}");
                warnings.push(warning);
            }
        }
        Ok(warnings)
    }
}

/// Find the heading label for `section` in a display-string table.
pub fn lookup_label(strings: &Strings, section: Section) -> Option<&str> {
    section
        .label_keys()
        .iter()
        .find_map(|key| strings.get(*key))
        .map(String::as_str)
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 6 && value.chars().all(|c| c.is_ascii_hexdigit())
}

/// Treat an explicit `null` (or `key:` with no value) the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// YAML reads `colour: 123456` as an integer; accept it and zero-pad back to six digits.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorValue {
    Text(String),
    Number(u64),
}

fn deserialize_colors<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: IndexMap<String, ColorValue> = null_as_default(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(name, value)| {
            let value = match value {
                ColorValue::Text(s) => s,
                ColorValue::Number(n) => format!("{n:06}"),
            };
            (name, value)
        })
        .collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// `.toml` files are TOML; everything else is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Parse config text without touching the filesystem.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<LayoutConfig, ConfigError> {
    let config = match format {
        ConfigFormat::Yaml => serde_yaml_ng::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
    };
    Ok(config)
}

/// Directory that relative paths in a config file are resolved against.
pub fn config_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Load and validate a config file.
///
/// A relative `json_resume_path` is rewritten to be relative to the config
/// file's directory. Returns the config together with any warnings.
pub fn load_config(path: &Path) -> Result<(LayoutConfig, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config = parse_config(&content, ConfigFormat::from_path(path))?;
    if config.json_resume_path.is_relative() {
        config.json_resume_path = config_dir(path).join(&config.json_resume_path);
    }
    let warnings = config.validate()?;
    tracing::debug!(
        path = %path.display(),
        language = %config.language,
        warnings = warnings.len(),
        "loaded layout config"
    );
    Ok((config, warnings))
}
