//! Scaffolder configuration stored at `scaffold.toml` in the invocation root.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Config file name expected at the invocation root.
pub const CONFIG_FILE: &str = "scaffold.toml";

/// Scaffolder configuration (TOML).
///
/// This file is intended to be edited by humans and must remain stable and
/// automatable. Missing fields default to the stock layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Year substituted for the year token in rendered templates.
    pub year: String,

    /// Directory holding the template files, relative to the invocation root.
    pub templates_dir: String,

    /// Directory that receives the per-day directories.
    pub output_dir: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            year: "2025".to_string(),
            templates_dir: "templates".to_string(),
            output_dir: "src".to_string(),
        }
    }
}

impl ScaffoldConfig {
    pub fn validate(&self) -> Result<()> {
        if self.year.len() != 4 || !self.year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfigurationError::Config(format!(
                "year must be a 4-digit string, got '{}'",
                self.year
            ))
            .into());
        }
        if self.templates_dir.trim().is_empty() {
            return Err(
                ConfigurationError::Config("templates_dir must be non-empty".to_string()).into(),
            );
        }
        if self.output_dir.trim().is_empty() {
            return Err(
                ConfigurationError::Config("output_dir must be non-empty".to_string()).into(),
            );
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ScaffoldConfig::default()`.
pub fn load_config(path: &Path) -> Result<ScaffoldConfig> {
    if !path.exists() {
        let cfg = ScaffoldConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ScaffoldConfig = toml::from_str(&contents)
        .map_err(|err| ConfigurationError::Config(format!("parse {}: {err}", path.display())))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &ScaffoldConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
