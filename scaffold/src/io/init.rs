//! Initialization helpers for a fresh scaffolding root.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::io::config::{CONFIG_FILE, ScaffoldConfig, write_config};

const STARTER_TEMPLATE_NAME: &str = "solution.txt";
const STARTER_TEMPLATE: &str = "Day REPLACE_DAY_NUM (REPLACE_DAY) of REPLACE_YEAR\n";

/// Options for [`init_scaffold`].
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite an existing config and starter template.
    pub force: bool,
}

/// Create `scaffold.toml` and a template directory with a starter template
/// in `root`. Existing files are left alone unless `options.force` is set.
pub fn init_scaffold(root: &Path, options: &InitOptions) -> Result<()> {
    let config = ScaffoldConfig::default();

    let config_path = root.join(CONFIG_FILE);
    if options.force || !config_path.exists() {
        write_config(&config_path, &config)?;
    }

    let templates_dir = root.join(&config.templates_dir);
    fs::create_dir_all(&templates_dir)
        .with_context(|| format!("create directory {}", templates_dir.display()))?;
    write_if_missing_or_force(
        &templates_dir.join(STARTER_TEMPLATE_NAME),
        STARTER_TEMPLATE,
        options.force,
    )?;

    Ok(())
}

fn write_if_missing_or_force(path: &Path, contents: &str, force: bool) -> Result<()> {
    if !force && path.exists() {
        return Ok(());
    }
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
