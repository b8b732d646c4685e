//! Read-only preflight for `scaffold check`.

use std::path::Path;

use anyhow::{Context, Result};

use crate::io::config::{CONFIG_FILE, load_config};
use crate::io::templates::load_templates;

/// What a `generate` run would use, gathered without touching the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub year: String,
    pub output_dir: String,
    pub template_names: Vec<String>,
}

/// Load config and templates from `root`, touching nothing.
pub fn check_from_root(root: &Path) -> Result<CheckOutcome> {
    let config = load_config(&root.join(CONFIG_FILE)).context("load scaffold.toml")?;
    let templates = load_templates(&root.join(&config.templates_dir))?;
    Ok(CheckOutcome {
        year: config.year,
        output_dir: config.output_dir,
        template_names: templates.into_iter().map(|t| t.name).collect(),
    })
}
