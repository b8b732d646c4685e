//! Per-day directory and file materialization.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::render::{day_label, render};
use crate::core::summary::DayOutcome;
use crate::io::templates::Template;

/// Directory that holds one day's files: `<output_root>/<NN>`.
pub fn day_dir(output_root: &Path, day: u32) -> PathBuf {
    output_root.join(day_label(day))
}

/// Materialize one day: ensure its directory exists and write any missing
/// rendered template files into it.
///
/// Existing files are skipped, never overwritten, so repeated calls
/// converge on the same filesystem state.
pub fn generate_day(
    output_root: &Path,
    day: u32,
    templates: &[Template],
    year: &str,
) -> Result<DayOutcome> {
    let dir = day_dir(output_root, day);

    let created = !dir.is_dir();
    if created {
        fs::create_dir_all(&dir).with_context(|| format!("create directory {}", dir.display()))?;
        debug!(day, dir = %dir.display(), "created day directory");
    }

    let mut wrote = false;
    for template in templates {
        let dest = dir.join(&template.name);
        if dest.is_file() {
            continue;
        }
        write_new(&dest, &render(&template.content, day, year))?;
        debug!(day, file = %dest.display(), "wrote templated file");
        wrote = true;
    }

    Ok(DayOutcome::classify(created, wrote))
}

/// Write `contents` to a path that must not yet exist.
///
/// Create-new semantics: a file that appears between the existence check
/// and the write fails the run instead of being clobbered.
fn write_new(path: &Path, contents: &str) -> Result<()> {
    let mut file = fs::File::create_new(path)
        .with_context(|| format!("create file {}", path.display()))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("write file {}", path.display()))?;
    Ok(())
}
