//! Orchestration for `scaffold generate`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::summary::Summary;
use crate::io::config::{CONFIG_FILE, load_config};
use crate::io::instance::generate_day;
use crate::io::templates::{Template, load_templates};

/// First day in the generated range.
pub const FIRST_DAY: u32 = 1;
/// Last day in the generated range (inclusive).
pub const LAST_DAY: u32 = 12;

/// Generate every day in the fixed range, folding outcomes into a summary.
pub fn generate_all(output_root: &Path, templates: &[Template], year: &str) -> Result<Summary> {
    (FIRST_DAY..=LAST_DAY).try_fold(Summary::default(), |summary, day| {
        let outcome = generate_day(output_root, day, templates, year)?;
        debug!(day, ?outcome, "generated day");
        Ok(summary.record(outcome))
    })
}

/// Load config and templates from `root`, then generate the full range.
pub fn generate_from_root(root: &Path) -> Result<Summary> {
    let config = load_config(&root.join(CONFIG_FILE)).context("load scaffold.toml")?;
    let templates = load_templates(&root.join(&config.templates_dir))?;
    generate_all(&root.join(&config.output_dir), &templates, &config.year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigurationError;
    use crate::test_support::template_dir_with;
    use std::fs;

    #[test]
    fn full_range_counts_then_converges() {
        let temp = tempfile::tempdir().expect("tempdir");
        template_dir_with(temp.path(), &[("solution.txt", "Day REPLACE_DAY_NUM\n")]);

        let first = generate_from_root(temp.path()).expect("first run");
        assert_eq!(first, Summary { created: 12, updated: 0 });

        let second = generate_from_root(temp.path()).expect("second run");
        assert_eq!(second, Summary { created: 0, updated: 0 });
    }

    #[test]
    fn preexisting_directory_counts_as_updated() {
        let temp = tempfile::tempdir().expect("tempdir");
        template_dir_with(temp.path(), &[("solution.txt", "Day REPLACE_DAY_NUM\n")]);
        fs::create_dir_all(temp.path().join("src").join("03")).expect("pre-create day 03");

        let summary = generate_from_root(temp.path()).expect("run");
        assert_eq!(summary, Summary { created: 11, updated: 1 });
    }

    #[test]
    fn repopulating_missing_file_counts_as_updated() {
        let temp = tempfile::tempdir().expect("tempdir");
        template_dir_with(temp.path(), &[("solution.txt", "Day REPLACE_DAY_NUM\n")]);

        generate_from_root(temp.path()).expect("first run");
        fs::remove_file(temp.path().join("src").join("05").join("solution.txt"))
            .expect("remove day 05 file");

        let summary = generate_from_root(temp.path()).expect("second run");
        assert_eq!(summary, Summary { created: 0, updated: 1 });
    }

    #[test]
    fn missing_template_dir_is_configuration_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = generate_from_root(temp.path()).unwrap_err();
        assert!(
            err.chain()
                .any(|cause| cause.downcast_ref::<ConfigurationError>().is_some())
        );
    }

    #[test]
    fn year_from_config_reaches_rendered_files() {
        let temp = tempfile::tempdir().expect("tempdir");
        template_dir_with(temp.path(), &[("year.txt", "REPLACE_YEAR\n")]);
        fs::write(temp.path().join(CONFIG_FILE), "year = \"1999\"\n").expect("write config");

        generate_from_root(temp.path()).expect("run");
        assert_eq!(
            fs::read_to_string(temp.path().join("src").join("11").join("year.txt"))
                .expect("read day 11 file"),
            "1999\n"
        );
    }
}
