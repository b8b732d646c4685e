//! Template loading from a flat template directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::ConfigurationError;

/// One template file held in memory: basename plus raw text content.
///
/// Immutable after load; rendered once per day with tokens substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: String,
    pub content: String,
}

/// Load every template from `dir`, sorted by name for a deterministic
/// load order.
///
/// Enumeration is non-recursive. The directory must exist and contain only
/// regular readable files; anything else is a fatal configuration error
/// with no partial load.
pub fn load_templates(dir: &Path) -> Result<Vec<Template>> {
    if !dir.is_dir() {
        return Err(ConfigurationError::TemplateDir(dir.display().to_string()).into());
    }
    let entries =
        fs::read_dir(dir).with_context(|| format!("read template directory {}", dir.display()))?;

    let mut templates = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("read template directory {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            return Err(ConfigurationError::TemplateEntry(path.display().to_string()).into());
        }
        let name = entry
            .file_name()
            .into_string()
            .map_err(|name| {
                ConfigurationError::TemplateEntry(name.to_string_lossy().into_owned())
            })?;
        let content = fs::read_to_string(&path)
            .map_err(|err| ConfigurationError::TemplateRead(format!("{}: {err}", path.display())))?;
        templates.push(Template { name, content });
    }
    templates.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(templates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigurationError;
    use crate::test_support::write_template;

    #[test]
    fn loads_templates_sorted_by_name() {
        let temp = tempfile::tempdir().expect("tempdir");
        write_template(temp.path(), "part2.txt", "second");
        write_template(temp.path(), "part1.txt", "first");
        write_template(temp.path(), "notes.md", "# notes");

        let templates = load_templates(temp.path()).expect("load");
        let names: Vec<&str> = templates.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["notes.md", "part1.txt", "part2.txt"]);
        assert_eq!(templates[1].content, "first");
    }

    #[test]
    fn empty_directory_loads_no_templates() {
        let temp = tempfile::tempdir().expect("tempdir");
        let templates = load_templates(temp.path()).expect("load");
        assert!(templates.is_empty());
    }

    #[test]
    fn missing_directory_is_configuration_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = load_templates(&temp.path().join("missing")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigurationError>(),
            Some(ConfigurationError::TemplateDir(_))
        ));
    }

    #[test]
    fn subdirectory_is_configuration_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        write_template(temp.path(), "ok.txt", "fine");
        fs::create_dir(temp.path().join("nested")).expect("create subdir");

        let err = load_templates(temp.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigurationError>(),
            Some(ConfigurationError::TemplateEntry(_))
        ));
    }
}
