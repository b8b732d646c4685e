//! Test-only helpers for building template fixtures.

use std::fs;
use std::path::{Path, PathBuf};

/// Write a template file into `dir`, creating the directory if needed.
pub fn write_template(dir: &Path, name: &str, content: &str) -> PathBuf {
    fs::create_dir_all(dir).expect("create template dir");
    let path = dir.join(name);
    fs::write(&path, content).expect("write template");
    path
}

/// Create `root/templates` populated with the given (name, content) pairs.
pub fn template_dir_with(root: &Path, files: &[(&str, &str)]) -> PathBuf {
    let dir = root.join("templates");
    fs::create_dir_all(&dir).expect("create template dir");
    for (name, content) in files {
        write_template(&dir, name, content);
    }
    dir
}
