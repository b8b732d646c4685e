//! Error taxonomy for fatal scaffolding failures.

use thiserror::Error;

/// Fatal configuration problems: an unusable template directory or an
/// invalid `scaffold.toml`. The CLI maps these to their own exit code;
/// plain I/O failures take the generic error code.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Template directory is missing or is not a directory.
    #[error("template directory not usable: {0}")]
    TemplateDir(String),

    /// Template directory contains something other than a regular file.
    #[error("unsupported template entry (expected a regular file): {0}")]
    TemplateEntry(String),

    /// A template file exists but could not be read as text.
    #[error("unreadable template file: {0}")]
    TemplateRead(String),

    /// `scaffold.toml` is malformed or failed validation.
    #[error("invalid config: {0}")]
    Config(String),
}
