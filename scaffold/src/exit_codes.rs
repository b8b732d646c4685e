//! Stable exit codes for scaffold CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to an I/O or other fatal error.
pub const ERROR: i32 = 1;
/// Command failed due to an invalid config or template directory.
pub const CONFIG: i32 = 2;
