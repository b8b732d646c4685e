//! Idempotent per-day scaffolding generator.
//!
//! Materializes one directory per puzzle day (`src/01` through `src/12`)
//! from a set of template files, substituting day and year tokens per
//! instance. Existing directories and files are never touched, so repeated
//! runs converge. The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (rendering, outcome tallying).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config, template loading, file
//!   materialization). Isolated to keep filesystem behavior in one place.
//!
//! Orchestration modules ([`generate`], [`check`]) coordinate core logic
//! with I/O to implement CLI commands.

pub mod check;
pub mod core;
pub mod error;
pub mod exit_codes;
pub mod generate;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
