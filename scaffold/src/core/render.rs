//! Pure token substitution for template rendering.

/// Literal token replaced with the unpadded decimal day (`7`).
pub const DAY_NUM_TOKEN: &str = "REPLACE_DAY_NUM";
/// Literal token replaced with the zero-padded day (`07`).
pub const DAY_TOKEN: &str = "REPLACE_DAY";
/// Literal token replaced with the configured year string.
pub const YEAR_TOKEN: &str = "REPLACE_YEAR";

/// Zero-padded label for a day, shared by directory naming and the padded
/// day token. Minimum width 2; days beyond 99 keep their natural width.
pub fn day_label(day: u32) -> String {
    format!("{day:02}")
}

/// Render a template body for one day.
///
/// Substitution is literal and unconditional, and every occurrence is
/// replaced. `DAY_TOKEN` is a prefix of `DAY_NUM_TOKEN`, so the longer token
/// must be substituted first.
pub fn render(content: &str, day: u32, year: &str) -> String {
    content
        .replace(DAY_NUM_TOKEN, &day.to_string())
        .replace(DAY_TOKEN, &day_label(day))
        .replace(YEAR_TOKEN, year)
}
