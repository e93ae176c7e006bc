//! Case-insensitive dish name matching.

/// Escape character used in generated `LIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

/// Build an `ILIKE` pattern matching `needle` anywhere in the column.
///
/// `%`, `_` and the escape character itself are escaped so user input only
/// ever matches literally.
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// In-process equivalent of `haystack ILIKE contains_pattern(needle)`.
///
/// An empty needle matches every dish.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
