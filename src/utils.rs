//! Common utility functions shared across the codebase.

/// Checks if the text contains at least one Unicode alphabetic character.
///
/// Returns false for empty strings, pure numbers, or pure symbols.
///
/// # Examples
///
/// ```
/// use lokal::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Pricing"));
/// assert!(contains_alphabetic("Үнэ"));
/// assert!(!contains_alphabetic("24/7"));
/// assert!(!contains_alphabetic("₮1,500,000"));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}

/// Pluralize a count for report output: `1 file`, `2 files`.
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}
