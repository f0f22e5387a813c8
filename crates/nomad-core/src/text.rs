// crates/nomad-core/src/text.rs

/// Convert a string into a folded key suitable for case-insensitive comparison.
///
/// Uses full Unicode lowercasing, which does not depend on the process
/// locale. Scripts without case (Hangul, CJK) pass through unchanged.
///
/// # Examples
///
/// ```rust
/// use nomad_core::text::fold_key;
///
/// assert_eq!(fold_key("SEOUL"), "seoul");
/// assert_eq!(fold_key("Jeju 제주"), "jeju 제주");
/// ```
pub fn fold_key(s: &str) -> String {
    s.to_lowercase()
}

/// Substring test where `needle` is already folded.
///
/// Callers fold the needle once per pass instead of once per city.
#[inline]
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    folded_needle.is_empty() || fold_key(haystack).contains(folded_needle)
}
