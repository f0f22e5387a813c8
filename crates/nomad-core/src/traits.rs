// crates/nomad-core/src/traits.rs
use crate::text::{contains_folded, fold_key};

/// Name-based matching helpers for types that expose a canonical display name.
///
/// This trait centralizes case-insensitive comparisons based on [`fold_key`].
/// Implementors provide a `&str` view of their canonical name via
/// [`NameMatch::name_str`] and get [`NameMatch::name_contains`], a substring
/// match on the folded form.
///
/// # Examples
/// ```rust
/// use nomad_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Gangneung").name_contains("NEUNG"));
/// assert!(!Place("Gangneung").name_contains("seoul"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Case-insensitive substring match. An empty query matches everything.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        self.name_contains_folded(&fold_key(q))
    }

    /// Like [`NameMatch::name_contains`] for a query already passed through
    /// [`fold_key`].
    #[inline]
    fn name_contains_folded(&self, folded: &str) -> bool {
        contains_folded(self.name_str(), folded)
    }
}
