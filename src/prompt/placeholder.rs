//! Placeholder token codec.
//!
//! Maps a field label to its canonical placeholder token. The derivation
//! is deterministic but not invertible in general: labels that differ
//! only in case or whitespace collapse to the same token, a collision
//! class the renderer resolves with a documented last-wins policy.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Derive the canonical placeholder token for a field label.
///
/// The label is lowercased, runs of whitespace are collapsed to a single
/// underscore, and the result is wrapped in braces:
///
/// ```
/// use promptform::prompt::token_for;
///
/// assert_eq!(token_for("Customer Name"), "{customer_name}");
/// assert_eq!(token_for("customer  name"), "{customer_name}");
/// ```
///
/// An empty label produces the degenerate token `{}`, which the renderer
/// treats as literal text and never matches against a field.
pub fn token_for(label: &str) -> String {
    let lowered = label.to_lowercase();
    let normalized = WHITESPACE_RUN.replace_all(&lowered, "_");
    format!("{{{}}}", normalized)
}

/// Append the token for `label` to a template, separated by a space.
///
/// Pure concatenation, as the template editor's badge-click behaves: no
/// deduplication and no character-limit enforcement. Cap handling is the
/// caller's responsibility at its boundary.
pub fn insert(template: &str, label: &str) -> String {
    format!("{} {}", template, token_for(label))
}
