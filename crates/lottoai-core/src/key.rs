//! Canonical request key.
//!
//! The key is `name|birth|reference|game` where `name` is trimmed and
//! lowercased. Dates are passed through verbatim; callers holding typed dates
//! render them with [`crate::model::format_iso_date`] first.

use crate::model::Game;

/// Field separator inside the key.
pub const SEPARATOR: char = '|';

/// Trim surrounding whitespace and BOMs, then lowercase.
///
/// U+0085 (NEL) is not trimmed, so keys match those produced by an
/// JavaScript `trim()`.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim_matches(|c: char| c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}'))
        .to_lowercase()
}

/// Build the canonical key for a request.
///
/// Never fails: arbitrary strings are joined as-is, validation happens before.
#[must_use]
pub fn canonical_key(name: &str, birth_date: &str, reference_date: &str, game: Game) -> String {
    format!(
        "{name}{SEPARATOR}{birth_date}{SEPARATOR}{reference_date}{SEPARATOR}{game}",
        name = normalize_name(name),
        game = game.as_str(),
    )
}
