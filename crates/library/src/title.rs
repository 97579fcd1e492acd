//! Sortable title normalization.
//!
//! List views sort "The Matrix" under M. The leading article is moved to the
//! end of the title so that plain collation does the right thing:
//!
//! ```
//! use library::title::{sortable_name, DEFAULT_TITLE_PREFIXES};
//!
//! assert_eq!(sortable_name("The Matrix", DEFAULT_TITLE_PREFIXES), "Matrix, The");
//! assert_eq!(sortable_name("L'Odyssée", DEFAULT_TITLE_PREFIXES), "Odyssée, L'");
//! ```

/// Leading articles recognized by default, checked in this order.
pub const DEFAULT_TITLE_PREFIXES: &[&str] = &[
    "the", "a", "an", "der", "die", "das", "les", "le", "la", "l'", "el", "il",
];

/// Move a leading article to the end of `title`.
///
/// Matching is ASCII case-insensitive and the article keeps the casing it has
/// in the title. An article must be followed by a space, except for prefixes
/// ending in an apostrophe which attach directly to the next word. A title
/// consisting only of the article is returned unchanged.
pub fn sortable_name(title: &str, prefixes: &[&str]) -> String {
    let trimmed = title.trim();

    for prefix in prefixes {
        let Some(head) = trimmed.get(..prefix.len()) else {
            continue;
        };
        if !head.eq_ignore_ascii_case(prefix) {
            continue;
        }

        let tail = &trimmed[prefix.len()..];
        let rest = if prefix.ends_with('\'') {
            tail
        } else {
            match tail.strip_prefix(' ') {
                Some(rest) => rest,
                None => continue,
            }
        };

        let rest = rest.trim_start();
        if rest.is_empty() {
            continue;
        }
        return format!("{rest}, {head}");
    }

    trimmed.to_string()
}
