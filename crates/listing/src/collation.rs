//! Locale-aware string ordering.
//!
//! Byte-wise comparison puts "Émilie" after "Zorro". Titles are ordered with
//! the Unicode Collation Algorithm instead, tailored to a locale, using the
//! ICU4X collator and its compiled-in data.

use crate::error::{ListingError, Result};
use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::Locale;
use std::cmp::Ordering;
use std::fmt;

/// Locale used when none is configured (the CLDR root collation).
pub const ROOT_LOCALE: &str = "und";

/// A collator bound to one locale.
///
/// Immutable after construction and `Send + Sync`, so a single instance is
/// shared (behind an `Arc`) by every comparison of a sort, including the
/// parallel ones.
pub struct TitleCollator {
    locale: String,
    collator: Collator,
}

impl TitleCollator {
    /// Build a collator for a BCP-47 locale tag such as `"de"` or `"sv-SE"`.
    pub fn new(locale: &str) -> Result<Self> {
        let parsed: Locale = locale.parse().map_err(|e| ListingError::Locale {
            locale: locale.to_string(),
            reason: format!("{e}"),
        })?;

        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);

        let collator = Collator::try_new(&parsed.into(), options).map_err(|e| ListingError::Locale {
            locale: locale.to_string(),
            reason: format!("{e}"),
        })?;

        tracing::debug!("Created collator for locale {}", locale);
        Ok(Self {
            locale: locale.to_string(),
            collator,
        })
    }

    /// Collator for the root locale.
    pub fn root() -> Result<Self> {
        Self::new(ROOT_LOCALE)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Collate two strings. Callers pass case-folded text.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }
}

impl fmt::Debug for TitleCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TitleCollator")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}
