//! Error types for the listing crate.
//!
//! Two kinds of errors live here. Configuration errors (unknown field or
//! direction names, unusable locales) are returned to whoever builds a
//! comparator. Extraction and comparison errors never leave the comparator:
//! it logs them and treats the pair as tied.

use crate::field::SortField;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ListingError {
    /// A stored value for `field` could not be turned into something comparable
    #[error("Malformed {field} value {value:?}: {reason}")]
    Malformed {
        field: SortField,
        value: String,
        reason: String,
    },

    /// Two extracted values of different kinds were compared
    #[error("Cannot compare {left} with {right} for {field}")]
    Incomparable {
        field: SortField,
        left: &'static str,
        right: &'static str,
    },

    #[error("Unknown sort field: {0}")]
    UnknownField(String),

    #[error("Unknown sort direction: {0}")]
    UnknownDirection(String),

    #[error("Unknown null placement: {0}")]
    UnknownNullPlacement(String),

    #[error("Unknown value {value:?} for the {filter} filter")]
    UnknownFilterValue { filter: &'static str, value: String },

    /// The collation locale could not be parsed or has no collation data
    #[error("Unsupported collation locale {locale:?}: {reason}")]
    Locale { locale: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ListingError>;
