//! Where entities without a value end up.
//!
//! The null check always runs before any value comparison. Absent values are
//! grouped together at one end of the list and never interleaved with present
//! ones.

use crate::error::ListingError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Compare presence only.
///
/// | a       | b       | result    |
/// |---------|---------|-----------|
/// | absent  | absent  | `Equal`   |
/// | absent  | present | `Less`    |
/// | present | absent  | `Greater` |
/// | present | present | `Equal`   |
///
/// `Equal` means "decide by value"; when both are absent there is no value
/// to decide by and the pair is tied.
pub fn compare_nullness<A, B>(a: Option<&A>, b: Option<&B>) -> Ordering {
    match (a.is_some(), b.is_some()) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

/// Whether the null stage takes part in the direction flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullPlacement {
    /// Absent ranks below every present value and flips with the direction:
    /// first when ascending, last when descending.
    #[default]
    Lowest,
    /// Absent values come first in both directions.
    AlwaysFirst,
}

impl NullPlacement {
    pub fn as_str(self) -> &'static str {
        match self {
            NullPlacement::Lowest => "lowest",
            NullPlacement::AlwaysFirst => "always_first",
        }
    }
}

impl FromStr for NullPlacement {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "lowest" => Ok(NullPlacement::Lowest),
            "always_first" | "first" => Ok(NullPlacement::AlwaysFirst),
            _ => Err(ListingError::UnknownNullPlacement(s.to_string())),
        }
    }
}
