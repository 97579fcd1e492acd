//! Sort field and direction selection.
//!
//! These are plain tags. Display labels belong to whatever presents the
//! choice to the user; here every variant only has a stable identifier that
//! is used in settings files and on the command line.

use crate::error::ListingError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The movie attribute a list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Title,
    SortTitle,
    Year,
    DateAdded,
    ReleaseDate,
    Watched,
    Rating,
    Runtime,
    VideoBitrate,
}

impl SortField {
    /// Every field, in the order a selection control lists them.
    pub const ALL: [SortField; 9] = [
        SortField::Title,
        SortField::SortTitle,
        SortField::Year,
        SortField::DateAdded,
        SortField::ReleaseDate,
        SortField::Watched,
        SortField::Rating,
        SortField::Runtime,
        SortField::VideoBitrate,
    ];

    /// Stable identifier, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::SortTitle => "sort_title",
            SortField::Year => "year",
            SortField::DateAdded => "date_added",
            SortField::ReleaseDate => "release_date",
            SortField::Watched => "watched",
            SortField::Rating => "rating",
            SortField::Runtime => "runtime",
            SortField::VideoBitrate => "video_bitrate",
        }
    }

    /// Whether values of this field are collated text.
    pub fn is_textual(self) -> bool {
        matches!(self, SortField::Title | SortField::SortTitle)
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ListingError;

    /// Accepts the identifier in any case, with `-` or `_` as separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == normalized)
            .ok_or_else(|| ListingError::UnknownField(s.to_string()))
    }
}

/// Ascending or descending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Apply the direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(ListingError::UnknownDirection(s.to_string())),
        }
    }
}
