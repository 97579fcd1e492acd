//! Filter on media availability.

use crate::error::ListingError;
use crate::traits::Filter;
use anyhow::Result;
use library::Movie;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfflineMovie {
    Offline,
    NotOffline,
}

impl FromStr for OfflineMovie {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "offline" => Ok(OfflineMovie::Offline),
            "not_offline" | "online" => Ok(OfflineMovie::NotOffline),
            _ => Err(ListingError::UnknownFilterValue {
                filter: "offline",
                value: s.to_string(),
            }),
        }
    }
}

/// Keeps movies whose files are (or are not) reachable.
pub struct OfflineFilter {
    state: OfflineMovie,
}

impl OfflineFilter {
    pub fn new(state: OfflineMovie) -> Self {
        Self { state }
    }
}

impl Filter for OfflineFilter {
    fn name(&self) -> &str {
        "OfflineFilter"
    }

    fn apply(&self, movies: Vec<Movie>) -> Result<Vec<Movie>> {
        let wanted = self.state == OfflineMovie::Offline;
        Ok(movies.into_iter().filter(|movie| movie.offline == wanted).collect())
    }
}
