//! Filter on the watched flag.

use crate::error::ListingError;
use crate::traits::Filter;
use anyhow::Result;
use library::Movie;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchedFlag {
    Watched,
    NotWatched,
}

impl FromStr for WatchedFlag {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "watched" | "yes" => Ok(WatchedFlag::Watched),
            "not_watched" | "unwatched" | "no" => Ok(WatchedFlag::NotWatched),
            _ => Err(ListingError::UnknownFilterValue {
                filter: "watched",
                value: s.to_string(),
            }),
        }
    }
}

/// Keeps movies whose watched flag matches.
pub struct WatchedFilter {
    flag: WatchedFlag,
}

impl WatchedFilter {
    pub fn new(flag: WatchedFlag) -> Self {
        Self { flag }
    }
}

impl Filter for WatchedFilter {
    fn name(&self) -> &str {
        "WatchedFilter"
    }

    fn apply(&self, movies: Vec<Movie>) -> Result<Vec<Movie>> {
        let wanted = self.flag == WatchedFlag::Watched;
        Ok(movies.into_iter().filter(|movie| movie.watched == wanted).collect())
    }
}
