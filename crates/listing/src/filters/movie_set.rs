//! Filter on movie set (collection) membership.

use crate::error::ListingError;
use crate::traits::Filter;
use anyhow::Result;
use library::Movie;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovieInMovieSet {
    InMovieSet,
    NotInMovieSet,
}

impl FromStr for MovieInMovieSet {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "in_movie_set" | "in" | "yes" => Ok(MovieInMovieSet::InMovieSet),
            "not_in_movie_set" | "not_in" | "no" => Ok(MovieInMovieSet::NotInMovieSet),
            _ => Err(ListingError::UnknownFilterValue {
                filter: "movie set",
                value: s.to_string(),
            }),
        }
    }
}

/// Keeps movies that are (or are not) part of a movie set.
pub struct MovieSetFilter {
    membership: MovieInMovieSet,
}

impl MovieSetFilter {
    pub fn new(membership: MovieInMovieSet) -> Self {
        Self { membership }
    }
}

impl Filter for MovieSetFilter {
    fn name(&self) -> &str {
        "MovieSetFilter"
    }

    fn apply(&self, movies: Vec<Movie>) -> Result<Vec<Movie>> {
        let wanted = self.membership == MovieInMovieSet::InMovieSet;
        Ok(movies
            .into_iter()
            .filter(|movie| movie.is_in_movie_set() == wanted)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_set_filter() {
        let mut first = Movie::new(1, "Alien");
        first.movie_set = Some("Alien Collection".to_string());
        let mut blank = Movie::new(2, "Heat");
        blank.movie_set = Some(" ".to_string());
        let movies = vec![first, blank, Movie::new(3, "Ronin")];

        let in_set = MovieSetFilter::new(MovieInMovieSet::InMovieSet)
            .apply(movies.clone())
            .unwrap();
        assert_eq!(in_set.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1]);

        let not_in_set = MovieSetFilter::new(MovieInMovieSet::NotInMovieSet)
            .apply(movies)
            .unwrap();
        assert_eq!(not_in_set.iter().map(|m| m.id).collect::<Vec<_>>(), vec![2, 3]);
    }
}
