//! Core domain types for a movie library.
//!
//! A [`Movie`] is the record shown in the movie list. Every field a list can
//! be sorted by is here; missing metadata is modelled with `Option` rather
//! than sentinel values so the ordering engine can tell "unknown" apart from
//! "zero".

use crate::title::{DEFAULT_TITLE_PREFIXES, sortable_name};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie within one library
pub type MovieId = u32;

// =============================================================================
// Movie
// =============================================================================

/// A movie as stored in the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// User supplied sort title; blank values are ignored when sorting
    #[serde(default)]
    pub sort_title: Option<String>,
    /// Release year as delivered by the scraper.
    ///
    /// Kept as text: scrapers occasionally hand over values like `"19xx"`,
    /// and those have to survive a load so they can be reported when the
    /// list is sorted.
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub date_added: Option<NaiveDateTime>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub watched: bool,
    #[serde(default)]
    pub rating: Option<f32>,
    /// Runtime in minutes
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Video bitrate of the main media file in kbps
    #[serde(default)]
    pub video_bitrate: Option<u32>,
    /// Name of the movie set (collection) this movie belongs to
    #[serde(default)]
    pub movie_set: Option<String>,
    /// The media files are currently not reachable (e.g. unplugged drive)
    #[serde(default)]
    pub offline: bool,
}

impl Movie {
    /// Create a movie with only an id and a title; everything else unknown.
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            sort_title: None,
            year: None,
            date_added: None,
            release_date: None,
            watched: false,
            rating: None,
            runtime: None,
            video_bitrate: None,
            movie_set: None,
            offline: false,
        }
    }

    /// Title with a leading article moved to the end ("Matrix, The").
    pub fn title_sortable(&self) -> String {
        sortable_name(&self.title, DEFAULT_TITLE_PREFIXES)
    }

    /// The custom sort title, if one is set and not blank.
    pub fn custom_sort_title(&self) -> Option<&str> {
        self.sort_title
            .as_deref()
            .filter(|title| !title.trim().is_empty())
    }

    pub fn is_in_movie_set(&self) -> bool {
        self.movie_set
            .as_deref()
            .is_some_and(|set| !set.trim().is_empty())
    }
}

// =============================================================================
// MovieLibrary - all movies of one data source
// =============================================================================

/// Holds the movies of one library in load order plus an id index.
///
/// Iteration order is the order movies were inserted, which is also the
/// order the list shows before the user picks a sort field.
#[derive(Debug, Default)]
pub struct MovieLibrary {
    pub(crate) movies: Vec<Movie>,
    pub(crate) by_id: HashMap<MovieId, usize>,
}

impl MovieLibrary {
    /// Creates a new, empty library
    pub fn new() -> Self {
        Self {
            movies: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Get a movie by id
    pub fn get_movie(&self, id: MovieId) -> Option<&Movie> {
        self.by_id.get(&id).map(|&slot| &self.movies[slot])
    }

    /// All movies in load order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Consume the library, keeping the movies in load order
    pub fn into_movies(self) -> Vec<Movie> {
        self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Counts for the summary line: (movies, watched, offline)
    pub fn counts(&self) -> (usize, usize, usize) {
        let watched = self.movies.iter().filter(|m| m.watched).count();
        let offline = self.movies.iter().filter(|m| m.offline).count();
        (self.movies.len(), watched, offline)
    }
}
