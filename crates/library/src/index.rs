//! MovieLibrary building logic.
//!
//! Loads movies from disk, builds the id index and rejects libraries that
//! would make lookups ambiguous.

use crate::error::{LibraryError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashMap;
use std::path::Path;

impl MovieLibrary {
    /// Load a library file and index it.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let movies = parser::load_movies(path)?;
        let library = Self::from_movies(movies)?;

        let (total, watched, offline) = library.counts();
        tracing::info!(
            "Loaded {} movies ({} watched, {} offline) from {}",
            total,
            watched,
            offline,
            path.display()
        );
        Ok(library)
    }

    /// Build a library from already parsed movies, keeping their order.
    pub fn from_movies(movies: Vec<Movie>) -> Result<Self> {
        let mut library = Self {
            movies: Vec::with_capacity(movies.len()),
            by_id: HashMap::with_capacity(movies.len()),
        };
        for movie in movies {
            library.insert_movie(movie)?;
        }
        Ok(library)
    }

    /// Append a movie. Ids must be unique within a library.
    pub fn insert_movie(&mut self, movie: Movie) -> Result<()> {
        if self.by_id.contains_key(&movie.id) {
            return Err(LibraryError::DuplicateId { id: movie.id });
        }
        self.by_id.insert(movie.id, self.movies.len());
        self.movies.push(movie);
        Ok(())
    }
}
