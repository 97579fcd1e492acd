//! Core traits for the movie list filters.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a movie list before it is sorted.

use anyhow::Result;
use library::Movie;

/// Core trait for filtering movies.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared with a background sort
/// - Filters take ownership of the Vec<Movie> and return a filtered Vec
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a list of movies.
    ///
    /// # Returns
    /// * `Ok(Vec<Movie>)` - The movies that pass, in their input order
    /// * `Err` - If filtering fails
    fn apply(&self, movies: Vec<Movie>) -> Result<Vec<Movie>>;
}
