//! The FilterPipeline chains the list filters.
//!
//! This module provides the FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::traits::Filter;
use anyhow::Result;
use library::Movie;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(WatchedFilter::new(WatchedFlag::NotWatched))
///     .add_filter(OfflineFilter::new(OfflineMovie::NotOffline));
///
/// let visible = pipeline.apply(library.into_movies())?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Add a filter only when there is one (e.g. an optional CLI flag).
    pub fn add_optional_filter(self, filter: Option<impl Filter + 'static>) -> Self {
        match filter {
            Some(filter) => self.add_filter(filter),
            None => self,
        }
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence. Input order is preserved.
    pub fn apply(&self, movies: Vec<Movie>) -> Result<Vec<Movie>> {
        let mut current = movies;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{OfflineFilter, OfflineMovie, WatchedFilter, WatchedFlag};

    fn movies() -> Vec<Movie> {
        let mut seen = Movie::new(1, "Alien");
        seen.watched = true;
        let mut unplugged = Movie::new(3, "Ronin");
        unplugged.offline = true;
        vec![seen, Movie::new(2, "Heat"), unplugged]
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        assert!(pipeline.is_empty());

        let filtered = pipeline.apply(movies()).unwrap();
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_filters_are_chained() {
        let pipeline = FilterPipeline::new()
            .add_filter(WatchedFilter::new(WatchedFlag::NotWatched))
            .add_filter(OfflineFilter::new(OfflineMovie::NotOffline));

        let filtered = pipeline.apply(movies()).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }

    #[test]
    fn test_optional_filter() {
        let pipeline = FilterPipeline::new()
            .add_optional_filter(None::<WatchedFilter>)
            .add_optional_filter(Some(OfflineFilter::new(OfflineMovie::Offline)));
        assert_eq!(pipeline.len(), 1);
    }
}
