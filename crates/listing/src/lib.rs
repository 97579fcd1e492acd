//! Ordering and filtering of movie lists.
//!
//! This crate provides:
//! - SortField / SortDirection selection tags
//! - Field extraction through the SortableEntity trait
//! - The null policy and locale-aware collation
//! - SortComparator, the comparator engine used to order a list
//! - Filter trait, list filters and the FilterPipeline composing them
//!
//! ## Architecture
//! A list is processed in two stages:
//! 1. Filters remove movies the user doesn't want to see (watched, offline, ...)
//! 2. The comparator orders what is left by the selected field and direction
//!
//! ## Example Usage
//! ```ignore
//! use listing::{FilterPipeline, SortSettings};
//! use listing::filters::*;
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(WatchedFilter::new(WatchedFlag::NotWatched));
//! let visible = pipeline.apply(library.into_movies())?;
//!
//! let comparator = SortSettings::default().comparator()?;
//! let ordered = comparator.sorted(visible);
//! ```

pub mod error;
pub mod field;
pub mod extract;
pub mod null_policy;
pub mod collation;
pub mod comparator;
pub mod movie;
pub mod settings;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;

// Re-export main types
pub use collation::TitleCollator;
pub use comparator::SortComparator;
pub use error::{ListingError, Result};
pub use extract::{SortValue, SortableEntity, extract};
pub use field::{SortDirection, SortField};
pub use filter_pipeline::FilterPipeline;
pub use null_policy::{NullPlacement, compare_nullness};
pub use settings::SortSettings;
pub use traits::Filter;
