//! Filter implementations for the movie list.
//!
//! Each filter narrows the list by one flag shown next to the sort control.

pub mod movie_set;
pub mod offline;
pub mod watched;

// Re-export for convenience
pub use movie_set::{MovieInMovieSet, MovieSetFilter};
pub use offline::{OfflineFilter, OfflineMovie};
pub use watched::{WatchedFilter, WatchedFlag};
