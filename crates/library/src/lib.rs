//! # Library Crate
//!
//! This crate owns the movie records a list view works on.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, MovieLibrary)
//! - **title**: Sortable title normalization ("The Matrix" -> "Matrix, The")
//! - **parser**: Parse JSON library files into Rust structs
//! - **index**: Build the library and its id index
//! - **error**: Error types for library loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use library::MovieLibrary;
//! use std::path::Path;
//!
//! let library = MovieLibrary::load_from_file(Path::new("data/movies.json"))?;
//! let movie = library.get_movie(1).unwrap();
//!
//! println!("{} sorts as {}", movie.title, movie.title_sortable());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod title;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{LibraryError, Result};
pub use types::{Movie, MovieId, MovieLibrary};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_creation() {
        let library = MovieLibrary::new();
        let (movies, watched, offline) = library.counts();

        assert_eq!(movies, 0);
        assert_eq!(watched, 0);
        assert_eq!(offline, 0);
        assert!(library.is_empty());
    }

    #[test]
    fn test_insert_movie() {
        let mut library = MovieLibrary::new();

        let mut movie = Movie::new(1, "The Matrix");
        movie.year = Some("1999".to_string());
        movie.watched = true;

        library.insert_movie(movie).unwrap();

        let retrieved = library.get_movie(1).unwrap();
        assert_eq!(retrieved.title_sortable(), "Matrix, The");
        assert_eq!(library.counts(), (1, 1, 0));
    }

    #[test]
    fn test_custom_sort_title_ignores_blank() {
        let mut movie = Movie::new(1, "Alien");
        assert_eq!(movie.custom_sort_title(), None);

        movie.sort_title = Some("   ".to_string());
        assert_eq!(movie.custom_sort_title(), None);

        movie.sort_title = Some("Alien 1".to_string());
        assert_eq!(movie.custom_sort_title(), Some("Alien 1"));
    }

    #[test]
    fn test_movie_set_membership() {
        let mut movie = Movie::new(1, "Alien");
        assert!(!movie.is_in_movie_set());

        movie.movie_set = Some(String::new());
        assert!(!movie.is_in_movie_set());

        movie.movie_set = Some("Alien Collection".to_string());
        assert!(movie.is_in_movie_set());
    }

    #[test]
    fn test_empty_queries() {
        let library = MovieLibrary::new();
        assert!(library.get_movie(999).is_none());
        assert!(library.movies().is_empty());
    }
}
