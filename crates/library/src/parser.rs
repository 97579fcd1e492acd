//! Parser for movie library files.
//!
//! A library file is a JSON array of movies:
//!
//! ```json
//! [
//!   { "id": 1, "title": "The Matrix", "year": "1999", "watched": true },
//!   { "id": 2, "title": "Alien", "sort_title": "Alien 1", "rating": 8.4 }
//! ]
//! ```
//!
//! Only `id` and `title` are required. Dates use ISO 8601
//! (`"2018-03-01"`, `"2018-03-01T20:15:00"`).

use crate::error::{LibraryError, Result};
use crate::types::Movie;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parse a library document held in memory.
pub fn parse_movies(json: &str) -> Result<Vec<Movie>> {
    parse_with_name(json, "<memory>")
}

/// Read and parse a library file.
pub fn load_movies(path: &Path) -> Result<Vec<Movie>> {
    if !path.exists() {
        return Err(LibraryError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let reader = BufReader::new(File::open(path)?);
    let movies: Vec<Movie> =
        serde_json::from_reader(reader).map_err(|e| parse_error(e, path.display().to_string()))?;
    validate_titles(&movies)?;

    tracing::debug!("Parsed {} movies from {}", movies.len(), path.display());
    Ok(movies)
}

fn parse_with_name(json: &str, file: &str) -> Result<Vec<Movie>> {
    let movies: Vec<Movie> =
        serde_json::from_str(json).map_err(|e| parse_error(e, file.to_string()))?;
    validate_titles(&movies)?;
    Ok(movies)
}

fn parse_error(err: serde_json::Error, file: String) -> LibraryError {
    LibraryError::ParseError {
        file,
        line: err.line(),
        column: err.column(),
        reason: err.to_string(),
    }
}

/// Every movie needs something to show in the list.
fn validate_titles(movies: &[Movie]) -> Result<()> {
    match movies.iter().find(|m| m.title.trim().is_empty()) {
        Some(movie) => Err(LibraryError::ValidationError(format!(
            "movie {} has an empty title",
            movie.id
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_minimal_movie() {
        let movies = parse_movies(r#"[{ "id": 7, "title": "Heat" }]"#).unwrap();

        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].id, 7);
        assert_eq!(movies[0].title, "Heat");
        assert!(movies[0].year.is_none());
        assert!(!movies[0].watched);
    }

    #[test]
    fn test_parse_full_movie() {
        let json = r#"[{
            "id": 1,
            "title": "The Matrix",
            "sort_title": "Matrix 1",
            "year": "1999",
            "date_added": "2018-03-01T20:15:00",
            "release_date": "1999-03-31",
            "watched": true,
            "rating": 8.7,
            "runtime": 136,
            "video_bitrate": 9800,
            "movie_set": "The Matrix Collection",
            "offline": false
        }]"#;

        let movie = &parse_movies(json).unwrap()[0];
        assert_eq!(movie.year.as_deref(), Some("1999"));
        assert_eq!(movie.release_date, NaiveDate::from_ymd_opt(1999, 3, 31));
        assert_eq!(movie.runtime, Some(136));
        assert!(movie.is_in_movie_set());
    }

    #[test]
    fn test_malformed_year_survives_parsing() {
        let movies = parse_movies(r#"[{ "id": 1, "title": "Metropolis", "year": "19xx" }]"#).unwrap();
        assert_eq!(movies[0].year.as_deref(), Some("19xx"));
    }

    #[test]
    fn test_parse_error_reports_position() {
        let err = parse_movies("[{ \"id\": 1,\n \"title\": }]").unwrap_err();
        match err {
            LibraryError::ParseError { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let err = parse_movies(r#"[{ "id": 3, "title": "  " }]"#).unwrap_err();
        assert!(matches!(err, LibraryError::ValidationError(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_movies(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, LibraryError::FileNotFound { .. }));
    }
}
