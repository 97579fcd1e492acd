//! Display text for sort choices.
//!
//! The listing crate only knows identifiers; what the user reads lives here.

use library::Movie;
use listing::{NullPlacement, SortDirection, SortField};

pub fn field_label(field: SortField) -> &'static str {
    match field {
        SortField::Title => "Title",
        SortField::SortTitle => "Sort title",
        SortField::Year => "Year",
        SortField::DateAdded => "Date added",
        SortField::ReleaseDate => "Release date",
        SortField::Watched => "Watched",
        SortField::Rating => "Rating",
        SortField::Runtime => "Runtime",
        SortField::VideoBitrate => "Video bitrate",
    }
}

pub fn direction_label(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "ascending",
        SortDirection::Descending => "descending",
    }
}

pub fn null_placement_label(nulls: NullPlacement) -> &'static str {
    match nulls {
        NullPlacement::Lowest => "missing values lowest",
        NullPlacement::AlwaysFirst => "missing values first",
    }
}

/// The value a movie is sorted by, formatted for the list column.
pub fn field_value(movie: &Movie, field: SortField) -> String {
    fn or_dash<T: ToString>(value: Option<T>) -> String {
        value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
    }

    match field {
        SortField::Title => movie.title_sortable(),
        SortField::SortTitle => movie
            .custom_sort_title()
            .map(str::to_string)
            .unwrap_or_else(|| movie.title_sortable()),
        SortField::Year => or_dash(movie.year.as_deref().filter(|y| !y.trim().is_empty())),
        SortField::DateAdded => or_dash(movie.date_added.map(|d| d.format("%Y-%m-%d %H:%M"))),
        SortField::ReleaseDate => or_dash(movie.release_date),
        SortField::Watched => (if movie.watched { "yes" } else { "no" }).to_string(),
        SortField::Rating => or_dash(movie.rating.map(|r| format!("{r:.1}"))),
        SortField::Runtime => or_dash(movie.runtime.map(|r| format!("{r} min"))),
        SortField::VideoBitrate => or_dash(movie.video_bitrate.map(|b| format!("{b} kbps"))),
    }
}
