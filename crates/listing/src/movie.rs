//! Sort accessors for library movies.

use crate::extract::SortableEntity;
use chrono::{NaiveDate, NaiveDateTime};
use library::Movie;
use std::borrow::Cow;

impl SortableEntity for Movie {
    fn title_sortable(&self) -> Cow<'_, str> {
        Cow::Owned(Movie::title_sortable(self))
    }

    fn sort_title(&self) -> Option<&str> {
        self.sort_title.as_deref()
    }

    fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }

    fn date_added(&self) -> Option<NaiveDateTime> {
        self.date_added
    }

    fn release_date(&self) -> Option<NaiveDate> {
        self.release_date
    }

    fn watched(&self) -> Option<bool> {
        Some(self.watched)
    }

    fn rating(&self) -> Option<f32> {
        self.rating
    }

    fn runtime(&self) -> Option<u32> {
        self.runtime
    }

    fn video_bitrate(&self) -> Option<u32> {
        self.video_bitrate
    }
}
