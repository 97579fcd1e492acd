//! Field extraction: entity + sort field -> comparable value.
//!
//! The comparator never looks inside an entity. It asks for one value per
//! field through [`SortableEntity`] and gets back either a typed
//! [`SortValue`], `None` for "not known", or an error when the stored data
//! cannot be interpreted.

use crate::error::{ListingError, Result};
use crate::field::SortField;
use chrono::{NaiveDate, NaiveDateTime};
use std::borrow::Cow;

/// Accessors an entity exposes so it can be ordered.
///
/// Implementations are plain reads. Normalization (case folding, sort title
/// fallback, year parsing) happens in [`extract`], not here.
pub trait SortableEntity {
    /// Canonical sortable form of the title, e.g. "Matrix, The".
    fn title_sortable(&self) -> Cow<'_, str>;

    /// User supplied sort title. May be blank.
    fn sort_title(&self) -> Option<&str>;

    /// Release year as stored. May be blank or not a number.
    fn year(&self) -> Option<&str>;

    fn date_added(&self) -> Option<NaiveDateTime>;

    fn release_date(&self) -> Option<NaiveDate>;

    fn watched(&self) -> Option<bool>;

    fn rating(&self) -> Option<f32>;

    fn runtime(&self) -> Option<u32>;

    fn video_bitrate(&self) -> Option<u32>;
}

/// A value extracted for comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    /// Case-folded text, compared with the collator
    Text(String),
    Integer(i64),
    /// Never NaN
    Float(f32),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    Flag(bool),
}

impl SortValue {
    /// Short name of the value kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            SortValue::Text(_) => "text",
            SortValue::Integer(_) => "integer",
            SortValue::Float(_) => "float",
            SortValue::Date(_) => "date",
            SortValue::Timestamp(_) => "timestamp",
            SortValue::Flag(_) => "flag",
        }
    }
}

/// Extract the value of `field` from `entity`.
///
/// * `Ok(Some(_))` - the value is present and usable
/// * `Ok(None)` - the entity has no value for this field
/// * `Err(Malformed)` - a value is stored but cannot be compared
pub fn extract<E: SortableEntity + ?Sized>(entity: &E, field: SortField) -> Result<Option<SortValue>> {
    let value = match field {
        SortField::Title => Some(SortValue::Text(fold_case(&entity.title_sortable()))),
        SortField::SortTitle => {
            let title = match entity.sort_title().filter(|t| !t.trim().is_empty()) {
                Some(custom) => Cow::Borrowed(custom),
                None => entity.title_sortable(),
            };
            Some(SortValue::Text(fold_case(&title)))
        }
        SortField::Year => parse_year(entity.year())?.map(SortValue::Integer),
        SortField::DateAdded => entity.date_added().map(SortValue::Timestamp),
        SortField::ReleaseDate => entity.release_date().map(SortValue::Date),
        SortField::Watched => entity.watched().map(SortValue::Flag),
        SortField::Rating => match entity.rating() {
            Some(rating) if rating.is_nan() => {
                return Err(ListingError::Malformed {
                    field,
                    value: rating.to_string(),
                    reason: "rating is not a number".to_string(),
                });
            }
            rating => rating.map(SortValue::Float),
        },
        SortField::Runtime => entity.runtime().map(|v| SortValue::Integer(v.into())),
        SortField::VideoBitrate => entity.video_bitrate().map(|v| SortValue::Integer(v.into())),
    };
    Ok(value)
}

/// Case folding applied to all textual sort values before collation.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

fn parse_year(raw: Option<&str>) -> Result<Option<i64>> {
    let Some(raw) = raw.map(str::trim).filter(|y| !y.is_empty()) else {
        return Ok(None);
    };
    raw.parse::<i64>()
        .map(Some)
        .map_err(|e| ListingError::Malformed {
            field: SortField::Year,
            value: raw.to_string(),
            reason: e.to_string(),
        })
}
