//! The comparator engine.
//!
//! A [`SortComparator`] is built once per sort from a field, a direction and
//! a shared collator, and is then used as a plain ordering function:
//!
//! ```ignore
//! let collator = Arc::new(TitleCollator::new("de")?);
//! let comparator = SortComparator::new(SortField::SortTitle, SortDirection::Ascending, collator);
//!
//! movies.sort_by(|a, b| comparator.compare(a, b));
//! ```
//!
//! ## Algorithm
//! For one pair of entities:
//! 1. Extract the field value of both entities
//! 2. Null check; if it decides, stop here
//! 3. Compare the two present values by their natural order
//! 4. Apply the direction
//!
//! Any failure along the way is logged and the pair counts as tied. One bad
//! record must not take the whole list down with it.

use crate::collation::TitleCollator;
use crate::error::{ListingError, Result};
use crate::extract::{SortValue, SortableEntity, extract};
use crate::field::{SortDirection, SortField};
use crate::null_policy::{NullPlacement, compare_nullness};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;

/// Orders entities by one field.
///
/// Holds no per-call state; share it freely between threads.
#[derive(Debug, Clone)]
pub struct SortComparator {
    field: SortField,
    direction: SortDirection,
    nulls: NullPlacement,
    collator: Arc<TitleCollator>,
}

impl SortComparator {
    pub fn new(field: SortField, direction: SortDirection, collator: Arc<TitleCollator>) -> Self {
        Self {
            field,
            direction,
            nulls: NullPlacement::default(),
            collator,
        }
    }

    /// Set the null placement (builder pattern).
    pub fn with_null_placement(mut self, nulls: NullPlacement) -> Self {
        self.nulls = nulls;
        self
    }

    pub fn field(&self) -> SortField {
        self.field
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn null_placement(&self) -> NullPlacement {
        self.nulls
    }

    /// Compare two entities. Never fails; unusable data ties.
    pub fn compare<E: SortableEntity + ?Sized>(&self, a: &E, b: &E) -> Ordering {
        self.try_compare(a, b).unwrap_or_else(|err| {
            tracing::warn!(field = %self.field, "{}", err);
            Ordering::Equal
        })
    }

    /// [`compare`](Self::compare) as -1, 0 or 1.
    pub fn compare_signed<E: SortableEntity + ?Sized>(&self, a: &E, b: &E) -> i32 {
        match self.compare(a, b) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Like [`compare`](Self::compare) but reports extraction and comparison
    /// failures instead of swallowing them.
    pub fn try_compare<E: SortableEntity + ?Sized>(&self, a: &E, b: &E) -> Result<Ordering> {
        let left = extract(a, self.field)?;
        let right = extract(b, self.field)?;
        self.compare_values(left.as_ref(), right.as_ref())
    }

    /// Order two already extracted values, direction included.
    pub fn compare_values(&self, left: Option<&SortValue>, right: Option<&SortValue>) -> Result<Ordering> {
        let nullness = compare_nullness(left, right);
        if nullness != Ordering::Equal {
            return Ok(match self.nulls {
                NullPlacement::Lowest => self.direction.apply(nullness),
                NullPlacement::AlwaysFirst => nullness,
            });
        }

        match (left, right) {
            (Some(left), Some(right)) => {
                let ordering = self.natural_order(left, right)?;
                Ok(self.direction.apply(ordering))
            }
            _ => Ok(Ordering::Equal),
        }
    }

    fn natural_order(&self, left: &SortValue, right: &SortValue) -> Result<Ordering> {
        let ordering = match (left, right) {
            (SortValue::Text(a), SortValue::Text(b)) => self.collator.compare(a, b),
            (SortValue::Integer(a), SortValue::Integer(b)) => a.cmp(b),
            (SortValue::Float(a), SortValue::Float(b)) => a.total_cmp(b),
            (SortValue::Date(a), SortValue::Date(b)) => a.cmp(b),
            (SortValue::Timestamp(a), SortValue::Timestamp(b)) => a.cmp(b),
            // false < true
            (SortValue::Flag(a), SortValue::Flag(b)) => a.cmp(b),
            _ => {
                return Err(ListingError::Incomparable {
                    field: self.field,
                    left: left.kind(),
                    right: right.kind(),
                });
            }
        };
        Ok(ordering)
    }

    /// Sort a list and return it. Stable: ties keep their input order.
    ///
    /// Every entity is extracted once. An entity whose value cannot be
    /// extracted is logged and ranked like one without a value; tying it with
    /// every partner would not be a total order, which `sort_by` requires.
    pub fn sorted<E: SortableEntity>(&self, items: Vec<E>) -> Vec<E> {
        let mut keyed = self.keyed(items);
        keyed.sort_by(|(a, _), (b, _)| self.order_keys(a, b));
        keyed.into_iter().map(|(_, item)| item).collect()
    }

    /// In-place variant of [`sorted`](Self::sorted).
    pub fn sort<E: SortableEntity>(&self, items: &mut Vec<E>) {
        *items = self.sorted(std::mem::take(items));
    }

    /// [`sorted`](Self::sorted) on the rayon thread pool. Same order, same
    /// stability; worth it for libraries with many thousand entries.
    pub fn par_sorted<E: SortableEntity + Send>(&self, items: Vec<E>) -> Vec<E> {
        let mut keyed: Vec<(Option<SortValue>, E)> = items
            .into_par_iter()
            .map(|item| (self.extract_lenient(&item), item))
            .collect();
        keyed.par_sort_by(|(a, _), (b, _)| self.order_keys(a, b));
        keyed.into_par_iter().map(|(_, item)| item).collect()
    }

    fn keyed<E: SortableEntity>(&self, items: Vec<E>) -> Vec<(Option<SortValue>, E)> {
        items
            .into_iter()
            .map(|item| (self.extract_lenient(&item), item))
            .collect()
    }

    fn extract_lenient<E: SortableEntity + ?Sized>(&self, item: &E) -> Option<SortValue> {
        extract(item, self.field).unwrap_or_else(|err| {
            tracing::warn!(field = %self.field, "{}; sorting as missing", err);
            None
        })
    }

    fn order_keys(&self, a: &Option<SortValue>, b: &Option<SortValue>) -> Ordering {
        self.compare_values(a.as_ref(), b.as_ref()).unwrap_or_else(|err| {
            tracing::warn!(field = %self.field, "{}", err);
            Ordering::Equal
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use library::Movie;

    fn comparator(field: SortField, direction: SortDirection) -> SortComparator {
        SortComparator::new(field, direction, Arc::new(TitleCollator::root().unwrap()))
    }

    fn titled(title: &str) -> Movie {
        Movie::new(0, title)
    }

    fn with_year(id: u32, year: Option<&str>) -> Movie {
        let mut movie = Movie::new(id, format!("Movie {id}"));
        movie.year = year.map(str::to_string);
        movie
    }

    #[test]
    fn test_title_comparison_is_case_insensitive() {
        let cmp = comparator(SortField::Title, SortDirection::Ascending);
        assert_eq!(cmp.compare_signed(&titled("apple"), &titled("Apple")), 0);
        assert_eq!(cmp.compare(&titled("Apple"), &titled("banana")), Ordering::Less);
    }

    #[test]
    fn test_title_ignores_leading_article() {
        let cmp = comparator(SortField::Title, SortDirection::Ascending);
        // "Matrix, The" < "Memento"
        assert_eq!(cmp.compare(&titled("The Matrix"), &titled("Memento")), Ordering::Less);
    }

    #[test]
    fn test_absent_value_sorts_first_ascending() {
        let cmp = comparator(SortField::Year, SortDirection::Ascending);
        assert_eq!(cmp.compare_signed(&with_year(1, None), &with_year(2, Some("1999"))), -1);
        assert_eq!(cmp.compare_signed(&with_year(2, Some("1999")), &with_year(1, None)), 1);
    }

    #[test]
    fn test_absent_value_flips_with_direction_by_default() {
        let cmp = comparator(SortField::Year, SortDirection::Descending);
        assert_eq!(cmp.compare_signed(&with_year(1, None), &with_year(2, Some("1999"))), 1);
    }

    #[test]
    fn test_absent_value_stays_first_when_configured() {
        let cmp = comparator(SortField::Year, SortDirection::Descending)
            .with_null_placement(NullPlacement::AlwaysFirst);
        assert_eq!(cmp.compare_signed(&with_year(1, None), &with_year(2, Some("1999"))), -1);
        // The value stage still flips
        assert_eq!(
            cmp.compare_signed(&with_year(2, Some("1999")), &with_year(3, Some("2001"))),
            1
        );
    }

    #[test]
    fn test_both_absent_tie() {
        let cmp = comparator(SortField::Rating, SortDirection::Ascending);
        assert_eq!(cmp.compare(&titled("a"), &titled("b")), Ordering::Equal);
    }

    #[test]
    fn test_malformed_value_ties_instead_of_failing() {
        let cmp = comparator(SortField::Year, SortDirection::Ascending);
        let broken = with_year(1, Some("19xx"));
        let fine = with_year(2, Some("1999"));

        assert_eq!(cmp.compare(&broken, &fine), Ordering::Equal);
        assert_eq!(cmp.compare(&fine, &broken), Ordering::Equal);
        assert!(cmp.try_compare(&broken, &fine).is_err());
    }

    #[test]
    fn test_incomparable_values_are_reported() {
        let cmp = comparator(SortField::Year, SortDirection::Ascending);
        let err = cmp
            .compare_values(Some(&SortValue::Integer(1)), Some(&SortValue::Flag(true)))
            .unwrap_err();
        assert!(matches!(err, ListingError::Incomparable { .. }));
    }

    #[test]
    fn test_watched_false_before_true() {
        let cmp = comparator(SortField::Watched, SortDirection::Ascending);
        let mut seen = titled("a");
        seen.watched = true;
        assert_eq!(cmp.compare(&titled("b"), &seen), Ordering::Less);
    }

    #[test]
    fn test_numeric_fields_compare_by_value() {
        let cmp = comparator(SortField::Runtime, SortDirection::Ascending);
        let mut short = titled("a");
        short.runtime = Some(90);
        let mut long = titled("b");
        long.runtime = Some(180);
        assert_eq!(cmp.compare(&short, &long), Ordering::Less);

        let cmp = comparator(SortField::Rating, SortDirection::Descending);
        let mut good = titled("a");
        good.rating = Some(8.1);
        let mut bad = titled("b");
        bad.rating = Some(3.2);
        assert_eq!(cmp.compare(&good, &bad), Ordering::Less);
    }

    #[test]
    fn test_sorted_puts_malformed_records_with_missing_ones() {
        let cmp = comparator(SortField::Year, SortDirection::Ascending);
        let movies = vec![
            with_year(1, Some("2001")),
            with_year(2, Some("19xx")),
            with_year(3, Some("1999")),
            with_year(4, None),
        ];

        let ids: Vec<u32> = cmp.sorted(movies).iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 4, 3, 1]);
    }

    #[test]
    fn test_par_sorted_matches_sorted() {
        let cmp = comparator(SortField::Year, SortDirection::Descending);
        let movies: Vec<Movie> = (0..500)
            .map(|i| {
                let year = (i % 7 != 0).then(|| (1950 + i % 60).to_string());
                with_year(i, year.as_deref())
            })
            .collect();

        let sequential: Vec<u32> = cmp.sorted(movies.clone()).iter().map(|m| m.id).collect();
        let parallel: Vec<u32> = cmp.par_sorted(movies).iter().map(|m| m.id).collect();
        assert_eq!(sequential, parallel);
    }
}
