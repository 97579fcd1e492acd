//! The persisted sort choice.
//!
//! Storing the settings is up to the caller; this type only knows how to
//! (de)serialize itself and how to turn into a comparator.

use crate::collation::{ROOT_LOCALE, TitleCollator};
use crate::comparator::SortComparator;
use crate::error::Result;
use crate::field::{SortDirection, SortField};
use crate::null_policy::NullPlacement;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortSettings {
    pub field: SortField,
    pub direction: SortDirection,
    pub null_placement: NullPlacement,
    /// BCP-47 locale used to collate titles
    pub locale: String,
}

impl Default for SortSettings {
    fn default() -> Self {
        Self {
            field: SortField::Title,
            direction: SortDirection::Ascending,
            null_placement: NullPlacement::Lowest,
            locale: ROOT_LOCALE.to_string(),
        }
    }
}

impl SortSettings {
    /// Build a comparator with a fresh collator for `locale`.
    pub fn comparator(&self) -> Result<SortComparator> {
        let collator = Arc::new(TitleCollator::new(&self.locale)?);
        Ok(self.comparator_with(collator))
    }

    /// Build a comparator reusing an existing collator.
    pub fn comparator_with(&self, collator: Arc<TitleCollator>) -> SortComparator {
        SortComparator::new(self.field, self.direction, collator).with_null_placement(self.null_placement)
    }
}
