use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use time::Date;

/// Sort direction selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortingOrder {
    Asc,
    Desc,
}

/// Requested ordering; nothing is reordered unless both parts are present
#[derive(Debug, Clone, Default)]
pub struct Sorting {
    pub sort_by: Option<String>,
    pub sorting_order: Option<SortingOrder>,
}

/// Comparable key extracted from a record field
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    /// Field absent or not covered by a rule; orders before everything else
    Missing,
    Bool(bool),
    Number(f64),
    Text(String),
    Day(Date),
}

impl SortValue {
    pub fn text(value: impl Into<String>) -> Self {
        SortValue::Text(value.into())
    }

    fn rank(&self) -> u8 {
        match self {
            SortValue::Missing => 0,
            SortValue::Bool(_) => 1,
            SortValue::Number(_) => 2,
            SortValue::Text(_) => 3,
            SortValue::Day(_) => 4,
        }
    }

    /// Total order across variants: same-variant keys compare natively,
    /// mixed variants fall back to the variant rank
    pub fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Bool(a), SortValue::Bool(b)) => a.cmp(b),
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            (SortValue::Day(a), SortValue::Day(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// How a field's sort key is derived from a record
pub enum FieldKind<T> {
    /// Display value of a denormalized single-entity reference
    Reference(fn(&T) -> String),
    /// Display values of a denormalized list, compared comma-joined in
    /// stored order
    MultiReference(fn(&T) -> Vec<String>),
    /// Display date string parsed back to a calendar day, so chronological
    /// and lexical order agree
    Date(fn(&T) -> Option<Date>),
    /// Raw field value under native ordering
    Plain(fn(&T) -> SortValue),
}

/// Field-to-rule table applied when a caller requests an ordering.
///
/// Built once per entity kind. Fields without a rule compare equal, which
/// leaves the retrieval order untouched under the stable sort.
pub struct SortComparator<T> {
    rules: Vec<(&'static str, FieldKind<T>)>,
}

impl<T> SortComparator<T> {
    pub fn new(rules: Vec<(&'static str, FieldKind<T>)>) -> Self {
        Self { rules }
    }

    fn key(&self, record: &T, field: &str) -> SortValue {
        let Some((_, kind)) = self.rules.iter().find(|(name, _)| *name == field) else {
            return SortValue::Missing;
        };

        match kind {
            FieldKind::Reference(display) => SortValue::Text(display(record)),
            FieldKind::MultiReference(displays) => SortValue::Text(displays(record).join(", ")),
            FieldKind::Date(day) => day(record).map(SortValue::Day).unwrap_or(SortValue::Missing),
            FieldKind::Plain(value) => value(record),
        }
    }

    /// Stable-sort `records` according to the requested ordering, if any
    pub fn apply(&self, records: &mut [T], sorting: &Sorting) {
        let (Some(field), Some(order)) = (sorting.sort_by.as_deref(), sorting.sorting_order) else {
            return;
        };

        records.sort_by(|a, b| {
            let ordering = self.key(a, field).compare(&self.key(b, field));
            match order {
                SortingOrder::Asc => ordering,
                SortingOrder::Desc => ordering.reverse(),
            }
        });
    }
}
