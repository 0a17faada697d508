//! Sort stage.
//!
//! Sorting is stable: records with equal keys keep their order from the
//! previous stage, so repeated queries over the same store come back in
//! the same order.

use std::cmp::Ordering;

use crate::model::Exercise;

use super::spec::{SortDirection, SortField, SortSpec};

/// Sorts exercise records by one decoded field.
pub struct ExerciseSorter;

impl ExerciseSorter {
    /// Stable sort by the requested field and direction.
    pub fn sort(records: &mut [Exercise], spec: &SortSpec) {
        records.sort_by(|a, b| {
            let ordering = Self::compare_field(a, b, spec.field);
            match spec.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    /// Compares one field of two records with its natural ordering:
    /// strings lexicographically, numbers numerically. Ties are `Equal`,
    /// which the stable sort leaves in input order.
    fn compare_field(a: &Exercise, b: &Exercise, field: SortField) -> Ordering {
        match field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Name => a.name.cmp(&b.name),
            SortField::Category => a.category.cmp(&b.category),
            SortField::Difficulty => a.difficulty.cmp(&b.difficulty),
            SortField::Duration => a
                .duration
                .partial_cmp(&b.duration)
                .unwrap_or(Ordering::Equal),
        }
    }
}
