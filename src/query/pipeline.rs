//! The query pipeline: filter, then sort, then paginate.
//!
//! Stage order is load-bearing. Sorting must see the filtered set, and
//! pagination must see the sorted set. `total` is fixed between the
//! filter and pagination stages, so a paginated page always reports how
//! many records matched overall.

use crate::model::Exercise;

use super::filter::ExerciseFilter;
use super::page::PageWindow;
use super::result::QueryResult;
use super::sorter::ExerciseSorter;
use super::spec::ExerciseQuery;

/// Runs decoded queries over exercise snapshots.
pub struct QueryPipeline;

impl QueryPipeline {
    /// Executes the stages over a snapshot of the collection.
    pub fn run(mut records: Vec<Exercise>, query: &ExerciseQuery) -> QueryResult {
        ExerciseFilter::apply(&mut records, query);

        if let Some(spec) = &query.sort {
            ExerciseSorter::sort(&mut records, spec);
        }

        let total = records.len();

        match PageWindow::resolve(&query.page, total) {
            Some(window) => QueryResult {
                total,
                page: Some(window.page),
                limit: Some(window.limit),
                data: records
                    .into_iter()
                    .skip(window.start)
                    .take(window.end - window.start)
                    .collect(),
            },
            None => QueryResult {
                total,
                page: None,
                limit: None,
                data: records,
            },
        }
    }
}
