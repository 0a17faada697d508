//! Query pipeline for the exercise collection.
//!
//! A `GET /exercises` request flows through fixed stages:
//!
//! 1. Decode the raw parameters into an [`ExerciseQuery`]
//! 2. Filter (conjunctive; category, difficulty, duration bound)
//! 3. Stable sort by the decoded field and direction
//! 4. Paginate with clamped offsets
//!
//! Decoding is permissive about numbers and strict about the sort field.
//! The session collection never goes through this module.

mod errors;
mod filter;
mod page;
mod pipeline;
mod result;
mod sorter;
mod spec;

pub use errors::QueryError;
pub use filter::ExerciseFilter;
pub use page::PageWindow;
pub use pipeline::QueryPipeline;
pub use result::QueryResult;
pub use spec::{ExerciseQuery, PageRequest, SortDirection, SortField, SortSpec};
