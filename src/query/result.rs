//! Query result shape.

use serde::Serialize;

use crate::model::Exercise;

/// The outcome of one run of the query pipeline.
///
/// `total` always counts the records after filtering and before
/// pagination. `page` and `limit` appear on the wire only when the
/// caller asked for pagination.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult {
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    pub data: Vec<Exercise>,
}
