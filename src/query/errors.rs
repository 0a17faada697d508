//! Query decoding errors.

use thiserror::Error;

/// Errors produced while decoding a query specification.
///
/// Decoding is deliberately permissive about numeric parameters, so the
/// sortable-field check is the only way a query can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The sort parameter named a field outside the sortable set.
    #[error("Cannot sort by unknown field '{0}'.")]
    UnknownSortField(String),
}
