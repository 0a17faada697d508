//! Response shapes shared by the resource handlers.

use serde::Serialize;

/// Body of a successful delete: a confirmation message plus the record
/// that was removed, so the caller keeps one last copy of it.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse<T: Serialize> {
    pub message: String,
    pub deleted: T,
}

impl<T: Serialize> DeleteResponse<T> {
    pub fn new(resource: &str, deleted: T) -> Self {
        Self {
            message: format!("{} deleted successfully.", resource),
            deleted,
        }
    }
}
