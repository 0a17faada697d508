//! In-memory storage.
//!
//! Each resource collection is a [`RecordStore`]: an insertion-ordered
//! `Vec` of typed records plus an [`IdAllocator`] watermark. Nothing is
//! persisted; process exit discards all data.

mod ids;
mod records;

pub use ids::IdAllocator;
pub use records::{Record, RecordStore};
