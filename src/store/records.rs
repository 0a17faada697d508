//! The in-memory record collection.

use super::ids::IdAllocator;

/// A typed record held by a [`RecordStore`].
pub trait Record {
    /// The partial-update form of this record.
    type Patch;

    /// The unique identifier of this record.
    fn id(&self) -> u64;

    /// Applies the supplied fields of a partial update in place.
    fn merge_fields(&mut self, patch: Self::Patch);
}

/// An ordered, in-memory collection of records of one resource kind.
///
/// Records keep their insertion order; lookups are linear scans. The
/// store itself does no locking, callers serialize access to it.
#[derive(Debug)]
pub struct RecordStore<R: Record> {
    records: Vec<R>,
    ids: IdAllocator,
}

impl<R: Record> RecordStore<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            ids: IdAllocator::new(),
        }
    }

    /// Allocates the identifier for the next record to be appended.
    pub fn allocate_id(&mut self) -> u64 {
        self.ids.allocate()
    }

    /// Appends a record at the end of the collection.
    pub fn append(&mut self, record: R) {
        self.ids.observe(record.id());
        self.records.push(record);
    }

    pub fn find_by_id(&self, id: u64) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn find_index_by_id(&self, id: u64) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    /// Replaces the record at `index` in place, keeping its position.
    pub fn replace(&mut self, index: usize, record: R) {
        self.records[index] = record;
    }

    /// Merges a partial update into the record at `index` and returns the
    /// updated record.
    pub fn merge_at(&mut self, index: usize, patch: R::Patch) -> &R {
        self.records[index].merge_fields(patch);
        &self.records[index]
    }

    /// Removes and returns the record at `index`. Later records shift
    /// down, so insertion order is preserved.
    pub fn remove_at(&mut self, index: usize) -> R {
        self.records.remove(index)
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}
