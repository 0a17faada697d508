//! Identifier allocation.

/// Allocates numeric identifiers for one collection.
///
/// Identifiers start at 1 and only ever grow. An identifier freed by a
/// delete is never handed out again, so gaps in a collection are normal
/// after deletions.
#[derive(Debug)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the next identifier and advances the watermark.
    pub fn allocate(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Raises the watermark above an identifier that entered the
    /// collection without being allocated here.
    pub fn observe(&mut self, id: u64) {
        if id >= self.next {
            self.next = id + 1;
        }
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
