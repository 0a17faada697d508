//! Pagination stage.
//!
//! Pagination only happens when the caller asked for it. Offsets are
//! clamped: a page past the end of the data yields an empty page, never
//! an error.

use super::spec::PageRequest;

/// The resolved pagination window for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Resolved page number; defaults to 1.
    pub page: u64,
    /// Resolved page size; defaults to the full result length.
    pub limit: u64,
    /// Start offset into the result, clamped to its length.
    pub start: usize,
    /// End offset into the result, clamped to its length.
    pub end: usize,
}

impl PageWindow {
    /// Resolves a pagination request against a result of `len` records.
    ///
    /// Returns `None` when neither `page` nor `limit` survived decoding,
    /// meaning the whole result is returned unpaginated.
    pub fn resolve(request: &PageRequest, len: usize) -> Option<Self> {
        if !request.is_requested() {
            return None;
        }

        let page = request.page.unwrap_or(1);
        let limit = request.limit.unwrap_or(len as u64);

        let start = page.saturating_sub(1).saturating_mul(limit);
        let end = start.saturating_add(limit);

        let start = usize::try_from(start).unwrap_or(usize::MAX).min(len);
        let end = usize::try_from(end).unwrap_or(usize::MAX).min(len);

        Some(Self {
            page,
            limit,
            start,
            end,
        })
    }
}
