//! Operational counters.
//!
//! Counters only, monotonic, reset on process start. Atomics with
//! relaxed ordering; exact cross-counter consistency is not needed for
//! reporting.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Registry of all operational counters.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Requests that completed, any status.
    requests_served: AtomicU64,
    /// Exercise queries that ran the full pipeline.
    queries_executed: AtomicU64,
    /// Exercise queries rejected during decoding.
    queries_rejected: AtomicU64,
    exercises_created: AtomicU64,
    exercises_updated: AtomicU64,
    exercises_deleted: AtomicU64,
    sessions_created: AtomicU64,
    sessions_updated: AtomicU64,
    sessions_deleted: AtomicU64,
}

impl MetricsRegistry {
    /// Creates a registry with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_requests_served(&self) {
        self.requests_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_queries_executed(&self) {
        self.queries_executed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_queries_rejected(&self) {
        self.queries_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_exercises_created(&self) {
        self.exercises_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_exercises_updated(&self) {
        self.exercises_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_exercises_deleted(&self) {
        self.exercises_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_sessions_created(&self) {
        self.sessions_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_sessions_updated(&self) {
        self.sessions_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_sessions_deleted(&self) {
        self.sessions_deleted.fetch_add(1, Ordering::Relaxed);
    }

    /// A point-in-time copy of every counter.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_served: self.requests_served.load(Ordering::Relaxed),
            queries_executed: self.queries_executed.load(Ordering::Relaxed),
            queries_rejected: self.queries_rejected.load(Ordering::Relaxed),
            exercises_created: self.exercises_created.load(Ordering::Relaxed),
            exercises_updated: self.exercises_updated.load(Ordering::Relaxed),
            exercises_deleted: self.exercises_deleted.load(Ordering::Relaxed),
            sessions_created: self.sessions_created.load(Ordering::Relaxed),
            sessions_updated: self.sessions_updated.load(Ordering::Relaxed),
            sessions_deleted: self.sessions_deleted.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all counters.
///
/// Serializes to the flat JSON object served by `GET /metrics`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub requests_served: u64,
    pub queries_executed: u64,
    pub queries_rejected: u64,
    pub exercises_created: u64,
    pub exercises_updated: u64,
    pub exercises_deleted: u64,
    pub sessions_created: u64,
    pub sessions_updated: u64,
    pub sessions_deleted: u64,
}
