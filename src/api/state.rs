//! Shared application state.
//!
//! One lock per collection. A handler takes the lock once and completes
//! its whole read-check-mutate sequence under it, so no request ever
//! observes a half-applied update.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::model::{Exercise, Session};
use crate::observability::MetricsRegistry;
use crate::store::RecordStore;

use super::errors::{ApiError, ApiResult};

/// State shared by every handler.
pub struct AppState {
    exercises: RwLock<RecordStore<Exercise>>,
    sessions: RwLock<RecordStore<Session>>,
    pub metrics: MetricsRegistry,
}

/// Shared handle cloned into each handler.
pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new() -> Self {
        Self {
            exercises: RwLock::new(RecordStore::new()),
            sessions: RwLock::new(RecordStore::new()),
            metrics: MetricsRegistry::new(),
        }
    }

    pub fn shared() -> SharedState {
        Arc::new(Self::new())
    }

    /// Read access to the exercise collection. A poisoned lock surfaces
    /// as an internal error rather than a panic.
    pub fn exercises(&self) -> ApiResult<RwLockReadGuard<'_, RecordStore<Exercise>>> {
        self.exercises.read().map_err(|_| ApiError::Internal)
    }

    /// Write access to the exercise collection.
    pub fn exercises_mut(&self) -> ApiResult<RwLockWriteGuard<'_, RecordStore<Exercise>>> {
        self.exercises.write().map_err(|_| ApiError::Internal)
    }

    /// Read access to the session collection.
    pub fn sessions(&self) -> ApiResult<RwLockReadGuard<'_, RecordStore<Session>>> {
        self.sessions.read().map_err(|_| ApiError::Internal)
    }

    /// Write access to the session collection.
    pub fn sessions_mut(&self) -> ApiResult<RwLockWriteGuard<'_, RecordStore<Session>>> {
        self.sessions.write().map_err(|_| ApiError::Internal)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
