//! Exercise records and their partial-update form.

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// A single exercise in the catalog.
///
/// `id` is allocated by the store when the record is created and never
/// changes afterwards, not even across a full replace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub difficulty: String,
    /// Duration in minutes.
    pub duration: f64,
}

/// The fields of an exercise that a partial update may carry.
///
/// `None` means the field was not supplied. A supplied field always holds
/// a storable value; nulls are rejected before a patch is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExercisePatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub duration: Option<f64>,
}

impl Record for Exercise {
    type Patch = ExercisePatch;

    fn id(&self) -> u64 {
        self.id
    }

    fn merge_fields(&mut self, patch: ExercisePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(difficulty) = patch.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
    }
}
