//! Workout session records and their partial-update form.

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// A logged workout session.
///
/// `exercise_id` is a plain reference by number; the session store does
/// not check that the exercise actually exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: u64,
    #[serde(rename = "exerciseId")]
    pub exercise_id: u64,
    pub reps: f64,
    pub sets: f64,
    pub notes: String,
}

/// The fields of a session that a partial update may carry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionPatch {
    pub exercise_id: Option<u64>,
    pub reps: Option<f64>,
    pub sets: Option<f64>,
    pub notes: Option<String>,
}

impl Record for Session {
    type Patch = SessionPatch;

    fn id(&self) -> u64 {
        self.id
    }

    fn merge_fields(&mut self, patch: SessionPatch) {
        if let Some(exercise_id) = patch.exercise_id {
            self.exercise_id = exercise_id;
        }
        if let Some(reps) = patch.reps {
            self.reps = reps;
        }
        if let Some(sets) = patch.sets {
            self.sets = sets;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }
}
