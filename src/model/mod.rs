//! Typed records for the two resource collections.

mod exercise;
mod session;

pub use exercise::{Exercise, ExercisePatch};
pub use session::{Session, SessionPatch};
