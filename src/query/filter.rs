//! Filter stage.
//!
//! Criteria are conjunctive: a record survives only if it matches every
//! one the query carries. Text criteria compare case-insensitively; the
//! duration bound keeps records at or below the requested value.

use crate::model::Exercise;

use super::spec::ExerciseQuery;

/// Applies the filter criteria of a query to exercise records.
pub struct ExerciseFilter;

impl ExerciseFilter {
    /// True when the record matches every criterion present in the query.
    pub fn matches(exercise: &Exercise, query: &ExerciseQuery) -> bool {
        if let Some(category) = &query.category {
            if !exercise.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }

        if let Some(difficulty) = &query.difficulty {
            if !exercise.difficulty.eq_ignore_ascii_case(difficulty) {
                return false;
            }
        }

        if let Some(bound) = query.max_duration {
            if exercise.duration > bound {
                return false;
            }
        }

        true
    }

    /// Drops records that do not match, preserving input order.
    pub fn apply(records: &mut Vec<Exercise>, query: &ExerciseQuery) {
        records.retain(|exercise| Self::matches(exercise, query));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(category: &str, difficulty: &str, duration: f64) -> Exercise {
        Exercise {
            id: 1,
            name: "Test".to_string(),
            category: category.to_string(),
            difficulty: difficulty.to_string(),
            duration,
        }
    }

    fn query_category(category: &str) -> ExerciseQuery {
        ExerciseQuery {
            category: Some(category.to_string()),
            ..ExerciseQuery::default()
        }
    }

    #[test]
    fn test_no_criteria_matches_everything() {
        let record = exercise("Core", "Easy", 10.0);
        assert!(ExerciseFilter::matches(&record, &ExerciseQuery::default()));
    }

    #[test]
    fn test_category_comparison_ignores_case() {
        let record = exercise("Core", "Easy", 10.0);
        assert!(ExerciseFilter::matches(&record, &query_category("core")));
        assert!(ExerciseFilter::matches(&record, &query_category("CORE")));
        assert!(!ExerciseFilter::matches(&record, &query_category("Cardio")));
    }

    #[test]
    fn test_difficulty_comparison_ignores_case() {
        let record = exercise("Core", "Easy", 10.0);
        let query = ExerciseQuery {
            difficulty: Some("easy".to_string()),
            ..ExerciseQuery::default()
        };
        assert!(ExerciseFilter::matches(&record, &query));
    }

    #[test]
    fn test_duration_bound_is_inclusive() {
        let query = ExerciseQuery {
            max_duration: Some(30.0),
            ..ExerciseQuery::default()
        };

        assert!(ExerciseFilter::matches(&exercise("A", "B", 30.0), &query));
        assert!(ExerciseFilter::matches(&exercise("A", "B", 29.9), &query));
        assert!(!ExerciseFilter::matches(&exercise("A", "B", 30.1), &query));
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let record = exercise("Core", "Easy", 10.0);
        let query = ExerciseQuery {
            category: Some("Core".to_string()),
            difficulty: Some("Hard".to_string()),
            ..ExerciseQuery::default()
        };

        assert!(!ExerciseFilter::matches(&record, &query));
    }

    #[test]
    fn test_apply_preserves_input_order() {
        let mut records = vec![
            exercise("Core", "Easy", 10.0),
            exercise("Cardio", "Easy", 20.0),
            exercise("Core", "Hard", 30.0),
        ];

        ExerciseFilter::apply(&mut records, &query_category("Core"));

        let durations: Vec<f64> = records.iter().map(|e| e.duration).collect();
        assert_eq!(durations, vec![10.0, 30.0]);
    }
}
