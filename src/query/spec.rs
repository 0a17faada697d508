//! Query specification decoding.
//!
//! Raw string parameters become a typed [`ExerciseQuery`]. Numeric
//! parameters are permissive: a value that does not parse as the needed
//! numeric type counts as absent, never as an error. The sort field is
//! the one place decoding can fail, because the sortable set is closed.

use std::collections::HashMap;

use super::errors::QueryError;

/// The exercise fields a query may sort by. Closed set; anything else is
/// rejected during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Category,
    Difficulty,
    Duration,
}

impl SortField {
    /// Decodes a bare field name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "id" => Some(SortField::Id),
            "name" => Some(SortField::Name),
            "category" => Some(SortField::Category),
            "difficulty" => Some(SortField::Difficulty),
            "duration" => Some(SortField::Duration),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Category => "category",
            SortField::Difficulty => "difficulty",
            SortField::Duration => "duration",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A decoded sort request: one field plus a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Decodes a raw sort value: a field name, with an optional leading
    /// `-` requesting descending order.
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let (name, direction) = match raw.strip_prefix('-') {
            Some(rest) => (rest, SortDirection::Descending),
            None => (raw, SortDirection::Ascending),
        };

        let field = SortField::parse(name)
            .ok_or_else(|| QueryError::UnknownSortField(name.to_string()))?;

        Ok(Self { field, direction })
    }

    pub fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }
}

/// Pagination controls as the caller supplied them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl PageRequest {
    /// True when the caller asked for pagination at all.
    pub fn is_requested(&self) -> bool {
        self.page.is_some() || self.limit.is_some()
    }
}

/// The decoded query specification for the exercise collection.
///
/// All criteria are optional and combine conjunctively.
#[derive(Debug, Clone, Default)]
pub struct ExerciseQuery {
    /// Case-insensitive exact match on category.
    pub category: Option<String>,
    /// Case-insensitive exact match on difficulty.
    pub difficulty: Option<String>,
    /// Inclusive upper bound on duration. Only `<=` is supported.
    pub max_duration: Option<f64>,
    pub sort: Option<SortSpec>,
    pub page: PageRequest,
}

impl ExerciseQuery {
    /// Decodes raw query parameters.
    ///
    /// Unknown parameter names are ignored. Empty values count as absent,
    /// as do numeric values that fail to parse and a page or limit of
    /// zero.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, QueryError> {
        let mut query = ExerciseQuery::default();

        for (key, value) in params {
            match key.as_str() {
                "category" => query.category = non_empty(value),
                "difficulty" => query.difficulty = non_empty(value),
                "duration" => query.max_duration = parse_bound(value),
                "sort" => {
                    if !value.is_empty() {
                        query.sort = Some(SortSpec::parse(value)?);
                    }
                }
                "page" => query.page.page = parse_positive(value),
                "limit" => query.page.limit = parse_positive(value),
                _ => {}
            }
        }

        Ok(query)
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parses a finite float; anything else counts as absent.
fn parse_bound(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parses a positive integer; zero or malformed input counts as absent.
fn parse_positive(value: &str) -> Option<u64> {
    value.parse::<u64>().ok().filter(|n| *n > 0)
}
