//! Request-body field extraction.
//!
//! Bodies arrive as raw JSON values so handlers can tell apart three
//! cases a typed extractor would collapse: key absent, key explicitly
//! null, and key present with an empty or zero value. Create and replace
//! apply the required-field rules; partial updates go by key presence
//! alone.

use serde_json::Value;

use super::errors::{ApiError, ApiResult};

/// A required string field: present, a string, and non-empty.
///
/// `required` is the field list echoed in the missing-fields message.
pub fn required_string(body: &Value, field: &'static str, required: &'static str) -> ApiResult<String> {
    match body.get(field) {
        Some(Value::String(text)) if !text.is_empty() => Ok(text.clone()),
        Some(Value::String(_)) | Some(Value::Null) | None => Err(ApiError::MissingFields(required)),
        Some(_) => Err(ApiError::InvalidField(field, "a string")),
    }
}

/// A required numeric field: present, a number, and non-zero. Zero is
/// rejected because it is indistinguishable from absent under the
/// required-field rules.
pub fn required_number(body: &Value, field: &'static str, required: &'static str) -> ApiResult<f64> {
    match body.get(field) {
        Some(Value::Number(number)) => {
            let value = number.as_f64().unwrap_or(0.0);
            if value == 0.0 {
                Err(ApiError::MissingFields(required))
            } else {
                Ok(value)
            }
        }
        Some(Value::Null) | None => Err(ApiError::MissingFields(required)),
        Some(_) => Err(ApiError::InvalidField(field, "a number")),
    }
}

/// A required identifier field: present and a positive integer.
pub fn required_id(body: &Value, field: &'static str, required: &'static str) -> ApiResult<u64> {
    match body.get(field) {
        Some(Value::Number(number)) => match number.as_u64() {
            Some(id) if id > 0 => Ok(id),
            Some(_) => Err(ApiError::MissingFields(required)),
            None => Err(ApiError::InvalidField(field, "a positive integer")),
        },
        Some(Value::Null) | None => Err(ApiError::MissingFields(required)),
        Some(_) => Err(ApiError::InvalidField(field, "a positive integer")),
    }
}

/// An optional string field for partial updates. Absent means "leave
/// alone"; a supplied value must be a string.
pub fn optional_string(body: &Value, field: &'static str) -> ApiResult<Option<String>> {
    match body.get(field) {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(ApiError::InvalidField(field, "a string")),
    }
}

/// An optional numeric field for partial updates. Zero is allowed here;
/// only create and replace reject it.
pub fn optional_number(body: &Value, field: &'static str) -> ApiResult<Option<f64>> {
    match body.get(field) {
        None => Ok(None),
        Some(Value::Number(number)) => Ok(Some(number.as_f64().unwrap_or(0.0))),
        Some(_) => Err(ApiError::InvalidField(field, "a number")),
    }
}

/// An optional identifier field for partial updates.
pub fn optional_id(body: &Value, field: &'static str) -> ApiResult<Option<u64>> {
    match body.get(field) {
        None => Ok(None),
        Some(Value::Number(number)) => match number.as_u64() {
            Some(id) => Ok(Some(id)),
            None => Err(ApiError::InvalidField(field, "a positive integer")),
        },
        Some(_) => Err(ApiError::InvalidField(field, "a positive integer")),
    }
}
