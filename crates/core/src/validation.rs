//! Request field validation shared by the proxy routes.

use serde_json::Value;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum characters of code accepted by analyze/optimize.
pub const MIN_CODE_LENGTH: usize = 10;

/// Minimum characters of content accepted by save.
pub const MIN_CONTENT_LENGTH: usize = 10;

/// Language assumed by optimize when the request names none.
pub const DEFAULT_OPTIMIZE_LANGUAGE: &str = "javascript";

/// Learner role assumed by course URL analysis when the request names none.
pub const DEFAULT_USER_ROLE: &str = "student";

// ---------------------------------------------------------------------------
// Field checks
// ---------------------------------------------------------------------------

/// Fetch `field` from a JSON object, requiring it to be a string.
pub fn require_string<'a>(body: &'a Value, field: &str) -> Result<&'a str, CoreError> {
    match body.get(field) {
        Some(Value::String(s)) => Ok(s),
        Some(Value::Null) | None => Err(CoreError::Validation(format!("{field} is required"))),
        Some(_) => Err(CoreError::Validation(format!("{field} must be a string"))),
    }
}

/// Fetch an optional string field. `null` counts as absent.
pub fn optional_string<'a>(body: &'a Value, field: &str) -> Result<Option<&'a str>, CoreError> {
    match body.get(field) {
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Null) | None => Ok(None),
        Some(_) => Err(CoreError::Validation(format!("{field} must be a string"))),
    }
}

/// Require at least `min` characters once surrounding whitespace is removed.
pub fn require_min_length(text: &str, field: &str, min: usize) -> Result<(), CoreError> {
    let len = text.trim().chars().count();
    if len < min {
        return Err(CoreError::Validation(format!(
            "{field} must be at least {min} characters (got {len})"
        )));
    }
    Ok(())
}

/// Require a string with visible content.
pub fn require_non_blank(text: &str, field: &str) -> Result<(), CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Require an item id that stays a single path segment.
///
/// Ids are placed into `/api/item/{id}` after percent-decoding, so separators,
/// query/fragment markers and dot segments would address another resource.
pub fn require_item_id(id: &str) -> Result<(), CoreError> {
    require_non_blank(id, "id")?;
    if id.contains(['/', '\\', '?', '#']) || id.contains("..") {
        return Err(CoreError::Validation(format!("id '{id}' is not a valid item id")));
    }
    Ok(())
}

/// Prefix `https://` unless the text already carries an HTTP(S) scheme.
pub fn ensure_scheme(raw: &str) -> String {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}
