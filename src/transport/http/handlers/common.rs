use crate::domain::token::parse_pubkey;
use crate::error::ApiError;
use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value as JsonValue;
use solana_sdk::pubkey::Pubkey;

/// Unwraps an optional JSON body; an unreadable body is a 400.
pub fn json_body<T: Default>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match body {
        Ok(Json(v)) => Ok(v),
        // No body at all reads as an empty object; required fields are checked later.
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(e) => Err(ApiError::InvalidBody(e.body_text())),
    }
}

/// A present, non-blank string field.
pub fn required(field: &Option<String>) -> Result<&str, ApiError> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::MissingParams)
}

pub fn required_amount(field: &Option<JsonValue>) -> Result<&JsonValue, ApiError> {
    match field {
        None | Some(JsonValue::Null) => Err(ApiError::MissingParams),
        Some(v) => Ok(v),
    }
}

pub fn required_pubkey(field: &Option<String>) -> Result<Pubkey, ApiError> {
    parse_pubkey(required(field)?)
}
