use serde_json::Value;

use crate::error::ApiError;
use crate::model::{Record, LAST_UPDATE};

/// Pull the concurrency token out of a mutation body. The token is the
/// `lastUpdate` value the caller last observed; its absence is rejected
/// before the record is even looked up.
pub fn require_token(body: &Record) -> Result<&str, ApiError> {
    body.get(LAST_UPDATE)
        .and_then(Value::as_str)
        .ok_or(ApiError::PreconditionMissing)
}

/// Compare the supplied token against the stored one. Exact string equality;
/// the token is opaque to callers.
pub fn verify_token(provided: &str, stored: &Record) -> Result<(), ApiError> {
    let actual = stored
        .get(LAST_UPDATE)
        .and_then(Value::as_str)
        .unwrap_or_default();
    if provided != actual {
        return Err(ApiError::PreconditionMismatch);
    }
    Ok(())
}
