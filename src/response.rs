//! Response envelope classification.
//!
//! The backing service signals every outcome through the response body:
//! a JSON object that may carry a nested `result.resultCode` field. The
//! sentinel value `"ERROR"` means the key has no value. HTTP status codes
//! are not part of the protocol and are never consulted.

use crate::error::{SessionError, SessionResult};
use serde_json::Value;

/// Sentinel result code denoting logical absence.
const ERROR_SENTINEL: &str = "ERROR";

/// JSON pointer to the nested result-status field.
const RESULT_CODE: &str = "/result/resultCode";

/// Classify a buffered response body.
///
/// Returns `Ok(Some(envelope))` for a parsed body without the error
/// sentinel, `Ok(None)` for a body carrying it, and
/// [`SessionError::Deserialization`] when the body is not valid JSON.
///
/// The sentinel collapses backend-reported errors and key-not-found into
/// one absence outcome. That is the existing wire contract; a stricter
/// protocol would separate them.
pub(crate) fn classify(body: &[u8]) -> SessionResult<Option<Value>> {
    let envelope: Value = serde_json::from_slice(body)
        .map_err(|e| SessionError::Deserialization(e.to_string()))?;

    if envelope.pointer(RESULT_CODE).and_then(Value::as_str) == Some(ERROR_SENTINEL) {
        return Ok(None);
    }

    // The full envelope is delivered, never an unwrapped inner payload
    Ok(Some(envelope))
}
