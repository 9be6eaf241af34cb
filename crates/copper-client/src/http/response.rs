/*
[INPUT]:  Raw HTTP status and response bytes
[OUTPUT]: Decoded success payload or typed error
[POS]:    HTTP layer - uniform response classification for every endpoint
[UPDATE]: When the API error envelope or success criteria change
*/

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::http::transport::HttpResponse;
use crate::http::{CopperError, DecodeError, Result};
use crate::types::ErrorResponse;

/// Decode a success body into `T`, or turn an error status into a typed error
pub fn classify<T: DeserializeOwned>(response: &HttpResponse) -> Result<T> {
    ensure_success(response)?;
    let value = serde_json::from_slice(&response.body).map_err(DecodeError::from)?;
    Ok(value)
}

/// Same as [`classify`] for endpoints without a response body
pub fn classify_empty(response: &HttpResponse) -> Result<()> {
    ensure_success(response)
}

fn ensure_success(response: &HttpResponse) -> Result<()> {
    if response.status.as_u16() < 300 {
        return Ok(());
    }

    let envelope: ErrorResponse =
        serde_json::from_slice(&response.body).map_err(DecodeError::from)?;
    warn!(
        status = response.status.as_u16(),
        error = envelope.error.as_deref().unwrap_or_default(),
        message = %envelope.message,
        "copper API returned an error"
    );
    Err(CopperError::remote(response.status, envelope.message))
}
