/*
[INPUT]:  Secret key, HTTP method, request path, serialized body, millisecond timestamp
[OUTPUT]: HMAC-SHA256 request signature and authentication headers
[POS]:    HTTP layer - request signing for every Copper endpoint
[UPDATE]: When changing signing algorithm or header format
*/

use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;

use crate::http::Result;

type HmacSha256 = Hmac<Sha256>;

pub const TIMESTAMP_HEADER: &str = "x-timestamp";
pub const SIGNATURE_HEADER: &str = "x-signature";
const AUTHORIZATION_PREFIX: &str = "ApiKey";
const CONTENT_TYPE_JSON: &str = "application/json";

/// Sign a request the way the Copper API expects
///
/// Format: "{timestamp}{METHOD}{path}{body}"
/// Returns lower-case hex of the HMAC-SHA256 digest
pub fn sign(secret_key: &str, method: &str, path: &str, body: &[u8], timestamp: u64) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret_key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(timestamp.to_string().as_bytes());
    mac.update(method.to_uppercase().as_bytes());
    mac.update(path.as_bytes());
    mac.update(body);
    hex::encode(mac.finalize().into_bytes())
}

/// Milliseconds since the Unix epoch
pub fn timestamp_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default()
}

/// Signs requests and composes the authentication headers
#[derive(Debug, Clone)]
pub struct RequestSigner {
    api_key: String,
    secret_key: SecretString,
}

impl RequestSigner {
    /// Create a new request signer from the API key pair
    pub fn new(api_key: impl Into<String>, secret_key: SecretString) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key,
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn sign_request(&self, method: &str, path: &str, body: &[u8], timestamp: u64) -> String {
        sign(
            self.secret_key.expose_secret(),
            method,
            path,
            body,
            timestamp,
        )
    }

    /// Build the four authentication headers for one request
    ///
    /// `timestamp` is both signed and sent, so callers capture it once.
    pub fn auth_headers(
        &self,
        method: &str,
        path: &str,
        body: &[u8],
        timestamp: u64,
    ) -> Result<HeaderMap> {
        let signature = self.sign_request(method, path, body, timestamp);

        let mut headers = HeaderMap::with_capacity(4);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("{AUTHORIZATION_PREFIX} {}", self.api_key))?,
        );
        headers.insert(
            HeaderName::from_static(TIMESTAMP_HEADER),
            HeaderValue::from_str(&timestamp.to_string())?,
        );
        headers.insert(
            HeaderName::from_static(SIGNATURE_HEADER),
            HeaderValue::from_str(&signature)?,
        );
        Ok(headers)
    }
}
