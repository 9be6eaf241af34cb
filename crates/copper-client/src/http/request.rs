/*
[INPUT]:  Base URL, endpoint path, query parameters, optional body object
[OUTPUT]: Target URL and the exact body bytes that get signed and sent
[POS]:    HTTP layer - request construction ahead of signing
[UPDATE]: When changing URL composition or body encoding
*/

use serde::Serialize;
use url::Url;

use crate::http::{CopperError, Result};

/// URL and serialized body of one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub url: Url,
    pub body: Vec<u8>,
}

/// Compose the request URL and encode the body
///
/// The endpoint path replaces any path carried by `base_url`. No query
/// parameters means no query string. A missing body encodes as zero bytes.
pub fn build_request<B>(
    base_url: &str,
    path: &str,
    query: &[(&str, String)],
    body: Option<&B>,
) -> Result<PreparedRequest>
where
    B: Serialize + ?Sized,
{
    let mut url = Url::parse(base_url)?;
    url.set_path(path);
    url.set_query(None);
    url.set_fragment(None);
    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }

    let body = match body {
        Some(body) => serde_json::to_vec(body).map_err(CopperError::Serialization)?,
        None => Vec::new(),
    };

    Ok(PreparedRequest { url, body })
}
