/*
[INPUT]:  Client configuration, transport and id generator
[OUTPUT]: Configured Copper client exposing the signed request pipeline
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::CopperConfig;
use crate::http::ids::{IdGenerator, UuidGenerator};
use crate::http::request::build_request;
use crate::http::response::{classify, classify_empty};
use crate::http::signature::{RequestSigner, timestamp_millis};
use crate::http::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
use crate::http::Result;

/// Body argument for requests that send none
pub const NO_BODY: Option<&()> = None;

/// Main HTTP client for the Copper platform API
#[derive(Debug, Clone)]
pub struct CopperClient {
    config: Arc<CopperConfig>,
    signer: RequestSigner,
    transport: Arc<dyn Transport>,
    id_generator: Arc<dyn IdGenerator>,
}

impl CopperClient {
    /// Create a client that talks HTTP through reqwest
    pub fn new(config: CopperConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client on top of a custom transport
    pub fn with_transport(config: CopperConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;
        let signer = RequestSigner::new(config.api_key.clone(), config.secret_key.clone());

        Ok(Self {
            config: Arc::new(config),
            signer,
            transport,
            id_generator: Arc::new(UuidGenerator),
        })
    }

    /// Replace the source of external ids
    pub fn with_id_generator(mut self, id_generator: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = id_generator;
        self
    }

    pub fn config(&self) -> &CopperConfig {
        &self.config
    }

    pub(crate) fn next_external_id(&self) -> String {
        self.id_generator.next_id()
    }

    /// Send a signed request and decode the success body into `T`
    pub async fn signed_request<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(method, path, query, body).await?;
        classify(&response)
    }

    /// Send a signed request whose success response carries no body
    pub async fn signed_request_empty<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let response = self.send(method, path, query, body).await?;
        classify_empty(&response)
    }

    /// Build, sign and execute one request
    ///
    /// The signed path is the path as sent on the wire, after the base path is
    /// replaced and with segments left percent-encoded (`/platform/orders/a%20b`).
    /// The query string is not signed.
    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<HttpResponse>
    where
        B: Serialize + ?Sized,
    {
        let prepared = build_request(&self.config.base_url, path, query, body)?;

        // One capture: the same value is signed and sent as X-Timestamp.
        let timestamp = timestamp_millis();
        let headers = self.signer.auth_headers(
            method.as_str(),
            prepared.url.path(),
            &prepared.body,
            timestamp,
        )?;

        debug!(method = %method, url = %prepared.url, timestamp, "sending copper request");
        let response = self
            .transport
            .execute(HttpRequest {
                method,
                url: prepared.url,
                headers,
                body: prepared.body,
            })
            .await?;
        debug!(
            status = response.status.as_u16(),
            bytes = response.body.len(),
            "received copper response"
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::signature::{SIGNATURE_HEADER, TIMESTAMP_HEADER, sign};
    use crate::http::transport::MockTransport;
    use crate::http::CopperError;
    use reqwest::StatusCode;
    use reqwest::header::AUTHORIZATION;
    use serde_json::{Value, json};

    fn test_config() -> CopperConfig {
        CopperConfig {
            api_key: "api-key".to_string(),
            secret_key: "secret".into(),
            base_url: "https://copper.test/base".to_string(),
            portfolio_id: "pf-1".to_string(),
            ..CopperConfig::default()
        }
    }

    #[test]
    fn test_client_creation() {
        let client = CopperClient::new(test_config()).expect("client init");
        assert_eq!(client.config().portfolio_id, "pf-1");
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let config = CopperConfig {
            base_url: "not a url".to_string(),
            ..test_config()
        };
        let err = CopperClient::new(config).unwrap_err();
        assert!(matches!(err, CopperError::MalformedUrl(_)));
    }

    #[tokio::test]
    async fn test_signed_request_headers_match_signature() {
        let transport = Arc::new(MockTransport::new(StatusCode::OK, r#"{"ok":true}"#));
        let client = CopperClient::with_transport(test_config(), transport.clone()).unwrap();

        let body = json!({"currency": "SOL"});
        let value: Value = client
            .signed_request(Method::POST, "/platform/deposit-targets", &[], Some(&body))
            .await
            .expect("request");
        assert_eq!(value, json!({"ok": true}));

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(
            request.url.as_str(),
            "https://copper.test/platform/deposit-targets"
        );
        assert_eq!(request.body, br#"{"currency":"SOL"}"#);
        assert_eq!(request.headers[AUTHORIZATION], "ApiKey api-key");

        let timestamp: u64 = request.headers[TIMESTAMP_HEADER]
            .to_str()
            .unwrap()
            .parse()
            .unwrap();
        let expected = sign(
            "secret",
            "POST",
            "/platform/deposit-targets",
            &request.body,
            timestamp,
        );
        assert_eq!(request.headers[SIGNATURE_HEADER], expected.as_str());
    }

    #[tokio::test]
    async fn test_signed_request_empty_body_is_signed() {
        let transport = Arc::new(MockTransport::new(StatusCode::NO_CONTENT, ""));
        let client = CopperClient::with_transport(test_config(), transport.clone()).unwrap();

        client
            .signed_request_empty(Method::PATCH, "/platform/orders/ord-1", &[], NO_BODY)
            .await
            .expect("request");

        let request = &transport.requests()[0];
        assert!(request.body.is_empty());
        let timestamp: u64 = request.headers[TIMESTAMP_HEADER]
            .to_str()
            .unwrap()
            .parse()
            .unwrap();
        let expected = sign("secret", "PATCH", "/platform/orders/ord-1", b"", timestamp);
        assert_eq!(request.headers[SIGNATURE_HEADER], expected.as_str());
    }

    #[tokio::test]
    async fn test_signed_request_remote_error() {
        let transport = Arc::new(MockTransport::new(
            StatusCode::BAD_REQUEST,
            r#"{"message":"bad request"}"#,
        ));
        let client = CopperClient::with_transport(test_config(), transport).unwrap();

        let err = client
            .signed_request::<(), Value>(Method::GET, "/platform/orders", &[], NO_BODY)
            .await
            .unwrap_err();
        assert_eq!(err.remote_message(), Some("bad request"));
    }
}
