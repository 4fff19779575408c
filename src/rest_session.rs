//! RESTful API session storage implementation.

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::response;
use crate::traits::SessionStore;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde_json::Value;

/// Session store backed by a RESTful key-value service.
///
/// Every session id is prefixed with the configured key prefix to form the
/// remote key; writes append the configured TTL as a query parameter so
/// the backing service can expire the record. One HTTP request is issued
/// per operation; any connection reuse is reqwest's own.
///
/// # Examples
///
/// ```no_run
/// use restful_session::{RestSessionStore, SessionConfig, SessionStore};
/// use serde_json::json;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = SessionConfig::new()
///         .with_hostname("cache.internal")
///         .with_port(8080)
///         .with_base_path("/cache/")
///         .with_ttl(3600);
///
///     let store = RestSessionStore::new(config)?;
///
///     store.set("sid-1", &json!({ "user_id": 123 })).await?;
///     let session = store.get("sid-1").await?;
///     println!("session: {:?}", session);
///
///     Ok(())
/// }
/// ```
pub struct RestSessionStore {
    client: Client,
    config: SessionConfig,
    base_url: String,
}

impl RestSessionStore {
    /// Create a new RESTful session store.
    ///
    /// Validates the configured endpoint and builds the HTTP client. No
    /// request is sent until an operation is invoked.
    ///
    /// # Arguments
    ///
    /// * `config` - Session configuration
    pub fn new(config: SessionConfig) -> SessionResult<Self> {
        let base_url = config.endpoint_url()?;

        let client = Client::builder()
            .build()
            .map_err(|e| SessionError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    /// Build the full request URL for a session id.
    ///
    /// The remote key is concatenated directly onto the endpoint base; the
    /// TTL query parameter is appended only to writes, and only when
    /// configured.
    fn request_url(&self, method: &Method, session_id: &str) -> String {
        let mut url = format!("{}{}", self.base_url, self.config.session_key(session_id));
        if *method == Method::PUT {
            if let Some(ttl) = self.config.ttl {
                url.push_str(&format!("?ttl={}", ttl));
            }
        }
        url
    }

    /// Issue one request and classify its response.
    async fn execute(
        &self,
        method: Method,
        session_id: &str,
        record: Option<&Value>,
    ) -> SessionResult<Option<Value>> {
        let url = self.request_url(&method, session_id);
        tracing::debug!(%method, %url, "dispatching session store request");

        let mut request = self
            .client
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(record) = record {
            let body = serde_json::to_vec(record)
                .map_err(|e| SessionError::Serialization(e.to_string()))?;
            request = request.body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SessionError::Connection(e.to_string()))?;

        // Buffer the whole body before parsing; envelopes are small
        let body = response
            .bytes()
            .await
            .map_err(|e| SessionError::Connection(e.to_string()))?;

        response::classify(&body)
    }
}

#[async_trait]
impl SessionStore for RestSessionStore {
    async fn get(&self, session_id: &str) -> SessionResult<Option<Value>> {
        self.execute(Method::GET, session_id, None).await
    }

    async fn set(&self, session_id: &str, record: &Value) -> SessionResult<()> {
        self.execute(Method::PUT, session_id, Some(record)).await?;
        Ok(())
    }

    async fn destroy(&self, session_id: &str) -> SessionResult<()> {
        self.execute(Method::DELETE, session_id, None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(config: SessionConfig) -> RestSessionStore {
        RestSessionStore::new(config).unwrap()
    }

    #[test]
    fn test_read_url_is_prefix_plus_id() {
        let store = store(SessionConfig::new().with_port(8080));
        assert_eq!(
            store.request_url(&Method::GET, "abc"),
            "http://localhost:8080/sess:abc"
        );
    }

    #[test]
    fn test_write_url_carries_ttl_when_configured() {
        let store = store(SessionConfig::new().with_port(8080).with_ttl(3600));
        assert_eq!(
            store.request_url(&Method::PUT, "abc"),
            "http://localhost:8080/sess:abc?ttl=3600"
        );
    }

    #[test]
    fn test_write_url_has_no_ttl_when_unconfigured() {
        let store = store(SessionConfig::new().with_port(8080));
        assert_eq!(
            store.request_url(&Method::PUT, "abc"),
            "http://localhost:8080/sess:abc"
        );
    }

    #[test]
    fn test_read_and_delete_urls_never_carry_ttl() {
        let store = store(SessionConfig::new().with_port(8080).with_ttl(3600));
        assert_eq!(
            store.request_url(&Method::GET, "abc"),
            "http://localhost:8080/sess:abc"
        );
        assert_eq!(
            store.request_url(&Method::DELETE, "abc"),
            "http://localhost:8080/sess:abc"
        );
    }

    #[test]
    fn test_base_path_is_concatenated_verbatim() {
        let store = store(
            SessionConfig::new()
                .with_port(8080)
                .with_base_path("/cache/"),
        );
        assert_eq!(
            store.request_url(&Method::GET, "abc"),
            "http://localhost:8080/cache/sess:abc"
        );
    }

    #[test]
    fn test_new_rejects_invalid_endpoint() {
        let result = RestSessionStore::new(SessionConfig::new().with_protocol("gopher"));
        assert!(matches!(result, Err(SessionError::InvalidUrl(_))));
    }
}
