//! Session store configuration.

use crate::error::{SessionError, SessionResult};

/// Default key prefix applied to every session id.
pub const DEFAULT_PREFIX: &str = "sess:";

/// Session store configuration.
///
/// Assembled once with the builder methods and treated as immutable after
/// the store is constructed. Every unset endpoint field falls back to the
/// transport default (`http`, `localhost`, scheme port, `/`).
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Prefix prepended to every session id to form the remote key
    pub prefix: String,
    /// Use an encrypted transport when no explicit protocol is set
    pub secure: bool,
    /// Explicit scheme (a trailing `:` is tolerated)
    pub protocol: Option<String>,
    /// Remote hostname
    pub hostname: Option<String>,
    /// Remote port
    pub port: Option<u16>,
    /// Base path the remote key is concatenated onto
    pub base_path: Option<String>,
    /// Time-to-live in seconds, appended to write operations only
    pub ttl: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            secure: false,
            protocol: None,
            hostname: None,
            port: None,
            base_path: None,
            ttl: None,
        }
    }
}

impl SessionConfig {
    /// Create a configuration with all defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use restful_session::SessionConfig;
    ///
    /// let config = SessionConfig::new()
    ///     .with_hostname("cache.internal")
    ///     .with_port(8080)
    ///     .with_ttl(3600);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key prefix.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Prefix prepended to every session id (default `"sess:"`)
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    /// Select encrypted vs plain transport.
    ///
    /// Only consulted when no explicit protocol is configured.
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Set an explicit scheme, e.g. `"https"`.
    pub fn with_protocol(mut self, protocol: &str) -> Self {
        self.protocol = Some(protocol.to_string());
        self
    }

    /// Set the remote hostname.
    pub fn with_hostname(mut self, hostname: &str) -> Self {
        self.hostname = Some(hostname.to_string());
        self
    }

    /// Set the remote port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the base path the remote key is appended to.
    pub fn with_base_path(mut self, base_path: &str) -> Self {
        self.base_path = Some(base_path.to_string());
        self
    }

    /// Set the session time-to-live in seconds.
    ///
    /// When set, write operations carry the TTL as a `?ttl=` query
    /// parameter so the backing service can apply expiration. Reads and
    /// deletes never carry it.
    pub fn with_ttl(mut self, ttl: u64) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Build the remote key for a session id.
    pub fn session_key(&self, session_id: &str) -> String {
        format!("{}{}", self.prefix, session_id)
    }

    /// Compose the endpoint URL from the configured fields.
    ///
    /// The remote key is later concatenated directly onto this string, so
    /// the base path is carried verbatim.
    pub fn endpoint_url(&self) -> SessionResult<String> {
        let scheme = match &self.protocol {
            Some(protocol) => protocol.trim_end_matches(':').to_string(),
            None => {
                if self.secure {
                    "https".to_string()
                } else {
                    "http".to_string()
                }
            }
        };

        if scheme != "http" && scheme != "https" {
            return Err(SessionError::InvalidUrl(format!(
                "Endpoint protocol must be http or https, got '{}'",
                scheme
            )));
        }

        let hostname = self.hostname.as_deref().unwrap_or("localhost");

        let mut endpoint = format!("{}://{}", scheme, hostname);
        if let Some(port) = self.port {
            endpoint.push_str(&format!(":{}", port));
        }
        endpoint.push_str(self.base_path.as_deref().unwrap_or("/"));

        // Validate the composed endpoint before any request is built from it
        url::Url::parse(&endpoint).map_err(|e| SessionError::InvalidUrl(e.to_string()))?;

        Ok(endpoint)
    }
}
