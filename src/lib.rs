//! Session storage backed by a RESTful key-value API.
//!
//! This crate implements the four-operation store contract expected by
//! session middleware (`get`, `set`, `destroy`, `touch`) against a remote
//! key-value service reachable over HTTP(S). Session records are opaque
//! JSON values: the store serializes them whole and never interprets
//! their contents.
//!
//! # Protocol
//!
//! Each operation maps to one HTTP request against
//! `<endpoint><base path><prefix><session id>`:
//!
//! - `get` → `GET`
//! - `set` / `touch` → `PUT` with the record as the JSON body, plus a
//!   `?ttl=<seconds>` query parameter when a TTL is configured
//! - `destroy` → `DELETE`
//!
//! The service answers with a JSON envelope. An envelope whose nested
//! `result.resultCode` field equals `"ERROR"` means the key has no value
//! and is reported as absence, not as an error; anything else is returned
//! to the caller in full. HTTP status codes are not part of the protocol.
//!
//! # Examples
//!
//! ```no_run
//! use restful_session::{RestSessionStore, SessionConfig, SessionStore};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SessionConfig::new()
//!         .with_hostname("cache.internal")
//!         .with_port(8080)
//!         .with_base_path("/cache/")
//!         .with_prefix("myapp:")
//!         .with_ttl(3600);
//!
//!     let store = RestSessionStore::new(config)?;
//!
//!     // Store a session record
//!     store.set("sid-1", &json!({ "user_id": 123 })).await?;
//!
//!     // Retrieve it later; `None` means the key has no value
//!     if let Some(envelope) = store.get("sid-1").await? {
//!         println!("session: {}", envelope);
//!     }
//!
//!     // Renew the TTL by re-writing the record
//!     store.touch("sid-1", &json!({ "user_id": 123 })).await?;
//!
//!     // Delete on logout; deleting an absent key is fine
//!     store.destroy("sid-1").await?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod traits;

mod response;
mod rest_session;

pub use config::{DEFAULT_PREFIX, SessionConfig};
pub use error::{SessionError, SessionResult};
pub use rest_session::RestSessionStore;
pub use traits::SessionStore;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::SessionConfig;
    pub use crate::error::{SessionError, SessionResult};
    pub use crate::rest_session::RestSessionStore;
    pub use crate::traits::SessionStore;
}
