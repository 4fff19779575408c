//! Session store trait definition.

use crate::error::SessionResult;
use async_trait::async_trait;
use serde_json::Value;

/// The four-operation store contract expected by session middleware.
///
/// The session record is an opaque JSON value owned by the caller: the
/// store serializes and deserializes it whole and never inspects its
/// contents. Each operation completes asynchronously with either a value,
/// a signaled absence, or an error; a caller that does not care about the
/// outcome can simply ignore the returned `Result`.
///
/// # Examples
///
/// ```ignore
/// use restful_session::{SessionStore, RestSessionStore, SessionConfig};
/// use serde_json::json;
///
/// async fn example(store: &RestSessionStore) -> restful_session::SessionResult<()> {
///     store.set("sid-1", &json!({ "user_id": 123 })).await?;
///
///     if let Some(envelope) = store.get("sid-1").await? {
///         println!("session: {}", envelope);
///     }
///
///     store.destroy("sid-1").await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch the session stored under `session_id`.
    ///
    /// # Returns
    ///
    /// `Ok(Some(envelope))` with the full parsed response envelope on
    /// success, `Ok(None)` when the backing service reports no value for
    /// the key, `Err` on a transport or parse failure.
    async fn get(&self, session_id: &str) -> SessionResult<Option<Value>>;

    /// Store `record` under `session_id`.
    ///
    /// When a TTL is configured it is forwarded to the backing service so
    /// it can expire the record.
    async fn set(&self, session_id: &str, record: &Value) -> SessionResult<()>;

    /// Delete the session stored under `session_id`.
    ///
    /// Deleting an absent key is not an error.
    async fn destroy(&self, session_id: &str) -> SessionResult<()>;

    /// Refresh the TTL for `session_id` by re-writing `record`.
    ///
    /// The backing protocol has no dedicated refresh call; re-issuing the
    /// same write as [`set`](SessionStore::set) renews the TTL-bearing key.
    async fn touch(&self, session_id: &str, record: &Value) -> SessionResult<()> {
        self.set(session_id, record).await
    }
}
