//! Key-value storage trait.

use gmb_writer_error::GmbResult;

/// Key holding the serialized rate-limit state.
pub const RATE_LIMIT_KEY: &str = "rateLimits";

/// Key holding the user's Gemini API key.
pub const API_KEY_KEY: &str = "geminiApiKey";

/// Key holding the theme preference.
pub const THEME_KEY: &str = "theme";

/// String-keyed persistent storage.
///
/// Implementations must be safe to share across threads. Values are opaque
/// strings; callers own the encoding.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> GmbResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> GmbResult<()>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> GmbResult<()>;
}
