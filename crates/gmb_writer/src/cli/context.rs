//! Shared state for command handlers.

use gmb_writer::{
    FileKeyValueStore, GmbResult, GmbWriterConfig, KeyValueStore, ProfileStore, RateLimiter,
    SystemClock,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Configuration and profile-backed services for one CLI invocation.
pub struct AppContext {
    pub config: GmbWriterConfig,
    pub profile_path: PathBuf,
    pub profile: ProfileStore,
    pub limiter: Arc<RateLimiter>,
}

impl AppContext {
    /// Load configuration and open the profile store.
    pub fn open(config_path: Option<&Path>, profile_override: Option<PathBuf>) -> GmbResult<Self> {
        let config = match config_path {
            Some(path) => GmbWriterConfig::from_file(path)?,
            None => GmbWriterConfig::load()?,
        };

        let profile_path = config.resolve_profile_path(profile_override)?;
        let store: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(&profile_path)?);
        tracing::debug!(profile = %profile_path.display(), "Opened profile");

        Ok(Self {
            config,
            profile_path,
            profile: ProfileStore::new(store.clone()),
            limiter: Arc::new(RateLimiter::new(store, Arc::new(SystemClock))),
        })
    }
}
