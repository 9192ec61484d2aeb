//! User profile preferences.

use crate::{API_KEY_KEY, KeyValueStore, THEME_KEY};
use gmb_writer_core::Theme;
use gmb_writer_error::GmbResult;
use std::str::FromStr;
use std::sync::Arc;

/// Typed access to the API key and theme preference.
#[derive(Clone)]
pub struct ProfileStore {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for ProfileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileStore").finish_non_exhaustive()
    }
}

impl ProfileStore {
    /// Wrap a key-value store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// The stored API key, if one is set and non-blank.
    pub fn api_key(&self) -> GmbResult<Option<String>> {
        Ok(self
            .store
            .get(API_KEY_KEY)?
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty()))
    }

    /// Whether a usable API key is stored.
    pub fn has_api_key(&self) -> GmbResult<bool> {
        Ok(self.api_key()?.is_some())
    }

    /// Save the API key. A blank key clears it instead.
    #[tracing::instrument(skip_all)]
    pub fn set_api_key(&self, key: &str) -> GmbResult<()> {
        let key = key.trim();
        if key.is_empty() {
            return self.clear_api_key();
        }
        self.store.set(API_KEY_KEY, key)?;
        tracing::info!("API key saved");
        Ok(())
    }

    /// Forget the API key.
    #[tracing::instrument(skip_all)]
    pub fn clear_api_key(&self) -> GmbResult<()> {
        self.store.remove(API_KEY_KEY)?;
        tracing::info!("API key cleared");
        Ok(())
    }

    /// Stored theme, or the default when unset or unrecognized.
    pub fn theme(&self) -> GmbResult<Theme> {
        Ok(self
            .store
            .get(THEME_KEY)?
            .and_then(|raw| Theme::from_str(raw.trim()).ok())
            .unwrap_or_default())
    }

    /// Persist the theme preference.
    pub fn set_theme(&self, theme: Theme) -> GmbResult<()> {
        self.store.set(THEME_KEY, theme.as_ref())
    }

    /// Flip between light and dark, returning the new theme.
    pub fn toggle_theme(&self) -> GmbResult<Theme> {
        let next = self.theme()?.toggled();
        self.set_theme(next)?;
        Ok(next)
    }
}
