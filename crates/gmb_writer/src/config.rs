//! Layered application configuration.

use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use gmb_writer_error::{ConfigError, GmbError, GmbResult};
use gmb_writer_models::GeminiSettings;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, instrument};

/// Prefix for environment overrides, e.g. `GMB_WRITER__GEMINI__MODEL`.
const ENV_PREFIX: &str = "GMB_WRITER";

/// Dispatcher timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct DispatchSettings {
    /// Pause before canned content is shown when no API key is set
    example_delay_ms: u64,
}

impl DispatchSettings {
    /// Example delay as a [`Duration`].
    pub fn example_delay(&self) -> Duration {
        Duration::from_millis(self.example_delay_ms)
    }
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            example_delay_ms: 1000,
        }
    }
}

/// Where the profile lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct StorageSettings {
    /// Profile file; the platform data directory when unset
    profile_path: Option<PathBuf>,
}

/// Top-level gmb_writer configuration.
///
/// Sources, later overriding earlier:
/// 1. Bundled defaults (`gmb_writer.toml` shipped with the crate)
/// 2. `~/.config/gmb_writer/gmb_writer.toml`
/// 3. `./gmb_writer.toml`
/// 4. `GMB_WRITER__SECTION__KEY` environment variables
///
/// # Example
///
/// ```no_run
/// use gmb_writer::GmbWriterConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = GmbWriterConfig::load()?;
/// println!("Model: {}", config.gemini().model());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct GmbWriterConfig {
    /// Gemini endpoint, model and sampling
    gemini: GeminiSettings,
    /// Dispatcher timing
    dispatch: DispatchSettings,
    /// Profile storage
    storage: StorageSettings,
}

impl GmbWriterConfig {
    /// Load configuration from a single file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> GmbResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                GmbError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                GmbError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration from every layer.
    ///
    /// Missing user files are skipped silently.
    #[instrument]
    pub fn load() -> GmbResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../gmb_writer.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/gmb_writer/gmb_writer.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("gmb_writer").required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        builder
            .build()
            .map_err(|e| {
                GmbError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                GmbError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Profile path to use, honouring an explicit override first.
    pub fn resolve_profile_path(&self, cli_override: Option<PathBuf>) -> GmbResult<PathBuf> {
        match cli_override.or_else(|| self.storage.profile_path.clone()) {
            Some(path) => Ok(path),
            None => gmb_writer_storage::default_profile_path(),
        }
    }
}
