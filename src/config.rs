//! Configuration for jsonstore
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Default directory used when none is given
pub const DEFAULT_DIR: &str = "./jsonstore_data";

/// Default file extension (without the leading dot)
pub const DEFAULT_EXTENSION: &str = "json";

/// Configuration for a single store instance
#[derive(Debug, Clone)]
pub struct StoreConfig {
    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------
    /// Directory holding one file per entry
    ///   {dir}/
    ///     ├── alice.json
    ///     └── bob%2Fsmith.json
    /// Need not exist; created on first write.
    pub dir: PathBuf,

    /// Extension appended to every entry file, without the dot
    pub extension: String,

    // -------------------------------------------------------------------------
    // Encoding / Durability
    // -------------------------------------------------------------------------
    /// Write pretty-printed JSON instead of compact
    pub pretty: bool,

    /// fsync each entry file before it replaces the old one
    pub sync_writes: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            pretty: false,
            sync_writes: false,
        }
    }
}

impl StoreConfig {
    /// Create a new config builder
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::default()
    }
}

/// Builder for StoreConfig
#[derive(Default)]
pub struct StoreConfigBuilder {
    config: StoreConfig,
}

impl StoreConfigBuilder {
    /// Set the store directory
    pub fn dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.dir = path.into();
        self
    }

    /// Set the entry file extension; a leading dot is stripped
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        let ext = ext.into();
        self.config.extension = ext.trim_start_matches('.').to_string();
        self
    }

    /// Enable pretty-printed JSON
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.config.pretty = pretty;
        self
    }

    /// Enable fsync on every write
    pub fn sync_writes(mut self, sync: bool) -> Self {
        self.config.sync_writes = sync;
        self
    }

    pub fn build(self) -> StoreConfig {
        self.config
    }
}
