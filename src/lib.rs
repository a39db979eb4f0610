//! Spotfinder: a catalog of named points of interest with a synchronized
//! list view and map.
//!
//! Spotfinder provides:
//! - A durable location store seeded with Greater Toronto Area landmarks
//! - Case-insensitive exact and substring search by name
//! - Create, update and delete by id with atomic, all-or-nothing writes
//! - View synchronization that keeps a cached list and map markers in step
//!   with the store after every mutation or search
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal front-end (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Controller
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - Details form mode                                │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Sync Layer    │
//! │ (ui/)         │   │ (storage/)    │   │ (sync/)       │
//! │ - List table  │   │ - JSON I/O    │   │ - List cache  │
//! │ - Text map    │   │ - Name search │   │ - Markers     │
//! │               │   │ - Seed data   │   │ - Camera      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data directory paths (infrastructure/)           │
//! │  - Error types (domain/error)                       │
//! │  - Location model (domain/location)                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber with a rotating log file      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Controller with the event/action model
//! - [`domain`]: Core domain types (Location, errors)
//! - [`infrastructure`]: Data directory resolution
//! - [`storage`]: JSON file persistence, name matching and seed data
//! - [`sync`]: List and map synchronization
//! - [`ui`]: Plain-text rendering of the list and map
//! - [`observability`]: Logging setup
//!
//! # Configuration
//!
//! Configuration comes from `key=value` pairs or a TOML file:
//!
//! ```toml
//! data_dir = "~/.local/share/spotfinder"
//! database_file = "spotfinder.json"
//! schema_version = 5
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use spotfinder::{initialize, Config, LocationDraft};
//!
//! let dir = tempfile::tempdir()?;
//! let config = Config {
//!     data_dir: Some(dir.path().to_path_buf()),
//!     ..Default::default()
//! };
//!
//! let store = initialize(&config)?;
//! assert!(store.get_by_name("cn tower")?.is_some());
//!
//! let id = store.create(&LocationDraft::new("Home", "1 Main St", 43.7, -79.4))?;
//! assert_eq!(store.get_by_name("HOME")?.map(|l| l.id), Some(id));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod sync;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, FormInput, FormMode, Notice};
pub use domain::{Location, LocationDraft, Result, SpotfinderError};
pub use storage::{LocationStore, SCHEMA_VERSION};
pub use sync::{CameraTarget, MapSurface, Marker, SearchSession, ViewSync};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default file name of the location store.
pub const DEFAULT_DATABASE_FILE: &str = "spotfinder.json";

/// Runtime configuration.
///
/// Every field has a default, so a TOML file or map only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the store and the log file.
    ///
    /// A leading `~` is expanded. Default: `$SPOTFINDER_DATA_DIR`, else
    /// `~/.local/share/spotfinder`.
    pub data_dir: Option<PathBuf>,

    /// File name of the store inside `data_dir`. Default: `spotfinder.json`
    pub database_file: String,

    /// Schema version the store is opened with.
    ///
    /// A stored collection with a different version is discarded and
    /// reseeded. Default: 5
    pub schema_version: u32,

    /// Log filter used when `RUST_LOG` is unset.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any
    /// `EnvFilter` directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            database_file: DEFAULT_DATABASE_FILE.to_string(),
            schema_version: SCHEMA_VERSION,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from `key=value` pairs.
    ///
    /// Unknown keys are ignored and unparsable values fall back to their
    /// defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `data_dir`: String → `Option<PathBuf>` (empty values ignored)
    /// - `database_file`: String (empty values ignored)
    /// - `schema_version`: String → `u32` (falls back to 5 on parse error)
    /// - `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use spotfinder::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("database_file".to_string(), "places.json".to_string());
    /// map.insert("schema_version".to_string(), "six".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.database_file, "places.json");
    /// assert_eq!(config.schema_version, 5);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let defaults = Self::default();

        Self {
            data_dir: non_empty("data_dir").map(PathBuf::from),
            database_file: non_empty("database_file").unwrap_or(defaults.database_file),
            schema_version: config
                .get("schema_version")
                .and_then(|s| s.trim().parse::<u32>().ok())
                .unwrap_or(defaults.schema_version),
            trace_level: non_empty("trace_level"),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SpotfinderError::Config`] if the file cannot be read or is
    /// not valid TOML for this structure.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SpotfinderError::Config(format!("{}: {e}", path.display())))?;
        toml::from_str(&contents)
            .map_err(|e| SpotfinderError::Config(format!("{}: {e}", path.display())))
    }

    /// Resolved data directory, with `~` expanded.
    #[must_use]
    pub fn data_dir_path(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir
                .to_str()
                .map_or_else(|| dir.clone(), infrastructure::expand_tilde),
            None => infrastructure::get_data_dir(),
        }
    }

    /// Full path of the location store.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.data_dir_path().join(&self.database_file)
    }
}

/// Opens the location store described by `config`.
///
/// Creates the data directory and store file on first use and loads the
/// seed dataset into a freshly created or migrated store. Opening an
/// existing store of the current version leaves its contents untouched.
///
/// # Errors
///
/// Returns [`SpotfinderError::StorageUnavailable`] if the medium cannot be
/// opened or created.
pub fn initialize(config: &Config) -> Result<LocationStore> {
    let path = config.database_path();
    tracing::debug!(path = %path.display(), schema_version = config.schema_version, "initializing spotfinder");
    LocationStore::open(path, config.schema_version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.database_file, "spotfinder.json");
        assert_eq!(config.schema_version, 5);
        assert!(config.data_dir.is_none());
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn from_map_reads_known_keys() {
        let map: BTreeMap<String, String> = [
            ("data_dir", "/srv/spots"),
            ("database_file", "places.json"),
            ("schema_version", "7"),
            ("trace_level", "debug"),
            ("unknown", "ignored"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = Config::from_map(&map);
        assert_eq!(config.database_path(), PathBuf::from("/srv/spots/places.json"));
        assert_eq!(config.schema_version, 7);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn from_file_fills_missing_keys_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spotfinder.toml");
        std::fs::write(&path, "data_dir = \"/srv/spots\"\ntrace_level = \"warn\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/spots")));
        assert_eq!(config.database_file, "spotfinder.json");
        assert_eq!(config.schema_version, 5);
        assert_eq!(config.trace_level.as_deref(), Some("warn"));
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spotfinder.toml");
        std::fs::write(&path, "schema_version = \"five\"").unwrap();

        assert!(matches!(Config::from_file(&path), Err(SpotfinderError::Config(_))));
        assert!(matches!(
            Config::from_file(dir.path().join("missing.toml")),
            Err(SpotfinderError::Config(_))
        ));
    }

    #[test]
    fn initialize_opens_a_seeded_store() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_dir: Some(dir.path().join("nested")),
            ..Config::default()
        };

        let store = initialize(&config).unwrap();
        assert_eq!(store.path(), config.database_path());
        assert_eq!(store.list().unwrap().len(), storage::SEED_LOCATIONS.len());
    }
}
