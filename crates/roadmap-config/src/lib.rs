//! # roadmap-config
//!
//! Layered configuration loading for the roadmap generator using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ROADMAP_*` prefix, `__` as separator)
//! 2. Project-level `roadmap.toml` (or an explicit path)
//! 3. User-level `~/.config/roadmap/config.toml`
//! 4. Built-in defaults
//!
//! Command-line flags are applied on top by the binary.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ROADMAP_TRACKER__TOKEN` -> `tracker.token`,
//! `ROADMAP_OUTPUT__PATH` -> `output.path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use roadmap_config::RoadmapConfig;
//!
//! let config = RoadmapConfig::load_with_dotenv(None).expect("config");
//! config.validate().expect("token and projects");
//!
//! for target in &config.projects {
//!     println!("project {} from offset {}", target.id, target.offset);
//! }
//! ```

mod error;
mod output;
mod tracker;

pub use error::ConfigError;
pub use output::{OutputConfig, ReportFormat};
pub use tracker::TrackerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use roadmap_core::ProjectTarget;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file name, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "roadmap.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RoadmapConfig {
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub projects: Vec<ProjectTarget>,
    #[serde(default)]
    pub output: OutputConfig,
}

impl RoadmapConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `config_path` replaces the project-local `roadmap.toml` and must exist.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.is_file() {
                return Err(ConfigError::InvalidValue {
                    field: String::from("config"),
                    reason: format!("{} does not exist", path.display()),
                });
            }
        }
        Self::figment(config_path).extract().map_err(ConfigError::from)
    }

    /// Load configuration without `.env` processing.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load `.env` from the working directory, then all other sources.
    pub fn load_with_dotenv(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load_from(config_path)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local or explicit config
        let local_path = config_path.map_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE), Path::to_path_buf);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("ROADMAP_").split("__"))
    }

    /// Check that a run can proceed: a token, at least one project, and a
    /// non-zero page size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tracker.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: String::from("tracker.token"),
            });
        }
        if self.projects.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: String::from("projects"),
            });
        }
        if self.tracker.page_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: String::from("tracker.page_limit"),
                reason: String::from("must be at least 1"),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("roadmap").join("config.toml"))
    }
}
