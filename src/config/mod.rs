//! Unified configuration loading.
//!
//! Loads the finder and filter configuration from a single YAML file
//! with sensible defaults for anything omitted.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use taraka_seed::config::SeedingConfig;
//!
//! // Load from default path (configs/seeding.yaml)
//! let config = SeedingConfig::load_default()?;
//!
//! // Or use built-in defaults (no file needed)
//! let config = SeedingConfig::default();
//! ```
//!
//! ## Example YAML
//!
//! ```yaml
//! finder:
//!   r_max: 160.0
//!   min_pt: 500.0        # MeV
//!   b_field_in_z: 0.00199724
//!   impact_max: 10.0
//!
//! filter:
//!   max_seeds_per_sp_m: 5
//!   compat_seed_weight: 200.0
//! ```

mod error;

pub use error::ConfigLoadError;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::seeding::{SeedFilterConfig, SeedfinderConfig};

/// Full seeding configuration loaded from YAML.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct SeedingConfig {
    /// Finder settings
    #[serde(default)]
    pub finder: SeedfinderConfig,

    /// Filter settings
    #[serde(default)]
    pub filter: SeedFilterConfig,
}

impl SeedingConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from the default config path (configs/seeding.yaml).
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/seeding.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }
}
