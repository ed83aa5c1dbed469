//! Configuration for the tile service.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use heat_common::{HeatError, Result};
use renderer::{ZOOM_OPAQUE, ZOOM_TRANSPARENT};

/// Configuration for [`crate::HeatTileService`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatConfig {
    /// Zoom at or below which tiles render fully opaque.
    pub zoom_opaque: i32,

    /// Zoom at or above which tiles render fully transparent.
    pub zoom_transparent: i32,

    /// Scheme used when a request names none.
    pub default_scheme: String,

    /// Directory of dot and scheme assets. `None` uses the built-in
    /// procedural assets.
    pub asset_dir: Option<PathBuf>,
}

impl Default for HeatConfig {
    fn default() -> Self {
        Self {
            zoom_opaque: ZOOM_OPAQUE,
            zoom_transparent: ZOOM_TRANSPARENT,
            default_scheme: "classic".to_string(),
            asset_dir: None,
        }
    }
}

impl HeatConfig {
    /// Load configuration from `HEAT_`-prefixed environment variables,
    /// keeping defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("HEAT_ZOOM_OPAQUE") {
            if let Ok(zoom) = val.parse() {
                config.zoom_opaque = zoom;
            }
        }

        if let Ok(val) = std::env::var("HEAT_ZOOM_TRANSPARENT") {
            if let Ok(zoom) = val.parse() {
                config.zoom_transparent = zoom;
            }
        }

        if let Ok(val) = std::env::var("HEAT_DEFAULT_SCHEME") {
            if !val.is_empty() {
                config.default_scheme = val;
            }
        }

        if let Ok(val) = std::env::var("HEAT_ASSET_DIR") {
            if !val.is_empty() {
                config.asset_dir = Some(PathBuf::from(val));
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.default_scheme.is_empty() {
            return Err(HeatError::invalid_argument("default_scheme must not be empty"));
        }

        // Thresholds may sit outside the real zoom range (the defaults do),
        // but wildly large values indicate a unit mistake.
        for (name, value) in [
            ("zoom_opaque", self.zoom_opaque),
            ("zoom_transparent", self.zoom_transparent),
        ] {
            if !(-64..=64).contains(&value) {
                return Err(HeatError::invalid_argument(format!(
                    "{name} {value} is outside -64..=64"
                )));
            }
        }

        if let Some(dir) = &self.asset_dir {
            if !dir.is_dir() {
                return Err(HeatError::invalid_argument(format!(
                    "asset_dir '{}' is not a directory",
                    dir.display()
                )));
            }
        }

        Ok(())
    }
}
