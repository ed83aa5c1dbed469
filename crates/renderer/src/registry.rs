//! Asset registry for dot stamps and color schemes.
//!
//! The registry is built once at startup and never mutated afterwards.
//! Lookups hand out owned copies, so callers can composite into a returned
//! buffer without corrupting the canonical asset, and concurrent readers
//! never share mutable state.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info, warn};

use heat_common::{HeatError, Result, MAX_DOT_ZOOM};

use crate::dots::DotStamp;
use crate::scheme::{self, ColorScheme, GradientDefinition};

/// Immutable store of dot stamps (one per zoom 0..=30) and named color
/// schemes.
#[derive(Debug)]
pub struct AssetRegistry {
    dots: Vec<DotStamp>,
    schemes: HashMap<String, ColorScheme>,
}

impl AssetRegistry {
    /// Build the registry from the built-in procedural assets: generated
    /// stamps for every zoom and the "classic" scheme.
    pub fn builtin() -> Self {
        // generation is infallible for zooms 0..=30
        let dots = (0..=MAX_DOT_ZOOM)
            .filter_map(|z| DotStamp::generate(z).ok())
            .collect();

        let classic = scheme::classic();
        let mut schemes = HashMap::new();
        schemes.insert(classic.name().to_string(), classic);

        info!(dots = MAX_DOT_ZOOM as usize + 1, schemes = 1, "built-in assets loaded");
        Self { dots, schemes }
    }

    /// Build the registry from an asset directory.
    ///
    /// Reads `dot{zoom}.png` for each zoom (generating the built-in stamp
    /// when a file is missing), every other `*.png` as a color scheme named
    /// by its file stem, and every `*.json` as a gradient definition. The
    /// "classic" scheme is always present, from file or built-in.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut dots = Vec::with_capacity(MAX_DOT_ZOOM as usize + 1);
        for zoom in 0..=MAX_DOT_ZOOM {
            let path = dir.join(format!("dot{zoom}.png"));
            if path.is_file() {
                dots.push(DotStamp::from_png_file(&path)?);
            } else {
                dots.push(DotStamp::generate(zoom)?);
            }
        }

        let mut schemes = HashMap::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match path.extension().and_then(|e| e.to_str()) {
                Some("png") if !stem.starts_with("dot") => {
                    let loaded = ColorScheme::from_png_file(&path)?;
                    debug!(scheme = stem, "loaded color scheme PNG");
                    schemes.insert(stem.to_string(), loaded);
                }
                Some("json") => {
                    let json = std::fs::read_to_string(&path)?;
                    let def = GradientDefinition::from_json(&json)?;
                    let name = def.name.clone();
                    debug!(scheme = %name, "baked gradient definition");
                    schemes.insert(name, def.bake()?);
                }
                _ => {}
            }
        }

        if !schemes.contains_key("classic") {
            warn!(dir = %dir.display(), "no classic scheme in asset directory, using built-in");
            schemes.insert("classic".to_string(), scheme::classic());
        }

        info!(
            dir = %dir.display(),
            dots = dots.len(),
            schemes = schemes.len(),
            "asset directory loaded"
        );
        Ok(Self { dots, schemes })
    }

    /// The dot stamp for a zoom level, as a private copy.
    pub fn dot(&self, zoom: u8) -> Result<DotStamp> {
        self.dots
            .get(zoom as usize)
            .cloned()
            .ok_or_else(|| HeatError::not_found(format!("dot{zoom}")))
    }

    /// A color scheme by name, as a private copy.
    pub fn color_scheme(&self, name: &str) -> Result<ColorScheme> {
        self.schemes
            .get(name)
            .cloned()
            .ok_or_else(|| HeatError::not_found(format!("color scheme '{name}'")))
    }

    /// Names of every registered color scheme.
    pub fn color_scheme_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.schemes.keys().cloned().collect();
        names.sort();
        names
    }
}
