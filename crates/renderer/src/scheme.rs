//! Color scheme gradients.
//!
//! A scheme is a 256-row lookup table from grayscale intensity to display
//! color. Row 0 is the most intense end (fully opaque), row 255 the least
//! intense (used for the empty-tile background, typically near transparent).
//! Schemes come from 1x256 PNG assets or from JSON gradient definitions
//! baked into the table at load time.

use serde::{Deserialize, Serialize};
use std::path::Path;

use heat_common::{HeatError, Result};

/// Number of rows in every scheme lookup table.
pub const SCHEME_ROWS: usize = 256;

/// A 256-row RGBA gradient lookup, indexed by intensity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    name: String,
    /// Row-major RGBA bytes, 256 rows of 4 bytes.
    rows: Vec<u8>,
}

impl ColorScheme {
    /// Build a scheme from raw row data (256 rows of RGBA bytes).
    pub fn from_rows(name: impl Into<String>, rows: Vec<u8>) -> Result<Self> {
        if rows.len() != SCHEME_ROWS * 4 {
            return Err(HeatError::parse_error(format!(
                "color scheme requires {} RGBA bytes, got {}",
                SCHEME_ROWS * 4,
                rows.len()
            )));
        }
        Ok(Self {
            name: name.into(),
            rows,
        })
    }

    /// Load a scheme from PNG bytes. The image must be 256 pixels tall;
    /// column 0 of each row supplies the color.
    pub fn from_png_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| HeatError::parse_error(format!("color scheme PNG: {e}")))?
            .to_rgba8();
        if img.height() as usize != SCHEME_ROWS {
            return Err(HeatError::parse_error(format!(
                "color scheme PNG must be {} pixels tall, got {}",
                SCHEME_ROWS,
                img.height()
            )));
        }
        let mut rows = Vec::with_capacity(SCHEME_ROWS * 4);
        for y in 0..SCHEME_ROWS {
            let px = img.get_pixel(0, y as u32);
            rows.extend_from_slice(&px.0);
        }
        Self::from_rows(name, rows)
    }

    /// Load a scheme from a PNG file, named after the file stem.
    pub fn from_png_file(path: &Path) -> Result<Self> {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| HeatError::invalid_argument("scheme path has no file name"))?
            .to_string();
        let bytes = std::fs::read(path)?;
        Self::from_png_bytes(name, &bytes)
    }

    /// Scheme name, used as cache identity.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The RGBA color for an intensity value.
    pub fn row(&self, intensity: u8) -> [u8; 4] {
        let i = intensity as usize * 4;
        [
            self.rows[i],
            self.rows[i + 1],
            self.rows[i + 2],
            self.rows[i + 3],
        ]
    }

    /// Raw row-major RGBA bytes, 256 rows.
    pub fn rows(&self) -> &[u8] {
        &self.rows
    }
}

/// One stop of a JSON gradient definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GradientStop {
    /// Row index in 0..=255 this stop pins.
    pub position: u8,
    /// Hex color, `#RRGGBB`.
    pub color: String,
    /// Alpha at this stop.
    pub alpha: u8,
}

/// A named gradient described by ordered color stops, loaded from JSON and
/// baked into a [`ColorScheme`].
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GradientDefinition {
    pub name: String,
    pub stops: Vec<GradientStop>,
}

impl GradientDefinition {
    /// Parse a definition from JSON.
    pub fn from_json(json_str: &str) -> Result<Self> {
        let def: Self = serde_json::from_str(json_str)?;
        def.validate()?;
        Ok(def)
    }

    /// Check the definition is bakeable: at least two stops, positions
    /// strictly ascending, colors parseable.
    pub fn validate(&self) -> Result<()> {
        if self.stops.len() < 2 {
            return Err(HeatError::parse_error(format!(
                "gradient '{}' needs at least 2 stops, got {}",
                self.name,
                self.stops.len()
            )));
        }
        for pair in self.stops.windows(2) {
            if pair[1].position <= pair[0].position {
                return Err(HeatError::parse_error(format!(
                    "gradient '{}': stop positions must be strictly ascending ({} then {})",
                    self.name, pair[0].position, pair[1].position
                )));
            }
        }
        for stop in &self.stops {
            hex_to_rgb(&stop.color).ok_or_else(|| {
                HeatError::parse_error(format!(
                    "gradient '{}': bad color '{}'",
                    self.name, stop.color
                ))
            })?;
        }
        Ok(())
    }

    /// Bake the stops into the 256-row lookup table.
    pub fn bake(&self) -> Result<ColorScheme> {
        self.validate()?;

        let stops: Vec<(u8, (u8, u8, u8), u8)> = self
            .stops
            .iter()
            .map(|s| {
                // validate() already checked every color parses
                let rgb = hex_to_rgb(&s.color).unwrap_or((0, 0, 0));
                (s.position, rgb, s.alpha)
            })
            .collect();

        let mut rows = Vec::with_capacity(SCHEME_ROWS * 4);
        for row in 0..SCHEME_ROWS {
            let row = row as u8;
            let rgba = interpolate_stops(&stops, row);
            rows.extend_from_slice(&rgba);
        }
        ColorScheme::from_rows(&self.name, rows)
    }
}

/// Interpolate the stop list at a row. Rows before the first stop take the
/// first stop's color, rows after the last take the last's.
fn interpolate_stops(stops: &[(u8, (u8, u8, u8), u8)], row: u8) -> [u8; 4] {
    let first = stops[0];
    let last = stops[stops.len() - 1];
    if row <= first.0 {
        return [first.1 .0, first.1 .1, first.1 .2, first.2];
    }
    if row >= last.0 {
        return [last.1 .0, last.1 .1, last.1 .2, last.2];
    }

    let mut low = first;
    let mut high = last;
    for pair in stops.windows(2) {
        if pair[0].0 <= row && row <= pair[1].0 {
            low = pair[0];
            high = pair[1];
            break;
        }
    }

    let t = (row - low.0) as f32 / (high.0 - low.0) as f32;
    [
        lerp(low.1 .0, high.1 .0, t),
        lerp(low.1 .1, high.1 .1, t),
        lerp(low.1 .2, high.1 .2, t),
        lerp(low.2, high.2, t),
    ]
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t) as u8
}

/// Parse hex color string to RGB.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

/// The built-in "classic" gradient: deep red through yellow to transparent
/// white, fully opaque at the intense end.
pub fn classic() -> ColorScheme {
    let def = GradientDefinition {
        name: "classic".to_string(),
        stops: vec![
            GradientStop {
                position: 0,
                color: "#800000".to_string(),
                alpha: 255,
            },
            GradientStop {
                position: 48,
                color: "#FF0000".to_string(),
                alpha: 255,
            },
            GradientStop {
                position: 112,
                color: "#FFA500".to_string(),
                alpha: 227,
            },
            GradientStop {
                position: 160,
                color: "#FFFF00".to_string(),
                alpha: 186,
            },
            GradientStop {
                position: 208,
                color: "#FFFF80".to_string(),
                alpha: 110,
            },
            GradientStop {
                position: 255,
                color: "#FFFFFF".to_string(),
                alpha: 0,
            },
        ],
    };
    // the built-in stops are valid by construction
    def.bake().unwrap_or_else(|_| {
        ColorScheme {
            name: "classic".to_string(),
            rows: vec![0; SCHEME_ROWS * 4],
        }
    })
}
