//! Dot stamp assets.
//!
//! A stamp is the square grayscale footprint blended onto the canvas for
//! each point. There is one stamp per zoom level 0..=30; stamps are largest
//! at zoom 0 where a single point should cover visible area on a whole-world
//! tile. Stamps load from `dot{zoom}.png` files or generate procedurally.

use std::path::Path;

use heat_common::{HeatError, Result, MAX_DOT_ZOOM};

/// Smallest generated stamp side in pixels.
const MIN_SIDE: u32 = 4;

/// Largest generated stamp side in pixels.
const MAX_SIDE: u32 = 64;

/// A square grayscale stamp stored as row-major RGBA bytes.
///
/// Pixels run from dark at the center (high intensity after colorization)
/// to white at the edge (no contribution under multiplicative blending).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotStamp {
    width: u32,
    pixels: Vec<u8>,
}

impl DotStamp {
    /// Generate the built-in stamp for a zoom level.
    ///
    /// Side length is `clamp(4 + 2 * (30 - zoom), 4, 64)`, a linear radial
    /// falloff from dark center to white edge.
    pub fn generate(zoom: u8) -> Result<Self> {
        if zoom > MAX_DOT_ZOOM {
            return Err(HeatError::not_found(format!(
                "dot{zoom} (stamps exist for zooms 0..={MAX_DOT_ZOOM})"
            )));
        }

        let side = (4 + 2 * (MAX_DOT_ZOOM as u32 - zoom as u32)).clamp(MIN_SIDE, MAX_SIDE);
        let center = (side - 1) as f64 / 2.0;
        let radius = side as f64 / 2.0;

        let mut pixels = Vec::with_capacity((side * side * 4) as usize);
        for y in 0..side {
            for x in 0..side {
                let dx = x as f64 - center;
                let dy = y as f64 - center;
                let t = ((dx * dx + dy * dy).sqrt() / radius).min(1.0);
                let v = (t * 255.0).round() as u8;
                pixels.extend_from_slice(&[v, v, v, 255]);
            }
        }
        Ok(Self {
            width: side,
            pixels,
        })
    }

    /// Load a stamp from PNG bytes. The image must be square.
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| HeatError::parse_error(format!("dot PNG: {e}")))?
            .to_rgba8();
        if img.width() != img.height() {
            return Err(HeatError::parse_error(format!(
                "dot stamp must be square, got {}x{}",
                img.width(),
                img.height()
            )));
        }
        Ok(Self {
            width: img.width(),
            pixels: img.into_raw(),
        })
    }

    /// Load a stamp from a PNG file.
    pub fn from_png_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_png_bytes(&bytes)
    }

    /// Stamp side length in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Row-major RGBA bytes, `width * width` pixels.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the stamp and take its pixel buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}
