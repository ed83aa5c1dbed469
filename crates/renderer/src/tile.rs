//! The finished tile image.

use heat_common::{HeatError, Result, TILE_SIZE};

use crate::png;

/// A 256x256 RGBA tile, row-major bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pixels: Vec<u8>,
}

impl Tile {
    /// Wrap a pixel buffer. The buffer must be exactly 256x256 RGBA.
    pub fn from_pixels(pixels: Vec<u8>) -> Result<Self> {
        let expected = (TILE_SIZE * TILE_SIZE * 4) as usize;
        if pixels.len() != expected {
            return Err(HeatError::invalid_argument(format!(
                "tile buffer must be {expected} bytes, got {}",
                pixels.len()
            )));
        }
        Ok(Self { pixels })
    }

    /// A tile filled with a single RGBA color.
    pub fn filled(rgba: [u8; 4]) -> Self {
        let count = (TILE_SIZE * TILE_SIZE) as usize;
        let mut pixels = Vec::with_capacity(count * 4);
        for _ in 0..count {
            pixels.extend_from_slice(&rgba);
        }
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        TILE_SIZE
    }

    pub fn height(&self) -> u32 {
        TILE_SIZE
    }

    /// Row-major RGBA bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// The RGBA value at a pixel position.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * TILE_SIZE + x) * 4) as usize;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Encode the tile as a PNG for transport or storage.
    pub fn into_png(self) -> Result<Vec<u8>> {
        png::encode_rgba(&self.pixels, TILE_SIZE as usize, TILE_SIZE as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pixels_checks_length() {
        assert!(Tile::from_pixels(vec![0; 256 * 256 * 4]).is_ok());
        assert!(Tile::from_pixels(vec![0; 100]).is_err());
    }

    #[test]
    fn test_filled_is_uniform() {
        let tile = Tile::filled([1, 2, 3, 4]);
        assert_eq!(tile.pixel(0, 0), [1, 2, 3, 4]);
        assert_eq!(tile.pixel(255, 255), [1, 2, 3, 4]);
        assert_eq!(tile.pixels().len(), 256 * 256 * 4);
    }
}
