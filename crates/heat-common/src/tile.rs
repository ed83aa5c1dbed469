//! Tile addressing in the XYZ slippy-map convention.

use serde::{Deserialize, Serialize};

/// Square tile edge length in pixels. Changing this breaks the projection
/// math, the dot assets, and every cached tile, so it is fixed.
pub const TILE_SIZE: u32 = 256;

/// Highest addressable zoom level.
pub const MAX_ZOOM: u8 = 31;

/// Highest zoom level with a bundled dot stamp (stamps exist for 0..=30).
pub const MAX_DOT_ZOOM: u8 = 30;

/// A tile coordinate (x, y, zoom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileAddress {
    /// Column.
    pub x: i64,
    /// Row.
    pub y: i64,
    /// Zoom level, 0 (whole world) through [`MAX_ZOOM`].
    pub zoom: u8,
}

impl TileAddress {
    pub fn new(x: i64, y: i64, zoom: u8) -> Self {
        Self { x, y, zoom }
    }

    /// Generate a cache key string.
    pub fn cache_key(&self) -> String {
        format!("{}/{}/{}", self.zoom, self.x, self.y)
    }
}
