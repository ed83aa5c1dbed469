//! Cache of flat tiles for point-free requests.
//!
//! A tile with no points is a single RGBA color: the scheme's least-intense
//! row combined with the resolved opacity. Each distinct
//! `(scheme, opacity)` pair renders once; later requests clone the cached
//! buffer. Entries are immutable after insertion.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use crate::scheme::ColorScheme;
use crate::tile::Tile;

/// Concurrent cache of pre-rendered flat tiles keyed by scheme name and
/// resolved opacity.
///
/// Lookups happen under a read lock; a miss renders outside any lock, then
/// inserts under the write lock with a double check so concurrent first
/// requests race harmlessly and exactly one entry survives.
#[derive(Debug, Default)]
pub struct EmptyTileCache {
    tiles: RwLock<HashMap<(String, u8), Tile>>,
}

impl EmptyTileCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the flat tile for a scheme and opacity, rendering and caching
    /// it on first request.
    pub fn get_or_render(&self, scheme: &ColorScheme, opacity: u8) -> Tile {
        let key = (scheme.name().to_string(), opacity);

        // Entries are immutable, so a poisoned lock holds nothing
        // half-written; recover the guard.
        {
            let tiles = self.tiles.read().unwrap_or_else(|e| e.into_inner());
            if let Some(tile) = tiles.get(&key) {
                debug!(scheme = scheme.name(), opacity, "empty tile cache hit");
                return tile.clone();
            }
        }

        debug!(scheme = scheme.name(), opacity, "empty tile cache miss");
        let tile = render_flat(scheme, opacity);

        let mut tiles = self.tiles.write().unwrap_or_else(|e| e.into_inner());
        tiles.entry(key).or_insert(tile).clone()
    }

    /// Number of cached flat tiles.
    pub fn len(&self) -> usize {
        self.tiles.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Render the flat tile: the scheme's row 255 color with its alpha scaled
/// by the resolved opacity.
fn render_flat(scheme: &ColorScheme, opacity: u8) -> Tile {
    let [r, g, b, row_alpha] = scheme.row(255);
    let alpha = ((opacity as f32 / 255.0) * (row_alpha as f32 / 255.0) * 255.0) as u8;
    Tile::filled([r, g, b, alpha])
}
