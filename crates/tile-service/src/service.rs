//! The tile service facade.

use tracing::debug;

use heat_common::{HeatError, Result};
use point_store::{PointStore, QueryStrategy};
use renderer::{AssetRegistry, OpacityTable, Tile, TileCompositor};

use crate::config::HeatConfig;

/// Per-request rendering options.
#[derive(Debug, Clone, Copy)]
pub struct TileOptions {
    /// Take the tile alpha from the zoom-opacity table instead of
    /// `default_opacity`.
    pub change_opacity_with_zoom: bool,

    /// Alpha in 0..=255 used when `change_opacity_with_zoom` is false.
    pub default_opacity: i32,

    /// Range-query execution strategy.
    pub strategy: QueryStrategy,
}

impl Default for TileOptions {
    /// The form that matches the original gheat output: zoom-driven
    /// opacity, serial query.
    fn default() -> Self {
        Self {
            change_opacity_with_zoom: true,
            default_opacity: 0,
            strategy: QueryStrategy::Serial,
        }
    }
}

/// Renders heatmap tiles from a point store.
///
/// Built once at startup; the registry, opacity table, and empty-tile
/// cache live for the service's lifetime and rendering itself is
/// stateless per call.
#[derive(Debug)]
pub struct HeatTileService {
    registry: AssetRegistry,
    compositor: TileCompositor,
    default_scheme: String,
}

impl HeatTileService {
    /// Build the service: validate the configuration, load assets, and
    /// construct the opacity table.
    pub fn new(config: HeatConfig) -> Result<Self> {
        config.validate()?;

        let registry = match &config.asset_dir {
            Some(dir) => AssetRegistry::from_dir(dir)?,
            None => AssetRegistry::builtin(),
        };
        // Surface a missing default scheme at startup, not per request.
        registry.color_scheme(&config.default_scheme)?;

        let compositor = TileCompositor::new(OpacityTable::build(
            config.zoom_opaque,
            config.zoom_transparent,
        ));

        Ok(Self {
            registry,
            compositor,
            default_scheme: config.default_scheme,
        })
    }

    /// The loaded asset registry.
    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    /// Name of the scheme used when a request names none.
    pub fn default_scheme(&self) -> &str {
        &self.default_scheme
    }

    /// Render a tile with the default options.
    pub fn tile(
        &self,
        store: &PointStore,
        scheme_name: &str,
        zoom: u8,
        tile_x: i64,
        tile_y: i64,
    ) -> Result<Tile> {
        self.tile_with_options(store, scheme_name, zoom, tile_x, tile_y, TileOptions::default())
    }

    /// Render a tile.
    ///
    /// Fails with a not-found error for an unknown scheme or a zoom with
    /// no dot stamp, and an invalid-argument error for an out-of-range
    /// opacity; no partial tile is ever produced.
    pub fn tile_with_options(
        &self,
        store: &PointStore,
        scheme_name: &str,
        zoom: u8,
        tile_x: i64,
        tile_y: i64,
        options: TileOptions,
    ) -> Result<Tile> {
        if scheme_name.is_empty() {
            return Err(HeatError::invalid_argument("a color scheme name is required"));
        }

        let scheme = self.registry.color_scheme(scheme_name)?;
        let dot = self.registry.dot(zoom)?;

        let points = store.points_for_tile(tile_x, tile_y, dot.width(), zoom, options.strategy)?;
        debug!(
            zoom,
            tile_x,
            tile_y,
            scheme = scheme_name,
            points = points.len(),
            "rendering tile"
        );

        self.compositor.render(
            &scheme,
            &dot,
            zoom,
            &points,
            options.change_opacity_with_zoom,
            options.default_opacity,
        )
    }
}
