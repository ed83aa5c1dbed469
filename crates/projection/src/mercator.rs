//! Spherical Web-Mercator projection.
//!
//! Maps geographic coordinates onto the square world-pixel plane used by
//! slippy-map tiles. The world is `256 * 2^zoom` pixels per axis; tile
//! (x, y) covers the 256-pixel square whose top-left world pixel is
//! `(x * 256, y * 256)`.
//!
//! Latitude is clamped to the Mercator singularity limits (±85.05112878°)
//! before projecting, so the poles never produce infinities.

use std::f64::consts::PI;

use heat_common::{HeatError, PixelBounds, Result, MAX_ZOOM, TILE_SIZE};

/// Northernmost projectable latitude in degrees.
pub const MAX_LATITUDE: f64 = 85.05112878;
/// Southernmost projectable latitude in degrees.
pub const MIN_LATITUDE: f64 = -85.05112878;
/// Easternmost longitude in degrees.
pub const MAX_LONGITUDE: f64 = 180.0;
/// Westernmost longitude in degrees.
pub const MIN_LONGITUDE: f64 = -180.0;

/// Spherical Web-Mercator projection at the fixed 256-pixel tile size.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mercator;

impl Mercator {
    pub fn new() -> Self {
        Self
    }

    /// Edge length of the world in pixels at a zoom level (`256 * 2^zoom`).
    ///
    /// # Arguments
    /// * `zoom` - Zoom level, 0 through 31
    pub fn world_pixel_size(&self, zoom: u8) -> Result<u64> {
        check_zoom(zoom)?;
        Ok((TILE_SIZE as u64) << zoom)
    }

    /// Total world-pixel extent at a zoom level, as the inclusive rectangle
    /// `[0, size - 1]` on both axes.
    pub fn tile_matrix_bounds(&self, zoom: u8) -> Result<PixelBounds> {
        let size = self.world_pixel_size(zoom)? as i64;
        Ok(PixelBounds::new(0, 0, size - 1, size - 1))
    }

    /// Project geographic coordinates to fractional world pixels.
    ///
    /// The result is continuous: no rounding is applied, so composing with
    /// [`Mercator::pixel_to_lat_lng`] recovers the input to double
    /// precision. Coordinates outside the projectable range are clamped
    /// first.
    ///
    /// # Arguments
    /// * `lat` - Latitude in degrees
    /// * `lng` - Longitude in degrees
    /// * `zoom` - Zoom level, 0 through 31
    pub fn lat_lng_to_pixel(&self, lat: f64, lng: f64, zoom: u8) -> Result<(f64, f64)> {
        let size = self.world_pixel_size(zoom)? as f64;
        let lat = lat.clamp(MIN_LATITUDE, MAX_LATITUDE);
        let lng = lng.clamp(MIN_LONGITUDE, MAX_LONGITUDE);

        let x = (lng + 180.0) / 360.0;
        let sin_lat = (lat * PI / 180.0).sin();
        let y = 0.5 - ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / (4.0 * PI);

        let px = (x * size).clamp(0.0, size - 1.0);
        let py = (y * size).clamp(0.0, size - 1.0);
        Ok((px, py))
    }

    /// Project geographic coordinates to the nearest integer world pixel.
    ///
    /// This is the quantized form stored on pixel points; rounding is
    /// half-up, then the result is clipped to `[0, size - 1]`.
    pub fn lat_lng_to_pixel_rounded(&self, lat: f64, lng: f64, zoom: u8) -> Result<(i64, i64)> {
        let size = self.world_pixel_size(zoom)? as f64;
        let (px, py) = self.lat_lng_to_pixel(lat, lng, zoom)?;
        let x = (px + 0.5).clamp(0.0, size - 1.0) as i64;
        let y = (py + 0.5).clamp(0.0, size - 1.0) as i64;
        Ok((x, y))
    }

    /// Unproject world pixels back to geographic coordinates `(lat, lng)`.
    ///
    /// Accepts fractional pixels; integer pixel points convert via `as f64`.
    /// Inputs are clipped to the world extent before unprojecting.
    ///
    /// # Arguments
    /// * `x` - World pixel column
    /// * `y` - World pixel row
    /// * `zoom` - Zoom level, 0 through 31
    pub fn pixel_to_lat_lng(&self, x: f64, y: f64, zoom: u8) -> Result<(f64, f64)> {
        let size = self.world_pixel_size(zoom)? as f64;
        let x = x.clamp(0.0, size - 1.0);
        let y = y.clamp(0.0, size - 1.0);

        let xx = (x / size) - 0.5;
        let yy = 0.5 - (y / size);

        let lat = 90.0 - 360.0 * (-yy * 2.0 * PI).exp().atan() / PI;
        let lng = 360.0 * xx;
        Ok((lat, lng))
    }

    /// Top-left world pixel of a tile.
    pub fn tile_origin_pixel(&self, tile_x: i64, tile_y: i64) -> (i64, i64) {
        (tile_x * TILE_SIZE as i64, tile_y * TILE_SIZE as i64)
    }

    /// Tile indices containing a world pixel, by floor division.
    pub fn pixel_to_tile_xy(&self, x: i64, y: i64) -> (i64, i64) {
        (
            x.div_euclid(TILE_SIZE as i64),
            y.div_euclid(TILE_SIZE as i64),
        )
    }
}

fn check_zoom(zoom: u8) -> Result<()> {
    if zoom > MAX_ZOOM {
        return Err(HeatError::invalid_argument(format!(
            "zoom {zoom} is outside 0..={MAX_ZOOM}"
        )));
    }
    Ok(())
}
