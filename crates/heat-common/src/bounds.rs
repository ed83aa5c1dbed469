//! Inclusive rectangles in geographic and world-pixel space.

use serde::{Deserialize, Serialize};

/// A geographic rectangle with inclusive edges.
///
/// Latitude grows northward and longitude grows eastward, so `north >= south`
/// and `east >= west` for any rectangle produced by unprojecting a pixel
/// region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub north: f64,
    pub south: f64,
    pub west: f64,
    pub east: f64,
}

impl GeoBounds {
    pub fn new(north: f64, south: f64, west: f64, east: f64) -> Self {
        Self {
            north,
            south,
            west,
            east,
        }
    }

    /// Build from a top-left / bottom-right corner pair, each `(lat, lng)`,
    /// as produced by unprojecting the corners of a pixel rectangle.
    pub fn from_corners(top_left: (f64, f64), bottom_right: (f64, f64)) -> Self {
        Self {
            north: top_left.0,
            south: bottom_right.0,
            west: top_left.1,
            east: bottom_right.1,
        }
    }

    /// Inclusive containment test on both axes. Points exactly on an edge
    /// are inside.
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat <= self.north && lat >= self.south && lng >= self.west && lng <= self.east
    }
}

/// A rectangle in world-pixel space at a fixed zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelBounds {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl PixelBounds {
    pub fn new(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// The same rectangle grown by `pad` pixels on every side.
    pub fn expanded(&self, pad: i64) -> Self {
        Self {
            min_x: self.min_x - pad,
            min_y: self.min_y - pad,
            max_x: self.max_x + pad,
            max_y: self.max_y + pad,
        }
    }

    pub fn width(&self) -> i64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> i64 {
        self.max_y - self.min_y
    }
}
