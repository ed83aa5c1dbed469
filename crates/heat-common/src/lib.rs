//! Common types shared across all heat-tiles crates.

pub mod bounds;
pub mod error;
pub mod point;
pub mod tile;

pub use bounds::{GeoBounds, PixelBounds};
pub use error::{HeatError, Result};
pub use point::{GeoPoint, PixelPoint, PointData};
pub use tile::{TileAddress, MAX_DOT_ZOOM, MAX_ZOOM, TILE_SIZE};
