//! The heatmap tile service facade.
//!
//! Owns the asset registry, opacity table, and empty-tile cache, and
//! orchestrates one tile request: point store range query, projection to
//! tile-local pixels, compositing, colorization.

pub mod config;
pub mod service;

pub use config::HeatConfig;
pub use service::{HeatTileService, TileOptions};
