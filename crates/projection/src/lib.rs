//! Coordinate transforms for heatmap tiles.
//!
//! Implements spherical Web-Mercator from scratch without external
//! dependencies.

pub mod mercator;

pub use mercator::{Mercator, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
