//! Weighted point storage and spatial range queries.
//!
//! The store holds geographic points, optionally scoring them through a
//! pluggable weight evaluator, and answers the rectangle queries the tile
//! service needs: "every point whose stamp could touch this tile."

pub mod loader;
pub mod store;
pub mod strategy;
pub mod weight;

pub use store::PointStore;
pub use strategy::QueryStrategy;
pub use weight::WeightEvaluator;
