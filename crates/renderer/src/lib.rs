//! Heatmap tile rendering.
//!
//! Implements the drawing half of the engine:
//! - Zoom-to-opacity mapping
//! - Color scheme gradients and dot stamp assets
//! - Multiplicative stamp blending and weight gamma adjustment
//! - The tile compositor and the empty-tile cache
//! - PNG encoding of finished tiles

pub mod blend;
pub mod compositor;
pub mod dots;
pub mod empty_tile;
pub mod opacity;
pub mod png;
pub mod registry;
pub mod scheme;
pub mod tile;

pub use compositor::TileCompositor;
pub use dots::DotStamp;
pub use empty_tile::EmptyTileCache;
pub use opacity::{
    OpacityTable, DEFAULT_OPACITY, OPAQUE, TRANSPARENT, ZOOM_OPAQUE, ZOOM_TRANSPARENT,
};
pub use registry::AssetRegistry;
pub use scheme::{ColorScheme, GradientDefinition, GradientStop};
pub use tile::Tile;
