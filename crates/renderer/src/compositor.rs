//! The tile compositor.
//!
//! One synchronous pass per request: resolve the opacity, take the empty
//! tile fast path when there are no points, otherwise stamp every point
//! onto a padded white canvas with a multiplicative blend, crop back to
//! 256x256, and colorize grayscale intensity through the scheme lookup.

use tracing::debug;

use heat_common::{HeatError, PixelPoint, Result, TILE_SIZE};

use crate::blend;
use crate::dots::DotStamp;
use crate::empty_tile::EmptyTileCache;
use crate::opacity::OpacityTable;
use crate::scheme::ColorScheme;
use crate::tile::Tile;

/// Renders tiles from pre-projected point sets.
///
/// Owns the zoom-opacity table and the empty-tile cache; everything else
/// arrives per request. Rendering is deterministic and side-effect-free
/// apart from empty-tile cache population.
#[derive(Debug)]
pub struct TileCompositor {
    opacity: OpacityTable,
    empty_tiles: EmptyTileCache,
}

impl TileCompositor {
    pub fn new(opacity: OpacityTable) -> Self {
        Self {
            opacity,
            empty_tiles: EmptyTileCache::new(),
        }
    }

    pub fn opacity_table(&self) -> &OpacityTable {
        &self.opacity
    }

    /// Render one tile.
    ///
    /// `points` are tile-local pixel positions (stamp bleed from neighbor
    /// tiles shows up as slightly negative or >255 coordinates). The
    /// resolved opacity is the zoom table entry when
    /// `change_opacity_with_zoom` is set, otherwise `default_opacity`.
    pub fn render(
        &self,
        scheme: &ColorScheme,
        dot: &DotStamp,
        zoom: u8,
        points: &[PixelPoint],
        change_opacity_with_zoom: bool,
        default_opacity: i32,
    ) -> Result<Tile> {
        if !(0..=255).contains(&default_opacity) {
            return Err(HeatError::invalid_argument(format!(
                "default opacity {default_opacity} doesn't fall between 0 and 255"
            )));
        }

        let resolved = if change_opacity_with_zoom {
            self.opacity.for_zoom(zoom).ok_or_else(|| {
                HeatError::invalid_argument(format!("zoom {zoom} is outside 0..=31"))
            })?
        } else {
            default_opacity as u8
        };

        if points.is_empty() {
            debug!(zoom, opacity = resolved, "no points, serving flat tile");
            return Ok(self.empty_tiles.get_or_render(scheme, resolved));
        }

        let dot_width = dot.width() as i64;
        let size = TILE_SIZE as i64;

        // Tile region expanded by 2 dot widths on every side, so stamps
        // near the edges blend fully before cropping.
        let expanded = (size + 4 * dot_width) as usize;
        let mut canvas = vec![255u8; expanded * expanded * 4];

        let mut stamped = 0usize;
        for point in points {
            if point.is_suppressed() {
                continue;
            }
            let dest_x = point.x + dot_width;
            let dest_y = point.y + dot_width;
            match point.weight {
                Some(weight) => {
                    let adjusted = blend::weighted_stamp(dot.pixels(), weight);
                    blend::multiply_into(
                        &mut canvas,
                        expanded,
                        expanded,
                        &adjusted,
                        dot.width() as usize,
                        dest_x,
                        dest_y,
                    );
                }
                None => blend::multiply_into(
                    &mut canvas,
                    expanded,
                    expanded,
                    dot.pixels(),
                    dot.width() as usize,
                    dest_x,
                    dest_y,
                ),
            }
            stamped += 1;
        }
        debug!(zoom, points = points.len(), stamped, "stamped canvas");

        let mut tile = crop(&canvas, expanded, dot_width as usize);
        colorize(&mut tile, scheme, resolved);
        Ok(tile)
    }
}

/// Crop the padded canvas back to the 256x256 tile region.
fn crop(canvas: &[u8], canvas_w: usize, dot_width: usize) -> Tile {
    let adj_pad = dot_width + dot_width / 2;
    let size = TILE_SIZE as usize;

    let mut pixels = Vec::with_capacity(size * size * 4);
    for y in 0..size {
        let row_start = ((y + adj_pad) * canvas_w + adj_pad) * 4;
        pixels.extend_from_slice(&canvas[row_start..row_start + size * 4]);
    }
    // the buffer is exactly 256x256 by construction
    Tile::from_pixels(pixels).unwrap_or_else(|_| Tile::filled([0, 0, 0, 0]))
}

/// Replace each grayscale pixel with the scheme row its red channel
/// selects. The output alpha combines the resolved opacity with the row's
/// own alpha; both factors come from the originals for every pixel.
fn colorize(tile: &mut Tile, scheme: &ColorScheme, opacity: u8) {
    let opacity_frac = opacity as f32 / 255.0;
    for px in tile.pixels_mut().chunks_exact_mut(4) {
        let [r, g, b, row_alpha] = scheme.row(px[0]);
        let alpha = (opacity_frac * (row_alpha as f32 / 255.0) * 255.0) as u8;
        px[0] = r;
        px[1] = g;
        px[2] = b;
        px[3] = alpha;
    }
}
