//! Zoom-to-opacity mapping.
//!
//! A tile's overall alpha depends on the zoom level: far-out views fade the
//! heat layer so the base map stays readable, close-in views hide it
//! entirely. The mapping is a 32-entry lookup table built once from two
//! threshold zoom levels and reused for every request.

use heat_common::MAX_ZOOM;

/// Alpha value of a fully opaque tile.
pub const OPAQUE: u8 = 255;

/// Alpha value of a fully transparent tile.
pub const TRANSPARENT: u8 = 0;

/// Opacity used when a caller gives no explicit value.
pub const DEFAULT_OPACITY: u8 = 50;

/// Default zoom at or below which tiles are fully opaque.
pub const ZOOM_OPAQUE: i32 = -15;

/// Default zoom at or above which tiles are fully transparent.
pub const ZOOM_TRANSPARENT: i32 = 15;

/// Lookup table from zoom level to tile alpha.
///
/// Index is the zoom (0..=31), value is the alpha. Entries are
/// monotonically non-increasing between the opaque and transparent
/// thresholds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpacityTable {
    table: [u8; MAX_ZOOM as usize + 1],
}

impl OpacityTable {
    /// Build the table from the two threshold zoom levels.
    ///
    /// When `zoom_transparent - zoom_opaque < 1` there is no room for a
    /// fade and every entry is 0. This is the "no general fade" case, not
    /// an error.
    pub fn build(zoom_opaque: i32, zoom_transparent: i32) -> Self {
        let mut table = [TRANSPARENT; MAX_ZOOM as usize + 1];
        let steps = zoom_transparent - zoom_opaque;

        if steps >= 1 {
            let step = OPAQUE as f32 / steps as f32;
            for zoom in 0..=MAX_ZOOM as i32 {
                table[zoom as usize] = if zoom <= zoom_opaque {
                    OPAQUE
                } else if zoom >= zoom_transparent {
                    TRANSPARENT
                } else {
                    (OPAQUE as f32 - (zoom - zoom_opaque) as f32 * step) as u8
                };
            }
        }

        Self { table }
    }

    /// Alpha for a zoom level, or `None` when the zoom is out of range.
    pub fn for_zoom(&self, zoom: u8) -> Option<u8> {
        self.table.get(zoom as usize).copied()
    }

    /// The full table, indexed by zoom.
    pub fn as_slice(&self) -> &[u8] {
        &self.table
    }
}

impl Default for OpacityTable {
    fn default() -> Self {
        Self::build(ZOOM_OPAQUE, ZOOM_TRANSPARENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_fades_from_opaque_threshold() {
        let table = OpacityTable::default();
        // zoom_opaque is -15, so every real zoom is already past it.
        assert!(table.for_zoom(0).unwrap() < OPAQUE);
        assert_eq!(table.for_zoom(15).unwrap(), TRANSPARENT);
        assert_eq!(table.for_zoom(31).unwrap(), TRANSPARENT);
    }

    #[test]
    fn test_degenerate_thresholds_zero_everything() {
        let table = OpacityTable::build(10, 10);
        assert!(table.as_slice().iter().all(|&a| a == TRANSPARENT));

        let table = OpacityTable::build(10, 5);
        assert!(table.as_slice().iter().all(|&a| a == TRANSPARENT));
    }

    #[test]
    fn test_out_of_range_zoom_is_none() {
        let table = OpacityTable::default();
        assert_eq!(table.for_zoom(32), None);
    }
}
