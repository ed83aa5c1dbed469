//! Tests for PNG encoding of finished tiles.

use renderer::{png, scheme, DotStamp, OpacityTable, Tile, TileCompositor};

#[test]
fn test_encoded_tile_decodes_back_to_same_pixels() {
    let tile = Tile::filled([10, 200, 30, 128]);
    let bytes = tile.clone().into_png().unwrap();

    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.width(), 256);
    assert_eq!(decoded.height(), 256);
    assert_eq!(decoded.as_raw().as_slice(), tile.pixels());
}

#[test]
fn test_encode_arbitrary_dimensions() {
    let pixels: Vec<u8> = (0..3 * 5 * 4).map(|i| (i * 7 % 256) as u8).collect();
    let bytes = png::encode_rgba(&pixels, 3, 5).unwrap();

    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.width(), 3);
    assert_eq!(decoded.height(), 5);
    assert_eq!(decoded.as_raw().as_slice(), &pixels[..]);
}

#[test]
fn test_rendered_tile_round_trips_through_png() {
    let compositor = TileCompositor::new(OpacityTable::default());
    let classic = scheme::classic();
    let dot = DotStamp::generate(12).unwrap();

    let points = vec![
        heat_common::PixelPoint::new(64, 64),
        heat_common::PixelPoint::new(128, 200),
    ];
    let tile = compositor
        .render(&classic, &dot, 12, &points, false, 220)
        .unwrap();

    let bytes = tile.clone().into_png().unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.as_raw().as_slice(), tile.pixels());
}
