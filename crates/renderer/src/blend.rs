//! Pixel blending kernels.
//!
//! Stamps composite onto the working canvas with a multiplicative blend so
//! overlapping points accumulate darkness instead of replacing pixels.
//! Weighted points run through a gamma adjustment first: higher weights
//! darken the stamp (more intense after colorization), lower weights
//! brighten it toward invisibility.

/// Gamma multiplier applied to the weight value.
const GAMMA_FACTOR: f64 = 5.0;

/// Minimum gamma so very small weights still render faintly.
const GAMMA_FLOOR: f64 = 0.1;

/// Multiply a square stamp into an RGBA canvas at a destination position.
///
/// `dest_x`/`dest_y` may be negative or extend past the canvas; out-of-bounds
/// stamp pixels are clipped. Only the RGB channels blend
/// (`dest * src / 255` per channel); canvas alpha is left for colorization.
pub fn multiply_into(
    canvas: &mut [u8],
    canvas_w: usize,
    canvas_h: usize,
    stamp: &[u8],
    stamp_w: usize,
    dest_x: i64,
    dest_y: i64,
) {
    for sy in 0..stamp_w {
        let cy = dest_y + sy as i64;
        if cy < 0 || cy >= canvas_h as i64 {
            continue;
        }
        for sx in 0..stamp_w {
            let cx = dest_x + sx as i64;
            if cx < 0 || cx >= canvas_w as i64 {
                continue;
            }
            let ci = (cy as usize * canvas_w + cx as usize) * 4;
            let si = (sy * stamp_w + sx) * 4;
            for ch in 0..3 {
                let d = canvas[ci + ch] as u16;
                let s = stamp[si + ch] as u16;
                canvas[ci + ch] = (d * s / 255) as u8;
            }
        }
    }
}

/// Produce a gamma-adjusted copy of a stamp for a weighted point.
///
/// `out = 255 * (in / 255)^gamma` per RGB channel, with
/// `gamma = max(weight * 5, 0.1)`. Gamma 0.1 is the brightest (faintest
/// heat) and large gammas darken the stamp toward full intensity. Alpha is
/// untouched.
pub fn weighted_stamp(stamp: &[u8], weight: f64) -> Vec<u8> {
    let gamma = (weight * GAMMA_FACTOR).max(GAMMA_FLOOR);

    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        *entry = (255.0 * (i as f64 / 255.0).powf(gamma)).round() as u8;
    }

    let mut out = stamp.to_vec();
    for px in out.chunks_exact_mut(4) {
        px[0] = lut[px[0] as usize];
        px[1] = lut[px[1] as usize];
        px[2] = lut[px[2] as usize];
    }
    out
}
