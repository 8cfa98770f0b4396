//! Position-based icon recoloring.
//!
//! Each dock item is tinted according to where it sits in the dock, so that a
//! single neutral glyph set fans out into a smooth gradient across the strip.
//! The target color comes from a hand-tuned 13-point HSV control table,
//! indexed by the item's position ratio (position / max position) and blended
//! linearly between neighboring control points.
//!
//! Per pixel, a "whiteness" score measures how far the source color strays
//! from neutral gray: `(|r-b| + |b-g| + |r-g|) / 510`. Saturated pixels
//! (score above the threshold) take the target color outright; near-neutral
//! pixels collapse to their average intensity. Alpha always passes through.

use image::RgbaImage;
use log::trace;
use palette::{Hsv, IntoColor, Srgb};

/// Hue control points in degrees, evenly spaced across ratio 0..=1.
/// Negative entries wrap around 360 after interpolation.
const HUE_TABLE: [f64; 13] = [
    240.0, 220.0, 190.0, 130.0, 80.0, 60.0, 40.0, 20.0, 0.0, -20.0, -40.0, -60.0, -80.0,
];

/// Saturation control points, same spacing as [`HUE_TABLE`].
const SAT_TABLE: [f64; 13] = [
    0.82, 0.82, 0.82, 0.84, 0.88, 0.92, 0.94, 0.92, 0.88, 0.86, 0.84, 0.82, 0.82,
];

/// Value control points, same spacing as [`HUE_TABLE`].
const VAL_TABLE: [f64; 13] = [
    0.75, 0.75, 0.78, 0.84, 0.88, 0.92, 0.94, 0.92, 0.88, 0.78, 0.71, 0.66, 0.66,
];

/// Pixels whose whiteness score exceeds this take the tint color; the rest
/// turn grayscale.
pub const WHITENESS_THRESHOLD: f64 = 0.19;

/// Maps an item's ordinal position to a ratio in `[0, 1]`.
///
/// A dock with a single item (`max_position == 0`) pins the ratio to 0.
pub fn position_ratio(position: usize, max_position: usize) -> f64 {
    if max_position == 0 {
        return 0.0;
    }
    (position as f64 / max_position as f64).clamp(0.0, 1.0)
}

/// Computes the RGB tint for a position ratio.
///
/// The ratio maps to a fractional index into the 13-point control table
/// (`ratio * 12`); hue, saturation, and value interpolate independently
/// between the two neighboring control points. At ratio 0 and 1 this reduces
/// exactly to the first and last control points. Hue rounds to whole degrees
/// and wraps negative values by +360 before the HSV to RGB conversion.
pub fn tint_for_ratio(ratio: f64) -> [u8; 3] {
    let ratio = ratio.clamp(0.0, 1.0);
    let last = HUE_TABLE.len() - 1;
    let index = ratio * last as f64;
    let lo = (index.floor() as usize).min(last);
    let hi = (lo + 1).min(last);
    let weight = index - lo as f64;

    let mut hue = (weight * HUE_TABLE[hi] + (1.0 - weight) * HUE_TABLE[lo]).round();
    if hue < 0.0 {
        hue += 360.0;
    }
    let sat = weight * SAT_TABLE[hi] + (1.0 - weight) * SAT_TABLE[lo];
    let val = weight * VAL_TABLE[hi] + (1.0 - weight) * VAL_TABLE[lo];

    let rgb: Srgb = Hsv::new(hue as f32, sat as f32, val as f32).into_color();
    [
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    ]
}

/// Recolors a source bitmap for the given position ratio.
///
/// Pure transform: the source is left untouched and the result has the same
/// dimensions. Saturated pixels become the tint color, near-neutral pixels
/// become their average intensity, and alpha is preserved in both branches.
pub fn recolor_image(source: &RgbaImage, ratio: f64) -> RgbaImage {
    let [tint_r, tint_g, tint_b] = tint_for_ratio(ratio);
    trace!("recolor ratio {ratio:.3} -> tint ({tint_r}, {tint_g}, {tint_b})");

    let mut result = source.clone();
    for pixel in result.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        let spread = (r as i32 - b as i32).abs()
            + (b as i32 - g as i32).abs()
            + (r as i32 - g as i32).abs();
        let whiteness = spread as f64 / 510.0;

        if whiteness > WHITENESS_THRESHOLD {
            pixel.0 = [tint_r, tint_g, tint_b, a];
        } else {
            let gray =
                (255.0 * (r as u32 + g as u32 + b as u32) as f64 / 765.0).round() as u8;
            pixel.0 = [gray, gray, gray, a];
        }
    }
    result
}
