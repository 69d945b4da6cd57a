//! The five filter transformations.
//!
//! Every function here is pure: it takes a raster plus explicit
//! parameters and returns a new raster. Parameter values are assumed
//! pre-clamped to their declared ranges by the chain.

use image::{DynamicImage, GrayImage, Luma};

/// Collapse a raster to single-channel luminance.
pub fn grayscale(raster: &DynamicImage) -> DynamicImage {
    DynamicImage::ImageLuma8(raster.to_luma8())
}

/// Binarize on the luminance channel, then invert.
///
/// Each pixel becomes 255 if its intensity exceeds `threshold`, else 0;
/// the result is then inverted (255 - value). Net effect: pixels above
/// the threshold come out black, pixels at or below come out white.
///
/// # Arguments
/// * `raster` - Input raster (converted to luminance internally)
/// * `threshold` - Binarization threshold in [0, 255]
pub fn invert_threshold(raster: &DynamicImage, threshold: f32) -> DynamicImage {
    let gray = raster.to_luma8();
    let out = GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        let p = gray.get_pixel(x, y).0[0];
        Luma([if p as f32 > threshold { 0 } else { 255 }])
    });
    DynamicImage::ImageLuma8(out)
}

/// Gaussian blur with the given radius.
///
/// Callers must skip the call entirely for radius 0: the underlying
/// implementation substitutes a sigma of 1.0 for non-positive values,
/// which would break the radius-0-is-identity contract.
pub fn blur(raster: &DynamicImage, radius: f32) -> DynamicImage {
    raster.blur(radius)
}

/// Multiplicative brightness scaling, clamped to the channel range.
pub fn brightness(raster: &DynamicImage, factor: f32) -> DynamicImage {
    map_channels(raster, |p| (p as f32 * factor).round().clamp(0.0, 255.0) as u8)
}

/// Multiplicative contrast scaling around mid-gray (128), clamped to the
/// channel range.
pub fn contrast(raster: &DynamicImage, factor: f32) -> DynamicImage {
    map_channels(raster, |p| {
        (128.0 + (p as f32 - 128.0) * factor).round().clamp(0.0, 255.0) as u8
    })
}

/// Apply a per-channel intensity function, preserving the raster's
/// grayscale-ness. Alpha is left untouched for color rasters.
fn map_channels(raster: &DynamicImage, f: impl Fn(u8) -> u8) -> DynamicImage {
    match raster {
        DynamicImage::ImageLuma8(gray) => {
            let mut out = gray.clone();
            for p in out.pixels_mut() {
                p.0[0] = f(p.0[0]);
            }
            DynamicImage::ImageLuma8(out)
        }
        other => {
            let mut rgba = other.to_rgba8();
            for p in rgba.pixels_mut() {
                for c in 0..3 {
                    p.0[c] = f(p.0[c]);
                }
            }
            DynamicImage::ImageRgba8(rgba)
        }
    }
}
