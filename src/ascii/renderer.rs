//! Full render pipeline: resize, filter, grayscale, map, reflow.

use image::{imageops::FilterType, DynamicImage, GenericImageView};

use super::dimensions::output_height;
use super::mapping::map_to_chars;
use crate::error::AsciiError;
use crate::filters::FilterChain;
use crate::source::Source;

/// Default output width in characters.
pub const DEFAULT_OUTPUT_WIDTH: u32 = 100;

/// Render a raster to ASCII art text.
///
/// The pipeline is: resize to `(output_width, output_height)` with
/// nearest-neighbor resampling, apply the enabled filters in canonical
/// order, reduce to grayscale, map every pixel to a palette character,
/// and reflow the character stream into lines of exactly `output_width`
/// characters joined by `\n`.
///
/// Nearest-neighbor resampling is fixed (rather than configurable) so the
/// output is byte-identical across runs and platforms for the same inputs.
///
/// # Arguments
/// * `raster` - The source raster (file-decoded or drawn)
/// * `chain` - Current filter chain state
/// * `output_width` - Desired output width in characters
///
/// # Returns
/// The ASCII art text, or an empty string for a degenerate raster or a
/// zero output width.
pub fn render(raster: &DynamicImage, chain: &FilterChain, output_width: u32) -> String {
    let (img_w, img_h) = raster.dimensions();
    let rows = output_height(img_w, img_h, output_width);
    if rows == 0 {
        return String::new();
    }

    let resized = raster.resize_exact(output_width, rows, FilterType::Nearest);
    let filtered = chain.apply(&resized);
    let gray = filtered.to_luma8();
    let chars = map_to_chars(gray.as_raw());

    let width = output_width as usize;
    let mut text = String::with_capacity(chars.len() + rows as usize);
    for line in chars.chunks(width) {
        if !text.is_empty() {
            text.push('\n');
        }
        text.extend(line);
    }
    text
}

/// Render the current source to ASCII art text.
///
/// Loads (or re-decodes) the current source raster and renders it. This
/// is the entry point the presentation shell calls on every source or
/// filter change; the shell must check the result before display.
///
/// # Errors
/// Returns [`AsciiError::NoSource`] when no source is selected, or
/// [`AsciiError::Unreadable`] when a file source cannot be decoded.
pub fn render_source(
    source: &Source,
    chain: &FilterChain,
    output_width: u32,
) -> Result<String, AsciiError> {
    let raster = source.load()?;
    Ok(render(&raster, chain, output_width))
}
