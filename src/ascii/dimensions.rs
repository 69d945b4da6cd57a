//! Output dimension calculation with aspect-ratio correction.

/// Vertical correction factor for monospaced glyphs.
///
/// A character cell is visually taller than it is wide, so mapping pixels
/// to characters one-to-one stretches the art vertically. Scaling the row
/// count by this factor compensates.
pub const CHAR_ASPECT_CORRECTION: f32 = 0.55;

/// Calculate the output height in character rows for a given source size
/// and output width.
///
/// The height is `round(output_width * (img_height / img_width) * 0.55)`,
/// clamped to at least 1 row so a non-empty raster always produces output.
///
/// # Arguments
/// * `img_width` - Width of the source raster in pixels
/// * `img_height` - Height of the source raster in pixels
/// * `output_width` - Desired output width in characters
///
/// # Returns
/// The number of character rows, or 0 if any input dimension is 0.
pub fn output_height(img_width: u32, img_height: u32, output_width: u32) -> u32 {
    if img_width == 0 || img_height == 0 || output_width == 0 {
        return 0;
    }

    let aspect = img_height as f32 / img_width as f32;
    let rows = (output_width as f32 * aspect * CHAR_ASPECT_CORRECTION).round() as u32;
    rows.max(1)
}
