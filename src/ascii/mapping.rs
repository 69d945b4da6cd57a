//! Intensity to character mapping.

use super::charset::palette_char;

/// Map a slice of intensity values to density palette characters.
///
/// Each intensity (0-255) maps to one character via linear quantization:
/// darker pixels map to denser characters. The output preserves the input
/// order, so a row-major intensity buffer yields a row-major character
/// stream ready for reflow.
///
/// # Arguments
/// * `intensities` - Intensity values (0-255), one per pixel
///
/// # Returns
/// A vector of characters, one per input intensity.
pub fn map_to_chars(intensities: &[u8]) -> Vec<char> {
    intensities.iter().map(|&p| palette_char(p)).collect()
}
