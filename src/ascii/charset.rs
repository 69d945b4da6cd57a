//! Density palette definition and intensity quantization.

/// Fixed 10-level density palette, ordered densest to sparsest.
/// Index 0 (`@`) represents the darkest intensity, index 9 (space) the
/// lightest. Intended for dark text on a light background.
pub const DENSITY_PALETTE: &[char] = &['@', '%', '#', '*', '+', '=', '-', ':', '.', ' '];

/// Map an intensity value (0-255) to a palette index.
///
/// This is a direct linear quantization: `intensity * (len - 1) / 255`.
/// The index is non-decreasing in intensity, with 0 mapping to index 0
/// and 255 mapping to the last index.
#[inline]
pub fn palette_index(intensity: u8) -> usize {
    intensity as usize * (DENSITY_PALETTE.len() - 1) / 255
}

/// Map an intensity value (0-255) to its palette character.
#[inline]
pub fn palette_char(intensity: u8) -> char {
    DENSITY_PALETTE[palette_index(intensity)]
}
