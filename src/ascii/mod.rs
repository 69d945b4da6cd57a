//! ASCII renderer module for converting rasters to ASCII art.
//!
//! This module provides the complete pipeline for converting a source
//! raster to a block of fixed-width text:
//!
//! 1. **Resize** - Scale to the output width with aspect correction
//! 2. **Filter chain** - Apply the enabled image filters in canonical order
//! 3. **Grayscale reduction** - Collapse to single-channel luminance
//! 4. **Character mapping** - Map intensity to the density palette
//! 5. **Reflow** - Emit fixed-width lines in row-major order

mod charset;
mod dimensions;
mod mapping;
mod renderer;

pub use charset::{palette_char, palette_index, DENSITY_PALETTE};
pub use dimensions::{output_height, CHAR_ASPECT_CORRECTION};
pub use mapping::map_to_chars;
pub use renderer::{render, render_source, DEFAULT_OUTPUT_WIDTH};
