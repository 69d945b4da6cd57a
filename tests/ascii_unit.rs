//! Unit tests for the ASCII renderer module.
//!
//! These tests verify the core conversion algorithms:
//! - Density palette quantization
//! - Character mapping
//! - Aspect-corrected output dimensions
//! - Render geometry and reflow

use asciipaint::ascii::*;
use asciipaint::filters::FilterChain;
use image::{DynamicImage, GrayImage};

fn gray_raster(pixels: Vec<u8>, width: u32, height: u32) -> DynamicImage {
    let img = GrayImage::from_raw(width, height, pixels).expect("pixel buffer matches dimensions");
    DynamicImage::ImageLuma8(img)
}

// ==================== Palette Tests ====================

#[test]
fn test_palette_is_densest_first() {
    assert_eq!(DENSITY_PALETTE.len(), 10);
    assert_eq!(DENSITY_PALETTE[0], '@');
    assert_eq!(DENSITY_PALETTE[9], ' ');
    assert_eq!(DENSITY_PALETTE.iter().collect::<String>(), "@%#*+=-:. ");
}

#[test]
fn test_palette_endpoints() {
    // Darkest intensity maps to the densest character, lightest to space
    assert_eq!(palette_char(0), '@');
    assert_eq!(palette_char(255), ' ');
}

#[test]
fn test_palette_index_monotone() {
    // index(p) must be non-decreasing in p
    for p in 1..=255u8 {
        assert!(
            palette_index(p) >= palette_index(p - 1),
            "index({}) < index({})",
            p,
            p - 1
        );
    }
}

#[test]
fn test_palette_quantization_bands() {
    // floor(p * 9 / 255): 85 -> 3, 170 -> 6
    assert_eq!(palette_index(85), 3);
    assert_eq!(palette_char(85), '*');
    assert_eq!(palette_index(170), 6);
    assert_eq!(palette_char(170), '-');
}

// ==================== Mapping Tests ====================

#[test]
fn test_map_to_chars_order_preserved() {
    let chars = map_to_chars(&[0, 85, 170, 255]);
    assert_eq!(chars, vec!['@', '*', '-', ' ']);
}

#[test]
fn test_map_to_chars_empty() {
    assert!(map_to_chars(&[]).is_empty());
}

// ==================== Dimension Tests ====================

#[test]
fn test_output_height_formula() {
    // round(W * (h/w) * 0.55)
    assert_eq!(output_height(640, 480, 100), 41); // 41.25 -> 41
    assert_eq!(output_height(2, 2, 2), 1); // 1.1 -> 1
    assert_eq!(output_height(100, 100, 100), 55);
}

#[test]
fn test_output_height_minimum_one() {
    assert_eq!(output_height(5000, 1, 20), 1);
}

#[test]
fn test_output_height_degenerate() {
    assert_eq!(output_height(0, 10, 100), 0);
    assert_eq!(output_height(10, 0, 100), 0);
    assert_eq!(output_height(10, 10, 0), 0);
}

// ==================== Render Geometry Tests ====================

#[test]
fn test_render_line_count_and_length() {
    // 60x40 source at width 50: round(50 * (40/60) * 0.55) = 18 rows
    let pixels: Vec<u8> = (0..60u32 * 40).map(|i| (i % 256) as u8).collect();
    let raster = gray_raster(pixels, 60, 40);
    let text = render(&raster, &FilterChain::new(), 50);

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 18);
    for line in &lines {
        assert_eq!(line.chars().count(), 50);
    }
}

#[test]
fn test_render_default_width_geometry() {
    let raster = gray_raster(vec![128; 200 * 200], 200, 200);
    let text = render(&raster, &FilterChain::new(), DEFAULT_OUTPUT_WIDTH);

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 55); // 100 * 1.0 * 0.55
    for line in &lines {
        assert_eq!(line.chars().count(), 100);
    }
}

#[test]
fn test_render_zero_width_yields_empty() {
    let raster = gray_raster(vec![0; 4], 2, 2);
    assert_eq!(render(&raster, &FilterChain::new(), 0), "");
}

// ==================== Exact Character Tests ====================

#[test]
fn test_render_2x2_exact_characters() {
    // Both rows identical, so the nearest-neighbor vertical collapse is
    // unambiguous: output is a single "@ " line.
    let raster = gray_raster(vec![0, 255, 0, 255], 2, 2);
    let text = render(&raster, &FilterChain::new(), 2);
    assert_eq!(text, "@ ");
}

#[test]
fn test_render_constant_image() {
    // A constant raster survives resampling unchanged: every cell is the
    // same palette character. 128 * 9 / 255 = 4 -> '+'
    let raster = gray_raster(vec![128; 16], 4, 4);
    let text = render(&raster, &FilterChain::new(), 4);
    assert_eq!(text, "++++\n++++");
}

#[test]
fn test_render_is_deterministic() {
    let pixels: Vec<u8> = (0..32u32 * 32).map(|i| (i * 7 % 256) as u8).collect();
    let raster = gray_raster(pixels, 32, 32);
    let chain = FilterChain::new();

    let first = render(&raster, &chain, 24);
    let second = render(&raster, &chain, 24);
    assert_eq!(first, second);
}
