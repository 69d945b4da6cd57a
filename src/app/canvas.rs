//! Freehand drawing surface.
//!
//! Maintains a grayscale raster (white background, black strokes) as the
//! single source of truth and displays it as a texture. Confirming the
//! drawing hands a copy of the raster to the shell; the core treats it
//! identically to a decoded file raster.

use egui::{Color32, ColorImage, Pos2, Rect, Sense, TextureHandle, TextureOptions};
use image::{GrayImage, Luma};

/// Canvas background (paper) intensity.
const PAPER: u8 = 255;

/// Brush stroke intensity.
const INK: u8 = 0;

pub struct DrawCanvas {
    image: GrayImage,
    brush_size: f32,
    eraser: bool,
    last_pos: Option<Pos2>,
    texture: Option<TextureHandle>,
    dirty: bool,
}

impl DrawCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: GrayImage::from_pixel(width, height, Luma([PAPER])),
            brush_size: 3.0,
            eraser: false,
            last_pos: None,
            texture: None,
            dirty: true,
        }
    }

    /// Reset the canvas to blank paper.
    pub fn clear(&mut self) {
        let (w, h) = self.image.dimensions();
        self.image = GrayImage::from_pixel(w, h, Luma([PAPER]));
        self.last_pos = None;
        self.dirty = true;
    }

    /// Draw the canvas controls and surface.
    ///
    /// Returns `Some(raster)` when the user confirms the drawing.
    pub fn ui(&mut self, ui: &mut egui::Ui) -> Option<GrayImage> {
        ui.horizontal(|ui| {
            ui.label("Brush size:");
            ui.add(egui::Slider::new(&mut self.brush_size, 1.0..=20.0).step_by(1.0));
            ui.checkbox(&mut self.eraser, "Eraser");
            if ui.button("Clear").clicked() {
                self.clear();
            }
        });

        let (w, h) = self.image.dimensions();
        let size = egui::vec2(w as f32, h as f32);
        let (response, painter) = ui.allocate_painter(size, Sense::drag());

        self.handle_strokes(&response);

        if self.dirty || self.texture.is_none() {
            let color_image = self.to_color_image();
            match &mut self.texture {
                Some(texture) => texture.set(color_image, TextureOptions::NEAREST),
                None => {
                    self.texture = Some(ui.ctx().load_texture(
                        "draw_canvas",
                        color_image,
                        TextureOptions::NEAREST,
                    ));
                }
            }
            self.dirty = false;
        }

        if let Some(texture) = &self.texture {
            painter.image(
                texture.id(),
                response.rect,
                Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }

        if ui.button("Convert to ASCII").clicked() {
            return Some(self.image.clone());
        }
        None
    }

    /// Translate pointer drags into strokes on the raster.
    fn handle_strokes(&mut self, response: &egui::Response) {
        if response.dragged() {
            if let Some(pointer) = response.interact_pointer_pos() {
                let local = pointer - response.rect.min;
                let pos = egui::pos2(local.x, local.y);
                match self.last_pos {
                    Some(prev) => self.stroke(prev, pos),
                    None => self.stroke(pos, pos),
                }
                self.last_pos = Some(pos);
            }
        }
        if response.drag_stopped() {
            self.last_pos = None;
        }
    }

    /// Stamp the brush along a segment in canvas coordinates.
    fn stroke(&mut self, from: Pos2, to: Pos2) {
        let steps = from.distance(to).ceil().max(1.0) as u32;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let x = from.x + (to.x - from.x) * t;
            let y = from.y + (to.y - from.y) * t;
            self.stamp(x, y);
        }
        self.dirty = true;
    }

    /// Fill a brush-sized disc around a point.
    fn stamp(&mut self, cx: f32, cy: f32) {
        let value = if self.eraser { PAPER } else { INK };
        let radius = (self.brush_size / 2.0).max(0.5);
        let (w, h) = self.image.dimensions();

        let min_x = (cx - radius).floor().max(0.0) as u32;
        let max_x = ((cx + radius).ceil() as u32).min(w.saturating_sub(1));
        let min_y = (cy - radius).floor().max(0.0) as u32;
        let max_y = ((cy + radius).ceil() as u32).min(h.saturating_sub(1));

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                if dx * dx + dy * dy <= radius * radius {
                    self.image.put_pixel(x, y, Luma([value]));
                }
            }
        }
    }

    fn to_color_image(&self) -> ColorImage {
        let (w, h) = self.image.dimensions();
        let pixels = self
            .image
            .as_raw()
            .iter()
            .map(|&v| Color32::from_gray(v))
            .collect();
        ColorImage {
            size: [w as usize, h as usize],
            pixels,
        }
    }
}
