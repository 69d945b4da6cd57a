//! GUI shell: window layout and event wiring.
//!
//! The shell owns the process-wide state (current source, filter chain)
//! and is the single writer for both. Every user action - open a file,
//! confirm a drawing, toggle a filter, move a slider - triggers one
//! synchronous re-render against the stored current source.

mod canvas;
mod panel;

use asciipaint::ascii::render_source;
use asciipaint::error::AsciiError;
use asciipaint::filters::FilterChain;
use asciipaint::source::Source;

use canvas::DrawCanvas;

/// Placeholder text shown before any source is selected.
const WELCOME_TEXT: &str = "Open an image or draw one to get started.";

/// Drawing canvas dimensions in pixels.
const CANVAS_WIDTH: u32 = 400;
const CANVAS_HEIGHT: u32 = 300;

pub struct AsciiPaintApp {
    chain: FilterChain,
    source: Source,
    output_width: u32,
    font_size: f32,
    art: String,
    canvas: DrawCanvas,
    show_canvas: bool,
}

impl AsciiPaintApp {
    pub fn new(cc: &eframe::CreationContext<'_>, output_width: u32, font_size: f32) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self {
            chain: FilterChain::new(),
            source: Source::None,
            output_width,
            font_size,
            art: WELCOME_TEXT.to_string(),
            canvas: DrawCanvas::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            show_canvas: false,
        }
    }

    /// Re-render the current source with the current filter state.
    ///
    /// Decode failures become a displayed error message; with no source
    /// selected the existing panel content is kept.
    fn refresh(&mut self) {
        match render_source(&self.source, &self.chain, self.output_width) {
            Ok(text) => self.art = text,
            Err(AsciiError::NoSource) => {}
            Err(err) => {
                log::warn!("render failed: {}", err);
                self.art = format!("Error: {}", err);
            }
        }
    }

    fn open_image(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("images", &["png", "jpg", "jpeg", "gif", "bmp", "webp"])
            .pick_file();
        if let Some(path) = picked {
            log::info!("loading image {}", path.display());
            self.source.set_file(path);
            self.refresh();
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Open Image").clicked() {
                self.open_image();
            }
            if ui.button("Draw Image").clicked() {
                self.show_canvas = true;
            }
            if ui.button("Copy to Clipboard").clicked() {
                ui.output_mut(|o| o.copied_text = self.art.clone());
                log::info!("copied {} characters to clipboard", self.art.len());
            }
        });
    }
}

impl eframe::App for AsciiPaintApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("filters")
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading("Filters");
                ui.separator();
                if panel::filter_panel(ui, &mut self.chain) {
                    self.refresh();
                }
            });

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.toolbar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                ui.label(
                    egui::RichText::new(&self.art)
                        .monospace()
                        .size(self.font_size),
                );
            });
        });

        if self.show_canvas {
            let mut open = true;
            egui::Window::new("Draw Image")
                .open(&mut open)
                .resizable(false)
                .show(ctx, |ui| {
                    if let Some(drawn) = self.canvas.ui(ui) {
                        self.source.set_drawn(drawn);
                        self.refresh();
                        self.show_canvas = false;
                    }
                });
            if !open {
                self.show_canvas = false;
            }
        }
    }
}
