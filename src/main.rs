mod app;

use std::path::PathBuf;

use clap::Parser;

use asciipaint::config::Config;

/// Parse and validate output width (10-500 characters)
fn parse_width(s: &str) -> Result<u32, String> {
    let width: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid width", s))?;
    if !(10..=500).contains(&width) {
        return Err(format!(
            "Width must be between 10 and 500 characters, got {}",
            width
        ));
    }
    Ok(width)
}

/// asciipaint: interactive ASCII art studio
#[derive(Parser)]
#[command(name = "asciipaint")]
#[command(version, about = "Interactive ASCII art studio")]
#[command(long_about = "Convert photos or freehand drawings to ASCII art. \
    Toggle image filters with live-updating parameters and copy the \
    result to the clipboard.")]
struct Cli {
    /// Path to a custom config file (default: ~/.config/asciipaint/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output width in characters
    #[arg(short, long, value_parser = parse_width)]
    width: Option<u32>,
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let output_width = cli.width.unwrap_or(config.render.output_width);
    let font_size = config.ui.font_size;
    log::info!("starting with output width {}", output_width);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([980.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "asciipaint",
        options,
        Box::new(move |cc| Box::new(app::AsciiPaintApp::new(cc, output_width, font_size))),
    )
}
