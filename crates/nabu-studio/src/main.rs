use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use nabu_engine::logging::{LoggingConfig, init_logging};
use nabu_engine::render::{Pixmap, clear, rasterize};
use nabu_ui::prelude::*;

/// Renders a styled label to a PNG.
#[derive(Parser, Debug)]
#[command(name = "nabu-studio", version, about = "Render a styled label to a PNG")]
struct Settings {
    /// TrueType or OpenType font to draw with
    #[arg(value_name = "FONT")]
    font: PathBuf,

    /// Label text
    #[arg(default_value = "NABU")]
    text: String,

    /// Output width in pixels (defaults to the label's natural width)
    #[arg(long)]
    width: Option<u32>,

    /// Output height in pixels (defaults to the label's natural height)
    #[arg(long)]
    height: Option<u32>,

    /// Text size in logical pixels
    #[arg(long, default_value_t = 72.0)]
    text_size: f32,

    /// Where to write the PNG
    #[arg(long, value_name = "FILE", default_value = "styled_label.png")]
    out: PathBuf,
}

impl Settings {
    /// Output size, filling unset sides from `natural` (rounded up, at least 1).
    fn viewport(&self, natural: Vec2) -> (u32, u32) {
        let fit = |v: f32| (v.ceil() as u32).max(1);
        (self.width.unwrap_or_else(|| fit(natural.x)), self.height.unwrap_or_else(|| fit(natural.y)))
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    let settings = Settings::parse();

    let mut ui = UiScene::new();
    let bytes = std::fs::read(&settings.font)
        .with_context(|| format!("reading font {}", settings.font.display()))?;
    let font = ui.load_font(&bytes).context("loading font")?;

    let mut label = StyledLabel::new(&settings.text, StyleConfig::default().font(font))
        .with_text_size(settings.text_size);

    let (width, height) = settings.viewport(ui.natural_size(&label));
    let mut target = Pixmap::new(width, height)
        .with_context(|| format!("cannot allocate a {width}x{height} pixmap"))?;
    clear(&mut target, Color::from_srgb_u8(0x1B, 0x14, 0x2E, 0xFF));

    let items = ui.frame(&mut label, Vec2::new(width as f32, height as f32)).len();
    log::info!("\"{}\" at {}px in {width}x{height}: {items} draw items", label.text(), label.text_size());
    rasterize(&mut ui.draw_list, &ui.font_system, &mut target);

    target
        .save_png(&settings.out)
        .with_context(|| format!("writing {}", settings.out.display()))?;
    log::info!("wrote {}", settings.out.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_path_is_required() {
        assert!(Settings::try_parse_from(["nabu-studio"]).is_err());
    }

    #[test]
    fn defaults_fill_missing_arguments() {
        let s = Settings::try_parse_from(["nabu-studio", "font.ttf", "Hi"]).unwrap();
        assert_eq!(s.font, PathBuf::from("font.ttf"));
        assert_eq!(s.text, "Hi");
        assert_eq!((s.width, s.height), (None, None));
        assert_eq!(s.text_size, 72.0);
        assert_eq!(s.out, PathBuf::from("styled_label.png"));
    }

    #[test]
    fn options_override_defaults() {
        let s = Settings::try_parse_from([
            "nabu-studio", "font.ttf", "--width", "320", "--text-size", "48", "--out", "a.png",
        ])
        .unwrap();
        assert_eq!(s.text, "NABU");
        assert_eq!(s.width, Some(320));
        assert_eq!(s.text_size, 48.0);
        assert_eq!(s.out, PathBuf::from("a.png"));
    }

    #[test]
    fn bad_number_names_the_value() {
        let err = Settings::try_parse_from(["nabu-studio", "font.ttf", "--width", "wide"]).unwrap_err();
        assert!(err.to_string().contains("wide"));
    }

    #[test]
    fn unset_sides_follow_natural_size() {
        let s = Settings::try_parse_from(["nabu-studio", "font.ttf", "--height", "90"]).unwrap();
        assert_eq!(s.viewport(Vec2::new(210.4, 60.0)), (211, 90));
        assert_eq!(s.viewport(Vec2::zero()), (1, 90));
    }
}
