// src/render/preview.rs
use anyhow::{Context, Result};
use gdal::raster::Buffer;
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use rusttype::{Font, Scale};
use std::path::Path;
use tracing::warn;

use super::colormap::{evaluate, ndvi_to_t};

const TITLE: &str = "Normalized Difference Vegetation Index (NDVI)";
const LEGEND_LABEL: &str = "NDVI";

const TITLE_BAND: u32 = 40;
const PAD: u32 = 16;
const BAR_WIDTH: u32 = 20;
const LABEL_WIDTH: u32 = 56;

const TITLE_SIZE: f32 = 18.0;
const LABEL_SIZE: f32 = 13.0;

const TEXT_COLOR: Rgba<u8> = Rgba([30, 30, 30, 255]);
const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Font lookup is best-effort: common DejaVu/Arial locations, checked
/// at runtime. A miss disables text labels but never fails the render.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
];

fn load_font() -> Option<Font<'static>> {
    for path in FONT_CANDIDATES {
        if let Ok(bytes) = std::fs::read(path) {
            if let Some(font) = Font::try_from_vec(bytes) {
                return Some(font);
            }
        }
    }
    None
}

/// Estimated pixel width of rendered text, good enough for centering.
fn text_width(text: &str, size: f32) -> u32 {
    (text.chars().count() as f32 * size * 0.6) as u32
}

/// Render an NDVI array as a false-color image: the colormapped raster,
/// a vertical colorbar legend with -1.0/0.0/1.0 ticks, and a title.
/// No coordinate axes are drawn.
pub fn render_preview(ndvi: &Buffer<f32>) -> RgbaImage {
    let (width, height) = ndvi.shape();
    let (width, height) = (width as u32, height as u32);
    if width == 0 || height == 0 {
        return RgbaImage::from_pixel(1, 1, BACKGROUND);
    }

    let canvas_width = PAD + width + PAD + BAR_WIDTH + LABEL_WIDTH;
    let canvas_height = TITLE_BAND + height + PAD;
    let mut canvas = RgbaImage::from_pixel(canvas_width, canvas_height, BACKGROUND);

    // Colormapped raster. Non-finite samples keep the background color.
    for (i, &value) in ndvi.data().iter().enumerate() {
        if !value.is_finite() {
            continue;
        }
        let x = i as u32 % width;
        let y = i as u32 / width;
        let color = evaluate(ndvi_to_t(value));
        canvas.put_pixel(
            PAD + x,
            TITLE_BAND + y,
            Rgba([color.r, color.g, color.b, 255]),
        );
    }

    // Colorbar legend, +1 at the top, -1 at the bottom.
    let bar_x = PAD + width + PAD;
    let bar_span = height.max(2) - 1;
    for y in 0..height {
        let t = 1.0 - y as f64 / bar_span as f64;
        let color = evaluate(t);
        for x in 0..BAR_WIDTH {
            canvas.put_pixel(
                bar_x + x,
                TITLE_BAND + y,
                Rgba([color.r, color.g, color.b, 255]),
            );
        }
    }

    // Tick marks at the +1 / 0 / -1 positions.
    for frac in [0.0f32, 0.5, 1.0] {
        let y = TITLE_BAND + ((height - 1) as f32 * frac) as u32;
        for x in 0..4 {
            canvas.put_pixel(bar_x + BAR_WIDTH + x, y, TEXT_COLOR);
        }
    }

    match load_font() {
        Some(font) => {
            let title_x = (canvas_width.saturating_sub(text_width(TITLE, TITLE_SIZE))) / 2;
            draw_text_mut(
                &mut canvas,
                TEXT_COLOR,
                title_x as i32,
                10,
                Scale::uniform(TITLE_SIZE),
                &font,
                TITLE,
            );

            draw_text_mut(
                &mut canvas,
                TEXT_COLOR,
                bar_x as i32,
                (TITLE_BAND - 16) as i32,
                Scale::uniform(LABEL_SIZE),
                &font,
                LEGEND_LABEL,
            );

            let label_x = (bar_x + BAR_WIDTH + 6) as i32;
            let ticks = [(0.0f32, "1.0"), (0.5, "0.0"), (1.0, "-1.0")];
            for (frac, label) in ticks {
                let y = TITLE_BAND as f32 + (height - 1) as f32 * frac - LABEL_SIZE / 2.0;
                draw_text_mut(
                    &mut canvas,
                    TEXT_COLOR,
                    label_x,
                    y as i32,
                    Scale::uniform(LABEL_SIZE),
                    &font,
                    label,
                );
            }
        }
        None => {
            warn!("no usable system font found; preview text labels disabled");
        }
    }

    canvas
}

/// Render and encode the preview to a PNG file.
pub fn write_preview_png<P: AsRef<Path>>(ndvi: &Buffer<f32>, path: P) -> Result<()> {
    let path = path.as_ref();
    let canvas = render_preview(ndvi);
    canvas
        .save(path)
        .with_context(|| format!("failed to write preview image {}", path.display()))?;
    Ok(())
}
