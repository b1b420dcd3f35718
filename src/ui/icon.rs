// ui/icon.rs - Trophy icon
//
// Rasterised at startup instead of shipped as an asset. The same pixels
// back the window icon and the badge in the header.

use anyhow::{Context, Result};
use iced::widget::image::Handle;
use iced::window;
use image::{Rgba, RgbaImage};

use super::theme::colors;

/// Edge length of the window icon in pixels
pub const WINDOW_ICON_SIZE: u32 = 64;

/// Samples per axis for edge smoothing
const SUPERSAMPLE: u32 = 4;

/// Whether a point in the unit square (y down) is inside the trophy outline
fn inside_trophy(u: f32, v: f32) -> bool {
    let dx = u - 0.5;

    // Cup: lower half of an ellipse hanging from the rim
    let cup = v >= 0.12 && (dx / 0.30).powi(2) + ((v - 0.12) / 0.43).powi(2) <= 1.0;

    // Handles: ring segments left and right of the cup
    let handle = |cx: f32| {
        let d = ((u - cx).powi(2) + (v - 0.30).powi(2)).sqrt();
        (0.07..=0.12).contains(&d) && dx.abs() > 0.2
    };

    let stem = dx.abs() <= 0.05 && (0.55..=0.76).contains(&v);
    let base = dx.abs() <= 0.22 && (0.76..=0.88).contains(&v);

    cup || handle(0.22) || handle(0.78) || stem || base
}

/// Draw the trophy in the accent colour on a transparent square
pub fn trophy(size: u32) -> RgbaImage {
    let [r, g, b, _] = colors::ACCENT.into_rgba8();
    let samples = (SUPERSAMPLE * SUPERSAMPLE) as f32;

    RgbaImage::from_fn(size, size, |x, y| {
        let mut hits = 0u32;
        for sy in 0..SUPERSAMPLE {
            for sx in 0..SUPERSAMPLE {
                let u = (x as f32 + (sx as f32 + 0.5) / SUPERSAMPLE as f32) / size as f32;
                let v = (y as f32 + (sy as f32 + 0.5) / SUPERSAMPLE as f32) / size as f32;
                if inside_trophy(u, v) {
                    hits += 1;
                }
            }
        }
        let alpha = (hits as f32 / samples * 255.0).round() as u8;
        Rgba([r, g, b, alpha])
    })
}

pub fn window_icon() -> Result<window::Icon> {
    let image = trophy(WINDOW_ICON_SIZE);
    let (width, height) = image.dimensions();
    window::icon::from_rgba(image.into_raw(), width, height)
        .context("Failed to build window icon")
}

/// Image handle for drawing the trophy inside the UI
pub fn badge(size: u32) -> Handle {
    let image = trophy(size);
    let (width, height) = image.dimensions();
    Handle::from_rgba(width, height, image.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trophy_has_shape_and_transparent_corners() {
        let image = trophy(WINDOW_ICON_SIZE);
        assert_eq!(image.dimensions(), (WINDOW_ICON_SIZE, WINDOW_ICON_SIZE));

        // middle of the cup
        assert_eq!(image.get_pixel(32, 16)[3], 255);
        // base
        assert_eq!(image.get_pixel(32, 52)[3], 255);

        for (x, y) in [(0, 0), (63, 0), (0, 63), (63, 63)] {
            assert_eq!(image.get_pixel(x, y)[3], 0);
        }
    }

    #[test]
    fn window_icon_builds() {
        assert!(window_icon().is_ok());
    }
}
