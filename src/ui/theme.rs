// ui/theme.rs - Colours and widget styles
//
// Dark page, zinc card, green accent. Styles are plain functions so they can
// be handed straight to `.style(...)`.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Colour palette
pub mod colors {
    use iced::Color;

    /// `Color::from_rgb8` is not `const` in iced 0.13; same conversion.
    const fn rgb8(r: u8, g: u8, b: u8) -> Color {
        Color::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub const BG_PAGE: Color = Color::BLACK;
    pub const BG_CARD: Color = rgb8(0x18, 0x18, 0x1b);

    pub const ACCENT: Color = rgb8(0x22, 0xc5, 0x5e);
    pub const ACCENT_HOVER: Color = rgb8(0x4a, 0xde, 0x80);
    pub const ACCENT_PRESSED: Color = rgb8(0x16, 0xa3, 0x4a);

    pub const TEXT_PRIMARY: Color = Color::WHITE;
    pub const TEXT_ON_ACCENT: Color = Color::BLACK;

    pub const BORDER: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.06);
}

/// Opacity of the increment button once the cap is reached
const DISABLED_ALPHA: f32 = 0.5;

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Full-window background
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::BG_PAGE)),
        text_color: Some(colors::TEXT_PRIMARY),
        ..Default::default()
    }
}

/// Header bar, flush with the page
pub fn header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::BG_PAGE)),
        text_color: Some(colors::TEXT_PRIMARY),
        ..Default::default()
    }
}

/// Card hosting the counter
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::BG_CARD)),
        border: Border {
            color: colors::BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

/// Rounded increment pill. Disabled keeps the resting colour, only faded.
pub fn increment_button(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Active => (colors::ACCENT, colors::TEXT_ON_ACCENT),
        button::Status::Hovered => (colors::ACCENT_HOVER, colors::TEXT_ON_ACCENT),
        button::Status::Pressed => (colors::ACCENT_PRESSED, colors::TEXT_ON_ACCENT),
        button::Status::Disabled => (
            faded(colors::ACCENT, DISABLED_ALPHA),
            faded(colors::TEXT_ON_ACCENT, DISABLED_ALPHA),
        ),
    };

    let shadow = match status {
        button::Status::Hovered => Shadow {
            color: faded(colors::ACCENT, 0.4),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
        _ => Shadow::default(),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        shadow,
    }
}
