// ui/counter.rs - Counter widget view
//
// Numeral, increment button, and the congratulations line. Everything is
// read off the count through `CounterView`; the view holds no state.

use iced::font::Weight;
use iced::widget::{button, column, row, text};
use iced::{Alignment, Element, Font, Padding};

use super::theme::{self, colors};
use crate::app::counter::{Counter, Message};

// Plain text: the default font has no emoji glyphs
pub const CONGRATULATIONS: &str = "Congratulations!";

const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

const SEMIBOLD: Font = Font {
    weight: Weight::Semibold,
    ..Font::DEFAULT
};

/// What the widget shows for a given count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    pub readout: String,
    pub enabled: bool,
    pub message: Option<&'static str>,
}

impl CounterView {
    pub fn of(counter: &Counter) -> Self {
        Self {
            readout: counter.count().to_string(),
            enabled: counter.is_enabled(),
            message: counter.shows_congratulations().then_some(CONGRATULATIONS),
        }
    }
}

pub fn view(counter: &Counter) -> Element<'_, Message> {
    let model = CounterView::of(counter);

    let readout = text(model.readout)
        .size(72)
        .font(BOLD)
        .color(colors::ACCENT);

    let label = row![
        text("+").size(24).font(BOLD),
        text("Increment").size(16).font(SEMIBOLD),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    // No on_press means iced renders the button disabled
    let increment = button(label)
        .padding(Padding::from([16, 32]))
        .style(theme::increment_button)
        .on_press_maybe(model.enabled.then_some(Message::Increment));

    let mut content = column![readout, increment]
        .spacing(24)
        .align_x(Alignment::Center);

    if let Some(message) = model.message {
        content = content.push(
            text(message)
                .size(20)
                .font(SEMIBOLD)
                .color(colors::ACCENT),
        );
    }

    content.into()
}
