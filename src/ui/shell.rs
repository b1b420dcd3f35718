// ui/shell.rs - Static page frame
//
// Header with the trophy badge and app name, and a centred card that
// hosts the counter widget. No state of its own.

use iced::font::Weight;
use iced::widget::image::Handle;
use iced::widget::{center, column, container, image, row, text};
use iced::{Alignment, Element, Font, Length, Padding};

use super::{counter, theme};
use crate::app::counter::Counter;
use crate::app::Message;
use crate::constants::APP_NAME;

const HEADER_HEIGHT: f32 = 80.0;
const BADGE_SIZE: u16 = 32;
const CARD_MAX_WIDTH: f32 = 448.0;

fn header(badge: &Handle) -> Element<'_, Message> {
    let title = text(APP_NAME).size(20).font(Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    });

    container(
        row![
            image(badge.clone())
                .width(BADGE_SIZE)
                .height(BADGE_SIZE),
            title,
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding(Padding::from([24, 16]))
    .width(Length::Fill)
    .height(Length::Fixed(HEADER_HEIGHT))
    .style(theme::header)
    .into()
}

pub fn view<'a>(counter: &'a Counter, badge: &'a Handle) -> Element<'a, Message> {
    let card = container(counter::view(counter).map(Message::Counter))
        .padding(48)
        .max_width(CARD_MAX_WIDTH)
        .center_x(Length::Fill)
        .style(theme::card);

    container(column![header(badge), center(card).padding(16)])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::page)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::icon;

    use crate::app::counter::Message as CounterMessage;
    use crate::constants::MAX_COUNT;

    // The counter is passed in once and placed in the card; building the
    // frame must work whatever phase the counter is in.
    #[test]
    fn frame_builds_around_fresh_and_capped_counter() {
        let badge = icon::badge(BADGE_SIZE as u32);
        let mut counter = Counter::new();
        let _ = view(&counter, &badge);

        for _ in 0..MAX_COUNT {
            counter.update(CounterMessage::Increment);
        }
        let _ = view(&counter, &badge);
    }
}
