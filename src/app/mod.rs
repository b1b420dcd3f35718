// app/mod.rs - Application root
//
// Composes the counter widget with the confetti field and wires both into
// iced's update/view loop. The counter's celebration request is turned into
// a detached task, so the burst is spawned on a later update cycle and the
// count change never waits on it.

pub mod counter;
pub mod state;

use std::time::{Duration, Instant};

use iced::keyboard::{self, key};
use iced::widget::image::Handle;
use iced::widget::stack;
use iced::{window, Element, Size, Subscription, Task, Theme};
use log::{debug, info};

use crate::celebration::{Burst, ConfettiField};
use crate::config::Settings;
use crate::constants::{ANIMATION_TICK_MS, APP_NAME};
use crate::ui::confetti::ConfettiLayer;
use crate::ui::{icon, shell};

use counter::{Action, Counter};

/// Header badge edge length in pixels
const BADGE_PIXELS: u32 = 64;

#[derive(Debug, Clone)]
pub enum Message {
    Counter(counter::Message),
    Celebrate(Burst),
    Tick(Instant),
    WindowResized(Size),
}

pub struct App {
    counter: Counter,
    confetti: ConfettiField,
    viewport: Size,
    badge: Handle,
}

impl App {
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        (Self::with_confetti(settings, ConfettiField::new()), Task::none())
    }

    /// Build the app around a given field (seeded fields make bursts reproducible)
    pub fn with_confetti(settings: Settings, confetti: ConfettiField) -> Self {
        let viewport = Size::new(
            settings.window_width as f32,
            settings.window_height as f32,
        );
        info!("{} ready, viewport {}x{}", APP_NAME, viewport.width, viewport.height);

        Self {
            counter: Counter::new(),
            confetti,
            viewport,
            badge: icon::badge(BADGE_PIXELS),
        }
    }

    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    pub fn confetti(&self) -> &ConfettiField {
        &self.confetti
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn title(&self) -> String {
        APP_NAME.to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match self.apply(message) {
            Some(next) => Task::done(next),
            None => Task::none(),
        }
    }

    /// Handle one message and return the follow-up message, if any, that the
    /// runtime should deliver on a later cycle. `update` wraps this in a `Task`.
    pub fn apply(&mut self, message: Message) -> Option<Message> {
        match message {
            Message::Counter(message) => match self.counter.update(message) {
                Action::None => None,
                // Detached: the burst is spawned when this message comes back
                Action::Celebrate(burst) => Some(Message::Celebrate(burst)),
            },
            Message::Celebrate(burst) => {
                self.confetti.burst(&burst, self.viewport);
                None
            }
            Message::Tick(_) => {
                self.confetti.tick();
                None
            }
            Message::WindowResized(size) => {
                debug!("Window resized to {}x{}", size.width, size.height);
                self.viewport = size;
                None
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let page = shell::view(&self.counter, &self.badge);

        if self.confetti.is_animating() {
            stack![page, ConfettiLayer::new(self.confetti.particles()).view()].into()
        } else {
            page
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subs = vec![window::resize_events().map(|(_id, size)| Message::WindowResized(size))];

        if self.confetti.is_animating() {
            subs.push(iced::time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::Tick));
        }

        // Keyboard shortcut follows the same guard as the button
        if self.counter.is_enabled() {
            subs.push(keyboard::on_key_press(|key, _modifiers| match key.as_ref() {
                keyboard::Key::Named(key::Named::Enter | key::Named::Space) => {
                    Some(Message::Counter(counter::Message::Increment))
                }
                _ => None,
            }));
        }

        Subscription::batch(subs)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
