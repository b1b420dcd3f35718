// app/counter.rs - Counter Widget
//
// Owns the count, handles the widget's own messages and tells its parent
// when something outside the widget has to happen (the celebration).
// The parent never touches the count directly.

use log::{debug, info, warn};

use super::state::{CounterState, Phase, Transition};
use crate::celebration::Burst;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Increment,
}

/// Side effect requested by the widget after handling a message
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    /// Fire the confetti burst; emitted once, on the activation that hits the cap
    Celebrate(Burst),
}

#[derive(Debug, Default)]
pub struct Counter {
    state: CounterState,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u8 {
        self.state.count()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    pub fn shows_congratulations(&self) -> bool {
        self.state.shows_congratulations()
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::Increment => match self.state.activate() {
                Transition::Incremented(count) => {
                    debug!("Count incremented to {}", count);
                    Action::None
                }
                Transition::ReachedCap => {
                    info!("Count reached {}, celebrating", self.state.count());
                    Action::Celebrate(Burst::celebration())
                }
                Transition::Ignored => {
                    warn!("Increment ignored, count already capped");
                    Action::None
                }
            },
        }
    }
}
