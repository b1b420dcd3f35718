//! Achievement Counter
//!
//! A counter that goes from 0 to 10 one click at a time, locks at 10, and
//! celebrates reaching the cap with a confetti burst.

pub mod app;
pub mod celebration;
pub mod config;
pub mod constants;
pub mod ui;

// Re-export commonly used types
pub use app::counter::{Action, Counter};
pub use app::state::{CounterState, Phase, Transition};
pub use app::{App, Message};
pub use celebration::{Burst, ConfettiField};
pub use config::Settings;
