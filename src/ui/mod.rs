// ui/mod.rs - Rendering layer
//
// Pure views over the app state plus the styles and icon they use.

pub mod confetti;
pub mod counter;
pub mod icon;
pub mod shell;
pub mod theme;
