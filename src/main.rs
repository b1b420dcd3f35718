//! Achievement Counter - desktop entry point
//!
//! Loads settings, sets up logging, and runs the iced application.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use iced::{window, Size};
use log::{error, info};

use achievement_counter::constants::{MIN_HEIGHT, MIN_WIDTH};
use achievement_counter::ui::icon;
use achievement_counter::{App, Settings};

fn init_logging(default_filter: &str) {
    // Keep renderer chatter out of the log
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .filter_module("wgpu_core", log::LevelFilter::Error)
        .filter_module("naga", log::LevelFilter::Error)
        .filter_module("iced_wgpu", log::LevelFilter::Error)
        .init();
}

fn main() -> iced::Result {
    // The log filter lives in the settings, so load them before logging exists
    let loaded = Settings::load();
    let settings = loaded.as_ref().ok().cloned().unwrap_or_default();

    init_logging(&settings.log_filter);
    info!("Achievement Counter starting...");

    match &loaded {
        Ok(_) => info!("Settings: {:?}", settings),
        Err(e) => error!("Failed to load settings, using defaults: {:#}", e),
    }

    let icon = match icon::window_icon() {
        Ok(icon) => Some(icon),
        Err(e) => {
            error!("{:#}", e);
            None
        }
    };

    let window_settings = window::Settings {
        size: Size::new(settings.window_width as f32, settings.window_height as f32),
        min_size: Some(Size::new(MIN_WIDTH as f32, MIN_HEIGHT as f32)),
        icon,
        ..Default::default()
    };

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window(window_settings)
        .antialiasing(true)
        .run_with(move || App::new(settings))
}
