#![windows_subsystem = "windows"]
#![allow(non_snake_case)]

mod components;
mod libs;
mod state;
mod utils;

use dioxus::desktop::{ Config, LogicalSize, WindowBuilder };
use libs::ui;
use utils::constants::APP_NAME;

fn main() {
    // Initialize debug logging first
    utils::logger::init_debug_logging();

    env_logger::init();

    debug_print!("🚀 Initializing {}...", APP_NAME);

    // The global board store must exist before any component renders
    state::app::init_board_state();

    // Load config once so a first run writes the defaults to disk
    let app_config = state::config::AppConfig::load();
    debug_print!(
        "⚙️ Config loaded (theme: {}, autosave: {})",
        app_config.theme,
        app_config.autosave
    );

    let window_builder = WindowBuilder::default()
        .with_title(APP_NAME)
        .with_inner_size(LogicalSize::new(1080, 720))
        .with_min_inner_size(LogicalSize::new(720, 480))
        .with_resizable(true);

    let desktop_config = Config::new().with_window(window_builder).with_menu(None);

    dioxus::LaunchBuilder::desktop().with_cfg(desktop_config).launch(ui::app)
}
