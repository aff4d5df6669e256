//! ARTISANATTITUDE. - a digital magazine
//!
//! Issue 34: The Digital Renaissance. An animated 3D cover that opens into
//! an article browser, with about and contact pages. Runs as a desktop
//! window and in the browser from the same code.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod articles;
mod boundary;
mod config;
mod magazine;
mod page;
mod richtext;
mod ui;
mod view;

use macroquad::prelude::*;
use app::AppState;
use config::{SiteConfig, CONFIG_PATH};
use magazine::cover::spawn_cover_load;
use ui::{MouseState, Rect};

fn window_conf() -> Conf {
    Conf {
        window_title: "ARTISANATTITUDE.".to_string(),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        high_dpi: true,
        // Start windowed on all platforms (WASM: browser handles sizing)
        #[cfg(not(target_arch = "wasm32"))]
        fullscreen: false,
        sample_count: 4,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let config = SiteConfig::load(CONFIG_PATH).await;

    // Cover decodes in the background while the page is already up
    let cover = spawn_cover_load(config.cover_texture.clone());
    let show_fps = config.show_fps;
    let mut app = AppState::new(config, cover, get_time());

    println!("=== ARTISANATTITUDE. v{} ===", VERSION);

    loop {
        let now = get_time();
        let screen = Rect::new(0.0, 0.0, screen_width(), screen_height());

        app.ui.begin_frame(MouseState::capture());
        let mobile = app.layout(screen).mobile;
        app.handle_shortcuts(mobile, now);

        app.frame(screen, now);

        if show_fps {
            let fps = format!("{} fps", get_fps());
            draw_text(&fps, screen.right() - 72.0, screen.bottom() - 12.0, 16.0, ui::theme::TEXT_MUTED);
        }

        next_frame().await;
    }
}
