use std::path::PathBuf;

mod backend;
mod config;
mod input;
mod menu;
mod sprite;
mod text;

use backend::SdlBackend;
use config::MenuConfig;
use menu::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Calculate the best window scale based on monitor size
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem) -> u32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = (display_mode.w as f32 * 0.9) as i32;
            let usable_h = (display_mode.h as f32 * 0.9) as i32;

            let scale = (usable_w / SCREEN_WIDTH as i32).min(usable_h / SCREEN_HEIGHT as i32);

            scale.clamp(2, 6) as u32
        }
        Err(_) => {
            log::warn!("could not detect monitor size, using 2x scale");
            2
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    let config_path = MenuConfig::resolve_path(std::env::args().nth(1).map(PathBuf::from));
    let config = MenuConfig::load_from_file(&config_path)?;
    log::info!("using menu config {}", config_path.display());

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window_scale = calculate_window_scale(&video_subsystem);
    let window = video_subsystem
        .window(
            "Xeen Main Menu",
            SCREEN_WIDTH * window_scale,
            SCREEN_HEIGHT * window_scale,
        )
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Logical size gives pixel-perfect scaling of the 320x200 art
    canvas
        .set_logical_size(SCREEN_WIDTH, SCREEN_HEIGHT)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let mut backend = SdlBackend::new(&mut canvas, &mut event_pump, &texture_creator, &config);
    let action = menu::show(&config, &mut backend)?;

    // Hand-off point: the surrounding interpreter dispatches the action
    println!("Selected: {}", action.describe());
    Ok(())
}
