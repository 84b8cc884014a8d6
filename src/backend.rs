//! Menu Backend Seam
//!
//! The menu core talks to the outside world through [`MenuBackend`]: it
//! loads named sprite sheets, draws frames at screen positions, and polls
//! one pending input event per loop iteration. Asset-load and rendering
//! failures are not handled inside the menu -- they propagate out as fatal
//! errors of the session.
//!
//! [`SdlBackend`] is the production implementation over an SDL2 canvas and
//! event pump. Tests use a scripted in-memory backend instead.

use crate::config::MenuConfig;
use crate::input::{translate_event, MenuEvent};
use crate::sprite::SpriteSheet;
use crate::text;
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;
use std::collections::HashMap;

/// Opaque handle to a loaded sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteHandle(usize);

impl SpriteHandle {
    pub(crate) fn new(index: usize) -> Self {
        SpriteHandle(index)
    }

    pub(crate) fn index(&self) -> usize {
        self.0
    }
}

/// External asset, render and input capability of the menu
pub trait MenuBackend {
    /// Loads a named sprite sheet; loading the same name twice returns the
    /// same handle
    fn load_sheet(&mut self, name: &str) -> Result<SpriteHandle, String>;

    /// Draws one frame of a loaded sheet at a screen position
    fn draw_frame(
        &mut self,
        sheet: SpriteHandle,
        frame: usize,
        x: i32,
        y: i32,
    ) -> Result<(), String>;

    /// Draws a bitmap caption
    fn draw_text(
        &mut self,
        caption: &str,
        x: i32,
        y: i32,
        color: Color,
        scale: u32,
    ) -> Result<(), String>;

    /// Clears the frame before drawing
    fn clear(&mut self) -> Result<(), String>;

    /// Presents the finished frame
    fn present(&mut self) -> Result<(), String>;

    /// Polls at most one pending menu event
    fn poll_event(&mut self) -> Option<MenuEvent>;

    /// Yields until the next frame is due
    fn delay_frame(&mut self);
}

/// Production backend over SDL2
///
/// Owns the loaded sprite sheets; the canvas, event pump and texture
/// creator are borrowed from `main` for the duration of the menu session.
pub struct SdlBackend<'a> {
    canvas: &'a mut Canvas<Window>,
    event_pump: &'a mut EventPump,
    texture_creator: &'a TextureCreator<WindowContext>,
    config: &'a MenuConfig,
    sheets: Vec<SpriteSheet<'a>>,
    loaded: HashMap<String, SpriteHandle>,
}

impl<'a> SdlBackend<'a> {
    pub fn new(
        canvas: &'a mut Canvas<Window>,
        event_pump: &'a mut EventPump,
        texture_creator: &'a TextureCreator<WindowContext>,
        config: &'a MenuConfig,
    ) -> Self {
        SdlBackend {
            canvas,
            event_pump,
            texture_creator,
            config,
            sheets: Vec::new(),
            loaded: HashMap::new(),
        }
    }
}

impl MenuBackend for SdlBackend<'_> {
    fn load_sheet(&mut self, name: &str) -> Result<SpriteHandle, String> {
        if let Some(&handle) = self.loaded.get(name) {
            return Ok(handle);
        }

        let def = self.config.sheet(name)?;
        let texture = self
            .texture_creator
            .load_texture(&def.image)
            .map_err(|e| format!("Failed to load {}: {}", def.image, e))?;

        let handle = SpriteHandle::new(self.sheets.len());
        self.sheets.push(SpriteSheet::from_def(texture, def));
        self.loaded.insert(name.to_string(), handle);
        log::debug!("loaded sprite sheet '{}' from {}", name, def.image);
        Ok(handle)
    }

    fn draw_frame(
        &mut self,
        sheet: SpriteHandle,
        frame: usize,
        x: i32,
        y: i32,
    ) -> Result<(), String> {
        let sheet = self
            .sheets
            .get(sheet.index())
            .ok_or_else(|| format!("Unknown sprite handle {:?}", sheet))?;
        sheet.render_frame(self.canvas, frame, x, y)
    }

    fn draw_text(
        &mut self,
        caption: &str,
        x: i32,
        y: i32,
        color: Color,
        scale: u32,
    ) -> Result<(), String> {
        text::draw_text(self.canvas, caption, x, y, color, scale)
    }

    fn clear(&mut self) -> Result<(), String> {
        self.canvas.set_draw_color(Color::RGB(0, 0, 0));
        self.canvas.clear();
        Ok(())
    }

    fn present(&mut self) -> Result<(), String> {
        self.canvas.present();
        Ok(())
    }

    fn poll_event(&mut self) -> Option<MenuEvent> {
        // Drain raw events until one translates; unrecognized input is
        // dropped without touching menu state
        while let Some(event) = self.event_pump.poll_event() {
            if let Some(menu_event) = translate_event(event) {
                return Some(menu_event);
            }
        }
        None
    }

    fn delay_frame(&mut self) {
        // ~60 FPS cap
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }
}
