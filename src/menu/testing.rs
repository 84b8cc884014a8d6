//! Scripted backend for menu tests
//!
//! Records every draw call and feeds a canned event queue, one event per
//! poll, so tests can drive whole sessions without SDL.

use crate::backend::{MenuBackend, SpriteHandle};
use crate::input::MenuEvent;
use sdl2::pixels::Color;
use std::collections::VecDeque;

#[derive(Default)]
pub struct MockBackend {
    events: VecDeque<MenuEvent>,

    /// Sheet names in load order (deduplicated, like the SDL backend)
    pub loaded: Vec<String>,

    /// Every draw_frame call: (sheet, frame, x, y)
    pub frame_draws: Vec<(SpriteHandle, usize, i32, i32)>,

    /// Every caption drawn
    pub captions: Vec<String>,

    pub presented: usize,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_event(&mut self, event: MenuEvent) {
        self.events.push_back(event);
    }
}

impl MenuBackend for MockBackend {
    fn load_sheet(&mut self, name: &str) -> Result<SpriteHandle, String> {
        if let Some(index) = self.loaded.iter().position(|n| n == name) {
            return Ok(SpriteHandle::new(index));
        }
        self.loaded.push(name.to_string());
        Ok(SpriteHandle::new(self.loaded.len() - 1))
    }

    fn draw_frame(
        &mut self,
        sheet: SpriteHandle,
        frame: usize,
        x: i32,
        y: i32,
    ) -> Result<(), String> {
        self.frame_draws.push((sheet, frame, x, y));
        Ok(())
    }

    fn draw_text(
        &mut self,
        caption: &str,
        _x: i32,
        _y: i32,
        _color: Color,
        _scale: u32,
    ) -> Result<(), String> {
        self.captions.push(caption.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), String> {
        Ok(())
    }

    fn present(&mut self) -> Result<(), String> {
        self.presented += 1;
        Ok(())
    }

    fn poll_event(&mut self) -> Option<MenuEvent> {
        self.events.pop_front()
    }

    fn delay_frame(&mut self) {}
}
