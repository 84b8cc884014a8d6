//! Frame-Indexed Sprite Sheets
//!
//! Menu art lives in sprite sheets cut into a uniform grid of frames.
//! Unlike gameplay animation there is no clock here: the menu container's
//! animation counter (or a button's up/highlight pair) picks the frame.

use crate::config::SpriteSheetDef;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

/// One frame cell inside a sprite sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Frame {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Frame {
            x,
            y,
            width,
            height,
        }
    }

    /// Source rectangle of this frame inside the sheet texture
    pub fn source_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Computes the frame grid for a sheet definition
///
/// Frames are laid out row-major; the column count comes from how many
/// cells fit across the texture.
fn grid_frames(texture_width: u32, def: &SpriteSheetDef) -> Vec<Frame> {
    let columns = (texture_width / def.frame_width).max(1);

    (0..def.frame_count)
        .map(|i| {
            Frame::new(
                ((i % columns) * def.frame_width) as i32,
                ((i / columns) * def.frame_height) as i32,
                def.frame_width,
                def.frame_height,
            )
        })
        .collect()
}

/// A loaded sprite sheet: texture plus its ordered frames
pub struct SpriteSheet<'a> {
    texture: Texture<'a>,
    frames: Vec<Frame>,
}

impl<'a> SpriteSheet<'a> {
    /// Builds a sheet from a config definition and its loaded texture
    pub fn from_def(texture: Texture<'a>, def: &SpriteSheetDef) -> Self {
        let frames = grid_frames(texture.query().width, def);
        SpriteSheet { texture, frames }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Draws one frame of the sheet at a screen position
    pub fn render_frame(
        &self,
        canvas: &mut Canvas<Window>,
        frame: usize,
        x: i32,
        y: i32,
    ) -> Result<(), String> {
        let f = self
            .frames
            .get(frame)
            .ok_or_else(|| format!("Frame {} out of range ({} frames)", frame, self.frames.len()))?;

        canvas
            .copy(
                &self.texture,
                Some(f.source_rect()),
                Some(Rect::new(x, y, f.width, f.height)),
            )
            .map_err(|e| e.to_string())
    }
}
