//! Clouds-Variant Primary Dialog

use crate::backend::{MenuBackend, SpriteHandle};
use crate::input::{MenuAction, MenuEvent};
use crate::menu::dialog::{handle_main_menu_event, ButtonSet, DialogOutcome, DialogState};
use sdl2::keyboard::Keycode;
use sdl2::rect::Rect;

/// Sheet holding the button art, two frames (up/highlight) per button
const BUTTON_SPRITES: &str = "clouds_buttons";

/// Primary main-menu dialog for the Clouds variant
///
/// A single centered column of buttons over the cloud animation.
pub struct CloudsMenuDialog {
    buttons: ButtonSet,
    sprites: SpriteHandle,
    state: DialogState,
}

impl CloudsMenuDialog {
    pub fn new(backend: &mut dyn MenuBackend) -> Result<Self, String> {
        let sprites = backend.load_sheet(BUTTON_SPRITES)?;
        let mut dialog = CloudsMenuDialog {
            buttons: ButtonSet::new(),
            sprites,
            state: DialogState::Idle,
        };
        dialog.load_buttons();
        Ok(dialog)
    }

    /// Populates the button set; registration order is hit-test precedence
    fn load_buttons(&mut self) {
        self.buttons.add(
            Rect::new(110, 100, 100, 20),
            0,
            MenuAction::StartClouds,
            Some(Keycode::S),
        );
        self.buttons.add(
            Rect::new(110, 124, 100, 20),
            2,
            MenuAction::LoadGame,
            Some(Keycode::L),
        );
        self.buttons.add(
            Rect::new(110, 148, 100, 20),
            4,
            MenuAction::ViewCloudsCredits,
            Some(Keycode::C),
        );
        self.buttons.add(
            Rect::new(110, 172, 100, 20),
            6,
            MenuAction::QuitGame,
            Some(Keycode::E),
        );
    }

    pub fn draw(&mut self, backend: &mut dyn MenuBackend) -> Result<(), String> {
        if self.state == DialogState::Idle {
            self.state = DialogState::Active;
        }
        self.buttons.draw(backend, self.sprites)
    }

    pub fn handle_event(&mut self, event: MenuEvent) -> DialogOutcome {
        handle_main_menu_event(
            &mut self.buttons,
            &mut self.state,
            event,
            MenuAction::StartClouds,
        )
    }

    pub fn state(&self) -> DialogState {
        self.state
    }
}
