//! World-of-Xeen-Variant Primary Dialog

use crate::backend::{MenuBackend, SpriteHandle};
use crate::input::{MenuAction, MenuEvent};
use crate::menu::dialog::{handle_main_menu_event, ButtonSet, DialogOutcome, DialogState};
use sdl2::keyboard::Keycode;
use sdl2::rect::Rect;

const BUTTON_SPRITES: &str = "world_buttons";

/// Primary main-menu dialog for the combined World of Xeen variant
///
/// Offers both games plus the secondary options dialog. The other-options
/// button does not end the menu session; the container swaps dialogs when
/// it sees that action.
pub struct WorldMenuDialog {
    buttons: ButtonSet,
    sprites: SpriteHandle,
    state: DialogState,
}

impl WorldMenuDialog {
    pub fn new(backend: &mut dyn MenuBackend) -> Result<Self, String> {
        let sprites = backend.load_sheet(BUTTON_SPRITES)?;
        let mut dialog = WorldMenuDialog {
            buttons: ButtonSet::new(),
            sprites,
            state: DialogState::Idle,
        };
        dialog.load_buttons();
        Ok(dialog)
    }

    fn load_buttons(&mut self) {
        self.buttons.add(
            Rect::new(110, 78, 100, 20),
            0,
            MenuAction::StartClouds,
            Some(Keycode::C),
        );
        self.buttons.add(
            Rect::new(110, 102, 100, 20),
            2,
            MenuAction::StartDarkSide,
            Some(Keycode::D),
        );
        self.buttons.add(
            Rect::new(110, 126, 100, 20),
            4,
            MenuAction::LoadGame,
            Some(Keycode::L),
        );
        self.buttons.add(
            Rect::new(110, 150, 100, 20),
            6,
            MenuAction::ShowOtherOptions,
            Some(Keycode::O),
        );
        self.buttons.add(
            Rect::new(110, 174, 100, 20),
            8,
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
            MenuAction::StartDarkSide,
        )
    }

    pub fn state(&self) -> DialogState {
        self.state
    }
}
