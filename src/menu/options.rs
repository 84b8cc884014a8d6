//! Other-Options Dialog
//!
//! Secondary dialog reached from the World of Xeen primary dialog. It is
//! deliberately outside the shared main-menu key handling: there is no
//! default confirm action here, only its own buttons and Escape to back
//! out to the primary dialog.

use crate::backend::{MenuBackend, SpriteHandle};
use crate::input::{MenuAction, MenuEvent};
use crate::menu::dialog::{ButtonSet, DialogOutcome, DialogState};
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

const BUTTON_SPRITES: &str = "options_buttons";

pub struct OtherOptionsDialog {
    buttons: ButtonSet,
    sprites: SpriteHandle,
    state: DialogState,
}

impl OtherOptionsDialog {
    pub fn new(backend: &mut dyn MenuBackend) -> Result<Self, String> {
        let sprites = backend.load_sheet(BUTTON_SPRITES)?;
        let mut dialog = OtherOptionsDialog {
            buttons: ButtonSet::new(),
            sprites,
            state: DialogState::Idle,
        };
        dialog.load_buttons();
        Ok(dialog)
    }

    fn load_buttons(&mut self) {
        self.buttons.add(
            Rect::new(100, 110, 120, 20),
            0,
            MenuAction::ViewCloudsCredits,
            Some(Keycode::C),
        );
        self.buttons.add(
            Rect::new(100, 140, 120, 20),
            2,
            MenuAction::ViewDarkSideCredits,
            Some(Keycode::D),
        );
    }

    pub fn draw(&mut self, backend: &mut dyn MenuBackend) -> Result<(), String> {
        if self.state == DialogState::Idle {
            self.state = DialogState::Active;
        }
        backend.draw_text("OTHER OPTIONS", 121, 80, Color::RGB(222, 222, 170), 1)?;
        self.buttons.draw(backend, self.sprites)
    }

    pub fn handle_event(&mut self, event: MenuEvent) -> DialogOutcome {
        if self.state != DialogState::Active {
            return DialogOutcome::Continue;
        }

        match event {
            MenuEvent::Quit => {
                self.state = DialogState::Terminated;
                DialogOutcome::Terminate(MenuAction::QuitGame)
            }
            MenuEvent::Cancel => {
                self.state = DialogState::Terminated;
                DialogOutcome::Cancel
            }
            MenuEvent::Key(key) => match self.buttons.hotkey_match(key) {
                Some(action) => {
                    self.state = DialogState::Terminated;
                    DialogOutcome::Terminate(action)
                }
                None => DialogOutcome::Continue,
            },
            MenuEvent::Click { x, y } => match self.buttons.hit_test(x, y) {
                Some(action) => {
                    self.state = DialogState::Terminated;
                    DialogOutcome::Terminate(action)
                }
                None => DialogOutcome::Continue,
            },
            MenuEvent::Motion { x, y } => {
                self.buttons.update_highlight(x, y);
                DialogOutcome::Continue
            }
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }
}
