//! Dark-Side-Variant Primary Dialog

use crate::backend::{MenuBackend, SpriteHandle};
use crate::input::{MenuAction, MenuEvent};
use crate::menu::dialog::{handle_main_menu_event, ButtonSet, DialogOutcome, DialogState};
use sdl2::keyboard::Keycode;
use sdl2::rect::Rect;

const BUTTON_SPRITES: &str = "darkside_buttons";

/// Full-screen transition art shown on the dialog's very first draw
const FLASH_SPRITES: &str = "darkside_flash";

/// Primary main-menu dialog for the Dark Side variant
///
/// Buttons run in a row along the bottom edge. The first draw of a fresh
/// dialog instance renders a one-time transition flash before settling
/// into the steady-state loop; this is presentation only and does not
/// change how input is handled.
pub struct DarkSideMenuDialog {
    buttons: ButtonSet,
    sprites: SpriteHandle,
    flash: SpriteHandle,
    state: DialogState,
    first_draw: bool,
}

impl DarkSideMenuDialog {
    pub fn new(backend: &mut dyn MenuBackend) -> Result<Self, String> {
        let sprites = backend.load_sheet(BUTTON_SPRITES)?;
        let flash = backend.load_sheet(FLASH_SPRITES)?;
        let mut dialog = DarkSideMenuDialog {
            buttons: ButtonSet::new(),
            sprites,
            flash,
            state: DialogState::Idle,
            first_draw: true,
        };
        dialog.load_buttons();
        Ok(dialog)
    }

    fn load_buttons(&mut self) {
        self.buttons.add(
            Rect::new(20, 176, 64, 20),
            0,
            MenuAction::StartDarkSide,
            Some(Keycode::S),
        );
        self.buttons.add(
            Rect::new(92, 176, 64, 20),
            2,
            MenuAction::LoadGame,
            Some(Keycode::L),
        );
        self.buttons.add(
            Rect::new(164, 176, 64, 20),
            4,
            MenuAction::ViewDarkSideCredits,
            Some(Keycode::C),
        );
        self.buttons.add(
            Rect::new(236, 176, 64, 20),
            6,
            MenuAction::QuitGame,
            Some(Keycode::E),
        );
    }

    pub fn draw(&mut self, backend: &mut dyn MenuBackend) -> Result<(), String> {
        if self.state == DialogState::Idle {
            self.state = DialogState::Active;
        }
        if self.first_draw {
            backend.draw_frame(self.flash, 0, 0, 0)?;
            self.first_draw = false;
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::testing::MockBackend;

    #[test]
    fn test_transition_flash_renders_exactly_once() {
        let mut backend = MockBackend::new();
        let mut dialog = DarkSideMenuDialog::new(&mut backend).unwrap();
        let flash = dialog.flash;

        dialog.draw(&mut backend).unwrap();
        dialog.draw(&mut backend).unwrap();
        dialog.draw(&mut backend).unwrap();

        let flash_draws = backend
            .frame_draws
            .iter()
            .filter(|(sheet, _, _, _)| *sheet == flash)
            .count();
        assert_eq!(flash_draws, 1);
    }

    #[test]
    fn test_flash_does_not_affect_input_contract() {
        let mut backend = MockBackend::new();
        let mut dialog = DarkSideMenuDialog::new(&mut backend).unwrap();
        dialog.draw(&mut backend).unwrap();

        // Click on the load button region during the post-flash frame
        let outcome = dialog.handle_event(MenuEvent::Click { x: 100, y: 180 });
        assert_eq!(outcome, DialogOutcome::Terminate(MenuAction::LoadGame));
    }

    #[test]
    fn test_confirm_defaults_to_start_dark_side() {
        let mut backend = MockBackend::new();
        let mut dialog = DarkSideMenuDialog::new(&mut backend).unwrap();
        dialog.draw(&mut backend).unwrap();

        let outcome = dialog.handle_event(MenuEvent::Key(Keycode::Space));
        assert_eq!(outcome, DialogOutcome::Terminate(MenuAction::StartDarkSide));
    }
}
