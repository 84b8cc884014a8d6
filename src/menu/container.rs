//! Menu Session Container
//!
//! A [`MainMenuContainer`] is one running menu session: it owns the
//! background animation, the slot holding the currently displayed dialog,
//! and the loop that polls input. [`show`] is the entry point -- it builds
//! the container for the configured game variant, runs it to completion
//! and hands the chosen action back for external dispatch.

use crate::backend::{MenuBackend, SpriteHandle};
use crate::config::MenuConfig;
use crate::input::{MenuAction, MenuEvent};
use crate::menu::clouds::CloudsMenuDialog;
use crate::menu::dark_side::DarkSideMenuDialog;
use crate::menu::dialog::{DialogOutcome, MenuDialog};
use crate::menu::options::OtherOptionsDialog;
use crate::menu::world::WorldMenuDialog;
use crate::menu::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::text;
use sdl2::pixels::Color;
use serde::{Deserialize, Serialize};

/// Extra backdrop drawn beneath the Dark Side animation
const DARKSIDE_BACKDROP: &str = "darkside_backdrop";

/// Attract-mode prompt shown while no dialog is up
const PROMPT: &str = "PRESS ANY KEY";

/// The closed set of game variants the menu can present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameVariant {
    Clouds,
    DarkSide,
    WorldOfXeen,
}

impl GameVariant {
    /// Sheet holding the looping background animation
    fn background_sheet(&self) -> &'static str {
        match self {
            GameVariant::Clouds => "clouds_title",
            GameVariant::DarkSide => "darkside_title",
            GameVariant::WorldOfXeen => "world_title",
        }
    }

    /// Loop length of the background animation
    fn frame_count(&self) -> usize {
        match self {
            GameVariant::Clouds => 9,
            GameVariant::DarkSide => 10,
            GameVariant::WorldOfXeen => 12,
        }
    }
}

/// Shows the main menu for the configured game variant
///
/// Synchronous: blocks until the menu session ends, then returns the
/// chosen action. The caller dispatches it (start a game, load, credits,
/// quit) -- nothing here executes actions.
pub fn show(config: &MenuConfig, backend: &mut dyn MenuBackend) -> Result<MenuAction, String> {
    log::info!("showing main menu for {:?}", config.variant);
    let mut container = MainMenuContainer::new(config.variant, backend)?;
    let action = container.execute(backend)?;
    log::info!("menu session ended: {}", action.describe());
    Ok(action)
}

/// One running menu session
pub struct MainMenuContainer {
    variant: GameVariant,
    animate_ctr: usize,
    frame_count: usize,
    background: SpriteHandle,
    backdrop: Option<SpriteHandle>,
    dialog: Option<MenuDialog>,
    displayed: bool,
}

impl MainMenuContainer {
    /// Builds the container for a variant, loading its background sheet
    pub fn new(variant: GameVariant, backend: &mut dyn MenuBackend) -> Result<Self, String> {
        let background = backend.load_sheet(variant.background_sheet())?;
        Ok(Self::with_background(
            variant,
            background,
            variant.frame_count(),
        ))
    }

    fn with_background(
        variant: GameVariant,
        background: SpriteHandle,
        frame_count: usize,
    ) -> Self {
        MainMenuContainer {
            variant,
            animate_ctr: 0,
            frame_count,
            background,
            backdrop: None,
            dialog: None,
            displayed: false,
        }
    }

    pub fn animate_counter(&self) -> usize {
        self.animate_ctr
    }

    pub fn dialog(&self) -> Option<&MenuDialog> {
        self.dialog.as_ref()
    }

    /// Puts a dialog into the owning slot, replacing any previous one
    pub fn set_dialog(&mut self, dialog: MenuDialog) {
        self.dialog = Some(dialog);
    }

    /// Drops the current dialog; the container itself lives on
    pub fn clear_dialog(&mut self) {
        self.dialog = None;
    }

    /// Variant hook, run once when the menu first appears
    fn display(&mut self, backend: &mut dyn MenuBackend) -> Result<(), String> {
        if self.variant == GameVariant::DarkSide {
            self.backdrop = Some(backend.load_sheet(DARKSIDE_BACKDROP)?);
        }
        Ok(())
    }

    /// Advances the animation counter and draws the background frame
    ///
    /// Common to all variants; the counter wraps modulo the frame count.
    fn draw(&mut self, backend: &mut dyn MenuBackend) -> Result<(), String> {
        self.animate_ctr = (self.animate_ctr + 1) % self.frame_count;
        if let Some(backdrop) = self.backdrop {
            backend.draw_frame(backdrop, 0, 0, 0)?;
        }
        backend.draw_frame(self.background, self.animate_ctr, 0, 0)
    }

    /// Variant hook: constructs this variant's primary dialog
    fn show_menu_dialog(&mut self, backend: &mut dyn MenuBackend) -> Result<(), String> {
        log::debug!("opening {:?} menu dialog", self.variant);
        let dialog = match self.variant {
            GameVariant::Clouds => MenuDialog::Clouds(CloudsMenuDialog::new(backend)?),
            GameVariant::DarkSide => MenuDialog::DarkSide(DarkSideMenuDialog::new(backend)?),
            GameVariant::WorldOfXeen => MenuDialog::World(WorldMenuDialog::new(backend)?),
        };
        self.set_dialog(dialog);
        Ok(())
    }

    /// One loop iteration: draw, present, route at most one input event
    ///
    /// Returns the chosen action once the session ends.
    pub fn tick(&mut self, backend: &mut dyn MenuBackend) -> Result<Option<MenuAction>, String> {
        if !self.displayed {
            self.display(backend)?;
            self.displayed = true;
        }

        backend.clear()?;
        self.draw(backend)?;
        match self.dialog.as_mut() {
            Some(dialog) => dialog.draw(backend)?,
            None => {
                let x = (SCREEN_WIDTH - text::text_width(PROMPT, 1)) as i32 / 2;
                backend.draw_text(PROMPT, x, SCREEN_HEIGHT as i32 - 18, Color::RGB(222, 222, 170), 1)?;
            }
        }
        backend.present()?;

        let action = match backend.poll_event() {
            Some(event) => self.route_event(event, backend)?,
            None => None,
        };

        if action.is_none() {
            backend.delay_frame();
        }
        Ok(action)
    }

    /// Routes one event to the attract loop or the active dialog
    fn route_event(
        &mut self,
        event: MenuEvent,
        backend: &mut dyn MenuBackend,
    ) -> Result<Option<MenuAction>, String> {
        let (was_options, outcome) = match self.dialog.as_mut() {
            None => {
                // Attract mode: any key or click summons the dialog
                return match event {
                    MenuEvent::Quit => Ok(Some(MenuAction::QuitGame)),
                    MenuEvent::Motion { .. } => Ok(None),
                    _ => {
                        self.show_menu_dialog(backend)?;
                        Ok(None)
                    }
                };
            }
            Some(dialog) => (dialog.is_options(), dialog.handle_event(event)),
        };

        match outcome {
            DialogOutcome::Continue => Ok(None),
            DialogOutcome::Cancel => {
                if was_options {
                    // Back out of options to the primary dialog
                    self.show_menu_dialog(backend)?;
                } else {
                    log::debug!("dialog dismissed, back to attract loop");
                    self.clear_dialog();
                }
                Ok(None)
            }
            DialogOutcome::Terminate(MenuAction::ShowOtherOptions) => {
                log::debug!("switching to other-options dialog");
                self.set_dialog(MenuDialog::Options(OtherOptionsDialog::new(backend)?));
                Ok(None)
            }
            DialogOutcome::Terminate(action) => {
                self.clear_dialog();
                Ok(Some(action))
            }
        }
    }

    /// Runs the session to completion
    pub fn execute(&mut self, backend: &mut dyn MenuBackend) -> Result<MenuAction, String> {
        loop {
            if let Some(action) = self.tick(backend)? {
                return Ok(action);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::testing::MockBackend;
    use sdl2::keyboard::Keycode;

    fn bare_container(frame_count: usize, backend: &mut MockBackend) -> MainMenuContainer {
        let background = backend.load_sheet("clouds_title").unwrap();
        MainMenuContainer::with_background(GameVariant::Clouds, background, frame_count)
    }

    #[test]
    fn test_counter_is_draws_modulo_frame_count() {
        let mut backend = MockBackend::new();
        for frame_count in [1, 2, 5, 9] {
            let mut container = bare_container(frame_count, &mut backend);
            let draws = 2 * frame_count + 3;
            for _ in 0..draws {
                container.draw(&mut backend).unwrap();
            }
            assert_eq!(container.animate_counter(), draws % frame_count);
        }
    }

    #[test]
    fn test_attract_loop_with_no_input() {
        // Four iterations at frame count four: counter back where it
        // started, no dialog ever shown
        let mut backend = MockBackend::new();
        let mut container = bare_container(4, &mut backend);

        for _ in 0..4 {
            assert_eq!(container.tick(&mut backend).unwrap(), None);
        }

        assert_eq!(container.animate_counter(), 0);
        assert!(container.dialog().is_none());
        assert_eq!(backend.presented, 4);
        assert!(backend.captions.iter().any(|c| c == PROMPT));
    }

    #[test]
    fn test_first_input_opens_primary_dialog() {
        let mut backend = MockBackend::new();
        backend.push_event(MenuEvent::Key(Keycode::A));

        let mut container = bare_container(9, &mut backend);
        assert_eq!(container.tick(&mut backend).unwrap(), None);
        assert!(container.dialog().is_some());
    }

    #[test]
    fn test_motion_does_not_open_dialog() {
        let mut backend = MockBackend::new();
        backend.push_event(MenuEvent::Motion { x: 5, y: 5 });

        let mut container = bare_container(9, &mut backend);
        assert_eq!(container.tick(&mut backend).unwrap(), None);
        assert!(container.dialog().is_none());
    }

    #[test]
    fn test_quit_in_attract_mode_ends_session() {
        let mut backend = MockBackend::new();
        backend.push_event(MenuEvent::Quit);

        let mut container = bare_container(9, &mut backend);
        assert_eq!(container.execute(&mut backend).unwrap(), MenuAction::QuitGame);
    }

    #[test]
    fn test_clearing_dialog_leaves_container_intact() {
        let mut backend = MockBackend::new();
        let mut container = bare_container(9, &mut backend);
        container.show_menu_dialog(&mut backend).unwrap();
        assert!(container.dialog().is_some());

        container.clear_dialog();
        assert!(container.dialog().is_none());

        // Container keeps running fine afterwards
        assert_eq!(container.tick(&mut backend).unwrap(), None);
        assert_eq!(container.animate_counter(), 1);
    }

    #[test]
    fn test_start_game_click_scenario() {
        // Open the dialog with a stray click, then click the start button
        let mut backend = MockBackend::new();
        backend.push_event(MenuEvent::Click { x: 5, y: 5 });
        backend.push_event(MenuEvent::Click { x: 115, y: 105 });

        let mut container = MainMenuContainer::new(GameVariant::Clouds, &mut backend).unwrap();
        let action = container.execute(&mut backend).unwrap();

        assert_eq!(action, MenuAction::StartClouds);
        assert!(container.dialog().is_none());
    }

    #[test]
    fn test_cancel_in_primary_dialog_returns_to_attract_loop() {
        let mut backend = MockBackend::new();
        backend.push_event(MenuEvent::Key(Keycode::A));
        backend.push_event(MenuEvent::Cancel);

        let mut container = MainMenuContainer::new(GameVariant::Clouds, &mut backend).unwrap();
        // Open, draw, then cancel
        for _ in 0..3 {
            assert_eq!(container.tick(&mut backend).unwrap(), None);
        }
        assert!(container.dialog().is_none());
    }

    #[test]
    fn test_options_round_trip() {
        let mut backend = MockBackend::new();
        backend.push_event(MenuEvent::Key(Keycode::A)); // open primary
        backend.push_event(MenuEvent::Key(Keycode::O)); // into options
        backend.push_event(MenuEvent::Cancel); // back out

        let mut container = MainMenuContainer::new(GameVariant::WorldOfXeen, &mut backend).unwrap();

        assert_eq!(container.tick(&mut backend).unwrap(), None);
        assert!(!container.dialog().unwrap().is_options());

        // Draw activates the primary dialog, then the O hotkey swaps it
        assert_eq!(container.tick(&mut backend).unwrap(), None);
        assert!(container.dialog().unwrap().is_options());

        // Options is Idle until drawn; this tick draws it and cancels
        assert_eq!(container.tick(&mut backend).unwrap(), None);
        assert!(container.dialog().is_some());
        assert!(!container.dialog().unwrap().is_options());
    }

    #[test]
    fn test_dark_side_display_loads_backdrop() {
        let mut backend = MockBackend::new();
        let mut container = MainMenuContainer::new(GameVariant::DarkSide, &mut backend).unwrap();

        assert_eq!(container.tick(&mut backend).unwrap(), None);
        assert!(backend.loaded.iter().any(|n| n == DARKSIDE_BACKDROP));

        // Backdrop sits beneath the animation frame every tick
        let backdrop = container.backdrop.unwrap();
        assert_eq!(backend.frame_draws[0].0, backdrop);
    }

    #[test]
    fn test_events_before_first_dialog_draw_are_ignored() {
        let mut backend = MockBackend::new();
        backend.push_event(MenuEvent::Key(Keycode::A));

        let mut container = MainMenuContainer::new(GameVariant::Clouds, &mut backend).unwrap();
        assert_eq!(container.tick(&mut backend).unwrap(), None);

        // The dialog exists but has not been drawn yet; a click that would
        // hit the start button must be a no-op this round
        use crate::menu::dialog::DialogState;
        assert_eq!(container.dialog().unwrap().state(), DialogState::Idle);
        let outcome = container
            .dialog
            .as_mut()
            .unwrap()
            .handle_event(MenuEvent::Click { x: 115, y: 105 });
        assert_eq!(outcome, DialogOutcome::Continue);
    }
}
