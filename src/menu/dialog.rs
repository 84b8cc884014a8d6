//! Dialog State Machine and Buttons
//!
//! A dialog is a modal input surface with an immutable set of sprite
//! buttons. It starts `Idle`, becomes `Active` on its first draw, and
//! `Terminated` once a terminating input was observed. Input that resolves
//! to nothing is a silent no-op.
//!
//! The concrete dialogs form a closed set ([`MenuDialog`]); the three
//! primary ones share the default key handling in
//! [`handle_main_menu_event`], the options dialog handles its own keys.

use crate::backend::{MenuBackend, SpriteHandle};
use crate::input::{MenuAction, MenuEvent};
use crate::menu::clouds::CloudsMenuDialog;
use crate::menu::dark_side::DarkSideMenuDialog;
use crate::menu::options::OtherOptionsDialog;
use crate::menu::world::WorldMenuDialog;
use sdl2::keyboard::Keycode;
use sdl2::rect::{Point, Rect};

/// Lifecycle state of a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    /// Constructed, not yet drawn; input is ignored
    Idle,
    /// Drawing and accepting input
    Active,
    /// A terminating input was observed
    Terminated,
}

/// Result of feeding one event to a dialog
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialogOutcome {
    /// Nothing terminating happened; keep looping
    Continue,
    /// The user backed out of this dialog
    Cancel,
    /// An action was chosen
    Terminate(MenuAction),
}

/// A clickable, hotkey-triggerable screen region
///
/// Buttons are loaded once at dialog construction and immutable after.
/// `frame` is the sheet frame drawn for the button; `frame + 1` is its
/// highlighted pair.
#[derive(Debug, Clone)]
pub struct Button {
    pub bounds: Rect,
    pub frame: usize,
    pub action: MenuAction,
    pub hotkey: Option<Keycode>,
}

impl Button {
    pub fn new(bounds: Rect, frame: usize, action: MenuAction, hotkey: Option<Keycode>) -> Self {
        Button {
            bounds,
            frame,
            action,
            hotkey,
        }
    }
}

/// Ordered button collection with hit-testing
///
/// Registration order is precedence order: where regions overlap, the
/// first-registered button wins.
#[derive(Default)]
pub struct ButtonSet {
    buttons: Vec<Button>,
    highlighted: Option<usize>,
}

impl ButtonSet {
    pub fn new() -> Self {
        ButtonSet {
            buttons: Vec::new(),
            highlighted: None,
        }
    }

    pub fn add(&mut self, bounds: Rect, frame: usize, action: MenuAction, hotkey: Option<Keycode>) {
        self.buttons.push(Button::new(bounds, frame, action, hotkey));
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Resolves a point to the first-registered button containing it
    pub fn hit_test(&self, x: i32, y: i32) -> Option<MenuAction> {
        self.buttons
            .iter()
            .find(|b| b.bounds.contains_point(Point::new(x, y)))
            .map(|b| b.action)
    }

    /// Resolves a key to the first button bound to it
    pub fn hotkey_match(&self, key: Keycode) -> Option<MenuAction> {
        self.buttons
            .iter()
            .find(|b| b.hotkey == Some(key))
            .map(|b| b.action)
    }

    /// Updates the hover highlight; purely visual
    pub fn update_highlight(&mut self, x: i32, y: i32) {
        self.highlighted = self
            .buttons
            .iter()
            .position(|b| b.bounds.contains_point(Point::new(x, y)));
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Draws every button, hovered ones with their highlight frame
    pub fn draw(&self, backend: &mut dyn MenuBackend, sheet: SpriteHandle) -> Result<(), String> {
        for (i, button) in self.buttons.iter().enumerate() {
            let frame = if self.highlighted == Some(i) {
                button.frame + 1
            } else {
                button.frame
            };
            backend.draw_frame(sheet, frame, button.bounds.x(), button.bounds.y())?;
        }
        Ok(())
    }
}

/// Default event handling shared by the primary main-menu dialogs
///
/// Generic key remapping happens before variant hit-testing: Escape backs
/// out, Enter/Space triggers the dialog's default action. The options
/// dialog does not route through here.
pub(crate) fn handle_main_menu_event(
    buttons: &mut ButtonSet,
    state: &mut DialogState,
    event: MenuEvent,
    default_action: MenuAction,
) -> DialogOutcome {
    if *state != DialogState::Active {
        return DialogOutcome::Continue;
    }

    match event {
        MenuEvent::Quit => {
            *state = DialogState::Terminated;
            DialogOutcome::Terminate(MenuAction::QuitGame)
        }
        MenuEvent::Cancel => {
            *state = DialogState::Terminated;
            DialogOutcome::Cancel
        }
        MenuEvent::Key(Keycode::Return | Keycode::KpEnter | Keycode::Space) => {
            *state = DialogState::Terminated;
            DialogOutcome::Terminate(default_action)
        }
        MenuEvent::Key(key) => match buttons.hotkey_match(key) {
            Some(action) => {
                *state = DialogState::Terminated;
                DialogOutcome::Terminate(action)
            }
            None => DialogOutcome::Continue,
        },
        MenuEvent::Click { x, y } => match buttons.hit_test(x, y) {
            Some(action) => {
                *state = DialogState::Terminated;
                DialogOutcome::Terminate(action)
            }
            None => DialogOutcome::Continue,
        },
        MenuEvent::Motion { x, y } => {
            buttons.update_highlight(x, y);
            DialogOutcome::Continue
        }
    }
}

/// The closed set of menu dialogs
pub enum MenuDialog {
    Clouds(CloudsMenuDialog),
    DarkSide(DarkSideMenuDialog),
    World(WorldMenuDialog),
    Options(OtherOptionsDialog),
}

impl MenuDialog {
    /// Draws the dialog over the container's background
    pub fn draw(&mut self, backend: &mut dyn MenuBackend) -> Result<(), String> {
        match self {
            MenuDialog::Clouds(dialog) => dialog.draw(backend),
            MenuDialog::DarkSide(dialog) => dialog.draw(backend),
            MenuDialog::World(dialog) => dialog.draw(backend),
            MenuDialog::Options(dialog) => dialog.draw(backend),
        }
    }

    /// Feeds one event to the dialog
    pub fn handle_event(&mut self, event: MenuEvent) -> DialogOutcome {
        match self {
            MenuDialog::Clouds(dialog) => dialog.handle_event(event),
            MenuDialog::DarkSide(dialog) => dialog.handle_event(event),
            MenuDialog::World(dialog) => dialog.handle_event(event),
            MenuDialog::Options(dialog) => dialog.handle_event(event),
        }
    }

    pub fn state(&self) -> DialogState {
        match self {
            MenuDialog::Clouds(dialog) => dialog.state(),
            MenuDialog::DarkSide(dialog) => dialog.state(),
            MenuDialog::World(dialog) => dialog.state(),
            MenuDialog::Options(dialog) => dialog.state(),
        }
    }

    pub fn is_options(&self) -> bool {
        matches!(self, MenuDialog::Options(_))
    }
}
