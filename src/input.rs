use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;

/// One menu input unit
///
/// The container loop polls at most one of these per iteration. Raw SDL2
/// events are translated by [`translate_event`]; anything the menu does
/// not understand is dropped there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuEvent {
    /// Left pointer click at screen coordinates
    Click { x: i32, y: i32 },

    /// Pointer motion; only ever updates visual highlight state
    Motion { x: i32, y: i32 },

    /// A key press (Escape is reported as `Cancel` instead)
    Key(Keycode),

    /// The designated cancel gesture
    Cancel,

    /// Window close
    Quit,
}

/// Action identifiers handed back to the surrounding interpreter
///
/// The menu never executes these itself; it only resolves input to an
/// action and returns it. Dispatch is external.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    StartClouds,
    StartDarkSide,
    LoadGame,
    ViewCloudsCredits,
    ViewDarkSideCredits,
    /// Opens the secondary options dialog instead of ending the session
    ShowOtherOptions,
    QuitGame,
}

impl MenuAction {
    /// Human-readable description for the dispatch hand-off
    pub fn describe(&self) -> &'static str {
        match self {
            MenuAction::StartClouds => "start the Clouds game",
            MenuAction::StartDarkSide => "start the Dark Side game",
            MenuAction::LoadGame => "load a saved game",
            MenuAction::ViewCloudsCredits => "view the Clouds credits",
            MenuAction::ViewDarkSideCredits => "view the Dark Side credits",
            MenuAction::ShowOtherOptions => "show other options",
            MenuAction::QuitGame => "quit",
        }
    }
}

/// Translates a raw SDL2 event into a menu event
///
/// Unrecognized events (window focus, key-up, non-left buttons, ...) are
/// silently dropped: no state change, the loop just continues.
pub fn translate_event(event: Event) -> Option<MenuEvent> {
    match event {
        Event::Quit { .. } => Some(MenuEvent::Quit),
        Event::KeyDown {
            keycode: Some(Keycode::Escape),
            ..
        } => Some(MenuEvent::Cancel),
        Event::KeyDown {
            keycode: Some(key), ..
        } => Some(MenuEvent::Key(key)),
        Event::MouseButtonDown {
            mouse_btn: MouseButton::Left,
            x,
            y,
            ..
        } => Some(MenuEvent::Click { x, y }),
        Event::MouseMotion { x, y, .. } => Some(MenuEvent::Motion { x, y }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;
    use sdl2::mouse::MouseState;

    fn key_down(keycode: Keycode) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(keycode),
            scancode: None,
            keymod: Mod::empty(),
            repeat: false,
        }
    }

    #[test]
    fn test_quit_translates() {
        assert_eq!(
            translate_event(Event::Quit { timestamp: 0 }),
            Some(MenuEvent::Quit)
        );
    }

    #[test]
    fn test_escape_is_cancel() {
        assert_eq!(
            translate_event(key_down(Keycode::Escape)),
            Some(MenuEvent::Cancel)
        );
    }

    #[test]
    fn test_other_keys_pass_through() {
        assert_eq!(
            translate_event(key_down(Keycode::S)),
            Some(MenuEvent::Key(Keycode::S))
        );
    }

    #[test]
    fn test_left_click_translates() {
        let event = Event::MouseButtonDown {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mouse_btn: MouseButton::Left,
            clicks: 1,
            x: 120,
            y: 80,
        };
        assert_eq!(translate_event(event), Some(MenuEvent::Click { x: 120, y: 80 }));
    }

    #[test]
    fn test_right_click_is_dropped() {
        let event = Event::MouseButtonDown {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mouse_btn: MouseButton::Right,
            clicks: 1,
            x: 120,
            y: 80,
        };
        assert_eq!(translate_event(event), None);
    }

    #[test]
    fn test_motion_translates() {
        let event = Event::MouseMotion {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mousestate: MouseState::from_sdl_state(0),
            x: 10,
            y: 20,
            xrel: 1,
            yrel: 1,
        };
        assert_eq!(translate_event(event), Some(MenuEvent::Motion { x: 10, y: 20 }));
    }

    #[test]
    fn test_key_up_is_dropped() {
        let event = Event::KeyUp {
            timestamp: 0,
            window_id: 0,
            keycode: Some(Keycode::S),
            scancode: None,
            keymod: Mod::empty(),
            repeat: false,
        };
        assert_eq!(translate_event(event), None);
    }
}
