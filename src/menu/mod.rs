//! Main-Menu Shell
//!
//! The menu subsystem: one session container per shown menu, a closed set
//! of game-variant dialogs, and sprite buttons with hit-testing.
//!
//! # Architecture
//!
//! The container owns the background animation and an owning slot for the
//! active dialog; dialogs never outlive their container. Everything runs
//! on the caller's thread inside a polling draw/input loop: each iteration
//! draws one frame and routes at most one input event. Input that resolves
//! to an action ends the session and the action is handed back to the
//! caller for dispatch.
//!
//! # Available Components
//!
//! - [`show`] - entry point; runs the menu for the configured variant
//! - [`MainMenuContainer`] - one running menu session
//! - [`MenuDialog`] - the closed set of dialogs (three primary + options)
//! - [`ButtonSet`] - ordered buttons, first-registered wins on overlap

pub mod clouds;
pub mod container;
pub mod dark_side;
pub mod dialog;
pub mod options;
pub mod world;

#[cfg(test)]
pub mod testing;

pub use container::{show, GameVariant, MainMenuContainer};
pub use dialog::{Button, ButtonSet, DialogOutcome, DialogState, MenuDialog};

/// Menu screen resolution (art is authored against this logical size)
pub const SCREEN_WIDTH: u32 = 320;
pub const SCREEN_HEIGHT: u32 = 200;
