//! Application state management
//!
//! State shared with components through a Dioxus context provider.

use dioxus::prelude::*;

use jotter_core::models::Settings;
use jotter_core::NoteBoard;

use crate::theme::ResolvedTheme;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// The single note board, created once in `App`
    pub board: Signal<NoteBoard>,
    /// Settings loaded at startup
    pub settings: Signal<Settings>,
    /// Resolved theme for the window chrome
    pub theme: Signal<ResolvedTheme>,
}
