//! Main application component

use dioxus::prelude::*;

use jotter_core::models::Settings;
use jotter_core::NoteBoard;

use crate::state::AppState;
use crate::theme::{resolve_theme, ResolvedTheme};
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    let initial_settings = use_context::<Settings>();
    let mut board = use_signal(NoteBoard::new);
    let settings = use_signal(|| initial_settings.clone());
    let theme = use_signal(|| resolve_theme(initial_settings.theme));

    // Window closed: release the board explicitly
    use_drop(move || {
        if let Ok(mut board) = board.try_write() {
            board.teardown();
        }
    });

    use_context_provider(|| AppState {
        board,
        settings,
        theme,
    });

    let current_theme = theme();
    let colors = current_theme.palette();
    let current_settings = settings();
    let theme_attr = match current_theme {
        ResolvedTheme::Light => "light",
        ResolvedTheme::Dark => "dark",
    };

    rsx! {
        div {
            class: "app-container",
            "data-theme": "{theme_attr}",
            style: "
                min-height: 100vh;
                margin: 0;
                font-family: {current_settings.font_family}, system-ui, -apple-system, sans-serif;
                font-size: {current_settings.font_size}px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",
            Home {}
        }
    }
}
