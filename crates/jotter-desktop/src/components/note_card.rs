//! Note card component

use dioxus::prelude::*;

use jotter_core::{NoteId, NoteView};

use crate::state::AppState;

/// A single colored note box with a close control
#[component]
pub fn NoteCard(
    view: NoteView,
    on_select: EventHandler<NoteId>,
    on_close: EventHandler<NoteId>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let font_family = state.settings.read().font_family.clone();

    let note_id = view.id;
    let background = view.color.color().hex;
    let outline = if view.selected {
        format!("2px solid {}", colors.accent)
    } else {
        "2px solid transparent".to_string()
    };

    rsx! {
        li {
            class: if view.selected { "note selected" } else { "note" },
            "data-position": "{view.position}",
            style: "
                position: relative;
                width: 160px;
                min-height: 100px;
                padding: 12px 28px 12px 12px;
                box-sizing: border-box;
                border-radius: 6px;
                outline: {outline};
                cursor: pointer;
                background: {background};
                color: {colors.note_text};
            ",
            onclick: move |_| on_select.call(note_id),

            p {
                class: "note-text",
                style: "
                    margin: 0;
                    white-space: pre-wrap;
                    word-break: break-word;
                    font-family: {font_family}, system-ui, sans-serif;
                ",
                "{view.text}"
            }

            button {
                r#type: "button",
                class: "close-note",
                title: "Delete note",
                style: "
                    position: absolute;
                    top: 4px;
                    right: 4px;
                    border: none;
                    background: transparent;
                    font-size: 16px;
                    cursor: pointer;
                    color: {colors.note_text};
                ",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    on_close.call(note_id);
                },
                "×"
            }
        }
    }
}
