//! Note editor: text field, color picker, add and save controls

use std::rc::Rc;

use dioxus::prelude::*;

use super::ColorPicker;
use crate::state::AppState;

/// Editor panel for composing a new note or editing the selected one
#[component]
pub fn NoteEditor() -> Element {
    let mut state = use_context::<AppState>();
    let mut input_element: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let colors = (state.theme)().palette();

    let (draft, editing) = {
        let board = state.board.read();
        (board.draft().to_string(), board.selected_note().is_some())
    };

    let add_new = move |_| {
        let wants_focus = {
            let mut board = state.board.write();
            board.add_new();
            board.take_focus_request()
        };

        if let (true, Some(element)) = (wants_focus, input_element()) {
            spawn(async move {
                if let Err(e) = element.set_focus(true).await {
                    tracing::debug!("Could not focus note input: {:?}", e);
                }
            });
        }
    };

    let save = move |_| {
        let result = state.board.write().save_draft();
        match result {
            Ok(id) => tracing::info!("Saved note {}", id),
            Err(e) => tracing::warn!("Failed to save note: {}", e),
        }
    };

    rsx! {
        div {
            class: "note-editor",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                padding: 16px;
                border-bottom: 1px solid {colors.border};
                background: {colors.bg_secondary};
            ",

            textarea {
                id: "textField",
                class: "editor-textarea",
                style: "
                    min-height: 72px;
                    width: 100%;
                    box-sizing: border-box;
                    padding: 8px;
                    border: 1px solid {colors.border};
                    border-radius: 6px;
                    resize: vertical;
                    font-family: inherit;
                    font-size: inherit;
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                ",
                value: "{draft}",
                placeholder: if editing { "Edit note..." } else { "New note..." },
                onmounted: move |evt: MountedEvent| input_element.set(Some(evt.data())),
                oninput: move |evt: FormEvent| state.board.write().set_draft(evt.value()),
            }

            div {
                class: "editor-actions",
                style: "display: flex; align-items: center; gap: 8px;",

                ColorPicker {}

                // Spacer
                div { style: "flex: 1;" }

                button {
                    id: "addButton",
                    r#type: "button",
                    style: "
                        padding: 6px 12px;
                        border-radius: 6px;
                        border: 1px solid {colors.border};
                        background: {colors.bg_primary};
                        color: {colors.text_primary};
                        cursor: pointer;
                    ",
                    onclick: add_new,
                    "+ New"
                }

                button {
                    id: "saveButton",
                    r#type: "button",
                    style: "
                        padding: 6px 12px;
                        border-radius: 6px;
                        border: none;
                        background: {colors.accent};
                        color: {colors.accent_text};
                        cursor: pointer;
                    ",
                    onclick: save,
                    "Save"
                }
            }
        }
    }
}
