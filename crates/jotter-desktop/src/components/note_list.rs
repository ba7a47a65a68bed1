//! Note list component

use dioxus::prelude::*;

use jotter_core::NoteId;

use super::NoteCard;
use crate::state::AppState;

/// One card per rendered note, in board order
#[component]
pub fn NoteList() -> Element {
    let mut state = use_context::<AppState>();
    let views = state.board.read().rendered().to_vec();
    let colors = (state.theme)().palette();

    rsx! {
        ul {
            id: "notesList",
            class: "note-list",
            style: "
                list-style: none;
                margin: 0;
                padding: 16px;
                display: flex;
                flex-wrap: wrap;
                gap: 12px;
            ",

            if views.is_empty() {
                li {
                    style: "
                        width: 100%;
                        padding: 20px;
                        text-align: center;
                        color: {colors.text_muted};
                    ",
                    "No notes yet"
                }
            } else {
                for view in views {
                    {
                        let note_id = view.id;

                        rsx! {
                            NoteCard {
                                key: "{note_id}",
                                view,
                                on_select: move |id: NoteId| {
                                    let result = state.board.write().select_existing(id);
                                    if let Err(e) = result {
                                        tracing::warn!("Failed to select note: {}", e);
                                    }
                                },
                                on_close: move |id: NoteId| {
                                    let result = state.board.write().delete(id);
                                    if let Err(e) = result {
                                        tracing::warn!("Failed to delete note: {}", e);
                                    }
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
