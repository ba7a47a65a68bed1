//! Home view - main application screen

use dioxus::prelude::*;

use crate::components::{NoteEditor, NoteList};

/// Editor on top, notes below
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home-container",
            style: "display: flex; flex-direction: column; height: 100vh;",

            NoteEditor {}

            div {
                class: "content-area",
                style: "flex: 1; overflow-y: auto;",

                NoteList {}
            }
        }
    }
}
