//! UI Components
//!
//! Components reading and driving the shared `NoteBoard`.

mod color_picker;
mod note_card;
mod note_editor;
mod note_list;

pub use color_picker::ColorPicker;
pub use note_card::NoteCard;
pub use note_editor::NoteEditor;
pub use note_list::NoteList;
