//! Data models for Jotter

mod note;
mod palette;
mod settings;

pub use note::{Note, NoteId, DEFAULT_NOTE_TEXT};
pub use palette::{Color, ColorId, PALETTE};
pub use settings::{Settings, ThemeMode};
