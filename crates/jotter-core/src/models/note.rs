//! Note model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ColorId;

/// Text stored in place of an empty note
pub const DEFAULT_NOTE_TEXT: &str = "Empty Note";

/// A stable identifier for a note, using UUID v7 (time-sortable)
///
/// Ids survive deletion of other notes, unlike list positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Create a new unique note ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A colored note on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable identifier
    pub id: NoteId,
    /// Plain text content, never blank
    pub text: String,
    /// Background color
    pub color: ColorId,
}

impl Note {
    /// Create a new note, substituting [`DEFAULT_NOTE_TEXT`] for blank text
    #[must_use]
    pub fn new(text: impl Into<String>, color: ColorId) -> Self {
        Self::with_id(NoteId::new(), text, color)
    }

    /// Build a note that keeps an existing id, used when saving over a note
    #[must_use]
    pub fn with_id(id: NoteId, text: impl Into<String>, color: ColorId) -> Self {
        Self {
            id,
            text: normalize_note_text(text.into()),
            color,
        }
    }
}

fn normalize_note_text(text: String) -> String {
    if text.trim().is_empty() {
        DEFAULT_NOTE_TEXT.to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_id_unique() {
        let id1 = NoteId::new();
        let id2 = NoteId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_note_id_parse() {
        let id = NoteId::new();
        let parsed: NoteId = id.as_str().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_note_new_keeps_text() {
        let note = Note::new("Buy milk", ColorId::default());
        assert_eq!(note.text, "Buy milk");
        assert_eq!(note.color.index(), 0);
    }

    #[test]
    fn test_empty_text_becomes_placeholder() {
        assert_eq!(Note::new("", ColorId::default()).text, DEFAULT_NOTE_TEXT);
        assert_eq!(Note::new(" \n\t", ColorId::default()).text, DEFAULT_NOTE_TEXT);
    }

    #[test]
    fn test_with_id_keeps_identity() {
        let original = Note::new("first", ColorId::default());
        let replaced = Note::with_id(original.id, "second", ColorId::new(3).unwrap());
        assert_eq!(replaced.id, original.id);
        assert_eq!(replaced.text, "second");
    }
}
