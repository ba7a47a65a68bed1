//! Note board controller
//!
//! `NoteBoard` owns the notes, the editor state (draft text, selected note,
//! selected color, picker state) and the rendered list. Every operation that
//! changes what the list shows rebuilds the rendered list from scratch.

use crate::error::{Error, Result};
use crate::models::{Color, ColorId, Note, NoteId};

/// Rendered projection of one note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteView {
    pub id: NoteId,
    /// Position in the board, 0-based
    pub position: usize,
    pub text: String,
    /// Displayed color. For the selected note this is the pending color choice.
    pub color: ColorId,
    pub selected: bool,
}

/// Controller binding editor input to the ordered note collection
#[derive(Debug, Default)]
pub struct NoteBoard {
    notes: Vec<Note>,
    selected_note: Option<NoteId>,
    selected_color: ColorId,
    draft: String,
    picker_open: bool,
    focus_requested: bool,
    rendered: Vec<NoteView>,
    render_count: u64,
}

impl NoteBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // Queries

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Current position of a note in the board
    pub fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }

    pub const fn selected_note(&self) -> Option<NoteId> {
        self.selected_note
    }

    pub const fn selected_color(&self) -> ColorId {
        self.selected_color
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub const fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    /// Color shown on the picker indicator
    pub const fn indicator_color(&self) -> Color {
        self.selected_color.color()
    }

    pub fn rendered(&self) -> &[NoteView] {
        &self.rendered
    }

    /// Number of full rebuilds since construction
    pub const fn render_count(&self) -> u64 {
        self.render_count
    }

    // Operations

    /// Start composing a new note.
    pub fn add_new(&mut self) {
        self.reset_editor();
        self.focus_requested = true;
        tracing::debug!("Composing new note");
        self.render();
    }

    /// Load an existing note into the editor.
    pub fn select_existing(&mut self, id: NoteId) -> Result<()> {
        let (text, color) = self
            .get(id)
            .map(|note| (note.text.clone(), note.color))
            .ok_or(Error::NoteNotFound(id))?;
        self.draft = text;
        self.selected_color = color;
        self.selected_note = Some(id);
        tracing::debug!("Selected note {}", id);
        self.render();
        Ok(())
    }

    /// Store a note and reset the editor.
    ///
    /// Blank `text` is replaced by the placeholder. `None` for `color` uses the
    /// selected color. `None` for `target` appends, otherwise the target note is
    /// replaced in place. A stale `target` leaves the board untouched.
    pub fn save(
        &mut self,
        text: &str,
        color: Option<ColorId>,
        target: Option<NoteId>,
    ) -> Result<NoteId> {
        let color = color.unwrap_or(self.selected_color);

        let id = match target {
            None => {
                let note = Note::new(text, color);
                let id = note.id;
                self.notes.push(note);
                tracing::debug!("Added note {} ({})", id, color);
                id
            }
            Some(id) => {
                let slot = self
                    .notes
                    .iter_mut()
                    .find(|note| note.id == id)
                    .ok_or(Error::NoteNotFound(id))?;
                *slot = Note::with_id(id, text, color);
                tracing::debug!("Updated note {} ({})", id, color);
                id
            }
        };

        self.reset_editor();
        self.render();
        Ok(id)
    }

    /// Save the editor contents: draft text, selected color, selected note.
    pub fn save_draft(&mut self) -> Result<NoteId> {
        let text = std::mem::take(&mut self.draft);
        let color = self.selected_color;
        let target = self.selected_note;
        let result = self.save(&text, Some(color), target);
        if result.is_err() {
            self.draft = text;
        }
        result
    }

    /// Remove a note. The draft and selection are cleared even when `id` is stale.
    pub fn delete(&mut self, id: NoteId) -> Result<Note> {
        self.draft.clear();
        self.selected_note = None;

        let removed = self
            .position(id)
            .map(|position| self.notes.remove(position))
            .ok_or(Error::NoteNotFound(id));
        if removed.is_ok() {
            tracing::debug!("Deleted note {}", id);
        }

        self.render();
        removed
    }

    /// Pick a palette color. The selected note previews it until saved.
    pub fn select_color(&mut self, color: ColorId) {
        self.picker_open = false;
        self.selected_color = color;
        self.render();
    }

    pub fn toggle_picker(&mut self) {
        self.picker_open = !self.picker_open;
    }

    /// Mirror the text field contents.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Returns whether the text field should take focus, clearing the request.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    /// Rebuild the rendered list from the notes.
    pub fn render(&mut self) {
        self.revalidate_selection();

        let selected = self.selected_note;
        let preview_color = self.selected_color;
        self.rendered = self
            .notes
            .iter()
            .enumerate()
            .map(|(position, note)| {
                let is_selected = selected == Some(note.id);
                NoteView {
                    id: note.id,
                    position,
                    text: note.text.clone(),
                    color: if is_selected { preview_color } else { note.color },
                    selected: is_selected,
                }
            })
            .collect();
        self.render_count += 1;
    }

    /// Drop every note and all editor state. Returns the number of notes discarded.
    pub fn teardown(&mut self) -> usize {
        let discarded = std::mem::take(self).notes.len();
        tracing::info!("Note board torn down, {} notes discarded", discarded);
        discarded
    }

    fn reset_editor(&mut self) {
        self.draft.clear();
        self.selected_note = None;
        self.selected_color = ColorId::default();
    }

    fn revalidate_selection(&mut self) {
        if let Some(id) = self.selected_note {
            if self.get(id).is_none() {
                tracing::debug!("Clearing stale selection {}", id);
                self.selected_note = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{DEFAULT_NOTE_TEXT, PALETTE};

    fn color(index: usize) -> ColorId {
        ColorId::new(index).unwrap()
    }

    fn board_with(texts: &[&str]) -> (NoteBoard, Vec<NoteId>) {
        let mut board = NoteBoard::new();
        let ids = texts
            .iter()
            .map(|text| board.save(text, None, None).unwrap())
            .collect();
        (board, ids)
    }

    fn texts(board: &NoteBoard) -> Vec<&str> {
        board.notes().iter().map(|note| note.text.as_str()).collect()
    }

    #[test]
    fn empty_text_saves_placeholder() {
        let mut board = NoteBoard::new();
        let id = board.save("", None, None).unwrap();
        assert_eq!(board.get(id).unwrap().text, DEFAULT_NOTE_TEXT);

        let id = board.save("   ", None, None).unwrap();
        assert_eq!(board.get(id).unwrap().text, DEFAULT_NOTE_TEXT);
    }

    #[test]
    fn unspecified_color_uses_selected_color() {
        let mut board = NoteBoard::new();
        board.select_color(color(3));
        let id = board.save("Call mom", None, None).unwrap();
        assert_eq!(board.get(id).unwrap().color, color(3));
    }

    #[test]
    fn explicit_color_wins_over_selection() {
        let mut board = NoteBoard::new();
        board.select_color(color(3));
        let id = board.save("Call mom", Some(color(1)), None).unwrap();
        assert_eq!(board.get(id).unwrap().color, color(1));
    }

    #[test]
    fn save_resets_editor() {
        let mut board = NoteBoard::new();
        board.set_draft("draft");
        board.select_color(color(2));
        board.save_draft().unwrap();

        assert_eq!(board.draft(), "");
        assert_eq!(board.selected_note(), None);
        assert_eq!(board.selected_color(), ColorId::default());
        assert_eq!(board.notes()[0].color, color(2));
    }

    #[test]
    fn rendered_count_tracks_notes_through_adds_and_deletes() {
        let (mut board, ids) = board_with(&["a", "b", "c", "d"]);
        assert_eq!(board.rendered().len(), 4);

        board.delete(ids[1]).unwrap();
        assert_eq!(board.rendered().len(), board.len());

        board.add_new();
        board.save_draft().unwrap();
        board.delete(ids[0]).unwrap();
        board.delete(ids[3]).unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(board.rendered().len(), board.len());
    }

    #[test]
    fn delete_shifts_later_notes_without_retargeting() {
        let (mut board, ids) = board_with(&["a", "b", "c", "d"]);

        let removed = board.delete(ids[1]).unwrap();
        assert_eq!(removed.text, "b");
        assert_eq!(texts(&board), vec!["a", "c", "d"]);
        assert_eq!(board.position(ids[2]), Some(1));
        assert_eq!(board.position(ids[3]), Some(2));

        // The former third note is addressed by its id, not its old position.
        board.delete(ids[2]).unwrap();
        assert_eq!(texts(&board), vec!["a", "d"]);

        assert!(matches!(board.delete(ids[1]), Err(Error::NoteNotFound(id)) if id == ids[1]));
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn rendered_positions_follow_sequence_order() {
        let (mut board, ids) = board_with(&["a", "b", "c"]);
        board.delete(ids[0]).unwrap();

        let positions: Vec<(NoteId, usize)> = board
            .rendered()
            .iter()
            .map(|view| (view.id, view.position))
            .collect();
        assert_eq!(positions, vec![(ids[1], 0), (ids[2], 1)]);
    }

    #[test]
    fn select_then_save_replaces_in_place() {
        let (mut board, ids) = board_with(&["a", "b", "c"]);

        board.select_existing(ids[1]).unwrap();
        assert_eq!(board.draft(), "b");
        board.set_draft("b edited");
        let saved = board.save_draft().unwrap();

        assert_eq!(saved, ids[1]);
        assert_eq!(board.len(), 3);
        assert_eq!(texts(&board), vec!["a", "b edited", "c"]);
    }

    #[test]
    fn select_existing_loads_color_and_marks_view() {
        let mut board = NoteBoard::new();
        let id = board.save("blue", Some(color(2)), None).unwrap();

        board.select_existing(id).unwrap();
        assert_eq!(board.selected_color(), color(2));
        assert_eq!(board.indicator_color(), PALETTE[2]);
        assert!(board.rendered()[0].selected);
    }

    #[test]
    fn select_unknown_note_is_rejected() {
        let (mut board, ids) = board_with(&["a"]);
        board.delete(ids[0]).unwrap();

        assert!(board.select_existing(ids[0]).is_err());
        assert_eq!(board.selected_note(), None);
    }

    #[test]
    fn select_color_previews_on_selected_note_before_save() {
        let (mut board, ids) = board_with(&["a", "b"]);
        board.select_existing(ids[0]).unwrap();
        board.select_color(color(2));

        assert_eq!(board.rendered()[0].color, color(2));
        assert_eq!(board.rendered()[1].color, color(0));
        assert_eq!(board.get(ids[0]).unwrap().color, color(0));
    }

    #[test]
    fn add_new_resets_indicator_and_requests_focus() {
        let (mut board, ids) = board_with(&["a"]);
        board.select_existing(ids[0]).unwrap();
        board.select_color(color(3));

        board.add_new();
        assert_eq!(board.indicator_color(), PALETTE[0]);
        assert_eq!(board.selected_note(), None);
        assert!(board.rendered().iter().all(|view| !view.selected));
        assert!(board.take_focus_request());
        assert!(!board.take_focus_request());
    }

    #[test]
    fn delete_always_clears_editor() {
        let (mut board, ids) = board_with(&["a", "b"]);
        board.select_existing(ids[1]).unwrap();

        board.delete(ids[0]).unwrap();
        assert_eq!(board.draft(), "");
        assert_eq!(board.selected_note(), None);

        board.set_draft("typing");
        assert!(board.delete(ids[0]).is_err());
        assert_eq!(board.draft(), "");
    }

    #[test]
    fn save_to_stale_target_leaves_board_untouched() {
        let (mut board, ids) = board_with(&["a", "b"]);
        board.delete(ids[0]).unwrap();
        let before = board.notes().to_vec();

        let error = board.save("zombie", None, Some(ids[0])).unwrap_err();
        assert!(matches!(error, Error::NoteNotFound(_)));
        assert_eq!(board.notes(), before.as_slice());
    }

    #[test]
    fn failed_save_draft_keeps_draft() {
        let (mut board, ids) = board_with(&["a"]);
        board.select_existing(ids[0]).unwrap();
        board.set_draft("edited");
        board.notes.clear();

        assert!(board.save_draft().is_err());
        assert_eq!(board.draft(), "edited");
    }

    #[test]
    fn render_clears_stale_selection() {
        let (mut board, ids) = board_with(&["a"]);
        board.select_existing(ids[0]).unwrap();
        board.notes.clear();

        board.render();
        assert_eq!(board.selected_note(), None);
        assert!(board.rendered().is_empty());
    }

    #[test]
    fn picker_toggles_and_closes_on_color_choice() {
        let mut board = NoteBoard::new();
        assert!(!board.is_picker_open());
        board.toggle_picker();
        assert!(board.is_picker_open());
        board.select_color(color(1));
        assert!(!board.is_picker_open());
        board.toggle_picker();
        board.toggle_picker();
        assert!(!board.is_picker_open());
    }

    #[test]
    fn every_mutation_rebuilds_the_list() {
        let mut board = NoteBoard::new();
        let before = board.render_count();
        let id = board.save("a", None, None).unwrap();
        board.select_existing(id).unwrap();
        board.select_color(color(1));
        board.delete(id).unwrap();
        board.add_new();
        assert_eq!(board.render_count(), before + 5);
    }

    #[test]
    fn teardown_discards_everything() {
        let (mut board, _) = board_with(&["a", "b"]);
        board.set_draft("pending");

        assert_eq!(board.teardown(), 2);
        assert!(board.is_empty());
        assert!(board.rendered().is_empty());
        assert_eq!(board.draft(), "");
    }

    #[test]
    fn buy_milk_scenario() {
        let mut board = NoteBoard::new();

        board.add_new();
        board.set_draft("Buy milk");
        let id = board.save_draft().unwrap();
        assert_eq!(board.notes(), &[Note::with_id(id, "Buy milk", color(0))]);

        board.select_existing(id).unwrap();
        board.select_color(color(2));
        board.save_draft().unwrap();
        assert_eq!(board.notes(), &[Note::with_id(id, "Buy milk", color(2))]);

        board.delete(id).unwrap();
        assert!(board.is_empty());
        assert!(board.rendered().is_empty());
    }
}
