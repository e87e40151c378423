use std::collections::HashSet;
use std::env;

use chrono::Utc;
use ratatui::Frame;
use uuid::Uuid;

use crate::filter::{self, FilterState};
use crate::handlers::clipboard;
use crate::models::{Snippet, SnippetDraft, SnippetStore};
use crate::ui::{add_modal, board, components};

/// Input Mode Enumeration
/// Determines which part of the board currently owns the keyboard. Keys are
/// routed by mode first, so the same keystroke can navigate the list in
/// Normal mode and insert a character while the form is open. The mode also
/// drives the context shortcuts in the bottom bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    TagFilter,
    AddForm,
}

impl Default for InputMode {
    fn default() -> Self {
        InputMode::Normal
    }
}

/// Pending destructive action awaiting a yes/no answer. Deletes are armed
/// here first; nothing leaves the collection until the user confirms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationState {
    None,
    DeleteSnippet { snippet_id: Uuid },
}

/// Field focus inside the add-snippet form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Language,
    Tags,
    Code,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Language,
            FormField::Language => FormField::Tags,
            FormField::Tags => FormField::Code,
            FormField::Code => FormField::Title,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::Title => FormField::Code,
            FormField::Description => FormField::Title,
            FormField::Language => FormField::Description,
            FormField::Tags => FormField::Language,
            FormField::Code => FormField::Tags,
        }
    }
}

/// Classification of the feedback line shown after an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Added,
    Deleted,
    ValidationFailed,
    Copied,
    CopyFailed,
}

/// Outcome notification handed to the presentation layer after an intent:
/// what happened, and the human-readable line to show for it.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Main Application State Container
/// Holds the snippet store, the filter, the form session, and everything the
/// renderer reads. All user intents arrive as method calls; every mutating
/// intent ends by recomputing the visible subset, so the renderer only ever
/// reads derived state and never filters on its own.
#[derive(Debug)]
pub struct App {
    pub store: SnippetStore,
    pub filter: FilterState,
    pub input_mode: InputMode,
    pub confirmation: ConfirmationState,

    /// Draft of the add form; `Some` exactly while the form is open.
    pub form: Option<SnippetDraft>,
    pub form_field: FormField,

    /// Ids of the snippets passing the current filter, collection order.
    pub visible_ids: Vec<Uuid>,
    /// Cursor into `visible_ids`.
    pub selected_index: usize,
    /// Cursor into the tag index while the tag filter row has focus.
    pub tag_cursor: usize,
    /// Cards currently expanded to their full code body.
    pub expanded: HashSet<Uuid>,

    pub notice: Option<Notice>,
    pub author: String,
}

impl App {
    /// A fresh board preloaded with the bundled sample snippets. The author
    /// for new snippets comes from `$USER`, falling back to "anonymous".
    pub fn new() -> Self {
        let author = env::var("USER").unwrap_or_else(|_| String::from("anonymous"));

        let mut app = Self {
            store: SnippetStore::with_seed(),
            filter: FilterState::new(),
            input_mode: InputMode::Normal,
            confirmation: ConfirmationState::None,
            form: None,
            form_field: FormField::Title,
            visible_ids: Vec::new(),
            selected_index: 0,
            tag_cursor: 0,
            expanded: HashSet::new(),
            notice: None,
            author,
        };
        app.refresh_visible();
        app
    }

    /// Recomputes the visible id list from the store and the filter, then
    /// clamps the cursors. Called by every intent that can change either
    /// input; there is no hidden dependency tracking anywhere else.
    pub fn refresh_visible(&mut self) {
        self.visible_ids = filter::apply(self.store.list(), &self.filter)
            .into_iter()
            .map(|s| s.id)
            .collect();

        if self.visible_ids.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.visible_ids.len() - 1);
        }

        let tag_count = filter::tag_index(self.store.list()).len();
        if tag_count == 0 {
            self.tag_cursor = 0;
        } else {
            self.tag_cursor = self.tag_cursor.min(tag_count - 1);
        }
    }

    /// Distinct tags across the whole store, first-seen order.
    pub fn tag_index(&self) -> Vec<String> {
        filter::tag_index(self.store.list())
    }

    /// The snippets passing the current filter, collection order.
    pub fn visible_snippets(&self) -> Vec<&Snippet> {
        self.visible_ids
            .iter()
            .filter_map(|id| self.store.get(*id))
            .collect()
    }

    pub fn selected_snippet(&self) -> Option<&Snippet> {
        self.visible_ids
            .get(self.selected_index)
            .and_then(|id| self.store.get(*id))
    }

    pub fn distinct_authors(&self) -> usize {
        self.store
            .list()
            .iter()
            .map(|s| s.author.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    // ---- list navigation -------------------------------------------------

    pub fn next_snippet(&mut self) {
        if !self.visible_ids.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.visible_ids.len();
        }
    }

    pub fn previous_snippet(&mut self) {
        if !self.visible_ids.is_empty() {
            self.selected_index =
                (self.selected_index + self.visible_ids.len() - 1) % self.visible_ids.len();
        }
    }

    /// Expands or collapses the selected card's code body.
    pub fn toggle_expanded(&mut self) {
        if let Some(snippet) = self.selected_snippet() {
            let id = snippet.id;
            if !self.expanded.remove(&id) {
                self.expanded.insert(id);
            }
        }
    }

    // ---- search intents --------------------------------------------------

    /// Replaces the search term wholesale and re-derives the visible list.
    pub fn set_search(&mut self, term: &str) {
        self.filter.search_term = term.to_string();
        self.refresh_visible();
    }

    pub fn search_push(&mut self, c: char) {
        self.filter.search_term.push(c);
        self.refresh_visible();
    }

    pub fn search_pop(&mut self) {
        self.filter.search_term.pop();
        self.refresh_visible();
    }

    // ---- tag selection intents -------------------------------------------

    pub fn toggle_tag(&mut self, tag: &str) {
        self.filter.toggle_tag(tag);
        self.refresh_visible();
    }

    pub fn clear_tag_filters(&mut self) {
        self.filter.clear_tags();
        self.refresh_visible();
    }

    // ---- form session ----------------------------------------------------

    /// Opens the add form with a fresh draft.
    pub fn open_form(&mut self) {
        self.form = Some(SnippetDraft::new());
        self.form_field = FormField::Title;
        self.input_mode = InputMode::AddForm;
        self.clear_notice();
    }

    /// Discards the draft unconditionally, no validation.
    pub fn cancel_form(&mut self) {
        self.form = None;
        self.input_mode = InputMode::Normal;
    }

    /// Submits the open draft. On success the draft becomes a snippet at the
    /// front of the collection and the form closes; on failure the form stays
    /// open with the draft untouched and the error surfaced.
    pub fn submit_form(&mut self) {
        let Some(draft) = self.form.as_ref() else {
            return;
        };

        match self.store.add(draft, &self.author, Utc::now().date_naive()) {
            Ok(snippet) => {
                self.form = None;
                self.input_mode = InputMode::Normal;
                self.refresh_visible();
                if let Some(pos) = self.visible_ids.iter().position(|id| *id == snippet.id) {
                    self.selected_index = pos;
                }
                self.set_notice(
                    NoticeKind::Added,
                    format!("Snippet \"{}\" saved.", snippet.title),
                );
            }
            Err(err) => {
                self.set_notice(NoticeKind::ValidationFailed, err.to_string());
            }
        }
    }

    // ---- delete ----------------------------------------------------------

    /// Arms the delete confirmation for the selected snippet.
    pub fn request_delete(&mut self) {
        if let Some(id) = self.selected_snippet().map(|s| s.id) {
            self.confirmation = ConfirmationState::DeleteSnippet { snippet_id: id };
        }
    }

    pub fn confirm_delete(&mut self) {
        if let ConfirmationState::DeleteSnippet { snippet_id } = self.confirmation {
            self.confirmation = ConfirmationState::None;
            self.delete_snippet(snippet_id);
        }
    }

    pub fn cancel_delete(&mut self) {
        self.confirmation = ConfirmationState::None;
    }

    /// Removes a snippet by id. A stale id is a silent no-op; the collection
    /// and the derived views are never left half-updated.
    pub fn delete_snippet(&mut self, id: Uuid) {
        let title = self.store.get(id).map(|s| s.title.clone());
        if self.store.remove(id) {
            self.expanded.remove(&id);
            self.refresh_visible();
            self.set_notice(
                NoticeKind::Deleted,
                title.map_or_else(
                    || String::from("Snippet deleted."),
                    |t| format!("Snippet \"{t}\" deleted."),
                ),
            );
        }
    }

    // ---- clipboard -------------------------------------------------------

    /// Copies the selected snippet's code to the system clipboard.
    /// Fire-and-forget: the outcome is reported but owns no core state.
    pub fn copy_selected(&mut self) {
        let Some(snippet) = self.selected_snippet() else {
            return;
        };
        let title = snippet.title.clone();
        let code = snippet.code.clone();

        match clipboard::copy_text(&code) {
            Ok(()) => self.set_notice(
                NoticeKind::Copied,
                format!("\"{title}\" copied to clipboard."),
            ),
            Err(err) => self.set_notice(NoticeKind::CopyFailed, format!("Copy failed: {err}")),
        }
    }

    // ---- notices ---------------------------------------------------------

    pub fn set_notice(&mut self, kind: NoticeKind, message: String) {
        self.notice = Some(Notice { kind, message });
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Renders the board and whichever overlays are active.
    pub fn render(&self, frame: &mut Frame) {
        board::render(frame, self);

        if self.input_mode == InputMode::AddForm {
            add_modal::render(frame, self);
        }
        if self.confirmation != ConfirmationState::None {
            components::render_confirm_dialog(frame, self);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
