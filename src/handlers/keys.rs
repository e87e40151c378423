//! Keyboard Input Handling Module
//!
//! Routes every key event to the handler for whichever part of the board
//! currently owns the keyboard: an armed confirmation wins over everything,
//! then the active input mode decides. Each handler translates keys into
//! intent calls on [`App`]; no state is mutated anywhere else.

use crate::app::{App, ConfirmationState, FormField, InputMode};
use crate::models::{SnippetDraft, SnippetLanguage};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main keyboard event handler and dispatcher.
/// Returns `true` when the application should quit.
pub fn handle_key_events(key: KeyEvent, app: &mut App) -> bool {
    if app.confirmation != ConfirmationState::None {
        return handle_confirmation_keys(key, app);
    }

    match app.input_mode {
        InputMode::AddForm => handle_form_keys(key, app),
        InputMode::Search => handle_search_keys(key, app),
        InputMode::TagFilter => handle_tag_filter_keys(key, app),
        InputMode::Normal => handle_browse_keys(key, app),
    }
}

/// Keys while browsing the board in Normal mode.
fn handle_browse_keys(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,

        KeyCode::Char('/') => {
            app.clear_notice();
            app.input_mode = InputMode::Search;
        }
        KeyCode::Char('t') => {
            if !app.tag_index().is_empty() {
                app.clear_notice();
                app.input_mode = InputMode::TagFilter;
            }
        }
        KeyCode::Char('a') => app.open_form(),
        KeyCode::Char('d') => app.request_delete(),
        KeyCode::Char('y') => app.copy_selected(),
        KeyCode::Char('c') => app.clear_tag_filters(),

        KeyCode::Down | KeyCode::Char('j') => app.next_snippet(),
        KeyCode::Up | KeyCode::Char('k') => app.previous_snippet(),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_expanded(),

        KeyCode::Esc => app.clear_notice(),
        _ => {}
    }
    false
}

/// Keys while the search bar has focus. Filtering is live: every edit
/// re-derives the visible list. Leaving the mode keeps the term; clearing
/// it is the user's call.
fn handle_search_keys(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.input_mode = InputMode::Normal,
        KeyCode::Backspace => app.search_pop(),
        KeyCode::Char(c) => app.search_push(c),
        _ => {}
    }
    false
}

/// Keys while the tag filter row has focus.
fn handle_tag_filter_keys(key: KeyEvent, app: &mut App) -> bool {
    let tags = app.tag_index();
    if tags.is_empty() {
        app.input_mode = InputMode::Normal;
        return false;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.input_mode = InputMode::Normal,
        KeyCode::Left | KeyCode::Char('h') => {
            app.tag_cursor = (app.tag_cursor + tags.len() - 1) % tags.len();
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.tag_cursor = (app.tag_cursor + 1) % tags.len();
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let tag = tags[app.tag_cursor.min(tags.len() - 1)].clone();
            app.toggle_tag(&tag);
        }
        KeyCode::Char('c') => app.clear_tag_filters(),
        _ => {}
    }
    false
}

/// Keys while a delete confirmation is armed.
fn handle_confirmation_keys(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
        _ => {}
    }
    false
}

/// Keys while the add-snippet form is open.
fn handle_form_keys(key: KeyEvent, app: &mut App) -> bool {
    // Save from any field.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
        app.submit_form();
        return false;
    }

    match key.code {
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Tab => app.form_field = app.form_field.next(),
        KeyCode::BackTab => app.form_field = app.form_field.previous(),
        KeyCode::Enter => handle_form_enter(app),
        _ => edit_focused_field(key, app),
    }
    false
}

/// Enter is field-dependent: it advances through the single-line fields,
/// commits the pending tag, and inserts a newline in the code body.
fn handle_form_enter(app: &mut App) {
    match app.form_field {
        FormField::Title | FormField::Description | FormField::Language => {
            app.form_field = app.form_field.next();
        }
        FormField::Tags => {
            if let Some(draft) = app.form.as_mut() {
                draft.add_pending_tag();
            }
        }
        FormField::Code => {
            if let Some(draft) = app.form.as_mut() {
                draft.code.push('\n');
            }
        }
    }
}

fn edit_focused_field(key: KeyEvent, app: &mut App) {
    let field = app.form_field;
    let Some(draft) = app.form.as_mut() else {
        return;
    };

    match (field, key.code) {
        (FormField::Title, KeyCode::Char(c)) => draft.title.push(c),
        (FormField::Title, KeyCode::Backspace) => {
            draft.title.pop();
        }

        (FormField::Description, KeyCode::Char(c)) => draft.description.push(c),
        (FormField::Description, KeyCode::Backspace) => {
            draft.description.pop();
        }

        (FormField::Language, KeyCode::Up | KeyCode::Left) => cycle_language(draft, -1),
        (FormField::Language, KeyCode::Down | KeyCode::Right | KeyCode::Char(' ')) => {
            cycle_language(draft, 1);
        }

        (FormField::Tags, KeyCode::Char(c)) => draft.pending_tag.push(c),
        (FormField::Tags, KeyCode::Backspace) => {
            // Backspace on an empty pending entry removes the last chip.
            if draft.pending_tag.pop().is_none() {
                if let Some(last) = draft.tags.last().cloned() {
                    draft.remove_tag(&last);
                }
            }
        }

        (FormField::Code, KeyCode::Char(c)) => draft.code.push(c),
        (FormField::Code, KeyCode::Backspace) => {
            draft.code.pop();
        }

        _ => {}
    }
}

/// Steps the draft's language through the fixed list, wrapping at the ends.
/// The first visit to the selector lands on the first entry.
fn cycle_language(draft: &mut SnippetDraft, step: i32) {
    let all = SnippetLanguage::ALL;
    let next = match draft.language {
        None => 0,
        Some(current) => {
            let pos = all.iter().position(|l| *l == current).unwrap_or(0);
            (pos as i32 + step).rem_euclid(all.len() as i32) as usize
        }
    };
    draft.language = Some(all[next]);
}
