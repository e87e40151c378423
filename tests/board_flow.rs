//! End-to-end board flows: intents drive the app headlessly and the derived
//! views are checked after each step, the way the renderer would read them.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use snipboard::app::{App, ConfirmationState, InputMode, NoticeKind};
use snipboard::handlers::keys::handle_key_events;
use snipboard::models::SnippetLanguage;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn seeded_board_supports_the_full_intent_flow() {
    let mut app = App::new();
    assert_eq!(app.store.len(), 3);
    assert_eq!(app.visible_snippets().len(), 3);

    // Searching for "python" narrows the board to exactly the python snippet.
    app.set_search("python");
    let visible = app.visible_snippets();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Python List Comprehension");
    app.set_search("");

    // Requiring both "css" and "flexbox" leaves exactly the CSS snippet.
    app.toggle_tag("css");
    app.toggle_tag("flexbox");
    let visible = app.visible_snippets();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "CSS Flexbox Center");
    app.clear_tag_filters();
    assert_eq!(app.visible_snippets().len(), 3);

    // Adding a snippet grows the collection by one, at the front.
    app.open_form();
    {
        let draft = app.form.as_mut().expect("form should be open");
        draft.title = String::from("X");
        draft.code = String::from("y");
        draft.language = Some(SnippetLanguage::Go);
    }
    app.submit_form();
    assert_eq!(app.store.len(), 4);
    assert_eq!(app.store.list()[0].title, "X");
    assert!(app.form.is_none());
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(
        app.notice.as_ref().map(|n| n.kind),
        Some(NoticeKind::Added)
    );

    // Deleting the CSS snippet removes exactly that entry; the rest keep
    // their relative order.
    let css_id = app
        .store
        .list()
        .iter()
        .find(|s| s.title == "CSS Flexbox Center")
        .expect("css snippet should exist")
        .id;
    app.delete_snippet(css_id);
    assert_eq!(app.store.len(), 3);
    let titles: Vec<_> = app.store.list().iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["X", "React useState Hook", "Python List Comprehension"]
    );
    assert_eq!(
        app.notice.as_ref().map(|n| n.kind),
        Some(NoticeKind::Deleted)
    );

    // The tag index follows the store: the CSS-only tags are gone.
    let index = app.tag_index();
    assert!(!index.contains(&String::from("flexbox")));
    assert!(index.contains(&String::from("python")));
}

#[test]
fn invalid_submit_keeps_the_form_open_and_unchanged() {
    let mut app = App::new();
    app.open_form();
    {
        let draft = app.form.as_mut().expect("form should be open");
        draft.code = String::from("print('hi')");
        draft.language = Some(SnippetLanguage::Python);
    }

    app.submit_form();

    assert_eq!(app.store.len(), 3);
    assert_eq!(app.input_mode, InputMode::AddForm);
    let draft = app.form.as_ref().expect("form should still be open");
    assert_eq!(draft.code, "print('hi')");
    assert_eq!(
        app.notice.as_ref().map(|n| n.kind),
        Some(NoticeKind::ValidationFailed)
    );
}

#[test]
fn delete_waits_for_confirmation() {
    let mut app = App::new();

    handle_key_events(key(KeyCode::Char('d')), &mut app);
    assert!(matches!(
        app.confirmation,
        ConfirmationState::DeleteSnippet { .. }
    ));
    assert_eq!(app.store.len(), 3);

    // Backing out leaves the collection alone.
    handle_key_events(key(KeyCode::Char('n')), &mut app);
    assert_eq!(app.confirmation, ConfirmationState::None);
    assert_eq!(app.store.len(), 3);

    // Confirming removes the selected snippet.
    handle_key_events(key(KeyCode::Char('d')), &mut app);
    handle_key_events(key(KeyCode::Char('y')), &mut app);
    assert_eq!(app.store.len(), 2);
}

#[test]
fn search_keystrokes_filter_live_and_the_term_survives_leaving_the_mode() {
    let mut app = App::new();

    handle_key_events(key(KeyCode::Char('/')), &mut app);
    assert_eq!(app.input_mode, InputMode::Search);

    for c in "flex".chars() {
        handle_key_events(key(KeyCode::Char(c)), &mut app);
    }
    assert_eq!(app.visible_snippets().len(), 1);

    handle_key_events(key(KeyCode::Esc), &mut app);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.filter.search_term, "flex");
    assert_eq!(app.visible_snippets().len(), 1);
}

#[test]
fn tag_filter_mode_toggles_and_clears_through_the_keyboard() {
    let mut app = App::new();

    handle_key_events(key(KeyCode::Char('t')), &mut app);
    assert_eq!(app.input_mode, InputMode::TagFilter);

    // Toggle the tag under the cursor, then a second one to its right.
    handle_key_events(key(KeyCode::Enter), &mut app);
    handle_key_events(key(KeyCode::Right), &mut app);
    handle_key_events(key(KeyCode::Enter), &mut app);
    assert_eq!(app.filter.selected_tags.len(), 2);

    handle_key_events(key(KeyCode::Char('c')), &mut app);
    assert!(app.filter.selected_tags.is_empty());
    assert_eq!(app.visible_snippets().len(), 3);

    handle_key_events(key(KeyCode::Esc), &mut app);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn form_keystrokes_build_a_draft_with_normalized_tags() {
    let mut app = App::new();

    handle_key_events(key(KeyCode::Char('a')), &mut app);
    assert_eq!(app.input_mode, InputMode::AddForm);

    for c in "Timer".chars() {
        handle_key_events(key(KeyCode::Char(c)), &mut app);
    }
    // Title → Description → Language.
    handle_key_events(key(KeyCode::Enter), &mut app);
    handle_key_events(key(KeyCode::Enter), &mut app);
    handle_key_events(key(KeyCode::Down), &mut app);
    // Language → Tags.
    handle_key_events(key(KeyCode::Enter), &mut app);
    for c in "CLI ".chars() {
        handle_key_events(key(KeyCode::Char(c)), &mut app);
    }
    handle_key_events(key(KeyCode::Enter), &mut app);
    // Tags → Code.
    handle_key_events(key(KeyCode::Tab), &mut app);
    for c in "sleep 1".chars() {
        handle_key_events(key(KeyCode::Char(c)), &mut app);
    }

    let draft = app.form.as_ref().expect("form should be open");
    assert_eq!(draft.title, "Timer");
    assert_eq!(draft.language, Some(SnippetLanguage::ALL[0]));
    assert_eq!(draft.tags, vec![String::from("cli")]);
    assert_eq!(draft.code, "sleep 1");

    // Ctrl+S saves and closes the form.
    handle_key_events(
        KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
        &mut app,
    );
    assert_eq!(app.store.len(), 4);
    assert!(app.form.is_none());
}

#[test]
fn cancel_discards_the_draft_without_validation() {
    let mut app = App::new();
    app.open_form();
    {
        let draft = app.form.as_mut().expect("form should be open");
        draft.title = String::from("half-finished");
    }

    handle_key_events(key(KeyCode::Esc), &mut app);

    assert!(app.form.is_none());
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.store.len(), 3);

    // Reopening starts from a fresh draft.
    app.open_form();
    assert_eq!(
        app.form.as_ref().map(|d| d.title.clone()),
        Some(String::new())
    );
}
