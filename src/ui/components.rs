//! Shared UI components: the bottom navigation bar, the notice line, and the
//! delete confirmation dialog.

use crate::app::{App, ConfirmationState, InputMode, NoticeKind};
use crate::ui::colors::RosePine;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};

/// Renders the bottom bar: the latest notice (or a quiet status line) on the
/// left, context-aware keyboard shortcuts on the right.
pub fn render_bottom_bar(frame: &mut Frame, area: Rect, app: &App) {
    let navbar_chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let left_content = Paragraph::new(status_line(app))
        .alignment(Alignment::Left)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        );

    let right_content = Paragraph::new(context_shortcuts(app))
        .alignment(Alignment::Right)
        .style(Style::default().fg(RosePine::MUTED))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        );

    left_content.render(navbar_chunks[0], frame.buffer_mut());
    right_content.render(navbar_chunks[1], frame.buffer_mut());
}

/// The left half of the bottom bar: the most recent notice when there is
/// one, otherwise a summary of what the board is showing.
fn status_line(app: &App) -> Line<'static> {
    if let Some(notice) = &app.notice {
        let color = match notice.kind {
            NoticeKind::Added | NoticeKind::Deleted | NoticeKind::Copied => RosePine::FOAM,
            NoticeKind::ValidationFailed | NoticeKind::CopyFailed => RosePine::LOVE,
        };
        return Line::from(vec![
            Span::styled(" ● ", Style::default().fg(color)),
            Span::styled(notice.message.clone(), Style::default().fg(color)),
        ]);
    }

    let shown = app.visible_ids.len();
    let total = app.store.len();
    let mut spans = vec![Span::styled(
        format!(" {shown} of {total} snippets "),
        Style::default().fg(RosePine::SUBTLE),
    )];
    if app.filter.is_active() {
        spans.push(Span::styled(
            "· filters active ",
            Style::default().fg(RosePine::GOLD),
        ));
    }
    Line::from(spans)
}

/// Shortcut hints for whichever part of the board owns the keyboard.
fn context_shortcuts(app: &App) -> String {
    if app.confirmation != ConfirmationState::None {
        return String::from(" [y] Delete │ [n] Cancel ");
    }

    match app.input_mode {
        InputMode::Search => String::from(" type to filter │ [⏎/Esc] Done "),
        InputMode::TagFilter => {
            String::from(" [←→] Navigate │ [⏎] Toggle │ [c] Clear │ [Esc] Done ")
        }
        InputMode::AddForm => String::from(" [Tab] Next Field │ [^S] Save │ [Esc] Cancel "),
        InputMode::Normal => String::from(
            " [↑↓] Navigate │ [⏎] Expand │ [/] Search │ [t] Tags │ [a] Add │ [y] Copy │ [d] Delete │ [q] Quit ",
        ),
    }
}

/// Renders the centered delete confirmation dialog over the board.
pub fn render_confirm_dialog(frame: &mut Frame, app: &App) {
    let ConfirmationState::DeleteSnippet { snippet_id } = app.confirmation else {
        return;
    };
    let title = app
        .store
        .get(snippet_id)
        .map(|s| s.title.clone())
        .unwrap_or_default();

    let dialog_area = centered_rect(52, 7, frame.area());
    Clear.render(dialog_area, frame.buffer_mut());

    let content = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            format!("Delete \"{title}\"?"),
            Style::default().fg(RosePine::TEXT).bold(),
        )]),
        Line::from(vec![Span::styled(
            "This cannot be undone.",
            Style::default().fg(RosePine::SUBTLE),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] Delete", Style::default().fg(RosePine::LOVE)),
            Span::raw("    "),
            Span::styled("[n] Cancel", Style::default().fg(RosePine::FOAM)),
        ]),
    ];

    let dialog = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .title(" Delete Snippet ")
                .title_alignment(Alignment::Center)
                .border_type(BorderType::Double)
                .style(Style::default().fg(RosePine::LOVE)),
        )
        .style(Style::default().bg(RosePine::SURFACE));

    dialog.render(dialog_area, frame.buffer_mut());
}

/// A `width` x `height` rect centered inside `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area)[1];

    Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .split(vertical)[1]
}
