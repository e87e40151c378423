//! Add Snippet Modal Module
//!
//! The centered floating form for creating a new snippet: title,
//! description, language selector, tag entry with chips, and the code body.
//! The focused field carries the accent border and the terminal cursor.

use crate::app::{App, FormField, NoticeKind};
use crate::models::SnippetDraft;
use crate::ui::colors::RosePine;
use crate::ui::components;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, app: &App) {
    let Some(draft) = app.form.as_ref() else {
        return;
    };

    let area = frame.area();
    let dialog_width = area.width.saturating_sub(8).min(72);
    let dialog_height = area.height.saturating_sub(4).min(28);
    let dialog_area = components::centered_rect(dialog_width, dialog_height, area);

    Clear.render(dialog_area, frame.buffer_mut());

    let block = Block::bordered()
        .title(" 󰅩 Add New Code Snippet ")
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::IRIS).bg(RosePine::SURFACE));
    let inner = block.inner(dialog_area);
    block.render(dialog_area, frame.buffer_mut());

    let chunks = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Length(3), // Description
        Constraint::Length(3), // Language
        Constraint::Length(3), // Tags
        Constraint::Fill(1),   // Code
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    render_text_field(
        frame,
        chunks[0],
        " Title * ",
        &draft.title,
        app.form_field == FormField::Title,
    );
    render_text_field(
        frame,
        chunks[1],
        " Description ",
        &draft.description,
        app.form_field == FormField::Description,
    );
    render_language_field(frame, chunks[2], draft, app.form_field == FormField::Language);
    render_tags_field(frame, chunks[3], draft, app.form_field == FormField::Tags);
    render_code_field(frame, chunks[4], draft, app.form_field == FormField::Code);
    render_footer(frame, chunks[5], app);
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        RosePine::IRIS
    } else {
        RosePine::HIGHLIGHT_HIGH
    };
    Block::bordered()
        .title(title.to_string())
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(border).bg(RosePine::SURFACE))
}

fn render_text_field(frame: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let field = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(value.to_string(), Style::default().fg(RosePine::TEXT)),
    ]))
    .block(field_block(title, focused));
    field.render(area, frame.buffer_mut());

    if focused {
        frame.set_cursor_position(Position {
            x: area.x + 2 + UnicodeWidthStr::width(value) as u16,
            y: area.y + 1,
        });
    }
}

fn render_language_field(frame: &mut Frame, area: Rect, draft: &SnippetDraft, focused: bool) {
    let content = match draft.language {
        Some(language) => Span::styled(
            format!("◂ {} ▸", language.display_name()),
            Style::default().fg(RosePine::GOLD),
        ),
        None => Span::styled(
            "Select a language  [↑↓]",
            Style::default().fg(RosePine::MUTED),
        ),
    };

    let field = Paragraph::new(Line::from(vec![Span::raw(" "), content]))
        .block(field_block(" Language * ", focused));
    field.render(area, frame.buffer_mut());
}

fn render_tags_field(frame: &mut Frame, area: Rect, draft: &SnippetDraft, focused: bool) {
    let mut spans = vec![Span::raw(" ")];
    for tag in &draft.tags {
        spans.push(Span::styled(
            format!("{tag} ×"),
            Style::default().fg(RosePine::TEXT).bg(RosePine::HIGHLIGHT_HIGH),
        ));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        draft.pending_tag.clone(),
        Style::default().fg(RosePine::GOLD),
    ));

    let field =
        Paragraph::new(Line::from(spans)).block(field_block(" Tags ([⏎] add) ", focused));
    field.render(area, frame.buffer_mut());

    if focused {
        let chips: String = draft.tags.iter().map(|t| format!("{t} × ")).collect();
        let offset = UnicodeWidthStr::width(chips.as_str())
            + UnicodeWidthStr::width(draft.pending_tag.as_str());
        frame.set_cursor_position(Position {
            x: area.x + 2 + offset as u16,
            y: area.y + 1,
        });
    }
}

fn render_code_field(frame: &mut Frame, area: Rect, draft: &SnippetDraft, focused: bool) {
    let text = if draft.code.is_empty() && !focused {
        ratatui::text::Text::styled(
            "Paste your code snippet here...",
            Style::default().fg(RosePine::MUTED),
        )
    } else {
        ratatui::text::Text::styled(draft.code.clone(), Style::default().fg(RosePine::TEXT))
    };

    let field = Paragraph::new(text).block(field_block(" Code * ", focused));
    field.render(area, frame.buffer_mut());

    if focused {
        // Cursor lands after the last character of the body.
        let row = draft.code.split('\n').count().saturating_sub(1);
        let col = draft
            .code
            .split('\n')
            .next_back()
            .map(UnicodeWidthStr::width)
            .unwrap_or(0);
        frame.set_cursor_position(Position {
            x: (area.x + 1 + col as u16).min(area.x + area.width.saturating_sub(2)),
            y: (area.y + 1 + row as u16).min(area.y + area.height.saturating_sub(2)),
        });
    }
}

/// Footer line: the validation error after a rejected submit, otherwise the
/// form shortcuts.
fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.notice {
        Some(notice) if notice.kind == NoticeKind::ValidationFailed => Line::from(Span::styled(
            format!(" ✗ {}", notice.message),
            Style::default().fg(RosePine::LOVE).bold(),
        )),
        _ => Line::from(Span::styled(
            " [Tab] Next Field │ [^S] Save │ [Esc] Cancel",
            Style::default().fg(RosePine::MUTED),
        )),
    };

    Paragraph::new(line)
        .style(Style::default().bg(RosePine::SURFACE))
        .render(area, frame.buffer_mut());
}
