//! Board Screen Module
//!
//! Renders the single board screen: the search bar, the tag filter row, the
//! stats cards, and the snippet list itself. Everything is drawn from the
//! derived state on [`App`]; the card list shows a code preview for the
//! selected snippet and the full body once it is expanded.
//!
//! [`App`]: crate::app::App

use crate::app::{App, InputMode};
use crate::models::Snippet;
use crate::ui::colors::{self, RosePine};
use crate::ui::components;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, List, ListItem, ListState, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Collapsed cards preview this many code lines.
const PREVIEW_LINES: usize = 6;

/// Main rendering function for the board screen.
pub fn render(frame: &mut Frame, app: &App) {
    let main_area = frame.area();

    let block = Block::bordered()
        .title(" snipboard — Code Snippet Board ")
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH));

    let inner_area = block.inner(main_area);
    block.render(main_area, frame.buffer_mut());

    let chunks = Layout::vertical([
        Constraint::Length(3), // Search bar
        Constraint::Length(3), // Tag filter row
        Constraint::Length(3), // Stats cards
        Constraint::Fill(1),   // Snippet list
        Constraint::Length(3), // Bottom navigation bar
    ])
    .split(inner_area);

    render_search_bar(frame, chunks[0], app);
    render_tag_filter(frame, chunks[1], app);
    render_stats(frame, chunks[2], app);
    render_snippet_list(frame, chunks[3], app);
    components::render_bottom_bar(frame, chunks[4], app);
}

fn render_search_bar(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.input_mode == InputMode::Search;
    let border = if focused {
        RosePine::IRIS
    } else {
        RosePine::HIGHLIGHT_HIGH
    };

    let content = if app.filter.search_term.is_empty() && !focused {
        Span::styled(
            "Search snippets by title, description, or tags...  [/]",
            Style::default().fg(RosePine::MUTED),
        )
    } else {
        Span::styled(
            app.filter.search_term.clone(),
            Style::default().fg(RosePine::GOLD),
        )
    };

    let search = Paragraph::new(Line::from(vec![Span::raw(" "), content])).block(
        Block::bordered()
            .title(" 󰍉 Search ")
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(border)),
    );
    search.render(area, frame.buffer_mut());

    if focused {
        frame.set_cursor_position(Position {
            x: area.x + 2 + UnicodeWidthStr::width(app.filter.search_term.as_str()) as u16,
            y: area.y + 1,
        });
    }
}

fn render_tag_filter(frame: &mut Frame, area: Rect, app: &App) {
    let tags = app.tag_index();
    let focused = app.input_mode == InputMode::TagFilter;
    let border = if focused {
        RosePine::IRIS
    } else {
        RosePine::HIGHLIGHT_HIGH
    };

    let mut spans = vec![Span::raw(" ")];
    if tags.is_empty() {
        spans.push(Span::styled(
            "No tags yet — tags appear as snippets carry them",
            Style::default().fg(RosePine::MUTED),
        ));
    }
    for (i, tag) in tags.iter().enumerate() {
        let selected = app.filter.selected_tags.contains(tag);
        let under_cursor = focused && i == app.tag_cursor;

        let mut style = if selected {
            Style::default().fg(RosePine::BASE).bg(RosePine::IRIS)
        } else {
            Style::default().fg(RosePine::SUBTLE)
        };
        if under_cursor {
            style = style.bold().underlined();
        }

        let label = if selected {
            format!(" {tag} ✕ ")
        } else {
            format!(" {tag} ")
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    if !app.filter.selected_tags.is_empty() {
        spans.push(Span::styled(
            "[c] Clear All",
            Style::default().fg(RosePine::MUTED),
        ));
    }

    let title = format!(" 󰓹 Filter by Tags ({}) ", app.filter.selected_tags.len());
    let row = Paragraph::new(Line::from(spans)).block(
        Block::bordered()
            .title(title)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(border)),
    );
    row.render(area, frame.buffer_mut());
}

fn render_stats(frame: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ])
    .split(area);

    stat_card(frame, cards[0], "󰅩 Snippets", app.store.len(), RosePine::IRIS);
    stat_card(frame, cards[1], "󰓹 Tags", app.tag_index().len(), RosePine::LOVE);
    stat_card(frame, cards[2], " Authors", app.distinct_authors(), RosePine::FOAM);
}

fn stat_card(frame: &mut Frame, area: Rect, label: &str, value: usize, accent: ratatui::style::Color) {
    let line = Line::from(vec![
        Span::styled(format!(" {label}: "), Style::default().fg(RosePine::SUBTLE)),
        Span::styled(value.to_string(), Style::default().fg(accent).bold()),
    ]);
    let card = Paragraph::new(line).block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
    );
    card.render(area, frame.buffer_mut());
}

fn render_snippet_list(frame: &mut Frame, area: Rect, app: &App) {
    let visible = app.visible_snippets();

    let block = Block::bordered()
        .title(format!(" 󰈮 Snippets ({} of {}) ", visible.len(), app.store.len()))
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH));
    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    if visible.is_empty() {
        render_empty_state(frame, inner, app);
        return;
    }

    let content_width = inner.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(i, snippet)| {
            let selected = i == app.selected_index;
            let expanded = app.expanded.contains(&snippet.id);
            build_card(snippet, selected, expanded, content_width)
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default().bg(RosePine::HIGHLIGHT_LOW));
    let mut state = ListState::default();
    state.select(Some(app.selected_index));
    frame.render_stateful_widget(list, inner, &mut state);
}

/// One snippet card: header line, optional description, and (for the
/// selected card) a numbered code preview or the full body when expanded.
fn build_card(
    snippet: &Snippet,
    selected: bool,
    expanded: bool,
    width: usize,
) -> ListItem<'static> {
    let accent = colors::language_color(snippet.language);
    let marker = if selected { "❯ " } else { "  " };

    let mut header = vec![
        Span::styled(marker.to_string(), Style::default().fg(accent)),
        Span::styled(
            snippet.title.clone(),
            Style::default().fg(RosePine::TEXT).bold(),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" {} ", snippet.language.display_name()),
            Style::default().fg(RosePine::BASE).bg(accent),
        ),
    ];
    for tag in &snippet.tags {
        header.push(Span::styled(
            format!("  #{tag}"),
            Style::default().fg(RosePine::FOAM),
        ));
    }
    header.push(Span::styled(
        format!(
            "   {} · {}",
            snippet.author,
            snippet.created_at.format("%Y-%m-%d")
        ),
        Style::default().fg(RosePine::MUTED),
    ));

    let mut lines = vec![Line::from(header)];

    if !snippet.description.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  {}", truncate_to_width(&snippet.description, width)),
            Style::default().fg(RosePine::SUBTLE),
        )));
    }

    if selected {
        let shown: Vec<&str> = if expanded {
            snippet.code.lines().collect()
        } else {
            snippet.preview(PREVIEW_LINES).collect()
        };

        let gutter_width = width.saturating_sub(7);
        for (n, code_line) in shown.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:>3} │ ", n + 1), Style::default().fg(RosePine::MUTED)),
                Span::styled(
                    truncate_to_width(code_line, gutter_width),
                    Style::default().fg(RosePine::TEXT),
                ),
            ]));
        }

        let total = snippet.line_count();
        if !expanded && total > PREVIEW_LINES {
            lines.push(Line::from(Span::styled(
                format!("      … {} more lines — [⏎] expand", total - PREVIEW_LINES),
                Style::default().fg(RosePine::MUTED).italic(),
            )));
        } else if expanded {
            lines.push(Line::from(Span::styled(
                "      [⏎] collapse",
                Style::default().fg(RosePine::MUTED).italic(),
            )));
        }
    }

    lines.push(Line::from(""));
    ListItem::new(Text::from(lines))
}

fn render_empty_state(frame: &mut Frame, area: Rect, app: &App) {
    let hint = if app.filter.is_active() {
        "Try adjusting your search or filters"
    } else {
        "Get started by adding your first code snippet"
    };

    let content = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "󰘦  No snippets found",
            Style::default().fg(RosePine::TEXT).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(RosePine::SUBTLE))),
        Line::from(""),
        Line::from(Span::styled(
            "[a] Add Snippet",
            Style::default().fg(RosePine::FOAM),
        )),
    ];

    Paragraph::new(content)
        .alignment(Alignment::Center)
        .render(area, frame.buffer_mut());
}

/// Clips `text` to `max_width` terminal columns, appending an ellipsis when
/// anything was cut.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
