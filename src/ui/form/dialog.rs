//! Dialog rendering for the editor and the delete prompt.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::form::{ConfirmState, EditForm, EditorState};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{
    spinner, ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR,
};

const DIALOG_WIDTH: u16 = 60;
const LABEL_WIDTH: usize = 16;

pub fn render_editor<F: EditForm>(frame: &mut Frame, area: Rect, state: &EditorState<F>, tick: u8) {
    let Some(form) = state.form() else {
        return;
    };

    let title = match state.editing() {
        Some(_) => format!(" Edit {} ", F::NOUN),
        None => format!(" Add {} ", F::NOUN),
    };

    let mut lines = vec![Line::from("")];
    for (index, field) in F::fields().iter().enumerate() {
        let focused = index == state.focused();
        let value = form.value(field.path).unwrap_or_default();
        let cursor = if focused && !state.is_submitting() { "▏" } else { "" };
        let mut line = Line::from(vec![
            Span::styled(
                format!(" {:<width$}", field.label, width = LABEL_WIDTH),
                Style::default().fg(if focused { ACCENT } else { MUTED_TEXT }),
            ),
            Span::styled(format!("{value}{cursor}"), Style::default().fg(HEADER_TEXT)),
        ]);
        if focused {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }
    lines.push(Line::from(""));

    if state.is_submitting() {
        lines.push(Line::from(Span::styled(
            format!(" {} Saving...", spinner(tick)),
            Style::default().fg(MUTED_TEXT),
        )));
    } else if let Some(error) = state.error() {
        lines.push(Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    lines.push(Line::from(Span::styled(
        " Tab/↑↓: Field  Enter: Save  Esc: Cancel",
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
    )));

    render_popup(frame, area, title, lines, DIALOG_WIDTH);
}

pub fn render_confirm(frame: &mut Frame, area: Rect, state: &ConfirmState) {
    let Some(label) = state.label() else {
        return;
    };
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" Delete {label}?"),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " y: Delete  n/Esc: Keep",
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 4;
    render_popup(frame, area, " Confirm ".to_string(), lines, width.max(30));
}

fn render_popup(frame: &mut Frame, area: Rect, title: String, lines: Vec<Line<'static>>, width: u16) {
    let height = lines.len() as u16 + 2;
    let popup = centered_rect_by_size(area, width, height);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
