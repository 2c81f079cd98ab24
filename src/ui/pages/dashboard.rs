use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::api::{Cinema, Resource, Room, Seat, Showtime};
use crate::store::{AppState, ResourceState};
use crate::ui::pages::count_label;
use crate::ui::theme::{spinner, ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, tick: u8) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let cards = [
        card::<Cinema>("Cinemas", &state.cinema, tick),
        card::<Room>("Rooms", &state.room, tick),
        card::<Seat>("Seats", &state.seat, tick),
        card::<Showtime>("Showtimes", &state.showtime, tick),
    ];
    for (card, column) in cards.into_iter().zip(columns.iter()) {
        let area = Rect {
            height: rows[0].height,
            ..*column
        };
        frame.render_widget(card, area);
    }

    let hint = Paragraph::new(Line::from(Span::styled(
        "Press 1-5 or Tab to open a page.",
        Style::default().fg(MUTED_TEXT),
    )));
    frame.render_widget(hint, rows[1]);
}

fn card<R: Resource>(title: &'static str, slice: &ResourceState<R>, tick: u8) -> Paragraph<'static> {
    let mut value = vec![Span::styled(
        count_label::<R>(slice.len(), slice.is_loading()),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )];
    if slice.is_loading() {
        value.push(Span::styled(
            format!(" {}", spinner(tick)),
            Style::default().fg(MUTED_TEXT),
        ));
    }

    Paragraph::new(vec![Line::from(""), Line::from(value)]).block(
        Block::default()
            .title(Span::styled(format!(" {} ", title), Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
