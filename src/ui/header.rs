use crate::ui::pages::Route;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, STATUS_OK};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const TITLE: &str = "Cinema Admin";

pub struct Header<'a> {
    route: Route,
    user: Option<&'a str>,
}

impl<'a> Header<'a> {
    pub fn new(route: Route, user: Option<&'a str>) -> Self {
        Self { route, user }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(TITLE, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        ];

        if self.route == Route::Login {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("Sign in", text_style));
        } else {
            for (index, tab) in Route::TABS.iter().enumerate() {
                spans.push(Span::styled("  │  ", separator_style));
                let label = format!("{} {}", index + 1, tab.title());
                let style = if *tab == self.route {
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(MUTED_TEXT)
                };
                spans.push(Span::styled(label, style));
            }
        }

        if let Some(user) = self.user {
            let used: usize = spans.iter().map(|span| span.content.chars().count()).sum();
            let user_label = format!("● {user}  ");
            let padding = (area.width as usize)
                .saturating_sub(used)
                .saturating_sub(user_label.chars().count());
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(user_label, Style::default().fg(STATUS_OK)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
