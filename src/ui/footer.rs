use crate::ui::app::Overlay;
use crate::ui::pages::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    route: Route,
    overlay: Overlay,
}

impl Footer {
    pub fn new(route: Route, overlay: Overlay) -> Self {
        Self { route, overlay }
    }

    /// Key hints for what currently has the keyboard.
    pub fn hints(&self) -> &'static str {
        match (self.route, self.overlay) {
            (Route::Login, _) => " Enter: Sign in │ Tab: Field │ Esc: Quit",
            (_, Overlay::Editor) => " Enter: Save │ Tab: Field │ Esc: Cancel",
            (_, Overlay::Confirm) => " y: Delete │ n: Keep",
            (Route::Dashboard, Overlay::None) => {
                " 1-5/Tab: Page │ r: Refresh │ x: Dismiss │ Ctrl+R: Reload config │ Ctrl+L: Logout │ q: Quit"
            }
            (Route::Seats, Overlay::None) => {
                " 1-5/Tab: Page │ a: Add │ e: Edit │ d: Delete │ [ ]: Room │ r: Refresh │ x: Dismiss │ q: Quit"
            }
            (_, Overlay::None) => {
                " 1-5/Tab: Page │ a: Add │ e: Edit │ d: Delete │ r: Refresh │ x: Dismiss │ q: Quit"
            }
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
