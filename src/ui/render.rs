use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::form::{render_confirm, render_editor, EditForm};
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::pages::{self, ResourcePage, Route};
use crate::ui::theme::{MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let errors = app.banner_errors();
    let regions = layout_regions(area, errors.len() as u16);

    let header = Header::new(app.route(), app.session_name());
    frame.render_widget(header.widget(regions.header), regions.header);

    if !errors.is_empty() {
        let lines: Vec<Line> = errors
            .iter()
            .map(|(slice, message)| {
                Line::from(vec![
                    Span::styled(
                        format!(" ✖ {slice}: {message}"),
                        Style::default().fg(STATUS_ERROR),
                    ),
                    Span::styled(
                        "  (x to dismiss)",
                        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
                    ),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), regions.banner);
    }

    frame.render_widget(Clear, regions.body);
    let state = app.state();
    let tick = app.animation_tick();
    match app.route() {
        Route::Login => {
            pages::login::render(frame, regions.body, app.login(), &state.auth, tick)
        }
        Route::Dashboard => pages::dashboard::render(frame, regions.body, state, tick),
        Route::Cinemas => {
            pages::cinemas::render(frame, regions.body, state, app.cinemas(), tick);
            draw_overlays(frame, regions.body, app.cinemas(), tick);
        }
        Route::Rooms => {
            pages::rooms::render(frame, regions.body, state, app.rooms(), tick);
            draw_overlays(frame, regions.body, app.rooms(), tick);
        }
        Route::Seats => {
            pages::seats::render(
                frame,
                regions.body,
                state,
                app.seats(),
                app.seat_filter(),
                tick,
            );
            draw_overlays(frame, regions.body, app.seats(), tick);
        }
        Route::Showtimes => {
            pages::showtimes::render(frame, regions.body, state, app.showtimes(), tick);
            draw_overlays(frame, regions.body, app.showtimes(), tick);
        }
    }

    let footer = Footer::new(app.route(), app.overlay());
    frame.render_widget(footer.widget(regions.footer), regions.footer);
}

fn draw_overlays<F: EditForm>(frame: &mut Frame<'_>, area: Rect, page: &ResourcePage<F>, tick: u8) {
    render_editor(frame, area, page.editor(), tick);
    render_confirm(frame, area, page.confirm());
}
