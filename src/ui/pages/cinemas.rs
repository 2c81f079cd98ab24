use ratatui::layout::{Constraint, Rect};
use ratatui::Frame;

use crate::api::Cinema;
use crate::store::AppState;
use crate::ui::form::CinemaForm;
use crate::ui::pages::{Labeled, ResourcePage, TableView};

impl Labeled for Cinema {
    fn label(&self) -> String {
        format!("cinema \"{}\"", self.name)
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, page: &ResourcePage<CinemaForm>, tick: u8) {
    let rows = state
        .cinema
        .items()
        .iter()
        .map(|cinema| {
            [
                cinema.name.clone(),
                cinema.total_rooms.to_string(),
                cinema.location.address.clone(),
                format!(
                    "{:.4}, {:.4}",
                    cinema.location.coordinates.lat, cinema.location.coordinates.lng
                ),
            ]
        })
        .collect();

    TableView {
        title: "Cinemas".to_string(),
        headers: ["Name", "Rooms", "Address", "Coordinates"],
        widths: [
            Constraint::Percentage(25),
            Constraint::Length(6),
            Constraint::Percentage(40),
            Constraint::Percentage(25),
        ],
        rows,
        selected: page.selected(state),
        loading: state.cinema.is_loading(),
        tick,
        empty_hint: "No cinemas yet. Press 'a' to add one.",
    }
    .render(frame, area);
}
