use ratatui::layout::{Constraint, Rect};
use ratatui::Frame;

use crate::api::{EntityRef, Showtime};
use crate::store::AppState;
use crate::ui::form::ShowtimeForm;
use crate::ui::pages::seats::room_label;
use crate::ui::pages::{Labeled, ResourcePage, TableView};

impl Labeled for Showtime {
    fn label(&self) -> String {
        format!("showtime \"{} @ {}\"", self.movie_id.label(), self.start_minutes())
    }
}

/// Room column: the populated label when the server sent one, otherwise a
/// lookup in the room slice.
fn room_column(state: &AppState, room: Option<&EntityRef>) -> String {
    match room {
        None => "-".to_string(),
        Some(EntityRef::Id(id)) => room_label(state, id),
        Some(populated) => populated.label(),
    }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    page: &ResourcePage<ShowtimeForm>,
    tick: u8,
) {
    let rows = state
        .showtime
        .items()
        .iter()
        .map(|showtime| {
            [
                showtime.movie_id.label(),
                room_column(state, showtime.room_id.as_ref()),
                showtime.start_minutes().replace('T', " "),
                showtime.available_seats.to_string(),
                format!("{:.2}", showtime.price),
            ]
        })
        .collect();

    TableView {
        title: "Showtimes".to_string(),
        headers: ["Movie", "Room", "Starts", "Free", "Price"],
        widths: [
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Length(18),
            Constraint::Length(6),
            Constraint::Length(8),
        ],
        rows,
        selected: page.selected(state),
        loading: state.showtime.is_loading(),
        tick,
        empty_hint: "No showtimes scheduled. Press 'a' to add one.",
    }
    .render(frame, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PopulatedRef;

    #[test]
    fn room_column_prefers_populated_label() {
        let state = AppState::default();
        assert_eq!(room_column(&state, None), "-");
        assert_eq!(room_column(&state, Some(&EntityRef::Id("r1".into()))), "r1");
        let populated = EntityRef::Populated(PopulatedRef {
            id: "r1".into(),
            title: None,
            name: None,
            hall_number: Some(4),
        });
        assert_eq!(room_column(&state, Some(&populated)), "Hall 4");
    }
}
