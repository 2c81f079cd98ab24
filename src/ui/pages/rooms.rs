use ratatui::layout::{Constraint, Rect};
use ratatui::Frame;

use crate::api::Room;
use crate::store::AppState;
use crate::ui::form::RoomForm;
use crate::ui::pages::{Labeled, ResourcePage, TableView};

impl Labeled for Room {
    fn label(&self) -> String {
        format!("room \"Hall {}\"", self.hall_number)
    }
}

/// Cinema name for a room, falling back to the raw id until cinemas load.
pub fn cinema_name<'a>(state: &'a AppState, cinema_id: &'a str) -> &'a str {
    state
        .cinema
        .find(cinema_id)
        .map(|cinema| cinema.name.as_str())
        .unwrap_or(cinema_id)
}

/// Cinema a new room starts attached to: that of the selected row, else the
/// first known cinema.
pub fn default_cinema(state: &AppState, page: &ResourcePage<RoomForm>) -> String {
    page.selected_entity(state)
        .map(|room| room.cinema_id.clone())
        .or_else(|| state.cinema.items().first().map(|c| c.id.clone()))
        .unwrap_or_default()
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, page: &ResourcePage<RoomForm>, tick: u8) {
    let rows = state
        .room
        .items()
        .iter()
        .map(|room| {
            [
                cinema_name(state, &room.cinema_id).to_string(),
                room.hall_number.to_string(),
                room.total_seats.to_string(),
            ]
        })
        .collect();

    TableView {
        title: "Rooms".to_string(),
        headers: ["Cinema", "Hall", "Seats"],
        widths: [
            Constraint::Percentage(50),
            Constraint::Length(8),
            Constraint::Length(8),
        ],
        rows,
        selected: page.selected(state),
        loading: state.room.is_loading() || state.cinema.is_loading(),
        tick,
        empty_hint: "No rooms yet. Press 'a' to add one.",
    }
    .render(frame, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Cinema, Coordinates, Location};
    use crate::store::{RootReducer, SliceIntent, StoreIntent};
    use crate::ui::mvi::Reducer;

    #[test]
    fn cinema_names_resolve_by_id() {
        let state = RootReducer::reduce(
            AppState::default(),
            StoreIntent::Cinema(SliceIntent::Fetched {
                epoch: 0,
                items: vec![Cinema {
                    id: "c1".into(),
                    name: "Grand".into(),
                    total_rooms: 3,
                    location: Location {
                        address: "1 Main".into(),
                        coordinates: Coordinates { lat: 1.0, lng: 2.0 },
                    },
                }],
            }),
        );
        assert_eq!(cinema_name(&state, "c1"), "Grand");
        assert_eq!(cinema_name(&state, "c404"), "c404");
        assert_eq!(default_cinema(&state, &ResourcePage::default()), "c1");
    }
}
