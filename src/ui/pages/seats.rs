use ratatui::layout::{Constraint, Rect};
use ratatui::Frame;

use crate::api::{Room, Seat, SeatQuery};
use crate::store::AppState;
use crate::ui::form::SeatForm;
use crate::ui::pages::{Labeled, ResourcePage, TableView};

impl Labeled for Seat {
    fn label(&self) -> String {
        format!("seat \"{}\"", self.seat_number)
    }
}

/// Room filter of the seats page. `None` lists every seat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomFilter {
    room_id: Option<String>,
}

impl RoomFilter {
    pub fn room_id(&self) -> Option<&str> {
        self.room_id.as_deref()
    }

    pub fn query(&self) -> SeatQuery {
        SeatQuery {
            room_id: self.room_id.clone(),
        }
    }

    /// Step through "all rooms" followed by every known room.
    pub fn cycle(&mut self, rooms: &[Room], forward: bool) {
        let options = rooms.len() + 1;
        let current = match &self.room_id {
            Some(id) => rooms.iter().position(|r| &r.id == id).map_or(0, |i| i + 1),
            None => 0,
        };
        let next = if forward {
            (current + 1) % options
        } else {
            (current + options - 1) % options
        };
        self.room_id = next.checked_sub(1).map(|i| rooms[i].id.clone());
    }

    pub fn describe(&self, state: &AppState) -> String {
        match &self.room_id {
            None => "All rooms".to_string(),
            Some(id) => room_label(state, id),
        }
    }
}

pub fn room_label(state: &AppState, room_id: &str) -> String {
    match state.room.find(room_id) {
        Some(room) => format!("Hall {}", room.hall_number),
        None => room_id.to_string(),
    }
}

/// Room a new seat starts in: the filtered room, else the first known room.
pub fn default_room(state: &AppState, filter: &RoomFilter) -> String {
    filter
        .room_id()
        .map(str::to_string)
        .or_else(|| state.room.items().first().map(|r| r.id.clone()))
        .unwrap_or_default()
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    page: &ResourcePage<SeatForm>,
    filter: &RoomFilter,
    tick: u8,
) {
    let rows = state
        .seat
        .items()
        .iter()
        .map(|seat| {
            [
                seat.seat_number.clone(),
                room_label(state, &seat.room_id),
                seat.status.as_str().to_string(),
                seat.showtime_id.clone().unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();

    TableView {
        title: format!("Seats · {}", filter.describe(state)),
        headers: ["Seat", "Room", "Status", "Showtime"],
        widths: [
            Constraint::Length(10),
            Constraint::Percentage(30),
            Constraint::Length(10),
            Constraint::Percentage(40),
        ],
        rows,
        selected: page.selected(state),
        loading: state.seat.is_loading() || state.room.is_loading(),
        tick,
        empty_hint: "No seats for this selection.",
    }
    .render(frame, area);
}
