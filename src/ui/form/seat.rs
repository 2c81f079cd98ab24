use crate::api::{Seat, SeatDraft, SeatStatus};
use crate::ui::form::{required, EditForm, FieldSpec, FormError};

#[derive(Debug, Clone, PartialEq)]
pub struct SeatForm {
    pub room_id: String,
    pub seat_number: String,
    pub status: String,
    pub showtime_id: String,
}

impl Default for SeatForm {
    fn default() -> Self {
        Self {
            room_id: String::new(),
            seat_number: String::new(),
            status: SeatStatus::Available.as_str().to_string(),
            showtime_id: String::new(),
        }
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("room_id", "Room ID"),
    FieldSpec::new("seat_number", "Seat number"),
    FieldSpec::new("status", "Status"),
    FieldSpec::new("showtime_id", "Showtime ID"),
];

impl SeatForm {
    pub fn for_room(room_id: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            ..Self::default()
        }
    }
}

impl EditForm for SeatForm {
    type Entity = Seat;

    const NOUN: &'static str = "Seat";

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn from_entity(seat: &Seat) -> Self {
        Self {
            room_id: seat.room_id.clone(),
            seat_number: seat.seat_number.clone(),
            status: seat.status.as_str().to_string(),
            showtime_id: seat.showtime_id.clone().unwrap_or_default(),
        }
    }

    fn value(&self, path: &str) -> Option<&str> {
        match path {
            "room_id" => Some(self.room_id.as_str()),
            "seat_number" => Some(self.seat_number.as_str()),
            "status" => Some(self.status.as_str()),
            "showtime_id" => Some(self.showtime_id.as_str()),
            _ => None,
        }
    }

    fn with_value(&self, path: &str, value: String) -> Result<Self, FormError> {
        let mut next = self.clone();
        match path {
            "room_id" => next.room_id = value,
            "seat_number" => next.seat_number = value,
            "status" => next.status = value,
            "showtime_id" => next.showtime_id = value,
            _ => {
                return Err(FormError::UnknownField {
                    path: path.to_string(),
                })
            }
        }
        Ok(next)
    }

    fn to_draft(&self) -> Result<SeatDraft, FormError> {
        let status = SeatStatus::parse(&self.status).ok_or(FormError::InvalidChoice {
            field: "Status",
            expected: "available, booked",
        })?;
        let showtime_id = Some(self.showtime_id.trim())
            .filter(|id| !id.is_empty())
            .map(str::to_string);

        Ok(SeatDraft {
            room_id: required("Room ID", &self.room_id)?,
            seat_number: required("Seat number", &self.seat_number)?,
            status,
            showtime_id,
        })
    }
}
