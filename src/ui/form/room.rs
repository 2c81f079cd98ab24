use crate::api::{Room, RoomDraft};
use crate::ui::form::{parse_u32, required, EditForm, FieldSpec, FormError};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoomForm {
    pub cinema_id: String,
    pub hall_number: String,
    pub total_seats: String,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("cinema_id", "Cinema ID"),
    FieldSpec::new("hall_number", "Hall number"),
    FieldSpec::new("total_seats", "Total seats"),
];

impl RoomForm {
    /// Empty buffer attached to a cinema.
    pub fn for_cinema(cinema_id: impl Into<String>) -> Self {
        Self {
            cinema_id: cinema_id.into(),
            ..Self::default()
        }
    }
}

impl EditForm for RoomForm {
    type Entity = Room;

    const NOUN: &'static str = "Room";

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn from_entity(room: &Room) -> Self {
        Self {
            cinema_id: room.cinema_id.clone(),
            hall_number: room.hall_number.to_string(),
            total_seats: room.total_seats.to_string(),
        }
    }

    fn value(&self, path: &str) -> Option<&str> {
        match path {
            "cinema_id" => Some(self.cinema_id.as_str()),
            "hall_number" => Some(self.hall_number.as_str()),
            "total_seats" => Some(self.total_seats.as_str()),
            _ => None,
        }
    }

    fn with_value(&self, path: &str, value: String) -> Result<Self, FormError> {
        let mut next = self.clone();
        match path {
            "cinema_id" => next.cinema_id = value,
            "hall_number" => next.hall_number = value,
            "total_seats" => next.total_seats = value,
            _ => {
                return Err(FormError::UnknownField {
                    path: path.to_string(),
                })
            }
        }
        Ok(next)
    }

    fn to_draft(&self) -> Result<RoomDraft, FormError> {
        Ok(RoomDraft {
            cinema_id: required("Cinema ID", &self.cinema_id)?,
            hall_number: parse_u32("Hall number", &self.hall_number)?,
            total_seats: parse_u32("Total seats", &self.total_seats)?,
        })
    }
}
