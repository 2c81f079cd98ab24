use crate::api::models::trim_to_minutes;
use crate::api::{Showtime, ShowtimeDraft};
use crate::ui::form::{format_number, parse_f64, parse_u32, required, EditForm, FieldSpec, FormError};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShowtimeForm {
    pub movie_id: String,
    pub room_id: String,
    /// Start time as `YYYY-MM-DDTHH:MM`.
    pub showtime: String,
    pub available_seats: String,
    pub price: String,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("movie_id", "Movie ID"),
    FieldSpec::new("room_id", "Room ID"),
    FieldSpec::new("showtime", "Starts at"),
    FieldSpec::new("available_seats", "Available seats"),
    FieldSpec::new("price", "Price"),
];

impl EditForm for ShowtimeForm {
    type Entity = Showtime;

    const NOUN: &'static str = "Showtime";

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn from_entity(showtime: &Showtime) -> Self {
        Self {
            movie_id: showtime.movie_id.id().to_string(),
            room_id: showtime
                .room_id
                .as_ref()
                .map(|room| room.id().to_string())
                .unwrap_or_default(),
            showtime: showtime.start_minutes().to_string(),
            available_seats: showtime.available_seats.to_string(),
            price: format_number(showtime.price),
        }
    }

    fn value(&self, path: &str) -> Option<&str> {
        match path {
            "movie_id" => Some(self.movie_id.as_str()),
            "room_id" => Some(self.room_id.as_str()),
            "showtime" => Some(self.showtime.as_str()),
            "available_seats" => Some(self.available_seats.as_str()),
            "price" => Some(self.price.as_str()),
            _ => None,
        }
    }

    fn with_value(&self, path: &str, value: String) -> Result<Self, FormError> {
        let mut next = self.clone();
        match path {
            "movie_id" => next.movie_id = value,
            "room_id" => next.room_id = value,
            "showtime" => next.showtime = value,
            "available_seats" => next.available_seats = value,
            "price" => next.price = value,
            _ => {
                return Err(FormError::UnknownField {
                    path: path.to_string(),
                })
            }
        }
        Ok(next)
    }

    fn to_draft(&self) -> Result<ShowtimeDraft, FormError> {
        let showtime = required("Starts at", &self.showtime)?;
        Ok(ShowtimeDraft {
            movie_id: required("Movie ID", &self.movie_id)?,
            room_id: required("Room ID", &self.room_id)?,
            showtime: trim_to_minutes(&showtime).to_string(),
            available_seats: parse_u32("Available seats", &self.available_seats)?,
            price: parse_f64("Price", &self.price)?,
        })
    }
}
