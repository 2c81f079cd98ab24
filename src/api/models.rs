//! Entities as the API transports them.
//!
//! Identifiers are the API's `_id` strings. Drafts are the payloads sent on
//! create and update; they never carry an identifier.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Anything the stores can cache and look up by identifier.
pub trait Entity: Clone + PartialEq + Debug + Send + Sync + 'static {
    fn id(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cinema {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub total_rooms: u32,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CinemaDraft {
    pub name: String,
    pub total_rooms: u32,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "_id")]
    pub id: String,
    pub cinema_id: String,
    pub hall_number: u32,
    pub total_seats: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDraft {
    pub cinema_id: String,
    pub hall_number: u32,
    pub total_seats: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    #[default]
    Available,
    Booked,
}

impl SeatStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SeatStatus::Available => "available",
            SeatStatus::Booked => "booked",
        }
    }

    /// Case-insensitive parse of `available` / `booked`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "available" => Some(SeatStatus::Available),
            "booked" => Some(SeatStatus::Booked),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    #[serde(rename = "_id")]
    pub id: String,
    pub room_id: String,
    pub seat_number: String,
    #[serde(default)]
    pub status: SeatStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showtime_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatDraft {
    pub room_id: String,
    pub seat_number: String,
    pub status: SeatStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showtime_id: Option<String>,
}

/// Which seats to list: everything, or one room's seats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatQuery {
    pub room_id: Option<String>,
}

impl SeatQuery {
    pub fn all() -> Self {
        Self { room_id: None }
    }

    pub fn room(room_id: impl Into<String>) -> Self {
        Self {
            room_id: Some(room_id.into()),
        }
    }
}

/// Populated form of a reference (`{"_id": ..., "title": ...}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulatedRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hall_number: Option<u32>,
}

/// A reference to another document, either a bare id or populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityRef {
    Id(String),
    Populated(PopulatedRef),
}

impl EntityRef {
    pub fn id(&self) -> &str {
        match self {
            EntityRef::Id(id) => id,
            EntityRef::Populated(populated) => &populated.id,
        }
    }

    /// Best display label: title, then name, then hall number, then the id.
    pub fn label(&self) -> String {
        match self {
            EntityRef::Id(id) => id.clone(),
            EntityRef::Populated(populated) => populated
                .title
                .clone()
                .or_else(|| populated.name.clone())
                .or_else(|| populated.hall_number.map(|n| format!("Hall {}", n)))
                .unwrap_or_else(|| populated.id.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Showtime {
    #[serde(rename = "_id")]
    pub id: String,
    pub movie_id: EntityRef,
    #[serde(default)]
    pub room_id: Option<EntityRef>,
    /// Start time as sent by the server (ISO-8601).
    pub showtime: String,
    pub available_seats: u32,
    pub price: f64,
}

impl Showtime {
    /// Start time trimmed to minute precision (`YYYY-MM-DDTHH:MM`).
    pub fn start_minutes(&self) -> &str {
        trim_to_minutes(&self.showtime)
    }
}

/// Trims an ISO-8601 timestamp to `YYYY-MM-DDTHH:MM`.
pub fn trim_to_minutes(timestamp: &str) -> &str {
    match timestamp.char_indices().nth(16) {
        Some((idx, _)) => &timestamp[..idx],
        None => timestamp,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowtimeDraft {
    pub movie_id: String,
    pub room_id: String,
    pub showtime: String,
    pub available_seats: u32,
    pub price: f64,
}

impl Entity for Cinema {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Room {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Seat {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Showtime {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cinema_decodes_underscore_id() {
        let cinema: Cinema = serde_json::from_str(
            r#"{"_id":"c1","name":"Grand","total_rooms":3,
                "location":{"address":"1 Main","coordinates":{"lat":1,"lng":2}}}"#,
        )
        .unwrap();
        assert_eq!(cinema.id(), "c1");
        assert_eq!(cinema.location.coordinates.lng, 2.0);
    }

    #[test]
    fn showtime_accepts_bare_and_populated_refs() {
        let bare: Showtime = serde_json::from_str(
            r#"{"_id":"st1","movie_id":"m1","room_id":"r1",
                "showtime":"2024-05-01T18:30:00.000Z","available_seats":80,"price":9.5}"#,
        )
        .unwrap();
        assert_eq!(bare.movie_id, EntityRef::Id("m1".into()));
        assert_eq!(bare.room_id.as_ref().map(EntityRef::id), Some("r1"));

        let populated: Showtime = serde_json::from_str(
            r#"{"_id":"st2","movie_id":{"_id":"m2","title":"Dune"},"room_id":null,
                "showtime":"2024-05-01T18:30:00.000Z","available_seats":80,"price":9.5}"#,
        )
        .unwrap();
        assert_eq!(populated.movie_id.id(), "m2");
        assert_eq!(populated.movie_id.label(), "Dune");
        assert!(populated.room_id.is_none());
    }

    #[test]
    fn start_minutes_trims_seconds() {
        assert_eq!(trim_to_minutes("2024-05-01T18:30:00.000Z"), "2024-05-01T18:30");
        assert_eq!(trim_to_minutes("2024-05-01"), "2024-05-01");
    }

    #[test]
    fn seat_status_is_lowercase_on_the_wire() {
        let json = serde_json::to_string(&SeatStatus::Booked).unwrap();
        assert_eq!(json, r#""booked""#);
        assert_eq!(SeatStatus::parse(" Available "), Some(SeatStatus::Available));
        assert_eq!(SeatStatus::parse("sold"), None);
    }

    #[test]
    fn seat_draft_omits_empty_showtime() {
        let draft = SeatDraft {
            room_id: "r1".into(),
            seat_number: "A1".into(),
            status: SeatStatus::Available,
            showtime_id: None,
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("showtime_id").is_none());
    }
}
