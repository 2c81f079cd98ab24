//! Per-resource addressing and response normalization.
//!
//! The API is not uniform: the showtime list comes wrapped in an envelope and
//! seat creation is a bulk endpoint. Every such quirk is absorbed here so the
//! stores always receive plain `Vec<T>` / `T` values.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::api::models::{
    Cinema, CinemaDraft, Entity, Room, RoomDraft, Seat, SeatDraft, SeatQuery, Showtime,
    ShowtimeDraft,
};

/// A collection exposed by the API.
pub trait Resource: Entity + DeserializeOwned {
    /// Payload for create and update.
    type Draft: Serialize + Clone + Debug + Send + Sync + 'static;
    /// Parameters narrowing the list request.
    type Query: Clone + Debug + Default + PartialEq + Send + Sync + 'static;

    /// Collection path segment, also used in messages (`cinemas`).
    const COLLECTION: &'static str;
    /// Singular noun used in messages (`cinema`).
    const SINGULAR: &'static str;

    /// Path segments of the list endpoint.
    fn list_segments(_query: &Self::Query) -> Vec<String> {
        vec![Self::COLLECTION.to_string()]
    }

    /// Path segments addressing one element.
    fn item_segments(id: &str) -> Vec<String> {
        vec![Self::COLLECTION.to_string(), id.to_string()]
    }

    /// Decode the list endpoint's body.
    fn decode_list(body: &[u8]) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// JSON body for a create request.
    fn create_body(draft: &Self::Draft) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(draft)
    }

    /// Decode the create endpoint's body into the created elements.
    fn decode_created(body: &[u8]) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_slice::<Self>(body).map(|created| vec![created])
    }
}

impl Resource for Cinema {
    type Draft = CinemaDraft;
    type Query = ();

    const COLLECTION: &'static str = "cinemas";
    const SINGULAR: &'static str = "cinema";
}

impl Resource for Room {
    type Draft = RoomDraft;
    type Query = ();

    const COLLECTION: &'static str = "rooms";
    const SINGULAR: &'static str = "room";
}

/// Either one element or many; used where the server may answer with both.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl Resource for Seat {
    type Draft = SeatDraft;
    type Query = SeatQuery;

    const COLLECTION: &'static str = "seats";
    const SINGULAR: &'static str = "seat";

    fn list_segments(query: &SeatQuery) -> Vec<String> {
        match &query.room_id {
            Some(room_id) => vec![Self::COLLECTION.to_string(), room_id.clone()],
            None => vec![Self::COLLECTION.to_string()],
        }
    }

    /// Seats are created in bulk; a single draft goes out as a one-element array.
    fn create_body(draft: &SeatDraft) -> Result<serde_json::Value, serde_json::Error> {
        Ok(serde_json::Value::Array(vec![serde_json::to_value(draft)?]))
    }

    fn decode_created(body: &[u8]) -> Result<Vec<Self>, serde_json::Error> {
        Ok(match serde_json::from_slice::<OneOrMany<Seat>>(body)? {
            OneOrMany::Many(seats) => seats,
            OneOrMany::One(seat) => vec![seat],
        })
    }
}

#[derive(Deserialize)]
struct ShowtimeEnvelope {
    showtimes: Vec<Showtime>,
}

impl Resource for Showtime {
    type Draft = ShowtimeDraft;
    type Query = ();

    const COLLECTION: &'static str = "showtimes";
    const SINGULAR: &'static str = "showtime";

    fn decode_list(body: &[u8]) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_slice::<ShowtimeEnvelope>(body).map(|envelope| envelope.showtimes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::SeatStatus;

    const SHOWTIME: &str = r#"{"_id":"st1","movie_id":"m1","room_id":"r1",
        "showtime":"2024-05-01T18:30:00Z","available_seats":80,"price":9.5}"#;

    #[test]
    fn showtime_list_requires_envelope() {
        let wrapped = format!(r#"{{"showtimes":[{}]}}"#, SHOWTIME);
        let list = Showtime::decode_list(wrapped.as_bytes()).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, "st1");

        let bare = format!("[{}]", SHOWTIME);
        assert!(Showtime::decode_list(bare.as_bytes()).is_err());
    }

    #[test]
    fn room_list_is_bare_array() {
        let list = Room::decode_list(
            br#"[{"_id":"r1","cinema_id":"c1","hall_number":1,"total_seats":50}]"#,
        )
        .unwrap();
        assert_eq!(list[0].hall_number, 1);
        assert!(Room::decode_list(br#"{"rooms":[]}"#).is_err());
    }

    #[test]
    fn seat_list_is_room_scoped() {
        assert_eq!(Seat::list_segments(&SeatQuery::all()), vec!["seats"]);
        assert_eq!(Seat::list_segments(&SeatQuery::room("r7")), vec!["seats", "r7"]);
        assert_eq!(Cinema::list_segments(&()), vec!["cinemas"]);
        assert_eq!(Cinema::item_segments("c1"), vec!["cinemas", "c1"]);
    }

    #[test]
    fn seat_create_is_bulk() {
        let draft = SeatDraft {
            room_id: "r1".into(),
            seat_number: "A1".into(),
            status: SeatStatus::Available,
            showtime_id: None,
        };
        let body = Seat::create_body(&draft).unwrap();
        assert!(body.is_array());
        assert_eq!(body[0]["seat_number"], "A1");

        let many = Seat::decode_created(
            br#"[{"_id":"s1","room_id":"r1","seat_number":"A1","status":"available"},
                 {"_id":"s2","room_id":"r1","seat_number":"A2","status":"booked"}]"#,
        )
        .unwrap();
        assert_eq!(many.len(), 2);

        let one = Seat::decode_created(
            br#"{"_id":"s1","room_id":"r1","seat_number":"A1","status":"available"}"#,
        )
        .unwrap();
        assert_eq!(one.len(), 1);
    }

    #[test]
    fn default_create_decodes_single_element() {
        let created = Room::decode_created(
            br#"{"_id":"r9","cinema_id":"c1","hall_number":2,"total_seats":80}"#,
        )
        .unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].id, "r9");
    }
}
