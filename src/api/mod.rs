//! Client side of the remote cinema REST API.
//!
//! The API itself is an external collaborator. This module only knows how to
//! address each collection, send JSON and normalize what comes back into the
//! typed entities in [`models`].

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod resource;

pub use auth::{LoginRequest, Session};
pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    Cinema, CinemaDraft, Coordinates, Entity, EntityRef, Location, PopulatedRef, Room, RoomDraft,
    Seat, SeatDraft, SeatQuery, SeatStatus, Showtime, ShowtimeDraft,
};
pub use resource::Resource;
