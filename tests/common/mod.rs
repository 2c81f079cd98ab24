//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use cinema_admin::api::{ApiClient, Cinema, Coordinates, Location, Room, Seat, SeatStatus};
use cinema_admin::config::ApiConfig;
use std::path::PathBuf;
use tempfile::TempDir;

/// API settings pointing at `base_url` with short timeouts.
pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
    }
}

pub fn client_for(base_url: &str) -> ApiClient {
    ApiClient::new(&api_config(base_url)).expect("valid client config")
}

/// Write `content` to a fresh `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn cinema(id: &str, name: &str) -> Cinema {
    Cinema {
        id: id.to_string(),
        name: name.to_string(),
        total_rooms: 3,
        location: Location {
            address: "1 Main".to_string(),
            coordinates: Coordinates { lat: 1.0, lng: 2.0 },
        },
    }
}

pub fn room(id: &str, hall_number: u32) -> Room {
    Room {
        id: id.to_string(),
        cinema_id: "c1".to_string(),
        hall_number,
        total_seats: 80,
    }
}

pub fn seat(id: &str) -> Seat {
    Seat {
        id: id.to_string(),
        room_id: "r1".to_string(),
        seat_number: id.to_uppercase(),
        status: SeatStatus::Available,
        showtime_id: None,
    }
}
