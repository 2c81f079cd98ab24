//! Cinema editor: a nested buffer addressed by dotted field paths.

use crate::api::{Cinema, CinemaDraft, Coordinates, Location};
use crate::ui::form::{format_number, parse_f64, parse_u32, required, EditForm, FieldSpec, FormError};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoordinatesBuffer {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationBuffer {
    pub address: String,
    pub coordinates: CoordinatesBuffer,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CinemaBuffer {
    pub name: String,
    pub total_rooms: String,
    pub location: LocationBuffer,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CinemaForm {
    buffer: CinemaBuffer,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Name"),
    FieldSpec::new("total_rooms", "Total rooms"),
    FieldSpec::new("location.address", "Address"),
    FieldSpec::new("location.coordinates.lat", "Latitude"),
    FieldSpec::new("location.coordinates.lng", "Longitude"),
];

impl CinemaForm {
    pub fn buffer(&self) -> &CinemaBuffer {
        &self.buffer
    }

    /// Apply a flat change event such as `location.coordinates.lat = "1.5"`.
    ///
    /// Returns a new buffer in which only the addressed leaf differs.
    pub fn apply_change(&self, path: &str, value: String) -> Result<Self, FormError> {
        let mut next = self.clone();
        let segments: Vec<&str> = path.split('.').collect();
        let slot = match segments.as_slice() {
            ["name"] => &mut next.buffer.name,
            ["total_rooms"] => &mut next.buffer.total_rooms,
            ["location", "address"] => &mut next.buffer.location.address,
            ["location", "coordinates", "lat"] => &mut next.buffer.location.coordinates.lat,
            ["location", "coordinates", "lng"] => &mut next.buffer.location.coordinates.lng,
            _ => {
                return Err(FormError::UnknownField {
                    path: path.to_string(),
                })
            }
        };
        *slot = value;
        Ok(next)
    }
}

impl EditForm for CinemaForm {
    type Entity = Cinema;

    const NOUN: &'static str = "Cinema";

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn from_entity(cinema: &Cinema) -> Self {
        Self {
            buffer: CinemaBuffer {
                name: cinema.name.clone(),
                total_rooms: cinema.total_rooms.to_string(),
                location: LocationBuffer {
                    address: cinema.location.address.clone(),
                    coordinates: CoordinatesBuffer {
                        lat: format_number(cinema.location.coordinates.lat),
                        lng: format_number(cinema.location.coordinates.lng),
                    },
                },
            },
        }
    }

    fn value(&self, path: &str) -> Option<&str> {
        let buffer = &self.buffer;
        let value = match path {
            "name" => &buffer.name,
            "total_rooms" => &buffer.total_rooms,
            "location.address" => &buffer.location.address,
            "location.coordinates.lat" => &buffer.location.coordinates.lat,
            "location.coordinates.lng" => &buffer.location.coordinates.lng,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn with_value(&self, path: &str, value: String) -> Result<Self, FormError> {
        self.apply_change(path, value)
    }

    fn to_draft(&self) -> Result<CinemaDraft, FormError> {
        let buffer = &self.buffer;
        Ok(CinemaDraft {
            name: required("Name", &buffer.name)?,
            total_rooms: parse_u32("Total rooms", &buffer.total_rooms)?,
            location: Location {
                address: buffer.location.address.trim().to_string(),
                coordinates: Coordinates {
                    lat: parse_f64("Latitude", &buffer.location.coordinates.lat)?,
                    lng: parse_f64("Longitude", &buffer.location.coordinates.lng)?,
                },
            },
        })
    }
}
