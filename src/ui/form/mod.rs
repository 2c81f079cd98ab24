//! Modal editors: per-entity edit buffers, the editor lifecycle reducer and
//! the delete confirmation prompt.

mod cinema;
mod confirm;
mod dialog;
mod editor;
mod room;
mod seat;
mod showtime;

pub use cinema::{CinemaBuffer, CinemaForm, CoordinatesBuffer, LocationBuffer};
pub use confirm::{ConfirmIntent, ConfirmReducer, ConfirmState};
pub use dialog::{render_confirm, render_editor};
pub use editor::{EditorIntent, EditorPhase, EditorReducer, EditorState};
pub use room::RoomForm;
pub use seat::SeatForm;
pub use showtime::ShowtimeForm;

use std::fmt::Debug;
use thiserror::Error;

use crate::api::Resource;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Unknown field '{path}'")]
    UnknownField { path: String },

    #[error("{field} must be a number")]
    InvalidNumber { field: &'static str },

    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be one of: {expected}")]
    InvalidChoice {
        field: &'static str,
        expected: &'static str,
    },
}

/// One editable field: the change-event path and the label shown beside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub path: &'static str,
    pub label: &'static str,
}

impl FieldSpec {
    pub const fn new(path: &'static str, label: &'static str) -> Self {
        Self { path, label }
    }
}

/// Text buffer behind an editor dialog.
///
/// Every field is held as the text the user typed; numbers are parsed only
/// when the buffer is turned into a draft.
pub trait EditForm: Clone + PartialEq + Debug + Default + Send + 'static {
    type Entity: Resource;

    /// Noun used in the dialog title.
    const NOUN: &'static str;

    fn fields() -> &'static [FieldSpec];

    /// Buffer pre-filled from an existing entity (edit mode).
    fn from_entity(entity: &Self::Entity) -> Self;

    fn value(&self, path: &str) -> Option<&str>;

    /// Copy of the buffer with one field replaced.
    fn with_value(&self, path: &str, value: String) -> Result<Self, FormError>;

    fn to_draft(&self) -> Result<<Self::Entity as Resource>::Draft, FormError>;
}

pub(crate) fn parse_u32(field: &'static str, raw: &str) -> Result<u32, FormError> {
    raw.trim()
        .parse()
        .map_err(|_| FormError::InvalidNumber { field })
}

pub(crate) fn parse_f64(field: &'static str, raw: &str) -> Result<f64, FormError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(FormError::InvalidNumber { field })
}

pub(crate) fn required(field: &'static str, raw: &str) -> Result<String, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FormError::Required { field });
    }
    Ok(trimmed.to_string())
}

/// Renders a float without a trailing `.0` so edit buffers look as typed.
pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
