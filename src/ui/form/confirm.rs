//! Delete confirmation prompt.

use crate::ui::mvi::{Intent, Reducer, UiState};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConfirmState {
    #[default]
    Hidden,
    Asking {
        id: String,
        /// What the prompt names, e.g. `cinema "Grand"`.
        label: String,
    },
}

impl UiState for ConfirmState {}

impl ConfirmState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Asking { id, .. } => Some(id.as_str()),
            Self::Hidden => None,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Asking { label, .. } => Some(label.as_str()),
            Self::Hidden => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmIntent {
    Ask { id: String, label: String },
    /// Either answer closes the prompt; the caller acts on `yes` before.
    Answer,
}

impl Intent for ConfirmIntent {}

pub struct ConfirmReducer;

impl Reducer for ConfirmReducer {
    type State = ConfirmState;
    type Intent = ConfirmIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ConfirmIntent::Ask { id, label } => ConfirmState::Asking { id, label },
            ConfirmIntent::Answer => ConfirmState::Hidden,
        }
    }
}
