//! Session slice backing the login gate.

use crate::api::Session;
use crate::ui::mvi::{Intent, Reducer, UiState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    session: Option<Session>,
    loading: bool,
    error: Option<String>,
}

impl UiState for AuthState {}

impl AuthState {
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthIntent {
    LoginPending,
    LoginSucceeded { session: Session },
    LoginRejected { message: String },
    Logout,
    ClearError,
}

impl Intent for AuthIntent {}

pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Intent = AuthIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AuthIntent::LoginPending => AuthState {
                loading: true,
                error: None,
                ..state
            },
            AuthIntent::LoginSucceeded { session } => AuthState {
                session: Some(session),
                loading: false,
                error: None,
            },
            AuthIntent::LoginRejected { message } => AuthState {
                session: None,
                loading: false,
                error: Some(message),
            },
            AuthIntent::Logout => AuthState::default(),
            AuthIntent::ClearError => AuthState {
                error: None,
                ..state
            },
        }
    }
}
