//! Login page: an email/password buffer in front of every other route.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::api::LoginRequest;
use crate::config::SecureString;
use crate::store::AuthState;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::mvi::{Intent, Reducer, UiState};
use crate::ui::theme::{spinner, ACCENT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginState {
    email: String,
    password: SecureString,
    focus: LoginField,
    /// Local validation message; server errors live in the auth slice.
    error: Option<String>,
}

impl UiState for LoginState {}

impl LoginState {
    pub fn with_email(email: impl Into<String>) -> Self {
        let email = email.into();
        let focus = if email.is_empty() {
            LoginField::Email
        } else {
            LoginField::Password
        };
        Self {
            email,
            focus,
            ..Self::default()
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn focus(&self) -> LoginField {
        self.focus
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Credentials ready to send, or the reason they are not.
    pub fn to_request(&self) -> Result<LoginRequest, String> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err("Email and password are required".to_string());
        }
        Ok(LoginRequest {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginIntent {
    Input(char),
    Backspace,
    SwitchField,
    Invalid { message: String },
    /// Forget the typed password, keep the email.
    ClearPassword,
}

impl Intent for LoginIntent {}

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginState;
    type Intent = LoginIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoginIntent::Input(ch) => {
                match state.focus {
                    LoginField::Email => state.email.push(ch),
                    LoginField::Password => {
                        let mut value = state.password.expose().to_string();
                        value.push(ch);
                        state.password = SecureString::new(value);
                    }
                }
                state.error = None;
            }
            LoginIntent::Backspace => {
                match state.focus {
                    LoginField::Email => {
                        state.email.pop();
                    }
                    LoginField::Password => {
                        let mut value = state.password.expose().to_string();
                        value.pop();
                        state.password = SecureString::new(value);
                    }
                }
                state.error = None;
            }
            LoginIntent::SwitchField => {
                state.focus = match state.focus {
                    LoginField::Email => LoginField::Password,
                    LoginField::Password => LoginField::Email,
                };
            }
            LoginIntent::Invalid { message } => state.error = Some(message),
            LoginIntent::ClearPassword => {
                state.password = SecureString::default();
                state.focus = LoginField::Password;
            }
        }
        state
    }
}

const DIALOG_WIDTH: u16 = 52;

pub fn render(frame: &mut Frame, area: Rect, login: &LoginState, auth: &AuthState, tick: u8) {
    let masked = "•".repeat(login.password.expose().chars().count());
    let field = |label: &'static str, value: String, focused: bool| {
        let marker = if focused { "▶ " } else { "  " };
        let style = if focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        Line::from(vec![
            Span::styled(format!("{marker}{label:<10}"), style),
            Span::styled(value, Style::default().fg(HEADER_TEXT)),
        ])
    };

    let mut lines = vec![
        Line::from(""),
        field("Email", login.email.clone(), login.focus == LoginField::Email),
        field("Password", masked, login.focus == LoginField::Password),
        Line::from(""),
    ];

    if auth.is_loading() {
        lines.push(Line::from(Span::styled(
            format!("  {} Signing in...", spinner(tick)),
            Style::default().fg(MUTED_TEXT),
        )));
    } else if let Some(error) = login.error().or(auth.error()) {
        lines.push(Line::from(Span::styled(
            format!("  {error}"),
            Style::default().fg(STATUS_ERROR),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "  Tab: Switch field  Enter: Sign in",
            Style::default().fg(MUTED_TEXT),
        )));
    }

    let height = lines.len() as u16 + 2;
    let dialog = centered_rect_by_size(area, DIALOG_WIDTH, height);
    frame.render_widget(Clear, dialog);
    let block = Block::default()
        .title(Span::styled(" Sign in ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), dialog);
}
