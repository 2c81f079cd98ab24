//! Login payloads.

use serde::Deserialize;

use crate::config::SecureString;

/// Credentials typed into the login page.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: SecureString,
}

impl LoginRequest {
    /// JSON body for `POST /auth/login`.
    pub fn to_body(&self) -> serde_json::Value {
        serde_json::json!({
            "email": self.email,
            "password": self.password.expose(),
        })
    }
}

/// Authenticated session returned by the login endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Who is logged in, for the header.
    pub display_name: String,
    pub token: SecureString,
}

#[derive(Deserialize)]
pub(crate) struct LoginResponse {
    token: String,
    #[serde(default)]
    user: Option<serde_json::Value>,
}

impl LoginResponse {
    /// Builds the session, naming the user by `name`, then `email`, then the
    /// address used to log in.
    pub(crate) fn into_session(self, email: &str) -> Session {
        let display_name = self
            .user
            .as_ref()
            .and_then(|user| {
                user.get("name")
                    .and_then(|n| n.as_str())
                    .or_else(|| user.get("email").and_then(|e| e.as_str()))
            })
            .map(str::to_string)
            .unwrap_or_else(|| email.to_string());

        Session {
            display_name,
            token: SecureString::new(self.token),
        }
    }
}
