//! Configuration: file format, loading and shared storage.

mod credentials;
mod loader;
mod store;
mod types;

pub use credentials::SecureString;
pub use loader::ConfigError;
pub use store::{ConfigStore, Overrides};
pub use types::{ApiConfig, AuthConfig, Config, LoggingConfig, UiConfig, DEFAULT_API_URL};
