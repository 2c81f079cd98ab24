//! Terminal administration console for a cinema-ticketing REST API.

pub mod api;
pub mod config;
pub mod logging;
pub mod shutdown;
pub mod store;
pub mod ui;
pub mod worker;
