//! Contactbook - view controllers for a groupware contacts application
//!
//! This library provides the controllers behind the contacts views (contact
//! creation, avatar upload, contact listing, project resolution) together with
//! the collaborators they are wired to: a REST client, location history,
//! notifications, image selection and modal overlays.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod contact;
pub mod controllers;
pub mod services;
pub mod ui;

/// Result type alias for Contactbook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Contactbook operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote service answered with a non-success status
    #[error("Service error ({status}): {message}")]
    Service {
        /// HTTP status code returned by the server
        status: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed vCard/jCard payload
    #[error("Invalid card: {0}")]
    InvalidCard(String),

    /// A route parameter required by a controller is missing
    #[error("Missing route parameter: {0}")]
    MissingRouteParam(String),

    /// Navigation helper received a label it does not know
    #[error("Unknown navigation label: {0}")]
    UnknownLabel(String),

    /// Blob to string encoding failed
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Image selection error
    #[error("Selection error: {0}")]
    Selection(String),
}

/// Initialize the Contactbook library with logging
pub fn init() {
    tracing_subscriber::fmt::init();
}

/// Initialize logging with an explicit filter directive (e.g. `"contactbook=debug"`)
///
/// Returns an error if the directive cannot be parsed or a global subscriber
/// is already installed.
pub fn init_with_filter(filter: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_new(filter)
        .map_err(|e| Error::Config(format!("Invalid log filter '{}': {}", filter, e)))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to install subscriber: {}", e)))
}

#[cfg(test)]
mod tests;
