//! Data-access collaborators
//!
//! - `contacts` - address book persistence (create, list)
//! - `projects` - project lookup used by project route resolution
//!
//! Each collaborator is an async trait so controllers can be wired to the
//! HTTP implementation in production and to in-memory fakes in tests.

pub mod contacts;
pub mod projects;

pub use contacts::{create_path, list_path, ContactsService, HttpContactsService};
pub use projects::{HttpProjectApi, Project, ProjectApi};

use crate::{config::Settings, Error, Result};

/// Build the reqwest client shared by the HTTP collaborators
pub(crate) fn build_client(settings: &Settings) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(settings.request_timeout())
        .build()
        .map_err(Error::from)
}

/// Parse and normalize the server base URL (no trailing slash)
pub(crate) fn base_url(settings: &Settings) -> Result<String> {
    let url = url::Url::parse(&settings.server_url)
        .map_err(|e| Error::Config(format!("Invalid server_url '{}': {}", settings.server_url, e)))?;
    Ok(url.as_str().trim_end_matches('/').to_string())
}

/// Turn a non-success response into [`Error::Service`]
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.text().await {
        Ok(body) if !body.trim().is_empty() => body,
        _ => status.canonical_reason().unwrap_or("unknown error").to_string(),
    };

    Err(Error::Service {
        status: status.as_u16(),
        message,
    })
}
