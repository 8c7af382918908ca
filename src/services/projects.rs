//! Project lookup

use crate::{config::Settings, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A project as returned by the projects API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Project identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Title
    pub title: String,
    /// Description
    pub description: String,
}

/// Data-access collaborator for projects
#[async_trait]
pub trait ProjectApi: Send + Sync {
    /// Fetch a single project
    async fn get(&self, project_id: &str) -> Result<Project>;
}

/// REST implementation of [`ProjectApi`] (`GET /api/projects/{id}`)
#[derive(Debug, Clone)]
pub struct HttpProjectApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProjectApi {
    /// Create a client for the server configured in `settings`
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            client: super::build_client(settings)?,
            base_url: super::base_url(settings)?,
        })
    }
}

#[async_trait]
impl ProjectApi for HttpProjectApi {
    async fn get(&self, project_id: &str) -> Result<Project> {
        let url = format!("{}/api/projects/{}", self.base_url, project_id);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let response = super::check_status(response).await?;
        Ok(response.json::<Project>().await?)
    }
}
