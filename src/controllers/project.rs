//! Project route resolution

use crate::{
    services::{Project, ProjectApi},
    ui::{location::PROJECTS_ROUTE, Location, RouteParams},
};
use std::sync::Arc;
use tracing::warn;

/// Resolves the project shown by `/projects/:project_id` before the view opens
#[derive(Clone)]
pub struct ProjectResolver {
    api: Arc<dyn ProjectApi>,
    location: Arc<dyn Location>,
}

impl ProjectResolver {
    /// Create a resolver
    pub fn new(api: Arc<dyn ProjectApi>, location: Arc<dyn Location>) -> Self {
        Self { api, location }
    }

    /// Fetch the project named by the `project_id` route parameter
    ///
    /// Any failure sends the user back to the project list.
    pub async fn resolve(&self, params: &RouteParams) -> Option<Project> {
        let project_id = match params.require("project_id") {
            Ok(id) => id,
            Err(e) => {
                warn!("Cannot resolve project: {}", e);
                self.location.set_path(PROJECTS_ROUTE);
                return None;
            }
        };

        match self.api.get(project_id).await {
            Ok(project) => Some(project),
            Err(e) => {
                warn!("Failed to fetch project {}: {}", project_id, e);
                self.location.set_path(PROJECTS_ROUTE);
                None
            }
        }
    }
}
