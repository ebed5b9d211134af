use std::{future::Future, sync::Arc};

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    config::ApiConfig,
    models::{NewProject, Project},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Network(String),
    #[error("Error: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("invalid endpoint url {0}")]
    Url(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Read/create access to the projects collection.
///
/// Futures are `'static` so a caller can hand them to an executor without
/// borrowing the client.
pub trait ProjectsApi: Clone + Send + Sync + 'static {
    fn list_projects(&self)
    -> impl Future<Output = Result<Vec<Project>, ApiError>> + Send + 'static;
    fn get_project(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Project, ApiError>> + Send + 'static;
    fn create_project(
        &self,
        project: NewProject,
    ) -> impl Future<Output = Result<Project, ApiError>> + Send + 'static;
}

#[derive(Debug)]
struct HttpState {
    client: reqwest::Client,
    config: ApiConfig,
    origin: Url,
}

/// [`ProjectsApi`] over HTTP. Relative endpoints are joined onto `origin`.
#[derive(Debug, Clone)]
pub struct HttpProjectsApi {
    state: Arc<HttpState>,
}

impl HttpProjectsApi {
    pub fn new(config: ApiConfig, origin: &str) -> anyhow::Result<Self> {
        let origin = Url::parse(origin)?;
        Ok(Self {
            state: Arc::new(HttpState {
                client: reqwest::Client::new(),
                config,
                origin,
            }),
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.state.config
    }

    fn resolve(&self, endpoint: &str) -> Result<Url, ApiError> {
        self.state
            .origin
            .join(endpoint)
            .map_err(|_| ApiError::Url(endpoint.to_string()))
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    Ok(response.json::<T>().await?)
}

impl ProjectsApi for HttpProjectsApi {
    fn list_projects(
        &self,
    ) -> impl Future<Output = Result<Vec<Project>, ApiError>> + Send + 'static {
        let state = self.state.clone();
        let url = self.resolve(&state.config.endpoints.projects);
        async move {
            let url = url?;
            tracing::debug!(%url, "listing projects");
            let response = state.client.get(url).send().await?;
            read_json(response).await
        }
    }

    fn get_project(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Project, ApiError>> + Send + 'static {
        let state = self.state.clone();
        let url = self.resolve(&state.config.endpoints.project(id));
        async move {
            let url = url?;
            tracing::debug!(%url, "fetching project");
            let response = state.client.get(url).send().await?;
            read_json(response).await
        }
    }

    fn create_project(
        &self,
        project: NewProject,
    ) -> impl Future<Output = Result<Project, ApiError>> + Send + 'static {
        let state = self.state.clone();
        let url = self.resolve(&state.config.endpoints.projects);
        async move {
            let url = url?;
            tracing::debug!(%url, name = %project.name, "creating project");
            let response = state
                .client
                .post(url)
                .header(CONTENT_TYPE, "application/json")
                .json(&project)
                .send()
                .await?;
            read_json(response).await
        }
    }
}
