//! Projects list view: fetches the whole collection once per mount.

use crate::{
    core::{
        api::{ApiError, ProjectsApi},
        fetch::{FetchState, Phase},
        format,
    },
    models::Project,
};

pub const LOAD_ERROR: &str = "Failed to load projects. Please try again later.";
pub const EMPTY_NOTICE: &str = "No projects found. Create a new project to get started.";
pub const COLUMNS: [&str; 4] = ["Project ID", "Name", "Attributes", "Created At"];

/// Display-ready cells for one table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRow {
    pub id: String,
    pub name: String,
    /// `key: value` per line, or a single `No attributes` line.
    pub attributes: Vec<String>,
    pub created_at: String,
}

impl From<&Project> for ProjectRow {
    fn from(project: &Project) -> Self {
        let attributes = if project.attributes.is_empty() {
            vec![format::NO_ATTRIBUTES.to_string()]
        } else {
            format::attribute_lines(&project.attributes)
        };
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            attributes,
            created_at: format::created_at(project.created_at.as_deref()),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ListView<'a> {
    Spinner,
    Error(&'a str),
    Empty,
    Table(Vec<ProjectRow>),
}

#[derive(Debug, Clone, Default)]
pub struct ProjectsList {
    fetch: FetchState<Vec<Project>>,
}

impl ProjectsList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the list loading. Call right before issuing the request.
    pub fn begin(&mut self) {
        self.fetch.start();
    }

    pub fn finish(&mut self, result: Result<Vec<Project>, ApiError>) {
        match result {
            Ok(projects) => {
                tracing::debug!(count = projects.len(), "projects loaded");
                self.fetch.succeed(projects);
            }
            Err(err) => {
                tracing::error!(error = %err, "error fetching projects");
                self.fetch.fail(LOAD_ERROR);
            }
        }
    }

    /// Full mount cycle: begin, await the request, record the outcome.
    pub async fn load<A: ProjectsApi>(&mut self, api: &A) {
        self.begin();
        let result = api.list_projects().await;
        self.finish(result);
    }

    pub fn is_loading(&self) -> bool {
        self.fetch.is_loading()
    }

    pub fn projects(&self) -> &[Project] {
        self.fetch.data()
    }

    pub fn error(&self) -> Option<&str> {
        self.fetch.error()
    }

    pub fn view(&self) -> ListView<'_> {
        match self.fetch.phase() {
            Phase::Loading => ListView::Spinner,
            Phase::Failed(message) => ListView::Error(message),
            Phase::Ready(projects) if projects.is_empty() => ListView::Empty,
            Phase::Ready(projects) => {
                ListView::Table(projects.iter().map(ProjectRow::from).collect())
            }
        }
    }
}
