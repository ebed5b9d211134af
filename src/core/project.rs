//! Single project detail view, keyed by the identifier from the route.

use crate::{
    core::{
        api::{ApiError, ProjectsApi},
        fetch::{FetchState, Phase},
    },
    models::Project,
};

pub const LOAD_ERROR: &str = "Failed to load project details. Please try again later.";

/// Buttons on the detail card. Neither has behavior yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectAction {
    Edit,
    Delete,
}

impl ProjectAction {
    pub fn label(self) -> &'static str {
        match self {
            ProjectAction::Edit => "Edit Project",
            ProjectAction::Delete => "Delete Project",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum DetailView<'a> {
    Spinner,
    Error(&'a str),
    Card(&'a Project),
    /// Not loading, no error, nothing fetched (empty identifier).
    Blank,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectDetail {
    project_id: String,
    fetch: FetchState<Option<Project>>,
}

impl ProjectDetail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Points the view at `id`. Returns true when a fetch is due, i.e. the
    /// identifier changed and is non-empty.
    pub fn set_project_id(&mut self, id: &str) -> bool {
        if id == self.project_id {
            return false;
        }
        self.project_id = id.to_string();
        !id.is_empty()
    }

    pub fn begin(&mut self) {
        self.fetch.start();
    }

    pub fn finish(&mut self, result: Result<Project, ApiError>) {
        match result {
            Ok(project) => self.fetch.succeed(Some(project)),
            Err(err) => {
                tracing::error!(error = %err, id = %self.project_id, "error fetching project");
                self.fetch.fail(LOAD_ERROR);
            }
        }
    }

    /// Loads `id` if it differs from the current identifier.
    pub async fn load<A: ProjectsApi>(&mut self, api: &A, id: &str) {
        if !self.set_project_id(id) {
            return;
        }
        self.begin();
        let result = api.get_project(id).await;
        self.finish(result);
    }

    pub fn error(&self) -> Option<&str> {
        self.fetch.error()
    }

    pub fn view(&self) -> DetailView<'_> {
        match self.fetch.phase() {
            Phase::Loading if self.project_id.is_empty() => DetailView::Blank,
            Phase::Loading => DetailView::Spinner,
            Phase::Failed(message) => DetailView::Error(message),
            Phase::Ready(Some(project)) => DetailView::Card(project),
            Phase::Ready(None) => DetailView::Blank,
        }
    }

    /// Edit and Delete are shown but not wired to the API.
    pub fn trigger(&self, action: ProjectAction) {
        tracing::warn!(?action, id = %self.project_id, "project action not implemented");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_identifier_does_not_refetch() {
        let mut detail = ProjectDetail::new();
        assert!(detail.set_project_id("p1"));
        detail.begin();
        detail.finish(Err(ApiError::Status(404)));
        assert!(!detail.set_project_id("p1"));
        assert!(detail.set_project_id("p2"));
    }

    #[test]
    fn empty_identifier_never_fetches() {
        let mut detail = ProjectDetail::new();
        assert!(!detail.set_project_id(""));
        assert_eq!(detail.view(), DetailView::Blank);
    }

    #[test]
    fn not_found_shows_fixed_message() {
        let mut detail = ProjectDetail::new();
        detail.set_project_id("missing");
        detail.begin();
        detail.finish(Err(ApiError::Status(404)));
        assert_eq!(detail.view(), DetailView::Error(LOAD_ERROR));
    }
}
