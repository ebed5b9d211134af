mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from ngs360 for tests
pub use ngs360::{
    ApiConfig, AttributeDraft, DraftField, NewProject, Project,
    core::{ApiError, CreateProjectForm, HttpProjectsApi, ProjectDetail, ProjectsApi, ProjectsList},
};
