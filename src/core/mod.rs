pub mod api;
pub mod create_dialog;
pub mod fetch;
pub mod format;
pub mod project;
pub mod projects;
pub mod render;
pub mod shell;

pub use api::{ApiError, HttpProjectsApi, ProjectsApi};
pub use create_dialog::CreateProjectForm;
pub use project::{ProjectAction, ProjectDetail};
pub use projects::ProjectsList;
pub use shell::{Route, Shell};
