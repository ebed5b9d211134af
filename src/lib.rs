pub mod config;
pub mod core;
pub mod models;

pub use config::{ApiConfig, ApiEndpoints};
pub use models::{AttributeDraft, DraftField, NewProject, Project};

#[cfg(feature = "gui")]
pub mod gui;
