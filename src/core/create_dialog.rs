//! Create-project form: name, key/value rows, validation and submit lifecycle.

use std::collections::BTreeMap;

use crate::{
    core::api::{ApiError, ProjectsApi},
    models::{AttributeDraft, DraftField, NewProject, Project},
};

pub const NAME_REQUIRED: &str = "Project name is required";
pub const SUBMIT_LABEL: &str = "Create Project";
pub const SUBMITTING_LABEL: &str = "Creating...";

/// Folds complete rows into the request body. A later duplicate key
/// overwrites an earlier one.
pub fn build_payload(name: &str, rows: &[AttributeDraft]) -> NewProject {
    let attributes: BTreeMap<String, String> = rows
        .iter()
        .filter(|row| row.is_complete())
        .map(|row| (row.key.clone(), row.value.clone()))
        .collect();
    NewProject {
        name: name.to_string(),
        attributes,
    }
}

#[derive(Debug, Clone)]
pub struct CreateProjectForm {
    shown: bool,
    name: String,
    rows: Vec<AttributeDraft>,
    submitting: bool,
    error: Option<String>,
}

impl Default for CreateProjectForm {
    fn default() -> Self {
        Self {
            shown: false,
            name: String::new(),
            rows: vec![AttributeDraft::default()],
            submitting: false,
            error: None,
        }
    }
}

impl CreateProjectForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follows the parent's visibility flag. Becoming visible resets the
    /// name, rows and error.
    pub fn set_shown(&mut self, shown: bool) {
        if shown && !self.shown {
            self.name.clear();
            self.rows = vec![AttributeDraft::default()];
            self.error = None;
        }
        self.shown = shown;
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn rows(&self) -> &[AttributeDraft] {
        &self.rows
    }

    pub fn add_row(&mut self) {
        self.rows.push(AttributeDraft::default());
    }

    /// Remove is disabled while a single row remains.
    pub fn can_remove_rows(&self) -> bool {
        self.rows.len() > 1
    }

    pub fn remove_row(&mut self, index: usize) -> bool {
        if !self.can_remove_rows() || index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        true
    }

    pub fn edit_row(&mut self, index: usize, field: DraftField, value: String) {
        if let Some(row) = self.rows.get_mut(index) {
            row.set(field, value);
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Validates and enters the submitting state. Returns the request body,
    /// or `None` when validation failed or a submit is already in flight.
    pub fn submit(&mut self) -> Option<NewProject> {
        if self.submitting {
            return None;
        }
        if self.name.trim().is_empty() {
            self.error = Some(NAME_REQUIRED.to_string());
            return None;
        }
        let payload = build_payload(&self.name, &self.rows);
        self.submitting = true;
        self.error = None;
        Some(payload)
    }

    /// Leaves the submitting state on every outcome. On success hands back
    /// the created project for the parent to record.
    pub fn complete(&mut self, result: Result<Project, ApiError>) -> Option<Project> {
        self.submitting = false;
        match result {
            Ok(project) => {
                tracing::info!(id = %project.id, name = %project.name, "project created");
                Some(project)
            }
            Err(err) => {
                tracing::error!(error = %err, "error creating project");
                self.error = Some(format!("Failed to create project: {err}"));
                None
            }
        }
    }

    pub async fn submit_with<A: ProjectsApi>(&mut self, api: &A) -> Option<Project> {
        let payload = self.submit()?;
        let result = api.create_project(payload).await;
        self.complete(result)
    }
}
