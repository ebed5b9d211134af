//! Plain-text rendering of the views for the terminal front-end.

use std::fmt::Write;

use crate::core::{
    format,
    project::{DetailView, ProjectAction, ProjectDetail},
    projects::{COLUMNS, EMPTY_NOTICE, ListView, ProjectRow, ProjectsList},
};

pub const SPINNER: &str = "Loading...";

pub fn projects_list(list: &ProjectsList) -> String {
    let mut out = String::from("Projects\n\n");
    match list.view() {
        ListView::Spinner => out.push_str(SPINNER),
        ListView::Error(message) => {
            let _ = write!(out, "error: {message}");
        }
        ListView::Empty => out.push_str(EMPTY_NOTICE),
        ListView::Table(rows) => out.push_str(&table(&rows)),
    }
    out.push('\n');
    out
}

fn table(rows: &[ProjectRow]) -> String {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            [
                row.id.clone(),
                row.name.clone(),
                row.attributes.join("; "),
                row.created_at.clone(),
            ]
        })
        .collect();
    let mut widths = COLUMNS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let line = |out: &mut String, row: &[&str]| {
        let padded: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
    };
    line(&mut out, &COLUMNS);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));
    for row in &cells {
        let refs: Vec<&str> = row.iter().map(String::as_str).collect();
        line(&mut out, &refs);
    }
    out.trim_end().to_string()
}

pub fn project_detail(detail: &ProjectDetail) -> String {
    let mut out = String::from("Project Details\n\n");
    match detail.view() {
        DetailView::Spinner => out.push_str(SPINNER),
        DetailView::Error(message) => {
            let _ = write!(out, "error: {message}");
        }
        DetailView::Blank => {}
        DetailView::Card(project) => {
            let _ = writeln!(out, "{}", project.name);
            let _ = writeln!(out, "Project ID: {}", project.id);
            let _ = writeln!(
                out,
                "Created: {}",
                format::created_at(project.created_at.as_deref())
            );
            out.push('\n');
            if project.attributes.is_empty() {
                let _ = writeln!(out, "{}", format::NO_ATTRIBUTES);
            } else {
                out.push_str("Attributes\n");
                for line in format::attribute_lines(&project.attributes) {
                    let _ = writeln!(out, "  {line}");
                }
            }
            out.push('\n');
            let _ = write!(
                out,
                "Actions: [{}] [{}] (not implemented)",
                ProjectAction::Edit.label(),
                ProjectAction::Delete.label()
            );
        }
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::ApiError;

    #[test]
    fn empty_list_renders_notice_not_table() {
        let mut list = ProjectsList::new();
        list.finish(Ok(vec![]));
        let out = projects_list(&list);
        assert!(out.contains("No projects found"));
        assert!(!out.contains("Project ID"));
    }

    #[test]
    fn failed_detail_has_no_spinner() {
        let mut detail = ProjectDetail::new();
        detail.set_project_id("p1");
        detail.begin();
        detail.finish(Err(ApiError::Network("connection refused".to_string())));
        let out = project_detail(&detail);
        assert!(out.contains(crate::core::project::LOAD_ERROR));
        assert!(!out.contains(SPINNER));
    }
}
