//! Top-level navigation state shared by the GUI and the terminal front-end.

use std::fmt;

use crate::models::Project;

pub const BRAND: &str = "NGS360";
pub const CREATE_BUTTON: &str = "Create ProjectID";
pub const SEARCH_PLACEHOLDER: &str = "Search NGS360...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Projects,
    Project(String),
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();
        match segments.as_slice() {
            [] | [""] => Route::Home,
            ["projects"] => Route::Projects,
            ["projects", id] if !id.is_empty() => Route::Project((*id).to_string()),
            _ => Route::NotFound(path.to_string()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("/"),
            Route::Projects => f.write_str("/projects"),
            Route::Project(id) => write!(f, "/projects/{id}"),
            Route::NotFound(path) => f.write_str(path),
        }
    }
}

/// Shell state: current route, dialog visibility, search box and the
/// projects created in this session.
///
/// `created_projects` only grows from the dialog's callback; it is never
/// merged with what the list view fetched.
#[derive(Debug, Clone)]
pub struct Shell {
    route: Route,
    dialog_shown: bool,
    created_projects: Vec<Project>,
    search_query: String,
    username: String,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

impl Shell {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            dialog_shown: false,
            created_projects: Vec::new(),
            search_query: String::new(),
            username: String::new(),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(%route, "navigate");
        self.route = route;
    }

    pub fn is_dialog_shown(&self) -> bool {
        self.dialog_shown
    }

    pub fn open_dialog(&mut self) {
        self.dialog_shown = true;
    }

    pub fn close_dialog(&mut self) {
        self.dialog_shown = false;
    }

    /// Creation callback: append, close the dialog.
    pub fn project_created(&mut self, project: Project) {
        self.created_projects.push(project);
        self.dialog_shown = false;
    }

    pub fn created_projects(&self) -> &[Project] {
        &self.created_projects
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: String) {
        self.search_query = query;
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
    }

    /// No search backend exists; logs the query and returns the alert text.
    pub fn submit_search(&self) -> String {
        tracing::info!(query = %self.search_query, "searching");
        format!("You searched for: {}", self.search_query)
    }

    pub fn feeling_lucky(&self) {
        tracing::warn!("\"I'm Feeling Lucky\" is not implemented");
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn set_username(&mut self, username: String) {
        self.username = username;
    }

    pub fn login(&self) {
        tracing::warn!(username = %self.username, "login is not implemented");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/projects"), Route::Projects);
        assert_eq!(Route::parse("/projects/"), Route::Projects);
        assert_eq!(Route::parse("/projects/p1"), Route::Project("p1".to_string()));
        assert_eq!(
            Route::parse("/settings"),
            Route::NotFound("/settings".to_string())
        );
    }

    #[test]
    fn route_display_parses_back() {
        for route in [Route::Home, Route::Projects, Route::Project("p7".to_string())] {
            assert_eq!(Route::parse(&route.to_string()), route);
        }
    }

    #[test]
    fn created_projects_append_without_dedup() {
        let mut shell = Shell::default();
        let project = Project {
            id: "p1".to_string(),
            name: "Alpha".to_string(),
            attributes: Default::default(),
            created_at: None,
        };
        shell.open_dialog();
        shell.project_created(project.clone());
        shell.project_created(project);
        assert_eq!(shell.created_projects().len(), 2);
        assert!(!shell.is_dialog_shown());
    }

    #[test]
    fn search_only_echoes_query() {
        let mut shell = Shell::default();
        shell.set_search_query("BRCA1".to_string());
        assert_eq!(shell.submit_search(), "You searched for: BRCA1");
        shell.clear_search();
        assert_eq!(shell.search_query(), "");
    }
}
