use crate::core::{HttpProjectsApi, Shell};

/// State shared by every screen: the API client and the shell.
#[derive(Debug)]
pub struct AppState {
    pub api: HttpProjectsApi,
    pub shell: Shell,
}

impl AppState {
    pub fn new(api: HttpProjectsApi) -> Self {
        Self {
            api,
            shell: Shell::default(),
        }
    }
}
