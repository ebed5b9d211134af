/// Base path used in production when no override is configured.
pub const DEFAULT_PRODUCTION_BASE: &str = "/api";

/// Origin that relative endpoint paths are resolved against.
pub const DEFAULT_ORIGIN: &str = "http://localhost:5000";

/// Named endpoint URLs derived from the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    pub projects: String,
}

impl ApiEndpoints {
    fn from_base(base_url: &str) -> Self {
        Self {
            projects: format!("{base_url}/projects"),
        }
    }

    pub fn project(&self, id: &str) -> String {
        format!("{}/{}", self.projects, id)
    }
}

/// Resolved API configuration. Built once at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub is_production: bool,
    pub base_url: String,
    pub endpoints: ApiEndpoints,
}

impl ApiConfig {
    /// Non-production builds address the API relatively; production uses the
    /// override when present and non-empty, else `/api`.
    pub fn resolve(is_production: bool, base_url_override: Option<&str>) -> Self {
        let base_url = if is_production {
            base_url_override
                .filter(|url| !url.is_empty())
                .unwrap_or(DEFAULT_PRODUCTION_BASE)
                .to_string()
        } else {
            String::new()
        };
        let endpoints = ApiEndpoints::from_base(&base_url);
        Self {
            is_production,
            base_url,
            endpoints,
        }
    }
}
