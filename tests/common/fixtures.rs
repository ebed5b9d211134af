use std::{
    collections::{BTreeMap, HashMap},
    future::Future,
    sync::{Arc, Mutex},
};

use ngs360::{
    core::{ApiError, ProjectsApi},
    models::{NewProject, Project},
};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

/// Builds a project with the given id, name and attribute pairs.
pub fn make_project(id: &str, name: &str, attributes: &[(&str, &str)]) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        attributes: attributes
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
        created_at: None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Get(String),
    Create(NewProject),
}

#[derive(Debug, Default)]
struct FakeState {
    list: Option<Result<Vec<Project>, ApiError>>,
    projects: HashMap<String, Result<Project, ApiError>>,
    create: Option<Result<Project, ApiError>>,
    calls: Vec<Call>,
}

/// Scripted in-memory API that records every call.
///
/// Unscripted requests answer with an empty list, 404 for lookups, and an
/// echo of the submitted project under id `new-1`.
#[derive(Debug, Clone, Default)]
pub struct FakeApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(self, result: Result<Vec<Project>, ApiError>) -> Self {
        self.state.lock().unwrap().list = Some(result);
        self
    }

    pub fn with_project(self, id: &str, result: Result<Project, ApiError>) -> Self {
        self.state
            .lock()
            .unwrap()
            .projects
            .insert(id.to_string(), result);
        self
    }

    pub fn with_create(self, result: Result<Project, ApiError>) -> Self {
        self.state.lock().unwrap().create = Some(result);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }
}

impl ProjectsApi for FakeApi {
    fn list_projects(
        &self,
    ) -> impl Future<Output = Result<Vec<Project>, ApiError>> + Send + 'static {
        let state = self.state.clone();
        async move {
            let mut state = state.lock().unwrap();
            state.calls.push(Call::List);
            state.list.clone().unwrap_or(Ok(Vec::new()))
        }
    }

    fn get_project(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Project, ApiError>> + Send + 'static {
        let state = self.state.clone();
        let id = id.to_string();
        async move {
            let mut state = state.lock().unwrap();
            state.calls.push(Call::Get(id.clone()));
            state
                .projects
                .get(&id)
                .cloned()
                .unwrap_or(Err(ApiError::Status(404)))
        }
    }

    fn create_project(
        &self,
        project: NewProject,
    ) -> impl Future<Output = Result<Project, ApiError>> + Send + 'static {
        let state = self.state.clone();
        async move {
            let mut state = state.lock().unwrap();
            state.calls.push(Call::Create(project.clone()));
            state.create.clone().unwrap_or_else(|| {
                Ok(Project {
                    id: "new-1".to_string(),
                    name: project.name,
                    attributes: project.attributes,
                    created_at: None,
                })
            })
        }
    }
}

/// A request captured by [`serve_once`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub request_line: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Binds a local port, answers exactly one request with `status` and a JSON
/// `body`, and hands back the origin plus a handle to the captured request.
pub async fn serve_once(
    status: u16,
    body: &str,
) -> (String, tokio::task::JoinHandle<RecordedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let origin = format!("http://{}", listener.local_addr().unwrap());
    let body = body.to_string();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("No connection");
        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        let (head_len, content_length) = loop {
            let n = socket.read(&mut buf).await.expect("Read failed");
            assert!(n > 0, "connection closed before headers");
            raw.extend_from_slice(&buf[..n]);
            if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&raw[..pos]).to_string();
                let length = head
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(key, _)| key.trim().eq_ignore_ascii_case("content-length"))
                    .map(|(_, value)| value.trim().parse::<usize>().unwrap())
                    .unwrap_or(0);
                break (pos + 4, length);
            }
        };
        while raw.len() < head_len + content_length {
            let n = socket.read(&mut buf).await.expect("Read failed");
            assert!(n > 0, "connection closed before body");
            raw.extend_from_slice(&buf[..n]);
        }

        let head = String::from_utf8_lossy(&raw[..head_len - 4]).to_string();
        let mut lines = head.lines();
        let request_line = lines.next().unwrap_or_default().to_string();
        let headers = lines
            .filter_map(|line| line.split_once(':'))
            .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
            .collect();
        let request_body =
            String::from_utf8_lossy(&raw[head_len..head_len + content_length]).to_string();

        let response = format!(
            "HTTP/1.1 {status} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("Write failed");
        socket.shutdown().await.ok();

        RecordedRequest {
            request_line,
            headers,
            body: request_body,
        }
    });

    (origin, handle)
}
