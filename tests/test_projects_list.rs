//! Integration tests for the projects list view.
//!
//! Tests cover:
//! - The single list request issued on mount
//! - Empty, populated and failed render states
//! - Rendering of attribute summaries and timestamps

mod common;

use ngs360::core::{
    projects::{EMPTY_NOTICE, LOAD_ERROR, ListView},
    render,
};

use common::*;

#[tokio::test]
async fn test_mount_issues_one_list_request() -> anyhow::Result<()> {
    let api = FakeApi::new().with_list(Ok(vec![make_project("p1", "Alpha", &[])]));
    let mut list = ProjectsList::new();
    assert!(list.is_loading());

    list.load(&api).await;

    assert_eq!(api.calls(), vec![Call::List]);
    assert!(!list.is_loading());
    assert_eq!(list.projects().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_empty_collection_renders_notice_not_table() -> anyhow::Result<()> {
    let api = FakeApi::new().with_list(Ok(vec![]));
    let mut list = ProjectsList::new();
    list.load(&api).await;

    assert_eq!(list.view(), ListView::Empty);
    let out = render::projects_list(&list);
    assert!(out.contains(EMPTY_NOTICE));
    assert!(!out.contains("Project ID"));
    Ok(())
}

#[tokio::test]
async fn test_populated_row_cells() -> anyhow::Result<()> {
    let json = r#"[{"id":"p1","name":"Alpha","attributes":{"env":"prod"},"createdAt":"2024-01-01T00:00:00Z"}]"#;
    let projects: Vec<Project> = serde_json::from_str(json)?;
    let api = FakeApi::new().with_list(Ok(projects));
    let mut list = ProjectsList::new();
    list.load(&api).await;

    let ListView::Table(rows) = list.view() else {
        panic!("expected a table, got {:?}", list.view());
    };
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "p1");
    assert_eq!(rows[0].name, "Alpha");
    assert_eq!(rows[0].attributes, vec!["env: prod".to_string()]);
    // Local offset varies by machine; only the shape is fixed.
    assert!(rows[0].created_at.contains("/2024, ") || rows[0].created_at.contains("/2023, "));
    assert!(rows[0].created_at.ends_with("AM") || rows[0].created_at.ends_with("PM"));

    let out = render::projects_list(&list);
    assert!(out.contains("p1"));
    assert!(out.contains("env: prod"));
    Ok(())
}

#[tokio::test]
async fn test_failure_shows_fixed_message_and_keeps_data() -> anyhow::Result<()> {
    let mut list = ProjectsList::new();
    list.load(&FakeApi::new().with_list(Ok(vec![make_project("p1", "Alpha", &[])])))
        .await;

    list.load(&FakeApi::new().with_list(Err(ApiError::Network("connection refused".into()))))
        .await;

    assert_eq!(list.view(), ListView::Error(LOAD_ERROR));
    assert_eq!(list.projects().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_list_over_http() -> anyhow::Result<()> {
    let (origin, server) =
        serve_once(200, r#"[{"_id":"p2","name":"Beta","attributes":{}}]"#).await;
    let api = HttpProjectsApi::new(ApiConfig::resolve(false, None), &origin)?;

    let mut list = ProjectsList::new();
    list.load(&api).await;

    let request = server.await?;
    assert!(request.request_line.starts_with("GET /projects "));
    let ListView::Table(rows) = list.view() else {
        panic!("expected a table, got {:?}", list.view());
    };
    assert_eq!(rows[0].id, "p2");
    assert_eq!(rows[0].attributes, vec!["No attributes".to_string()]);
    assert_eq!(rows[0].created_at, "N/A");
    Ok(())
}

#[tokio::test]
async fn test_server_error_status_is_a_failure() -> anyhow::Result<()> {
    let (origin, server) = serve_once(500, r#"{"detail":"boom"}"#).await;
    let api = HttpProjectsApi::new(ApiConfig::resolve(true, Some(&origin)), "http://unused.invalid")?;

    let mut list = ProjectsList::new();
    list.load(&api).await;
    server.await?;

    assert_eq!(list.view(), ListView::Error(LOAD_ERROR));
    Ok(())
}
