use super::*;
use std::path::Path;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

fn test_options() -> LeptosOptions {
    LeptosOptions::builder().output_name("linkdir").site_root("target/site").build()
}

fn test_config(site_root: &Path) -> ServerConfig {
    ServerConfig { addr: "127.0.0.1:0".parse().unwrap(), site_root: site_root.to_path_buf() }
}

async fn get_path(app: &Router, path: &str) -> (StatusCode, String) {
    let res = app
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = res.status();
    let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&body).into_owned())
}

// =============================================================================
// Route registration
// =============================================================================

#[tokio::test]
async fn route_list_registers_every_navigation_target() {
    let mut paths: Vec<String> = generate_route_list(App).iter().map(|r| r.path().to_owned()).collect();
    paths.sort();

    let mut expected = vec![
        "/",
        "/test",
        "/dashboard",
        "/dashboard/account",
        "/dashboard/billing",
        "/dashboard/channels",
        "/dashboard/channels/new",
        "/dashboard/channels/settings",
        "/dashboard/channels/links/new",
        "/dashboard/channels/links/{id}/edit",
    ];
    expected.sort_unstable();

    assert_eq!(paths, expected);
}

// =============================================================================
// Static files
// =============================================================================

#[tokio::test]
async fn configured_site_root_serves_pkg_and_root_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("pkg")).unwrap();
    std::fs::write(dir.path().join("pkg/linkdir.css"), "body{}").unwrap();
    std::fs::write(dir.path().join("robots.txt"), "User-agent: *").unwrap();

    let app = app(test_options(), &test_config(dir.path()));

    let (status, body) = get_path(&app, "/pkg/linkdir.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "body{}");

    let (status, body) = get_path(&app, "/robots.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "User-agent: *");
}

#[tokio::test]
async fn healthz_is_routed() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(test_options(), &test_config(dir.path()));
    let (status, _) = get_path(&app, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

// =============================================================================
// SSR pages
// =============================================================================

#[tokio::test]
async fn link_edit_route_renders_requested_id() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(test_options(), &test_config(dir.path()));

    let (status, body) = get_path(&app, "/dashboard/channels/links/7/edit").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Link #7"), "body: {body}");
    assert!(body.contains("LinkDir Dashboard"));
}

#[tokio::test]
async fn overview_route_renders_inside_dashboard_layout() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(test_options(), &test_config(dir.path()));

    let (status, body) = get_path(&app, "/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Dashboard Overview"));
    assert!(body.contains(r#"data-surface="drawer""#));
    assert!(body.contains(r#"data-surface="rail""#));
}
