use super::*;
use axum::body::{Body, to_bytes};
use axum::http::Request;
use tower::ServiceExt;

async fn get_path(path: &str) -> (StatusCode, String) {
    let resp = base_routes()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn healthz_returns_ok() {
    let (status, _) = get_path("/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn robots_txt_disallows_everything() {
    let (status, body) = get_path("/robots.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "User-agent: *\nDisallow: /");
}

#[tokio::test]
async fn base_routes_unknown_path_is_not_found() {
    let (status, _) = get_path("/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
