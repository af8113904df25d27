use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use mock_deployer::{FailingDeployer, RecordingDeployer};
use template_catalog::default_catalog;
use tower::ServiceExt;
use voice_matrix_api::state::AppState;

/// Build the app over the built-in catalog and a recording deployer.
pub fn build_test_app() -> (Router, Arc<RecordingDeployer>) {
    let deployer = Arc::new(RecordingDeployer::with_phone_number("+15550100"));
    let state = AppState::new(Arc::new(default_catalog().unwrap()), deployer.clone());
    (voice_matrix_api::app(state), deployer)
}

/// Build the app with a deployer that always fails.
pub fn build_failing_app(reason: &str) -> Router {
    let state = AppState::new(
        Arc::new(default_catalog().unwrap()),
        Arc::new(FailingDeployer::new(reason)),
    );
    voice_matrix_api::app(state)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
