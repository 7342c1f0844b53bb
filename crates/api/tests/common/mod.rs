#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use mias_api::config::{GeminiConfig, ServerConfig, DEFAULT_BODY_LIMIT_BYTES};
use mias_api::router::build_app_router;
use mias_api::state::AppState;
use mias_db::DbPool;
use mias_imaging::{EditedImage, HeadshotEditor, SourceImage};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        static_dir: None,
        gemini: GeminiConfig {
            api_key: String::new(),
            model: "test-model".to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
        },
    }
}

/// Fresh in-memory database with the schema initialized.
pub async fn test_pool() -> DbPool {
    let pool = mias_db::create_memory_pool().await.unwrap();
    mias_db::initialize(&pool).await.unwrap();
    pool
}

/// Headshot editor with a canned result that counts its invocations.
pub struct FakeEditor {
    result: Option<EditedImage>,
    calls: AtomicUsize,
}

impl FakeEditor {
    pub fn succeeding(data: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Some(EditedImage {
                mime_type: "image/png".to_string(),
                data: data.to_string(),
            }),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            result: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HeadshotEditor for FakeEditor {
    async fn edit(&self, _image: &SourceImage) -> Option<EditedImage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and an editor that always fails.
pub fn build_test_app(pool: DbPool) -> Router {
    build_test_app_with(pool, FakeEditor::failing(), test_config())
}

/// Build the application router with a specific editor and config.
pub fn build_test_app_with(
    pool: DbPool,
    editor: Arc<dyn HeadshotEditor>,
    config: ServerConfig,
) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        headshot_editor: editor,
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Body::from(json.to_string())).await
}

/// POST a raw body with an optional content type.
pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: Option<&str>,
    body: &'static str,
) -> Response {
    let mut request = Request::builder().method(Method::POST).uri(uri);
    if let Some(content_type) = content_type {
        request = request.header("content-type", content_type);
    }
    app.oneshot(request.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
