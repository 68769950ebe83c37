//! Test harness with an in-memory SQLite database for API testing.
//!
//! Every harness owns a fresh database and a scripted `MockGenerator`, so
//! tests never share state and never reach a real LLM.

use anyhow::{Context, Result};
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use extraction::MockGenerator;
use serde_json::Value;
use server_core::{kernel::extraction_service_from, server::build_app};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tower::ServiceExt;

/// Test harness that manages test infrastructure.
///
/// # Example
///
/// ```ignore
/// let ctx = TestHarness::new().await?;
/// let (status, body) = ctx.post_json("/notes", json!({"content": "hi"})).await?;
/// ```
pub struct TestHarness {
    /// Database pool - use this for test fixtures.
    pub db_pool: SqlitePool,
    /// The generator behind the extractor; inspect calls after a request.
    pub generator: MockGenerator,
    app: Router,
}

impl TestHarness {
    /// Harness whose LLM answers with no items.
    pub async fn new() -> Result<Self> {
        Self::with_generator(MockGenerator::new()).await
    }

    /// Harness backed by a scripted generator.
    pub async fn with_generator(generator: MockGenerator) -> Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        // A single connection that never expires keeps the in-memory database alive.
        let db_pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .context("Failed to open in-memory database")?;

        sqlx::migrate!("./migrations")
            .run(&db_pool)
            .await
            .context("Failed to run migrations")?;

        let app = build_app(db_pool.clone(), extraction_service_from(generator.clone()));

        Ok(Self {
            db_pool,
            generator,
            app,
        })
    }

    pub async fn get(&self, uri: &str) -> Result<(StatusCode, Value)> {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())?;
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> Result<(StatusCode, Value)> {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))?;
        self.send(request).await
    }

    /// POST a raw body without a content type.
    pub async fn post_raw(&self, uri: &str, body: &str) -> Result<(StatusCode, Value)> {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::from(body.to_string()))?;
        self.send(request).await
    }

    /// POST without a body or content type.
    pub async fn post_empty(&self, uri: &str) -> Result<(StatusCode, Value)> {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::empty())?;
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> Result<(StatusCode, Value)> {
        let response = self.app.clone().oneshot(request).await?;
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        Ok((status, body))
    }
}
