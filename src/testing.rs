//! Fake collaborators and request helpers for handler tests.
use std::io::Write;
use std::sync::{Arc, Mutex};

use axum::body::{Body, to_bytes};
use axum::Router;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Request, StatusCode, header};
use tower::ServiceExt;

use crate::app::build_router;
use crate::config::{Config, DEFAULT_IDENTITY_HEADER};
use crate::services::identity::TrustedHeaderIdentity;
use crate::services::properties::StaticProperties;
use crate::services::render::{
    RenderContext, RenderError, RenderResult, TemplateRenderer, TeraRenderer,
};
use crate::state::AppState;

pub const TEST_BASE_URL: &str = "https://jira.example.com";

/// Records every render call and writes a tiny placeholder page.
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    calls: Arc<Mutex<Vec<(String, RenderContext)>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<(String, RenderContext)> {
        self.calls.lock().unwrap().clone()
    }
}

impl TemplateRenderer for RecordingRenderer {
    fn backend_name(&self) -> &'static str {
        "recording"
    }

    fn render(
        &self,
        template: &str,
        context: &RenderContext,
        out: &mut dyn Write,
    ) -> RenderResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push((template.to_string(), context.clone()));
        write!(out, "<html>{template}</html>")?;
        Ok(())
    }
}

/// Writes half a page, then fails.
pub struct FailingRenderer;

impl TemplateRenderer for FailingRenderer {
    fn backend_name(&self) -> &'static str {
        "failing"
    }

    fn render(&self, _: &str, _: &RenderContext, out: &mut dyn Write) -> RenderResult<()> {
        out.write_all(b"<html><body>")?;
        Err(RenderError::Engine("boom".into()))
    }
}

/// State with every collaborator wired; identity comes from the default header.
pub fn state_with(renderer: impl TemplateRenderer) -> AppState {
    AppState::new(
        Some(Arc::new(renderer)),
        Some(Arc::new(StaticProperties::new(TEST_BASE_URL))),
        Some(Arc::new(TrustedHeaderIdentity::new(HeaderName::from_static(
            DEFAULT_IDENTITY_HEADER,
        )))),
    )
}

pub fn builtin_state() -> AppState {
    state_with(TeraRenderer::builtin().unwrap())
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// Sends `GET uri` through the full router, optionally as an authenticated caller.
pub async fn get(state: AppState, uri: &str, user: Option<&str>) -> TestResponse {
    let mut req = Request::get(uri);
    if let Some(user) = user {
        // Raw UTF-8 bytes, the way the host forwards non-ASCII display names.
        req = req.header(
            DEFAULT_IDENTITY_HEADER,
            HeaderValue::from_bytes(user.as_bytes()).unwrap(),
        );
    }

    send(build_router(state, &default_config()), req.body(Body::empty()).unwrap()).await
}

/// Config with every variable unset.
pub fn default_config() -> Config {
    Config::from_lookup(|_| None).unwrap()
}

/// Sends `req` through `router` and collects the response.
pub async fn send(router: Router, req: Request<Body>) -> TestResponse {
    let res = router.oneshot(req).await.unwrap();

    let status = res.status();
    let headers = res.headers().clone();
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        headers,
        content_type,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}
