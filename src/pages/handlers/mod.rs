/*
 * Responsibility
 * - ページ handler の共通処理 (render → HTML response)
 */
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::error::AppError;
use crate::services::render::{RenderContext, TemplateRenderer};

pub mod root;
pub mod settings;

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=UTF-8";

/// Renders into a buffer first so a failed render never leaks a partial page.
fn render_page(
    renderer: &dyn TemplateRenderer,
    template: &str,
    context: &RenderContext,
) -> Result<Response, AppError> {
    let mut body = Vec::new();
    renderer.render(template, context, &mut body)?;

    tracing::debug!(
        template,
        backend = renderer.backend_name(),
        bytes = body.len(),
        "page rendered"
    );

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, HTML_CONTENT_TYPE)],
        body,
    )
        .into_response())
}
