//! Template renderer interface used by the page handlers.
use std::io::Write;

use thiserror::Error;

use super::RenderContext;

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Render-layer errors (unknown template, engine failure, output I/O).
///
/// Kept independent from `AppError` so the engine does not need to know about HTTP.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template not found: {0}")]
    TemplateNotFound(String),
    #[error("template engine error: {0}")]
    Engine(String),
    #[error("render output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders a named template with a context into an output sink.
///
/// Implementations are shared across requests behind an `Arc`, so they must be
/// `Send + Sync` and must not keep per-request state.
pub trait TemplateRenderer: Send + Sync + 'static {
    // Engine name (for logging).
    fn backend_name(&self) -> &'static str;

    // Writes the rendered markup of `template` to `out`.
    //
    // On error, whatever was already written to `out` is incomplete and must be discarded.
    fn render(
        &self,
        template: &str,
        context: &RenderContext,
        out: &mut dyn Write,
    ) -> RenderResult<()>;
}
