pub mod client;
pub mod context;
pub mod tera_renderer;

pub use client::{RenderError, RenderResult, TemplateRenderer};
pub use context::RenderContext;
pub use tera_renderer::TeraRenderer;
