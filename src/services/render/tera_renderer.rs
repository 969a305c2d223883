use std::error::Error as _;
use std::io::Write;
use std::path::Path;

use tera::{Context, ErrorKind, Tera};

use super::client::{RenderError, RenderResult, TemplateRenderer};
use super::RenderContext;

pub const ROOT_TEMPLATE: &str = "hr-portal.html";
pub const SETTINGS_TEMPLATE: &str = "portal-settings.html";

/// Tera-backed template renderer.
///
/// Templates whose name ends in `.html` are auto-escaped, so values coming
/// from the request (space key, display name) are safe to interpolate.
#[derive(Debug)]
pub struct TeraRenderer {
    tera: Tera,
}

impl TeraRenderer {
    /// Templates compiled into the binary.
    pub fn builtin() -> RenderResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (
                ROOT_TEMPLATE,
                include_str!("../../../templates/hr-portal.html"),
            ),
            (
                SETTINGS_TEMPLATE,
                include_str!("../../../templates/portal-settings.html"),
            ),
        ])
        .map_err(engine_error)?;

        Ok(Self { tera })
    }

    /// Loads every `*.html` file under `dir`, named by its path relative to `dir`.
    pub fn from_dir(dir: &Path) -> RenderResult<Self> {
        let pattern = format!("{}/**/*.html", dir.display());
        let tera = Tera::new(&pattern).map_err(engine_error)?;

        for required in [ROOT_TEMPLATE, SETTINGS_TEMPLATE] {
            if !tera.get_template_names().any(|name| name == required) {
                return Err(RenderError::TemplateNotFound(required.to_string()));
            }
        }

        Ok(Self { tera })
    }
}

impl TemplateRenderer for TeraRenderer {
    fn backend_name(&self) -> &'static str {
        "tera"
    }

    fn render(
        &self,
        template: &str,
        context: &RenderContext,
        out: &mut dyn Write,
    ) -> RenderResult<()> {
        let ctx = Context::from_serialize(context).map_err(engine_error)?;

        self.tera
            .render_to(template, &ctx, out)
            .map_err(|err| match err.kind {
                ErrorKind::TemplateNotFound(ref name) => {
                    RenderError::TemplateNotFound(name.clone())
                }
                _ => engine_error(err),
            })
    }
}

// Tera's top-level message is generic ("Failed to render ..."); the cause chain has the detail.
fn engine_error(err: tera::Error) -> RenderError {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    RenderError::Engine(message)
}
