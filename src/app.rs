/*
 * Responsibility
 * - tracing / panic hook の初期化
 * - Config読み込み → collaborator 生成 → Router 組み立て
 * - Middleware の適用 (identity / request-id / security headers など)
 * - axum::serve() で起動
 */
use std::{panic, process, sync::Arc};

use anyhow::{Context, Result};
use axum::{Router, http::HeaderName, routing::get};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::middleware;
use crate::pages;
use crate::services::{
    identity::{IdentityProvider, TrustedHeaderIdentity},
    properties::{ApplicationProperties, StaticProperties},
    render::{TemplateRenderer, TeraRenderer},
};
use crate::state::AppState;

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,hr_portal=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // Development: crash the whole process. Production: default behavior, keep serving.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting HR portal in {:?} mode on {} (base url {})",
        config.app_env,
        config.addr,
        config.base_url
    );

    let state = build_state(&config)?;
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Builds the collaborators once and injects them into the shared state.
pub fn build_state(config: &Config) -> Result<AppState> {
    let renderer: Arc<dyn TemplateRenderer> = match &config.template_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "loading templates from directory");
            Arc::new(TeraRenderer::from_dir(dir)?)
        }
        None => Arc::new(TeraRenderer::builtin()?),
    };

    let properties: Arc<dyn ApplicationProperties> =
        Arc::new(StaticProperties::from_config(config));

    let identity = match &config.identity_header {
        Some(name) => {
            let header = HeaderName::from_bytes(name.as_bytes())
                .with_context(|| format!("invalid IDENTITY_HEADER: {name}"))?;
            Some(Arc::new(TrustedHeaderIdentity::new(header)) as Arc<dyn IdentityProvider>)
        }
        None => {
            tracing::warn!("IDENTITY_HEADER is empty, every caller renders as anonymous");
            None
        }
    };

    Ok(AppState::new(Some(renderer), Some(properties), identity))
}

pub fn build_router(state: AppState, config: &Config) -> Router {
    async fn health() -> &'static str {
        "ok"
    }

    let page_routes = middleware::identity::apply(pages::routes(), state.clone());

    let router = Router::new()
        .route("/health", get(health))
        .merge(page_routes)
        .with_state(state);

    let router = middleware::http::apply(router, config);
    middleware::security_headers::apply(router)
}
