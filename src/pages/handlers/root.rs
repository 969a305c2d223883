/*
 * Responsibility
 * - GET /hr-portal
 * - client app がマウントする shell ページ。request の内容には依存しない
 */
use axum::extract::State;
use axum::response::Response;

use crate::error::AppError;
use crate::pages::context::root_context;
use crate::services::render::tera_renderer::ROOT_TEMPLATE;
use crate::state::AppState;

use super::render_page;

pub async fn portal_root(State(state): State<AppState>) -> Result<Response, AppError> {
    let renderer = state.renderer()?;
    let properties = state.properties()?;

    let context = root_context(properties.base_url());

    render_page(renderer.as_ref(), ROOT_TEMPLATE, &context)
}
