/*
 * Responsibility
 * - ページの URL 構造を定義
 * - identity middleware はここではなく app.rs で Router 全体に掛ける
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::pages::handlers::{root::portal_root, settings::portal_settings};

pub const ROOT_PATH: &str = "/hr-portal";
pub const SETTINGS_PATH: &str = "/hr-portal/settings";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(ROOT_PATH, get(portal_root))
        .route(SETTINGS_PATH, get(portal_settings))
}
