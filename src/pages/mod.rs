/*
 * Responsibility
 * - HR portal の HTML ページ (root / settings)
 * - routes() の re-export
 */
pub mod context;
pub mod extractors;
pub mod handlers;
mod routes;
pub mod space_key;

pub use routes::{ROOT_PATH, SETTINGS_PATH, routes};
