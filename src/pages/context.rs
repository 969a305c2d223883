/*
 * Responsibility
 * - ページごとの RenderContext を組み立てる
 * - 値はすべて解決済みで受け取る (部分的な context は作らない)
 */
use crate::services::render::RenderContext;

use super::extractors::CallerIdentity;

/// Client asset bundle loaded by the root page.
pub const RESOURCE_KEY: &str = "com.switchhr.jsm.hrportal:hr-portal-resources";
/// DOM node the client app mounts into.
pub const MOUNT_NODE_ID: &str = "hr-portal-root";
pub const ANONYMOUS_USER: &str = "Anonymous";

/// Context key names, as referenced by the templates.
pub mod keys {
    pub const BASE_URL: &str = "baseUrl";
    pub const RESOURCE_KEY: &str = "resourceKey";
    pub const MOUNT_NODE_ID: &str = "mountNodeId";
    pub const CURRENT_USER: &str = "currentUser";
    pub const SPACE_KEY: &str = "spaceKey";
}

pub fn root_context(base_url: String) -> RenderContext {
    RenderContext::from_entries([
        (keys::BASE_URL, base_url),
        (keys::RESOURCE_KEY, RESOURCE_KEY.to_string()),
        (keys::MOUNT_NODE_ID, MOUNT_NODE_ID.to_string()),
    ])
}

pub fn settings_context(base_url: String, current_user: String, space_key: String) -> RenderContext {
    RenderContext::from_entries([
        (keys::BASE_URL, base_url),
        (keys::CURRENT_USER, current_user),
        (keys::SPACE_KEY, space_key),
    ])
}

/// Display name of the caller, or `"Anonymous"`.
pub fn display_name(caller: Option<CallerIdentity>) -> String {
    caller
        .map(|c| c.display_name)
        .unwrap_or_else(|| ANONYMOUS_USER.to_string())
}
