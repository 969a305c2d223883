/*
 * Responsibility
 * - GET /hr-portal/settings
 * - 呼び出し元の表示名 (いなければ Anonymous) と space key (fallback あり) で context を作る
 * - identity の欠如は致命的ではない。renderer / properties の欠如は 500
 */
use axum::extract::State;
use axum::response::Response;

use crate::error::AppError;
use crate::pages::context::{display_name, settings_context};
use crate::pages::extractors::{Caller, RequestParameters};
use crate::pages::space_key::resolve_space_key;
use crate::services::render::tera_renderer::SETTINGS_TEMPLATE;
use crate::state::AppState;

use super::render_page;

pub async fn portal_settings(
    State(state): State<AppState>,
    Caller(caller): Caller,
    params: RequestParameters,
) -> Result<Response, AppError> {
    let renderer = state.renderer()?;
    let properties = state.properties()?;

    if caller.is_none() {
        tracing::debug!("no caller identity, rendering settings as anonymous");
    }
    let current_user = display_name(caller);
    let space_key = resolve_space_key(&params);

    tracing::debug!(space_key = %space_key, "rendering portal settings");

    let context = settings_context(properties.base_url(), current_user, space_key);

    render_page(renderer.as_ref(), SETTINGS_TEMPLATE, &context)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::pages::SETTINGS_PATH;
    use crate::services::render::RenderContext;
    use crate::testing::{self, FailingRenderer, RecordingRenderer};

    async fn rendered_context(uri: &str, user: Option<&str>) -> RenderContext {
        let renderer = RecordingRenderer::new();
        let res = testing::get(testing::state_with(renderer.clone()), uri, user).await;
        assert_eq!(res.status, StatusCode::OK);

        let mut calls = renderer.calls();
        assert_eq!(calls.len(), 1);
        let (template, ctx) = calls.remove(0);
        assert_eq!(template, "portal-settings.html");
        ctx
    }

    #[tokio::test]
    async fn space_key_with_authenticated_user() {
        let ctx = rendered_context("/hr-portal/settings?spaceKey=HR", Some("Jane Doe")).await;

        assert_eq!(
            serde_json::to_value(&ctx).unwrap(),
            json!({
                "baseUrl": testing::TEST_BASE_URL,
                "currentUser": "Jane Doe",
                "spaceKey": "HR",
            })
        );
    }

    #[tokio::test]
    async fn non_ascii_display_name_is_rendered() {
        let ctx = rendered_context("/hr-portal/settings?spaceKey=HR", Some("Zoë")).await;
        assert_eq!(ctx.get_str("currentUser"), Some("Zoë"));

        let res = testing::get(
            testing::builtin_state(),
            "/hr-portal/settings?spaceKey=HR",
            Some("Jürgen Müller"),
        )
        .await;
        assert!(res.body.contains(r#"<dd class="current-user">Jürgen Müller</dd>"#));
    }

    #[tokio::test]
    async fn project_key_without_session() {
        let ctx = rendered_context("/hr-portal/settings?projectKey=OPS", None).await;

        assert_eq!(ctx.get_str("currentUser"), Some("Anonymous"));
        assert_eq!(ctx.get_str("spaceKey"), Some("OPS"));
    }

    #[tokio::test]
    async fn no_parameters_and_no_session() {
        let ctx = rendered_context(SETTINGS_PATH, None).await;

        assert_eq!(
            serde_json::to_value(&ctx).unwrap(),
            json!({
                "baseUrl": testing::TEST_BASE_URL,
                "currentUser": "Anonymous",
                "spaceKey": "Unknown",
            })
        );
    }

    #[tokio::test]
    async fn space_key_beats_project_key() {
        let ctx =
            rendered_context("/hr-portal/settings?projectKey=PROJ1&spaceKey=acme", None).await;
        assert_eq!(ctx.get_str("spaceKey"), Some("acme"));

        let ctx =
            rendered_context("/hr-portal/settings?spaceKey=%20&projectKey=PROJ1", None).await;
        assert_eq!(ctx.get_str("spaceKey"), Some("PROJ1"));
    }

    #[tokio::test]
    async fn space_key_is_trimmed_in_context() {
        let ctx = rendered_context("/hr-portal/settings?spaceKey=%20%20HR%20", None).await;

        assert_eq!(ctx.get_str("spaceKey"), Some("HR"));
    }

    #[tokio::test]
    async fn missing_identity_provider_degrades_to_anonymous() {
        let renderer = RecordingRenderer::new();
        let mut state = testing::state_with(renderer.clone());
        state.identity = None;

        let res = testing::get(state, "/hr-portal/settings?spaceKey=HR", Some("Jane Doe")).await;

        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(renderer.calls()[0].1.get_str("currentUser"), Some("Anonymous"));
    }

    #[tokio::test]
    async fn missing_renderer_fails_without_a_page() {
        let mut state = testing::state_with(RecordingRenderer::new());
        state.renderer = None;

        let res = testing::get(state, SETTINGS_PATH, Some("Jane Doe")).await;

        assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_ne!(res.content_type.as_deref(), Some("text/html; charset=UTF-8"));
        assert_eq!(res.json()["error"]["code"], "COLLABORATOR_UNAVAILABLE");
    }

    #[tokio::test]
    async fn missing_properties_fails_the_request() {
        let mut state = testing::state_with(RecordingRenderer::new());
        state.properties = None;

        let res = testing::get(state, SETTINGS_PATH, None).await;

        assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn render_failure_discards_partial_output() {
        let state = testing::state_with(FailingRenderer);

        let res = testing::get(state, SETTINGS_PATH, None).await;

        assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!res.body.contains("<html"));
        assert_eq!(res.json()["error"]["code"], "RENDER_FAILED");
    }

    #[tokio::test]
    async fn builtin_templates_show_user_and_space() {
        let res = testing::get(
            testing::builtin_state(),
            "/hr-portal/settings?spaceKey=HR",
            Some("Jane Doe"),
        )
        .await;

        assert_eq!(res.status, StatusCode::OK);
        assert!(res.body.contains(r#"<dd class="space-key">HR</dd>"#));
        assert!(res.body.contains(r#"<dd class="current-user">Jane Doe</dd>"#));
    }
}
