//! 呼び出し元の解決 → CallerIdentity を extensions に入れる
//!
//! - IdentityProvider が未設定、または呼び出し元がいない場合は何も入れない
//! - ここでは reject しない (settings ページは Anonymous で描画する)

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::state::AppState;

/// Resolve the caller for every request routed through `router`.
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, identity_middleware))
}

async fn identity_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let caller = match state.identity.as_ref() {
        Some(provider) => provider.current_user(req.headers()),
        None => {
            tracing::debug!("identity provider not configured");
            None
        }
    };

    // middleware → extractor への受け渡し
    if let Some(caller) = caller {
        req.extensions_mut().insert(caller);
    }

    next.run(req).await
}
