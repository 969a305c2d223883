use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::CallerIdentity;

/// Handler で、呼び出し元 (いない場合もある) を受け取るための extractor
///
/// AuthCtx 系と違い、見つからなくても reject しない。
/// `None` は「未ログイン」または「identity provider 未設定」を表す。
#[derive(Debug, Clone)]
pub struct Caller(pub Option<CallerIdentity>);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Caller(parts.extensions.get::<CallerIdentity>().cloned()))
    }
}
