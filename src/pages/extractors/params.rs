/*
 * Responsibility
 * - query string をデコード済みの (name, value) 列として受け取る
 * - 同名パラメータが複数ある場合は最初の値を使う (400 にはしない)
 */
use std::convert::Infallible;

use axum::extract::{FromRequestParts, RawQuery};
use axum::http::request::Parts;
use url::form_urlencoded;

/// Read-only request parameters, in the order they were sent.
#[derive(Debug, Clone, Default)]
pub struct RequestParameters(Vec<(String, String)>);

impl RequestParameters {
    pub fn parse(query: &str) -> Self {
        Self(form_urlencoded::parse(query.as_bytes()).into_owned().collect())
    }

    /// First value sent for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

impl<S> FromRequestParts<S> for RequestParameters
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let RawQuery(query) = RawQuery::from_request_parts(parts, state).await?;
        Ok(query.as_deref().map(Self::parse).unwrap_or_default())
    }
}
