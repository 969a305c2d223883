//! Caller identity lookup.
//!
//! The host authenticates the caller; this service only reads what the host
//! forwards with the request.
use axum::http::{HeaderMap, HeaderName};

use crate::pages::extractors::CallerIdentity;

pub trait IdentityProvider: Send + Sync + 'static {
    /// The authenticated caller for this request, if any.
    fn current_user(&self, headers: &HeaderMap) -> Option<CallerIdentity>;
}

/// Reads the caller's display name from a header set by the fronting host.
///
/// The header must be stripped from client traffic by the host; it is trusted as-is.
#[derive(Clone, Debug)]
pub struct TrustedHeaderIdentity {
    header: HeaderName,
}

impl TrustedHeaderIdentity {
    pub fn new(header: HeaderName) -> Self {
        Self { header }
    }
}

impl IdentityProvider for TrustedHeaderIdentity {
    fn current_user(&self, headers: &HeaderMap) -> Option<CallerIdentity> {
        let value = headers.get(&self.header)?;

        // Display names are often non-ASCII, so decode as UTF-8 rather than `to_str()`.
        let display_name = match std::str::from_utf8(value.as_bytes()) {
            Ok(v) => v.trim(),
            Err(_) => {
                tracing::warn!(header = %self.header, "identity header is not valid UTF-8");
                return None;
            }
        };

        if display_name.is_empty() {
            return None;
        }

        Some(CallerIdentity::new(display_name))
    }
}
