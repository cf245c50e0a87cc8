//! Custom extractors.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::HOST;
use axum::http::request::Parts;

use kennywood_app::ports::ParkAreaRepository;

use crate::state::AppState;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Scheme and authority that resource links are built from,
/// e.g. `http://localhost:3000`. Never ends with a slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Resolve the base URL for a request.
    ///
    /// A configured public URL wins. Otherwise the `Host` header (or the
    /// request URI's authority) is used, with the scheme taken from
    /// `X-Forwarded-Proto` when a proxy sets it.
    #[must_use]
    pub fn from_parts(parts: &Parts, public_url: Option<&str>) -> Self {
        if let Some(url) = public_url {
            return Self(url.trim_end_matches('/').to_string());
        }

        let scheme = parts
            .headers
            .get(FORWARDED_PROTO)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("http");
        let host = parts
            .headers
            .get(HOST)
            .and_then(|value| value.to_str().ok())
            .or_else(|| parts.uri.authority().map(axum::http::uri::Authority::as_str))
            .unwrap_or("localhost");

        Self(format!("{scheme}://{host}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<R> FromRequestParts<AppState<R>> for BaseUrl
where
    R: ParkAreaRepository + Send + Sync + 'static,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<R>,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts, state.public_url.as_deref()))
    }
}
