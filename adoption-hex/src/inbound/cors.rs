//! Cross-origin policy.
//!
//! The policy is configuration, not a hardcoded wildcard: deployments choose
//! between the permissive development posture and an explicit origin
//! allowlist with credentials.

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowHeaders, CorsLayer};

/// Cross-origin resource sharing policy for the whole router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Any origin, any method, any header. No credentials.
    Permissive,
    /// Explicit origins, with credentials enabled.
    AllowList(Vec<String>),
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self::Permissive
    }
}

impl CorsPolicy {
    /// Builds the tower-http layer for this policy.
    ///
    /// Invalid origin strings in an allowlist are skipped; credentials
    /// require mirrored request headers instead of a wildcard.
    pub fn layer(&self) -> CorsLayer {
        match self {
            CorsPolicy::Permissive => CorsLayer::permissive(),
            CorsPolicy::AllowList(origins) => {
                let origins: Vec<HeaderValue> = origins
                    .iter()
                    .filter_map(|origin| origin.parse().ok())
                    .collect();

                CorsLayer::new()
                    .allow_origin(origins)
                    .allow_methods([
                        Method::GET,
                        Method::POST,
                        Method::PUT,
                        Method::DELETE,
                        Method::OPTIONS,
                    ])
                    .allow_headers(AllowHeaders::mirror_request())
                    .allow_credentials(true)
            }
        }
    }
}
