use media_browse_models::MediaKind;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Details requested for an id the catalog does not know. Rendered
    /// as a dedicated user-visible state, distinct from generic failure.
    #[error("{kind} {id} not found in the catalog")]
    NotFound { kind: MediaKind, id: u64 },

    #[error("catalog request failed: {status} - {body}")]
    Status { status: StatusCode, body: String },

    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl GatewayError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::NotFound { .. })
    }
}
