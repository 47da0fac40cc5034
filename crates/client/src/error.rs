use crate::form::FieldErrors;

/// Errors from the CRM REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, undecodable body).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("API Error: {status_text}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase for `status`, e.g. `Not Found`.
        status_text: String,
    },
}

/// Why a store-synchronizing operation did not complete.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The form failed local validation; no request was sent.
    #[error("Form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),

    /// The request was sent and failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}
