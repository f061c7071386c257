/// Errors surfaced by [`ApiClient`](crate::ApiClient) calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request failed (network, DNS, TLS, timeout) or the body could
    /// not be decoded.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The proxy answered with an error envelope or a non-2xx status.
    #[error("{message} (HTTP {status})")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The envelope's `error` string, or a generic message.
        message: String,
    },

    /// The call was refused before sending because an argument is invalid.
    #[error(transparent)]
    Invalid(#[from] saveit_core::error::CoreError),

    /// A 2xx answer that did not have the expected envelope shape.
    #[error("Unexpected response: {0}")]
    Envelope(String),
}

impl ClientError {
    /// Message suitable for a user-facing notification.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
