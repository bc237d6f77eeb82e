/// Error type for gateway operations.
///
/// Carries a human-readable message. The flow controller never interprets
/// causes; it only surfaces the message for display, so the distinction
/// between rejection and transport failure lives here, not there.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The backend rejected the request.
    #[error("{0}")]
    Rejected(String),

    /// Transport or backend failure (I/O, timeout, serialization).
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl GatewayError {
    /// Create a rejection with the given message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// The displayable message for the presentation layer.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
