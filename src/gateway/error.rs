use thiserror::Error;

/// Failure reported by a gateway.
///
/// Callers never branch on the cause, so only a message is kept. The type
/// is `Clone + PartialEq` to travel inside intents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("gateway request failed: {message}")]
pub struct GatewayError {
    message: String,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for GatewayError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("malformed store document: {err}"))
    }
}

impl From<tokio::task::JoinError> for GatewayError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::new(format!("store worker failed: {err}"))
    }
}
