use thiserror::Error;

pub type HandlerResult<T> = Result<T, HandlerError>;

/// Errors surfaced at the request boundary.
///
/// Every variant except [`HandlerError::Internal`] is a client error:
/// the engine was never invoked and the request should be retried only
/// after the payload is fixed.
#[derive(Debug, PartialEq, Clone, Error)]
pub enum HandlerError {
    #[error("Invalid input format: {0}")]
    InvalidPayload(String),
    #[error("Batch too large: {given} series, limit {limit}")]
    BatchTooLarge { given: usize, limit: usize },
    #[error("Series {index} too long: {given} samples, limit {limit}")]
    SeriesTooLong {
        index: usize,
        given: usize,
        limit: usize,
    },
    #[error("An unexpected error occurred: {0}")]
    Internal(String),
}

impl HandlerError {
    pub fn invalid_payload<S: Into<String>>(msg: S) -> Self {
        HandlerError::InvalidPayload(msg.into())
    }

    /// HTTP status the transport should map this error to.
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::Internal(_) => 500,
            _ => 400,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}

impl From<&str> for HandlerError {
    fn from(message: &str) -> Self {
        HandlerError::Internal(String::from(message))
    }
}

impl From<String> for HandlerError {
    fn from(message: String) -> Self {
        HandlerError::Internal(message)
    }
}
