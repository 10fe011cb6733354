/// Errors raised on the way to the replay service and back.
///
/// A `success: false` answer from the service is not an `AppError`; it is a
/// regular [`ReplayResponse::Failure`](crate::domain::replay::ReplayResponse).
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    NetworkError(String),
    ParseError(String),
    ValidationError(String),
}

impl AppError {
    /// Message without the kind prefix, as shown in the status region
    pub fn message(&self) -> &str {
        match self {
            AppError::NetworkError(msg)
            | AppError::ParseError(msg)
            | AppError::ValidationError(msg) => msg,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NetworkError(msg) => write!(f, "Network Error: {}", msg),
            AppError::ParseError(msg) => write!(f, "Parse Error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => AppError::ParseError(e.to_string()),
            // JsError's Display prepends the JS error name ("TypeError: ...")
            gloo_net::Error::JsError(e) => AppError::NetworkError(e.message),
            other => AppError::NetworkError(other.to_string()),
        }
    }
}

pub type ReplayResult<T> = Result<T, AppError>;
