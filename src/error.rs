use std::fmt;

/// Custom error type for Zammad provider operations
#[derive(Debug)]
pub enum ZammadError {
    /// HTTP request failed before a response was received
    Http(reqwest::Error),
    /// API returned a non-2xx response; `message` carries the raw body
    Api { status: u16, message: String },
    /// Token not found in configuration or environment
    TokenNotFound(String),
    /// Host not found in configuration or environment
    HostNotFound(String),
    /// Resource identifier is not a valid integer
    InvalidId(String),
    /// JSON encoding or decoding error
    Json(String),
    /// Reading or writing the driver streams failed
    Io(String),
}

impl ZammadError {
    /// True when the server answered 404
    pub fn is_not_found(&self) -> bool {
        matches!(self, ZammadError::Api { status: 404, .. })
    }
}

impl fmt::Display for ZammadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZammadError::Http(e) => write!(f, "HTTP request failed: {}", e),
            ZammadError::Api { status, message } => {
                write!(f, "status: {}, body: {}", status, message)
            }
            ZammadError::TokenNotFound(msg) => write!(f, "{}", msg),
            ZammadError::HostNotFound(msg) => write!(f, "{}", msg),
            ZammadError::InvalidId(id) => write!(f, "invalid id '{}': not an integer", id),
            ZammadError::Json(msg) => write!(f, "JSON error: {}", msg),
            ZammadError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ZammadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ZammadError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ZammadError {
    fn from(err: reqwest::Error) -> Self {
        ZammadError::Http(err)
    }
}

impl From<serde_json::Error> for ZammadError {
    fn from(err: serde_json::Error) -> Self {
        ZammadError::Json(err.to_string())
    }
}

impl From<std::io::Error> for ZammadError {
    fn from(err: std::io::Error) -> Self {
        ZammadError::Io(err.to_string())
    }
}

/// Result type alias for Zammad provider operations
pub type Result<T> = std::result::Result<T, ZammadError>;
