use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Transport
    #[error("HTTP request failed: {0}")]
    Transport(String),
    #[error("failed to read response body: {0}")]
    ResponseBody(String),

    // Upstream responses
    #[error("upstream returned HTTP {status}: {body}")]
    UpstreamHttp { status: u16, body: String },
    #[error("Failed to fetch {resource}.")]
    EmptyResponse { resource: &'static str },

    // Requests
    #[error("invalid resource id: {0:?}")]
    InvalidId(String),

    // Configuration
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("configuration store lock poisoned")]
    StorePoisoned,

    // Wrapped external errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Url(#[from] url::ParseError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status of an upstream failure, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::UpstreamHttp { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
