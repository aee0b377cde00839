use serde::de::DeserializeOwned;

use crate::config::Service;
use crate::error::{Error, Result};

/// A raw upstream response: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into [`Error::UpstreamHttp`].
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::UpstreamHttp {
                status: self.status,
                body: self.body,
            })
        }
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Minimal blocking HTTP client trait that can be implemented with any HTTP library.
///
/// This allows consumers to bring their own HTTP client implementation, and
/// lets tests swap in a fake transport. Implementations return the response
/// for every status code; deciding what counts as a failure is left to the
/// caller.
pub trait HttpClient: Send + Sync + Clone {
    /// Perform a GET request with optional query parameters.
    ///
    /// # Arguments
    /// * `url` - The full URL to request
    /// * `query_params` - Query parameters as key-value pairs, in order
    fn get(&self, url: &str, query_params: &[(&str, String)]) -> Result<HttpResponse>;

    /// Perform a HEAD request. The returned body is empty.
    fn head(&self, url: &str) -> Result<HttpResponse>;
}

/// Builds a configured [`HttpClient`] from a service reference.
pub trait ClientFactory {
    type Client: HttpClient;

    fn build(&self, service: &Service) -> Result<Self::Client>;
}
