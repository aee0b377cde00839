use std::time::Duration;

use log::debug;

use crate::config::{Service, ServiceAuth};
use crate::error::{Error, Result};

use super::http_trait::{ClientFactory, HttpClient, HttpResponse};

const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Largest response body read into memory. Larger bodies fail with
/// [`Error::ResponseBody`].
const DEFAULT_BODY_LIMIT: u64 = 50 * 1024 * 1024;

/// Blocking HTTP client implementation using ureq.
///
/// Every request carries the headers derived from the service's auth scheme.
/// Non-2xx statuses are returned as responses, not as transport errors.
#[derive(Clone)]
pub struct UreqClient {
    agent: ureq::Agent,
    headers: Vec<(String, String)>,
    body_limit: u64,
}

impl UreqClient {
    /// Create a new ureq HTTP client with default settings.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Create a new ureq HTTP client with a custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            agent: ureq::Agent::config_builder()
                .timeout_global(Some(Duration::from_secs(timeout_secs)))
                .http_status_as_error(false)
                .build()
                .into(),
            headers: Vec::new(),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    /// Override the maximum response body size in bytes.
    pub fn with_body_limit(self, body_limit: u64) -> Self {
        Self { body_limit, ..self }
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new()
    }
}

fn auth_headers(auth: &ServiceAuth) -> Vec<(String, String)> {
    match auth {
        ServiceAuth::NoAuth => Vec::new(),
        ServiceAuth::ApiKey { header, key } => vec![(header.clone(), key.clone())],
        ServiceAuth::BearerToken { token } => {
            vec![("Authorization".to_string(), format!("Bearer {token}"))]
        }
    }
}

fn into_response(
    mut response: ureq::http::Response<ureq::Body>,
    body_limit: u64,
) -> Result<HttpResponse> {
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .with_config()
        .limit(body_limit)
        .read_to_string()
        .map_err(|e| Error::ResponseBody(e.to_string()))?;
    Ok(HttpResponse { status, body })
}

impl HttpClient for UreqClient {
    fn get(&self, url: &str, query_params: &[(&str, String)]) -> Result<HttpResponse> {
        debug!("GET {} ({} query params)", url, query_params.len());
        let mut req = self.agent.get(url);

        for (name, value) in &self.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        for (key, value) in query_params {
            req = req.query(key, value);
        }

        let response = req.call().map_err(|e| Error::Transport(e.to_string()))?;
        into_response(response, self.body_limit)
    }

    fn head(&self, url: &str) -> Result<HttpResponse> {
        debug!("HEAD {}", url);
        let mut req = self.agent.head(url);

        for (name, value) in &self.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        let response = req.call().map_err(|e| Error::Transport(e.to_string()))?;
        Ok(HttpResponse::new(response.status().as_u16(), String::new()))
    }
}

/// Builds a [`UreqClient`] per service reference.
#[derive(Debug, Clone, Default)]
pub struct UreqClientFactory {
    timeout_secs: Option<u64>,
}

impl UreqClientFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            timeout_secs: Some(timeout_secs),
        }
    }
}

impl ClientFactory for UreqClientFactory {
    type Client = UreqClient;

    fn build(&self, service: &Service) -> Result<UreqClient> {
        let client = match self.timeout_secs {
            Some(timeout_secs) => UreqClient::with_timeout(timeout_secs),
            None => UreqClient::new(),
        };
        Ok(UreqClient {
            headers: auth_headers(&service.auth),
            ..client
        })
    }
}
