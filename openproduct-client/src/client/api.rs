use log::debug;
use serde_json::Value;
use url::Url;

use crate::error::{Error, Result};

use super::http_trait::{HttpClient, HttpResponse};

/// A collection on one of the upstream APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Path relative to the API root, without slashes.
    pub path: &'static str,
    /// Used in the empty-response error of list calls.
    pub list_label: &'static str,
    /// Used in the empty-response error of retrieve calls.
    pub detail_label: &'static str,
}

/// Client for one upstream API rooted at `base_url`.
///
/// Generic over the HTTP client implementation, allowing consumers to provide
/// their own HTTP client by implementing the `HttpClient` trait.
#[derive(Clone, Debug)]
pub struct ApiClient<H: HttpClient> {
    http_client: H,
    base_url: Url,
}

impl<H: HttpClient> ApiClient<H> {
    /// Create a new API client with a custom HTTP client implementation.
    ///
    /// # Arguments
    /// * `base_url` - Root of the API, e.g. `https://example.com/api/v1/`
    /// * `http_client` - HTTP client implementation
    pub fn new(mut base_url: Url, http_client: H) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(base_url.to_string()));
        }

        // we need a trailing slash, if not present we append it
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        Ok(ApiClient {
            http_client,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn http_client(&self) -> &H {
        &self.http_client
    }

    /// `{base_url}{path}`
    pub fn collection_url(&self, endpoint: &Endpoint) -> Result<Url> {
        Ok(self.base_url.join(endpoint.path)?)
    }

    /// `{base_url}{path}/{id}/`, with `id` encoded as a single path segment.
    ///
    /// Empty, `.` and `..` ids are rejected: the URL parser drops them as
    /// path segments, which would turn the request into a list call.
    pub fn object_url(&self, endpoint: &Endpoint, id: &str) -> Result<Url> {
        if matches!(id, "" | "." | "..") {
            return Err(Error::InvalidId(id.to_string()));
        }

        let mut url = self.collection_url(endpoint)?;
        url.path_segments_mut()
            .map_err(|_| Error::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(id)
            .push("");
        Ok(url)
    }

    pub fn list(&self, endpoint: &Endpoint, query_params: &[(&str, String)]) -> Result<Value> {
        let url = self.collection_url(endpoint)?;
        let response = self.http_client.get(url.as_str(), query_params)?;
        decode(response, endpoint.list_label)
    }

    pub fn retrieve(&self, endpoint: &Endpoint, id: &str) -> Result<Value> {
        let url = self.object_url(endpoint, id)?;
        let response = self.http_client.get(url.as_str(), &[])?;
        decode(response, endpoint.detail_label)
    }

    /// HEAD the collection; fails on a non-2xx status.
    pub fn head(&self, endpoint: &Endpoint) -> Result<HttpResponse> {
        let url = self.collection_url(endpoint)?;
        self.http_client.head(url.as_str())?.error_for_status()
    }
}

fn decode(response: HttpResponse, label: &'static str) -> Result<Value> {
    let response = response.error_for_status()?;
    if response.body.trim().is_empty() {
        debug!("empty body from {}", label);
        return Err(Error::EmptyResponse { resource: label });
    }

    let value: Value = response.json()?;
    if is_falsy(&value) {
        debug!("falsy body from {}", label);
        return Err(Error::EmptyResponse { resource: label });
    }
    Ok(value)
}

/// `null`, `false`, `0`, `""`, `[]` and `{}`.
pub(crate) fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const THINGS: Endpoint = Endpoint {
        path: "things",
        list_label: "things API",
        detail_label: "thing from things API",
    };

    #[derive(Clone, Debug)]
    struct FixedClient(HttpResponse);

    impl HttpClient for FixedClient {
        fn get(&self, _url: &str, _query_params: &[(&str, String)]) -> Result<HttpResponse> {
            Ok(self.0.clone())
        }

        fn head(&self, _url: &str) -> Result<HttpResponse> {
            Ok(HttpResponse::new(self.0.status, ""))
        }
    }

    fn api(status: u16, body: &str) -> ApiClient<FixedClient> {
        ApiClient::new(
            Url::parse("https://example.com/api/v1").unwrap(),
            FixedClient(HttpResponse::new(status, body)),
        )
        .unwrap()
    }

    #[test]
    fn test_trailing_slash_is_added() {
        let api = api(200, "[]");
        assert_eq!(api.base_url().as_str(), "https://example.com/api/v1/");
        assert_eq!(
            api.collection_url(&THINGS).unwrap().as_str(),
            "https://example.com/api/v1/things"
        );
    }

    #[test]
    fn test_object_url_encodes_id() {
        let api = api(200, "{}");
        assert_eq!(
            api.object_url(&THINGS, "abc").unwrap().as_str(),
            "https://example.com/api/v1/things/abc/"
        );
        assert_eq!(
            api.object_url(&THINGS, "a/b?c").unwrap().as_str(),
            "https://example.com/api/v1/things/a%2Fb%3Fc/"
        );
        assert_eq!(
            api.object_url(&THINGS, "...").unwrap().as_str(),
            "https://example.com/api/v1/things/.../"
        );
    }

    #[test]
    fn test_object_url_rejects_dot_and_empty_ids() {
        let api = api(200, r#"[{"uuid":"a"}]"#);
        for id in ["", ".", ".."] {
            let err = api.object_url(&THINGS, id).unwrap_err();
            assert!(
                matches!(&err, Error::InvalidId(got) if got == id),
                "id {id:?} gave {err:?}"
            );

            // must not fall through to the collection listing
            let err = api.retrieve(&THINGS, id).unwrap_err();
            assert!(matches!(err, Error::InvalidId(_)));
        }
    }

    #[test]
    fn test_rejects_non_base_url() {
        let err = ApiClient::new(
            Url::parse("mailto:someone@example.com").unwrap(),
            FixedClient(HttpResponse::new(200, "")),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_list_returns_body_verbatim() {
        let value = api(200, r#"[{"uuid":"a"}]"#).list(&THINGS, &[]).unwrap();
        assert_eq!(value, json!([{"uuid": "a"}]));
    }

    #[test]
    fn test_non_2xx_is_upstream_error() {
        let err = api(500, "boom").list(&THINGS, &[]).unwrap_err();
        match err {
            Error::UpstreamHttp { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_bodies_are_empty_response() {
        for body in ["", "  ", "[]", "{}", "null", "\"\"", "0", "false"] {
            let err = api(200, body).list(&THINGS, &[]).unwrap_err();
            assert!(
                matches!(err, Error::EmptyResponse { resource: "things API" }),
                "body {body:?} gave {err:?}"
            );
        }
        let err = api(200, "{}").retrieve(&THINGS, "x").unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch thing from things API.");
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let err = api(200, "<html>").list(&THINGS, &[]).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_head_checks_status() {
        assert!(api(200, "").head(&THINGS).is_ok());
        assert_eq!(api(403, "").head(&THINGS).unwrap_err().status(), Some(403));
    }

    #[test]
    fn test_is_falsy() {
        assert!(is_falsy(&json!(0.0)));
        assert!(!is_falsy(&json!(1)));
        assert!(!is_falsy(&json!(true)));
        assert!(!is_falsy(&json!("x")));
        assert!(!is_falsy(&json!({"count": 0})));
    }
}
