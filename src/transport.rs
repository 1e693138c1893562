//! Signed HTTP requests against the versioned API root.
//!
//! One call, one request: nothing here retries, caches or pools beyond what
//! `reqwest` does by default.

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument, warn};
use url::{form_urlencoded, Url};

use crate::config::ClientConfig;
use crate::error::{ApiError, ErrorBody, RequestSummary, StripeError, StripeResult};
use crate::form::FormParams;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<ErrorBody>,
}

/// Shared, read-only request state behind every sub-client.
pub(crate) struct Transport {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl Transport {
    pub(crate) fn new(config: &ClientConfig, http: reqwest::Client) -> StripeResult<Self> {
        if config.api_key.is_empty() {
            return Err(StripeError::ConfigError("api_key must not be empty".to_string()));
        }
        let version = config.version.trim_start_matches('v');
        let base_url: Url = format!("{}/v{}/", config.origin(), version)
            .parse()
            .map_err(|e: url::ParseError| StripeError::ConfigError(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the full URL for an API path such as `charges/ch_1/refund`.
    pub(crate) fn url(&self, path: &str) -> StripeResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(StripeError::UrlParseError)
    }

    /// Perform one request and return the raw body of a 200 response.
    #[instrument(skip_all, fields(method = %method, path = path))]
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&FormParams>,
    ) -> StripeResult<Vec<u8>> {
        let url = self.url(path)?;
        let mut builder = self
            .http
            .request(method.clone(), url)
            .basic_auth(&self.api_key, Some(""));

        if let Some(form) = body.filter(|form| !form.is_empty()) {
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE))
                .body(form.encode());
        }

        let request = builder.build()?;
        let summary = RequestSummary {
            method: method.to_string(),
            url: request.url().to_string(),
        };
        let authorization = request
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        debug!(url = %summary.url, "sending request");
        let resp = self.http.execute(request).await?;
        let status = resp.status().as_u16();
        let bytes = resp.bytes().await?;
        debug!(status, len = bytes.len(), "received response");

        classify(status, summary, authorization, bytes.to_vec())
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> StripeResult<T> {
        let bytes = self.request(Method::GET, path, None).await?;
        decode(&bytes)
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &FormParams,
    ) -> StripeResult<T> {
        let bytes = self.request(Method::POST, path, Some(form)).await?;
        decode(&bytes)
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> StripeResult<T> {
        let bytes = self.request(Method::DELETE, path, None).await?;
        decode(&bytes)
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

/// Map an HTTP status to success or to the matching [`StripeError`] variant.
pub(crate) fn classify(
    status: u16,
    request: RequestSummary,
    authorization: Option<String>,
    body: Vec<u8>,
) -> StripeResult<Vec<u8>> {
    let err = match status {
        200 => return Ok(body),
        400 => StripeError::BadRequest {
            request,
            error: embedded_error(&body),
        },
        401 => StripeError::Unauthorized {
            request,
            authorization,
        },
        402 => StripeError::RequestFailed {
            request,
            error: embedded_error(&body),
        },
        404 => StripeError::NotFound {
            request,
            error: embedded_error(&body),
        },
        500 | 502 | 503 | 504 => StripeError::Server { status, request },
        _ => StripeError::Unknown { status, request },
    };
    warn!(status, error = %err, "request failed");
    Err(err)
}

fn embedded_error(body: &[u8]) -> Option<ApiError> {
    serde_json::from_slice::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .map(ApiError::from)
}

/// Decode a 200 body, surfacing an embedded `error` object as a failure.
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> StripeResult<T> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    if let Some(error) = value.get("error").filter(|error| !error.is_null()) {
        let error: ErrorBody = serde_json::from_value(error.clone())?;
        warn!(error = %error, "response carried an error object");
        return Err(StripeError::Api(error.into()));
    }
    Ok(serde_json::from_value(value)?)
}

/// Join a collection path and a resource ID, rejecting IDs that would
/// change the path.
///
/// The ID is percent-encoded as a single path segment, so `%` and other
/// reserved bytes cannot be reinterpreted when the URL is resolved.
pub(crate) fn resource_path(collection: &str, id: &str) -> StripeResult<String> {
    if id.trim().is_empty() {
        return Err(StripeError::invalid(format!("{collection}: no ID set")));
    }
    if id == "." || id == ".." || id.contains(['/', '\\', '?', '#']) {
        return Err(StripeError::invalid(format!("{collection}: malformed ID {id:?}")));
    }
    // byte_serialize writes spaces as `+`, which a path would keep literally.
    let segment = form_urlencoded::byte_serialize(id.as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    Ok(format!("{collection}/{segment}"))
}
