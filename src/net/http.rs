//! Uniform request helper over the remote REST API.
//!
//! Every reply is normalized into an [`ApiResponse`]: transport status, the
//! decoded success payload, and the validation-error mapping when the server
//! answers a 4xx with an `errors` object.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: [`BrowserTransport`] reports a network error;
//! tests inject their own [`Transport`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::types::ValidationErrors;
use crate::config::ClientConfig;
use crate::error::{ClientError, INVALID_CREDENTIALS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully resolved request ready for a [`Transport`].
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub token: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), token: None, body: None }
    }

    /// Attach a bearer token. Blank tokens are ignored.
    #[must_use]
    pub fn bearer(mut self, token: Option<&str>) -> Self {
        self.token = token.map(str::trim).filter(|t| !t.is_empty()).map(str::to_owned);
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] if `body` cannot be serialized.
    pub fn json<B: serde::Serialize>(mut self, body: &B) -> Result<Self, ClientError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// `Authorization` header value, when a token is attached.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {token}"))
    }
}

/// Raw transport reply before normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Sends a request and returns the raw reply.
///
/// Implementations return [`ClientError::Network`] when no response was
/// produced at all. They never interpret status codes.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, ClientError>;
}

/// Normalized `{response, result, errors}` triple.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub result: Option<T>,
    pub errors: Option<ValidationErrors>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Collapse into the success payload or a classified error.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Validation`] when the server sent field errors.
    /// - [`ClientError::Auth`] for 401/403.
    /// - [`ClientError::Transport`] for any other non-2xx reply.
    /// - [`ClientError::Decode`] for a 2xx reply without a payload.
    pub fn into_result(self) -> Result<T, ClientError> {
        let Self { status, result, errors, message } = self;
        if let Some(errors) = errors.filter(|e| !e.is_empty()) {
            return Err(ClientError::Validation(errors));
        }
        if (200..300).contains(&status) {
            return result.ok_or_else(|| ClientError::Decode("empty response body".to_owned()));
        }
        match status {
            401 | 403 => Err(ClientError::Auth(message.unwrap_or_else(|| INVALID_CREDENTIALS.to_owned()))),
            status => Err(ClientError::Transport { status }),
        }
    }

    /// Like [`ApiResponse::into_result`], but a 400/422 without field errors
    /// is a rejected credential: the server `message` when present, otherwise
    /// `fallback`.
    ///
    /// # Errors
    ///
    /// See [`ApiResponse::into_result`].
    pub fn into_credential_result(self, fallback: &str) -> Result<T, ClientError> {
        let has_fields = self.errors.as_ref().is_some_and(|e| !e.is_empty());
        if matches!(self.status, 400 | 422) && !has_fields {
            return Err(ClientError::Auth(self.message.unwrap_or_else(|| fallback.to_owned())));
        }
        self.into_result()
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<ValidationErrors>,
}

/// Normalize a raw reply.
///
/// 2xx bodies must decode as `T` (an empty body decodes as JSON `null`).
/// Non-2xx bodies are inspected for `message` and `errors`; anything else is
/// left as a bare status.
///
/// # Errors
///
/// Returns [`ClientError::Decode`] when a 2xx body does not match `T`.
pub fn normalize<T: DeserializeOwned>(raw: &RawResponse) -> Result<ApiResponse<T>, ClientError> {
    let body = if raw.body.trim().is_empty() { "null" } else { raw.body.as_str() };
    if (200..300).contains(&raw.status) {
        let result = serde_json::from_str::<T>(body)?;
        return Ok(ApiResponse { status: raw.status, result: Some(result), errors: None, message: None });
    }

    let parsed = serde_json::from_str::<ErrorBody>(body).ok();
    let (message, errors) = match parsed {
        Some(ErrorBody { message, errors }) => {
            let errors = if (400..500).contains(&raw.status) { errors } else { None };
            (message, errors)
        }
        None => (None, None),
    };
    Ok(ApiResponse { status: raw.status, result: None, errors, message })
}

/// Join a base URL and an absolute API path.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Request helper bound to one base URL and one transport.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self { base_url: base_url.into(), transport }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build a request for `path` relative to the base URL.
    pub fn request(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest::new(method, join_url(&self.base_url, path))
    }

    /// Send `request` and normalize the reply.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Network`] from the transport, or
    /// [`ClientError::Decode`] when a 2xx body does not match `R`.
    pub async fn send<R: DeserializeOwned>(&self, request: &ApiRequest) -> Result<ApiResponse<R>, ClientError> {
        let raw = self.transport.send(request).await?;
        normalize(&raw)
    }

    /// Send `request` and collapse to the payload or a classified error.
    ///
    /// # Errors
    ///
    /// See [`ApiResponse::into_result`].
    pub async fn fetch<R: DeserializeOwned>(&self, request: &ApiRequest) -> Result<R, ClientError> {
        self.send::<R>(request).await?.into_result()
    }
}

impl ApiClient<BrowserTransport> {
    /// Client backed by the browser's `fetch`.
    pub fn browser(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url.clone(), BrowserTransport)
    }
}

/// No usable reply: the request failed or its body could not be read.
fn network_error(err: impl std::fmt::Display) -> ClientError {
    ClientError::Network(err.to_string())
}

/// `fetch`-backed transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, ClientError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::RequestBuilder;

            let gloo_method = match request.method {
                Method::Get => gloo_net::http::Method::GET,
                Method::Post => gloo_net::http::Method::POST,
                Method::Put => gloo_net::http::Method::PUT,
                Method::Delete => gloo_net::http::Method::DELETE,
            };
            let mut builder = RequestBuilder::new(&request.url)
                .method(gloo_method)
                .header("Accept", "application/json");
            if let Some(auth) = request.authorization() {
                builder = builder.header("Authorization", &auth);
            }
            let prepared = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(network_error)?;
            let resp = prepared
                .send()
                .await
                .map_err(network_error)?;
            let status = resp.status();
            let body = resp.text().await.map_err(network_error)?;
            Ok(RawResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(network_error("not available on server"))
        }
    }
}
