//! Toggl API client and the request pipeline every endpoint goes through.
//!
//! The [`Client`] type is the main entry point. Use [`ClientBuilder`] to
//! configure the token, base URL, transport and diagnostics.

use crate::{metadata::RequestMetadata, Error, Response, Result};
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

/// Base URL of the Toggl v8 API.
pub const DEFAULT_BASE_URL: &str = "https://www.toggl.com/api/v8/";

/// Toggl expects the API token as the basic-auth user and this literal as the password.
const API_TOKEN_PASSWORD: &str = "api_token";

const USER_AGENT: &str = concat!("toggl-rs/", env!("CARGO_PKG_VERSION"));

/// A client for the Toggl API.
///
/// The client is cheap to clone and safe to share between tasks: all of its
/// configuration is fixed at build time and no request mutates it.
///
/// # Examples
///
/// ```no_run
/// use toggl::Client;
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), toggl::Error> {
/// let client = Client::builder()
///     .api_token("my-api-token")
///     .timeout(Duration::from_secs(30))
///     .build()?;
///
/// for workspace in client.get_workspaces().await? {
///     println!("{}: {}", workspace.id, workspace.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    base_url: Url,
    api_token: String,
    default_headers: HeaderMap,
    timeout: Option<Duration>,
    debug: bool,
}

impl Client {
    /// Creates a client for the public Toggl API with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty or the transport cannot be built.
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        Self::builder().api_token(api_token).build()
    }

    /// Creates a new `ClientBuilder` for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The base URL every request path is joined onto.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Returns `true` if raw request and response bodies are being logged.
    pub fn debug(&self) -> bool {
        self.inner.debug
    }

    /// Runs one request through the pipeline and decodes the body as `Res`.
    ///
    /// Only `200 OK` counts as success. Any other status becomes
    /// [`Error::HttpError`] without the body being read; a body that is not
    /// valid JSON for `Res` becomes [`Error::DeserializationFailed`].
    ///
    /// Dropping the returned future aborts the request.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use toggl::{metadata::RequestMetadata, Client, Envelope, Tag};
    /// use http::Method;
    ///
    /// # async fn example() -> Result<(), toggl::Error> {
    /// let client = Client::new("my-api-token")?;
    ///
    /// let metadata = RequestMetadata::new(Method::GET, "workspaces/7/tags");
    /// let tags = client.call::<(), Vec<Tag>>(metadata, None).await?;
    /// println!("{} tags", tags.data.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn call<Req, Res>(
        &self,
        metadata: RequestMetadata,
        body: Option<&Req>,
    ) -> Result<Response<Res>>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let start_time = Instant::now();

        let result = match self.execute_request(&metadata, body).await {
            Ok(response) => self.parse_response(response, start_time).await,
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            tracing::warn!(
                error = %e,
                method = %metadata.method,
                path = %metadata.path,
                "Request failed"
            );
        }

        result
    }

    /// Builds and sends a single request.
    async fn execute_request<Req>(
        &self,
        metadata: &RequestMetadata,
        body: Option<&Req>,
    ) -> Result<reqwest::Response>
    where
        Req: Serialize + ?Sized,
    {
        let mut url = self.inner.base_url.join(metadata.relative_path()?)?;

        for (key, value) in &metadata.query_params {
            url.query_pairs_mut().append_pair(key, value);
        }

        tracing::debug!(
            method = %metadata.method,
            url = %url,
            "Executing HTTP request"
        );

        let mut request = self
            .inner
            .http_client
            .request(metadata.method.clone(), url)
            .basic_auth(&self.inner.api_token, Some(API_TOKEN_PASSWORD))
            .header(CONTENT_TYPE, "application/json");

        for (name, value) in &self.inner.default_headers {
            request = request.header(name, value);
        }

        for (name, value) in &metadata.headers {
            request = request.header(name, value);
        }

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        if let Some(body) = body {
            let bytes =
                serde_json::to_vec(body).map_err(|e| Error::SerializationFailed(e.to_string()))?;
            if self.inner.debug {
                tracing::debug!(body = %String::from_utf8_lossy(&bytes), "Request body");
            }
            request = request.body(bytes);
        }

        request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout
            } else {
                Error::Network(e)
            }
        })
    }

    /// Validates the status and decodes the body.
    ///
    /// Takes the response by value so it is released on every return path.
    async fn parse_response<Res>(
        &self,
        response: reqwest::Response,
        start_time: Instant,
    ) -> Result<Response<Res>>
    where
        Res: DeserializeOwned,
    {
        let status = response.status();
        let headers = response.headers().clone();

        tracing::info!(
            status = status.as_u16(),
            latency_ms = start_time.elapsed().as_millis(),
            "Received HTTP response"
        );

        if status != StatusCode::OK {
            if self.inner.debug {
                tracing::debug!(status = status.as_u16(), headers = ?headers, "Rejected response");
            }
            return Err(Error::HttpError {
                status,
                status_text: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Timeout
                } else {
                    Error::DeserializationFailed {
                        raw_response: String::new(),
                        serde_error: format!("failed to read response body: {}", e),
                        status,
                    }
                }
            })?;
        let raw_body = String::from_utf8_lossy(&bytes).into_owned();

        if self.inner.debug {
            tracing::debug!(body = %raw_body, "Response body");
        }

        match serde_json::from_slice::<Res>(&bytes) {
            Ok(data) => Ok(Response::new(
                data,
                raw_body,
                status,
                headers,
                start_time.elapsed(),
            )),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    raw_response = %raw_body,
                    "Failed to deserialize response"
                );

                Err(Error::DeserializationFailed {
                    raw_response: raw_body,
                    serde_error: e.to_string(),
                    status,
                })
            }
        }
    }

    /// Makes a GET request to the specified path.
    pub async fn get<Res>(&self, path: impl Into<String>) -> Result<Response<Res>>
    where
        Res: DeserializeOwned,
    {
        let metadata = RequestMetadata::new(Method::GET, path);
        self.call::<(), Res>(metadata, None).await
    }

    /// Makes a POST request to the specified path with a JSON body.
    pub async fn post<Req, Res>(&self, path: impl Into<String>, body: &Req) -> Result<Response<Res>>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let metadata = RequestMetadata::new(Method::POST, path);
        self.call(metadata, Some(body)).await
    }

    /// Makes a PUT request to the specified path with a JSON body.
    pub async fn put<Req, Res>(&self, path: impl Into<String>, body: &Req) -> Result<Response<Res>>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let metadata = RequestMetadata::new(Method::PUT, path);
        self.call(metadata, Some(body)).await
    }

    /// Makes a DELETE request to the specified path.
    pub async fn delete<Res>(&self, path: impl Into<String>) -> Result<Response<Res>>
    where
        Res: DeserializeOwned,
    {
        let metadata = RequestMetadata::new(Method::DELETE, path);
        self.call::<(), Res>(metadata, None).await
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url.as_str())
            .field("api_token", &"<redacted>")
            .field("timeout", &self.inner.timeout)
            .field("debug", &self.inner.debug)
            .finish_non_exhaustive()
    }
}

/// Builder for configuring and creating a [`Client`].
///
/// # Examples
///
/// ```no_run
/// use toggl::ClientBuilder;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), toggl::Error> {
/// let client = ClientBuilder::new()
///     .api_token("my-api-token")
///     .timeout(Duration::from_secs(30))
///     .debug(true)
///     .default_header("X-Request-Source", "reporting")?
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    api_token: Option<String>,
    base_url: Option<Url>,
    http_client: Option<reqwest::Client>,
    default_headers: HeaderMap,
    timeout: Option<Duration>,
    debug: bool,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings.
    pub fn new() -> Self {
        Self {
            api_token: None,
            base_url: None,
            http_client: None,
            default_headers: HeaderMap::new(),
            timeout: None,
            debug: false,
        }
    }

    /// Sets the API token used as the basic-auth user name.
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Overrides the base URL (defaults to [`DEFAULT_BASE_URL`]).
    ///
    /// A trailing `/` is added if missing so relative paths are appended
    /// rather than replacing the last segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or cannot carry a path.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        let mut url = Url::parse(url.as_ref())?;
        if url.cannot_be_a_base() {
            return Err(Error::ConfigurationError(format!(
                "Base URL cannot carry a path: {}",
                url
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        self.base_url = Some(url);
        Ok(self)
    }

    /// Replaces the transport used to send requests.
    ///
    /// Pooling, proxies and TLS settings are whatever the given client was built with.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Adds a default header that will be included in all requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header value: {}", e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets a per-request deadline. Expiry is reported as [`Error::Timeout`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Logs raw request and response bodies at `DEBUG` level when enabled.
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// Returns an error if no token was provided or the default transport
    /// cannot be built.
    pub fn build(self) -> Result<Client> {
        let api_token = self
            .api_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| Error::ConfigurationError("API token is required".to_string()))?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let http_client = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .map_err(|e| {
                    Error::ConfigurationError(format!("Failed to build HTTP client: {}", e))
                })?,
        };

        Ok(Client {
            inner: Arc::new(ClientInner {
                http_client,
                base_url,
                api_token,
                default_headers: self.default_headers,
                timeout: self.timeout,
                debug: self.debug,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
