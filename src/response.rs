//! Response wrapper that preserves both parsed data and raw response details.
//!
//! Resource methods on [`Client`](crate::Client) unwrap this to the bare
//! record. It is returned directly by [`Client::call`](crate::Client::call)
//! for callers that want the raw body, headers or latency.

use http::{HeaderMap, StatusCode};
use std::time::Duration;

/// A successful (`200 OK`) response from the Toggl API.
///
/// # Examples
///
/// ```no_run
/// use toggl::{metadata::RequestMetadata, Client, Envelope, Project};
/// use http::Method;
///
/// # async fn example() -> Result<(), toggl::Error> {
/// let client = Client::new("my-api-token")?;
///
/// let metadata = RequestMetadata::new(Method::GET, "projects/42");
/// let response = client.call::<(), Envelope<Project>>(metadata, None).await?;
///
/// println!("Project: {}", response.data.data.name);
/// println!("Request took {:?}", response.latency);
/// println!("Raw body: {}", response.raw_body);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// The deserialized response data.
    pub data: T,

    /// The raw response body as a string.
    pub raw_body: String,

    /// The HTTP status code of the response.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// Time from sending the request until the body was decoded.
    pub latency: Duration,
}

impl<T> Response<T> {
    /// Creates a new `Response`.
    pub fn new(
        data: T,
        raw_body: String,
        status: StatusCode,
        headers: HeaderMap,
        latency: Duration,
    ) -> Self {
        Self {
            data,
            raw_body,
            status,
            headers,
            latency,
        }
    }

    /// Consumes the response and returns the decoded data.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Returns a reference to a header value by name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}
