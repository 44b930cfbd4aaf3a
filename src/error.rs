//! Error types for Toggl API calls.
//!
//! Transport failures, unexpected status codes and undecodable bodies are kept
//! in separate variants so callers can tell them apart without inspecting
//! message strings.

use http::StatusCode;

/// The main error type for Toggl API calls.
///
/// # Examples
///
/// ```no_run
/// use toggl::{Client, Error};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::new("my-api-token")?;
///
/// match client.get_project(42).await {
///     Ok(project) => println!("Project: {}", project.name),
///     Err(Error::HttpError { status, status_text }) => {
///         eprintln!("Toggl answered {} ({})", status.as_u16(), status_text);
///     }
///     Err(Error::DeserializationFailed { raw_response, serde_error, .. }) => {
///         eprintln!("Unexpected body {}: {}", raw_response, serde_error);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A network-level error occurred (connection failed, DNS lookup failed, etc.).
    ///
    /// This wraps the underlying `reqwest::Error` and indicates problems at the network layer
    /// rather than the HTTP protocol layer.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request exceeded the deadline configured with
    /// [`ClientBuilder::timeout`](crate::ClientBuilder::timeout).
    #[error("Request timed out")]
    Timeout,

    /// The server answered with a status other than `200 OK`.
    ///
    /// The response body is never read for this variant.
    #[error("Toggl server error: {status_text} ({})", .status.as_u16())]
    HttpError {
        /// The HTTP status code
        status: StatusCode,
        /// The status text, e.g. `Internal Server Error`
        status_text: String,
    },

    /// The response body could not be read or did not match the expected JSON shape.
    ///
    /// # Fields
    ///
    /// * `raw_response` - The raw response body as a string (empty if it could not be read)
    /// * `serde_error` - The decode failure detail
    /// * `status` - The HTTP status code of the response
    #[error("Failed to deserialize response (status {status}): {serde_error}")]
    DeserializationFailed {
        /// The raw response body that failed to deserialize
        raw_response: String,
        /// The serde error message
        serde_error: String,
        /// The HTTP status code
        status: StatusCode,
    },

    /// A local precondition failed before any request was sent.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration was provided to the [`ClientBuilder`](crate::ClientBuilder).
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Failed to serialize the request body.
    #[error("Failed to serialize request: {0}")]
    SerializationFailed(String),

    /// An invalid URL was provided or produced.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Returns the HTTP status code if this error has one.
    ///
    /// # Examples
    ///
    /// ```
    /// use toggl::Error;
    /// use http::StatusCode;
    ///
    /// let err = Error::HttpError {
    ///     status: StatusCode::NOT_FOUND,
    ///     status_text: "Not Found".to_string(),
    /// };
    /// assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    /// assert_eq!(Error::Timeout.status(), None);
    /// ```
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::HttpError { status, .. } => Some(*status),
            Error::DeserializationFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body if this error has one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::DeserializationFailed { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }

    /// Returns `true` if the request never produced a response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Network(_) | Error::Timeout)
    }
}

/// A specialized `Result` type for Toggl API calls.
pub type Result<T> = std::result::Result<T, Error>;
