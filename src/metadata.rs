//! Request metadata and configuration types.

use http::{HeaderMap, HeaderName, HeaderValue, Method};
use std::collections::BTreeMap;

/// Metadata for an individual Toggl API request.
///
/// This type contains everything the pipeline needs besides the body: the
/// method, the path relative to the client's base URL, extra headers and
/// query parameters.
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// The HTTP method (GET, POST, etc.).
    pub method: Method,

    /// The request path, relative to the base URL (e.g. `projects/42`).
    pub path: String,

    /// Additional headers for this request.
    pub headers: HeaderMap,

    /// Query parameters for this request, serialized in key order.
    pub query_params: BTreeMap<String, String>,
}

impl RequestMetadata {
    /// Creates a new `RequestMetadata` with the given method and path.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            query_params: BTreeMap::new(),
        }
    }

    /// Adds a header to the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn with_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, crate::Error> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| crate::Error::ConfigurationError(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| crate::Error::ConfigurationError(format!("Invalid header value: {}", e)))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Adds a query parameter to the request.
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(key.into(), value.into());
        self
    }

    /// Returns the path with any leading `/` removed, or an error if nothing is left.
    pub(crate) fn relative_path(&self) -> Result<&str, crate::Error> {
        let path = self.path.trim_start_matches('/');
        if path.is_empty() {
            return Err(crate::Error::InvalidInput(
                "request path must not be empty".to_string(),
            ));
        }
        Ok(path)
    }
}
