//! The `{"data": ...}` wrapper Toggl puts around single-entity responses.

use serde::{Deserialize, Serialize};

/// A response envelope holding the actual payload under `data`.
///
/// Resource methods decode into `Envelope<T>` and hand back the inner value;
/// it is public so [`Client::call`](crate::Client::call) can be used for
/// endpoints this crate does not wrap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The wrapped record or list.
    pub data: T,
}

impl<T> Envelope<T> {
    /// Unwraps the payload.
    pub fn into_inner(self) -> T {
        self.data
    }
}
