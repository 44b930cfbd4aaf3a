//! Timestamp wire format used in query strings and request bodies.

use chrono::{DateTime, TimeZone};
use serde::Serializer;
use std::fmt::Display;

/// `YYYY-MM-DDTHH:MM:SS+HH:MM`, no fractional seconds.
pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Formats `instant` in the offset it carries.
pub fn format<Tz>(instant: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant.format(FORMAT).to_string()
}

pub(crate) fn serialize_opt<Tz, S>(
    instant: &Option<DateTime<Tz>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    Tz: TimeZone,
    Tz::Offset: Display,
    S: Serializer,
{
    match instant {
        Some(instant) => serializer.serialize_str(&format(instant)),
        None => serializer.serialize_none(),
    }
}
