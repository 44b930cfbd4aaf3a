use super::DeletedIds;
use crate::{metadata::RequestMetadata, timestamp, Client, Envelope, Error, Result};
use chrono::{DateTime, FixedOffset, TimeZone};
use http::Method;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A tracked time entry.
///
/// `duration` is in seconds; a running entry has a negative duration and no `stop`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeEntry {
    pub id: u64,
    pub guid: String,
    pub wid: u64,
    pub pid: u64,
    pub description: String,
    pub billable: bool,
    pub start: Option<DateTime<FixedOffset>>,
    pub stop: Option<DateTime<FixedOffset>>,
    pub duration: i64,
    pub duronly: bool,
    pub at: Option<DateTime<FixedOffset>>,
    pub uid: u64,
    pub tags: Vec<String>,
}

/// Fields sent when starting, creating or updating a time entry.
///
/// # Examples
///
/// ```
/// use toggl::TimeEntryRequest;
///
/// let request = TimeEntryRequest::new(123456789, "toggl test", "my-app")
///     .with_tags(["fun"])
///     .with_duration(30);
/// assert_eq!(request.tags, vec!["fun".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeEntryRequest {
    pub description: String,
    pub tags: Vec<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize_opt"
    )]
    pub start: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    /// Project id.
    pub pid: u64,
    /// Name of the application creating the entry. Required by Toggl.
    pub created_with: String,
}

impl TimeEntryRequest {
    pub fn new(pid: u64, description: impl Into<String>, created_with: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            pid,
            created_with: created_with.into(),
            ..Self::default()
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_start(mut self, start: DateTime<FixedOffset>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_duration(mut self, seconds: i64) -> Self {
        self.duration = Some(seconds);
        self
    }
}

/// What a bulk tag update does with the given tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagAction {
    Add,
    Remove,
}

#[derive(Serialize)]
struct TimeEntryBody<T> {
    time_entry: T,
}

#[derive(Serialize)]
struct BulkTagUpdate<'a> {
    tags: Vec<&'a str>,
    tag_action: TagAction,
}

/// `time_entries/{id1,id2,...}`; at least one id is required.
fn bulk_path(ids: &[u64]) -> Result<String> {
    if ids.is_empty() {
        return Err(Error::InvalidInput(
            "bulk tag update needs at least one time entry id".to_string(),
        ));
    }

    let ids = ids
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",");
    Ok(format!("time_entries/{}", ids))
}

fn time_range<Tz>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> RequestMetadata
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    RequestMetadata::new(Method::GET, "time_entries")
        .with_query_param("start_date", timestamp::format(start))
        .with_query_param("end_date", timestamp::format(end))
}

impl Client {
    /// Fetches the currently running time entry, or `None` if the timer is stopped.
    pub async fn get_running_time_entry(&self) -> Result<Option<TimeEntry>> {
        let response = self
            .get::<Envelope<Option<TimeEntry>>>("time_entries/current")
            .await?;
        Ok(response.into_data().into_inner())
    }

    /// Lists time entries that started between `start` and `end`.
    ///
    /// Both bounds are sent in the offset they carry, e.g.
    /// `2018-04-12T16:49:00+09:00`.
    pub async fn get_time_entries<Tz>(
        &self,
        start: &DateTime<Tz>,
        end: &DateTime<Tz>,
    ) -> Result<Vec<TimeEntry>>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let response = self
            .call::<(), Vec<TimeEntry>>(time_range(start, end), None)
            .await?;
        Ok(response.into_data())
    }

    /// Fetches a single time entry.
    pub async fn get_time_entry(&self, id: u64) -> Result<TimeEntry> {
        let response = self
            .get::<Envelope<TimeEntry>>(format!("time_entries/{}", id))
            .await?;
        Ok(response.into_data().into_inner())
    }

    /// Starts a new running time entry.
    pub async fn start_time_entry(&self, entry: &TimeEntryRequest) -> Result<TimeEntry> {
        let response = self
            .post::<_, Envelope<TimeEntry>>(
                "time_entries/start",
                &TimeEntryBody { time_entry: entry },
            )
            .await?;
        Ok(response.into_data().into_inner())
    }

    /// Stops a running time entry and returns it with its final duration.
    pub async fn stop_time_entry(&self, id: u64) -> Result<TimeEntry> {
        let metadata = RequestMetadata::new(Method::PUT, format!("time_entries/{}/stop", id));
        let response = self.call::<(), Envelope<TimeEntry>>(metadata, None).await?;
        Ok(response.into_data().into_inner())
    }

    /// Creates a completed time entry.
    pub async fn create_time_entry(&self, entry: &TimeEntryRequest) -> Result<TimeEntry> {
        let response = self
            .post::<_, Envelope<TimeEntry>>(
                "time_entries",
                &TimeEntryBody { time_entry: entry },
            )
            .await?;
        Ok(response.into_data().into_inner())
    }

    /// Replaces the fields of an existing time entry.
    pub async fn update_time_entry(&self, id: u64, entry: &TimeEntryRequest) -> Result<TimeEntry> {
        let response = self
            .put::<_, Envelope<TimeEntry>>(
                format!("time_entries/{}", id),
                &TimeEntryBody { time_entry: entry },
            )
            .await?;
        Ok(response.into_data().into_inner())
    }

    /// Deletes a time entry.
    pub async fn delete_time_entry(&self, id: u64) -> Result<()> {
        self.delete::<DeletedIds>(format!("time_entries/{}", id)).await?;
        Ok(())
    }

    /// Adds or removes tags on several time entries in one request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] without sending anything if `ids` is empty.
    pub async fn bulk_update_time_entries_tags<S>(
        &self,
        ids: &[u64],
        tags: &[S],
        action: TagAction,
    ) -> Result<Vec<TimeEntry>>
    where
        S: AsRef<str>,
    {
        let path = bulk_path(ids)?;
        let body = TimeEntryBody {
            time_entry: BulkTagUpdate {
                tags: tags.iter().map(|tag| tag.as_ref()).collect(),
                tag_action: action,
            },
        };

        let response = self.put::<_, Envelope<Vec<TimeEntry>>>(path, &body).await?;
        Ok(response.into_data().into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_path_joins_ids() {
        assert_eq!(
            bulk_path(&[111, 222, 333]).unwrap(),
            "time_entries/111,222,333"
        );
        assert_eq!(bulk_path(&[111]).unwrap(), "time_entries/111");
    }

    #[test]
    fn test_bulk_path_rejects_empty_ids() {
        assert!(matches!(bulk_path(&[]), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_time_range_query_keeps_offset() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let start = tokyo.with_ymd_and_hms(2018, 4, 1, 0, 0, 0).unwrap();
        let end = tokyo.with_ymd_and_hms(2018, 4, 30, 23, 59, 59).unwrap();

        let metadata = time_range(&start, &end);

        assert_eq!(metadata.path, "time_entries");
        assert_eq!(
            metadata.query_params.get("start_date").map(String::as_str),
            Some("2018-04-01T00:00:00+09:00")
        );
        assert_eq!(
            metadata.query_params.get("end_date").map(String::as_str),
            Some("2018-04-30T23:59:59+09:00")
        );
    }

    #[test]
    fn test_request_omits_unset_start_and_duration() {
        let request = TimeEntryRequest::new(123456789, "toggl test", "toggl-rs").with_tags(["fun"]);
        let body = serde_json::to_value(TimeEntryBody {
            time_entry: &request,
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "time_entry": {
                    "description": "toggl test",
                    "tags": ["fun"],
                    "pid": 123456789,
                    "created_with": "toggl-rs",
                }
            })
        );
    }

    #[test]
    fn test_request_formats_start() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let request = TimeEntryRequest::new(1, "", "toggl-rs")
            .with_start(tokyo.with_ymd_and_hms(2018, 4, 12, 16, 49, 0).unwrap())
            .with_duration(30);

        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["start"], "2018-04-12T16:49:00+09:00");
        assert_eq!(body["duration"], 30);
    }

    #[test]
    fn test_tag_action_keywords() {
        assert_eq!(serde_json::to_value(TagAction::Add).unwrap(), "add");
        assert_eq!(serde_json::to_value(TagAction::Remove).unwrap(), "remove");
    }

    #[test]
    fn test_running_entry_has_no_stop() {
        let entry: TimeEntry = serde_json::from_str(
            r#"{"id":1,"wid":2,"start":"2018-04-12T07:49:00+00:00","duration":-1523519340}"#,
        )
        .unwrap();

        assert!(entry.start.is_some());
        assert_eq!(entry.stop, None);
        assert!(entry.duration < 0);
        assert!(entry.tags.is_empty());
    }
}
