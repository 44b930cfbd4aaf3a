//! # toggl - a typed client for the Toggl REST API
//!
//! Every endpoint is an async method on [`Client`] that returns the decoded
//! record. Requests authenticate with the API token over HTTP basic auth and
//! succeed only on `200 OK`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use toggl::{Client, TimeEntryRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), toggl::Error> {
//!     let client = Client::new("my-api-token")?;
//!
//!     let workspaces = client.get_workspaces().await?;
//!     for workspace in &workspaces {
//!         for project in client.get_workspace_projects(workspace.id).await? {
//!             println!("{} / {}", workspace.name, project.name);
//!         }
//!     }
//!
//!     let entry = TimeEntryRequest::new(123456789, "writing docs", "my-app").with_tags(["docs"]);
//!     let running = client.start_time_entry(&entry).await?;
//!     client.stop_time_entry(running.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Transport failures, unexpected status codes and undecodable bodies are
//! separate [`Error`] variants:
//!
//! ```no_run
//! use toggl::{Client, Error};
//!
//! # async fn example() -> Result<(), Error> {
//! # let client = Client::new("my-api-token")?;
//! match client.get_time_entry(1).await {
//!     Ok(entry) => println!("{}", entry.description),
//!     Err(Error::HttpError { status, .. }) if status.as_u16() == 404 => {
//!         eprintln!("no such time entry");
//!     }
//!     Err(e) if e.is_transport() => eprintln!("could not reach Toggl: {}", e),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Cancellation
//!
//! Dropping a pending call aborts the request, so the usual tokio tools
//! apply:
//!
//! ```no_run
//! # async fn example(client: toggl::Client) {
//! use std::time::Duration;
//!
//! match tokio::time::timeout(Duration::from_secs(5), client.get_workspaces()).await {
//!     Ok(result) => println!("{:?}", result.map(|w| w.len())),
//!     Err(_) => eprintln!("gave up waiting"),
//! }
//! # }
//! ```

mod client;
mod envelope;
mod error;
pub mod metadata;
mod resources;
mod response;
pub mod timestamp;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL};
pub use envelope::Envelope;
pub use error::{Error, Result};
pub use resources::{
    Project, ProjectRequest, Tag, TagAction, TimeEntry, TimeEntryRequest, User, Workspace,
    WorkspaceUser,
};
pub use response::Response;
