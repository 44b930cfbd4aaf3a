//! Toggl resources: record types and the endpoints that return them.
//!
//! Each submodule adds its endpoints to [`Client`](crate::Client) as inherent
//! methods. All of them are thin call sites over [`Client::call`](crate::Client::call).

mod project;
mod tag;
mod time_entry;
mod user;
mod workspace;

pub use project::{Project, ProjectRequest};
pub use tag::Tag;
pub use time_entry::{TagAction, TimeEntry, TimeEntryRequest};
pub use user::User;
pub use workspace::{Workspace, WorkspaceUser};

/// Delete endpoints answer with the ids they removed, or with `null`.
type DeletedIds = Option<Vec<u64>>;
