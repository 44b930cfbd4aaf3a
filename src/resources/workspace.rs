use super::{Project, Tag};
use crate::{Client, Result};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A workspace the token owner belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workspace {
    pub id: u64,
    pub name: String,
    pub premium: bool,
    pub admin: bool,
    pub default_hourly_rate: f64,
    pub default_currency: String,
    pub only_admins_may_create_projects: bool,
    pub only_admins_see_billable_rates: bool,
    pub rounding: i64,
    pub rounding_minutes: i64,
    pub at: Option<DateTime<FixedOffset>>,
    pub logo_url: String,
}

/// Links a user to a workspace. Not the same record as [`User`](super::User).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceUser {
    pub id: u64,
    pub uid: u64,
    pub wid: u64,
    pub admin: bool,
    pub owner: bool,
    pub active: bool,
    pub email: String,
    pub timezone: String,
    pub inactive: bool,
    pub at: Option<DateTime<FixedOffset>>,
    pub name: String,
    pub group_ids: Vec<u64>,
    pub rate: f64,
    pub labour_cost: f64,
    pub invite_url: String,
    pub invitation_code: String,
    pub avatar_file_name: String,
}

impl Client {
    /// Lists every workspace of the token owner.
    pub async fn get_workspaces(&self) -> Result<Vec<Workspace>> {
        let response = self.get::<Vec<Workspace>>("workspaces").await?;
        Ok(response.into_data())
    }

    /// Lists the active projects of a workspace.
    pub async fn get_workspace_projects(&self, id: u64) -> Result<Vec<Project>> {
        let response = self
            .get::<Vec<Project>>(format!("workspaces/{}/projects", id))
            .await?;
        Ok(response.into_data())
    }

    /// Lists the tags defined in a workspace.
    pub async fn get_workspace_tags(&self, id: u64) -> Result<Vec<Tag>> {
        let response = self
            .get::<Vec<Tag>>(format!("workspaces/{}/tags", id))
            .await?;
        Ok(response.into_data())
    }

    /// Lists the workspace memberships of a workspace.
    pub async fn get_workspace_users(&self, id: u64) -> Result<Vec<WorkspaceUser>> {
        let response = self
            .get::<Vec<WorkspaceUser>>(format!("workspaces/{}/workspace_users", id))
            .await?;
        Ok(response.into_data())
    }
}
