use super::{DeletedIds, User};
use crate::{Client, Envelope, Result};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A Toggl project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: u64,
    /// Owning workspace id.
    pub wid: u64,
    pub name: String,
    pub billable: bool,
    pub is_private: bool,
    pub active: bool,
    pub template: bool,
    /// Last update time.
    pub at: Option<DateTime<FixedOffset>>,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub color: String,
    pub auto_estimates: bool,
    pub actual_hours: i64,
    pub hex_color: String,
}

/// Fields sent when creating or updating a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectRequest {
    pub name: String,
    pub wid: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<u64>,
    pub is_private: bool,
    /// Client id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid: Option<u64>,
}

impl ProjectRequest {
    pub fn new(name: impl Into<String>, wid: u64) -> Self {
        Self {
            name: name.into(),
            wid,
            ..Self::default()
        }
    }
}

#[derive(Serialize)]
struct ProjectBody<'a> {
    project: &'a ProjectRequest,
}

impl Client {
    /// Fetches a single project.
    pub async fn get_project(&self, id: u64) -> Result<Project> {
        let response = self
            .get::<Envelope<Project>>(format!("projects/{}", id))
            .await?;
        Ok(response.into_data().into_inner())
    }

    /// Creates a project and returns it with its server-assigned id.
    pub async fn create_project(&self, project: &ProjectRequest) -> Result<Project> {
        let response = self
            .post::<_, Envelope<Project>>("projects", &ProjectBody { project })
            .await?;
        Ok(response.into_data().into_inner())
    }

    /// Replaces the fields of an existing project.
    pub async fn update_project(&self, id: u64, project: &ProjectRequest) -> Result<Project> {
        let response = self
            .put::<_, Envelope<Project>>(format!("projects/{}", id), &ProjectBody { project })
            .await?;
        Ok(response.into_data().into_inner())
    }

    /// Deletes a project.
    pub async fn delete_project(&self, id: u64) -> Result<()> {
        self.delete::<DeletedIds>(format!("projects/{}", id)).await?;
        Ok(())
    }

    /// Lists the users assigned to a project.
    pub async fn get_project_users(&self, id: u64) -> Result<Vec<User>> {
        let response = self
            .get::<Vec<User>>(format!("projects/{}/project_users", id))
            .await?;
        Ok(response.into_data())
    }
}
