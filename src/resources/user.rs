use serde::{Deserialize, Serialize};

/// A user's membership in a project, as listed by `projects/{id}/project_users`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: u64,
    pub pid: u64,
    pub uid: u64,
    pub wid: u64,
    pub manager: bool,
    pub rate: f64,
}
