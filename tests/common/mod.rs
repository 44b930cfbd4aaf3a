//! Fixtures shared by the integration tests.
#![allow(dead_code)]

use chrono::{DateTime, FixedOffset};
use toggl::{Client, Project, Tag, TimeEntry, User, Workspace, WorkspaceUser};
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";

/// A client pointed at `{server}/api/v8/`.
pub fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .api_token(TOKEN)
        .base_url(format!("{}/api/v8/", server.uri()))
        .unwrap()
        .build()
        .unwrap()
}

pub fn at(timestamp: &str) -> Option<DateTime<FixedOffset>> {
    Some(DateTime::parse_from_rfc3339(timestamp).unwrap())
}

pub fn test_project() -> Project {
    Project {
        id: 111358164,
        wid: 2108335,
        name: "test project".to_string(),
        billable: false,
        is_private: true,
        active: true,
        template: false,
        at: at("2018-04-12T07:49:15+00:00"),
        created_at: at("2018-04-12T07:49:15+00:00"),
        color: "3".to_string(),
        auto_estimates: false,
        actual_hours: 314,
        hex_color: "#fb8b14".to_string(),
    }
}

pub fn test_user() -> User {
    User {
        id: 56651129,
        pid: 111358164,
        uid: 2941647,
        wid: 2108335,
        manager: true,
        rate: 0.0,
    }
}

pub fn test_tag() -> Tag {
    Tag {
        id: 5740596,
        wid: 3278506,
        name: "fun".to_string(),
    }
}

pub fn test_time_entry() -> TimeEntry {
    TimeEntry {
        id: 1111111111,
        guid: "31424791f57b72c9cbbd80ed0f85790a".to_string(),
        wid: 3278506,
        pid: 123456789,
        description: "toggl test".to_string(),
        billable: false,
        start: at("2018-04-12T16:49:00+09:00"),
        stop: None,
        duration: 30,
        duronly: false,
        at: at("2018-04-12T16:49:30+09:00"),
        uid: 2941647,
        tags: vec!["fun".to_string()],
    }
}

pub fn test_workspace() -> Workspace {
    Workspace {
        id: 3278506,
        name: "Home".to_string(),
        premium: false,
        admin: true,
        default_hourly_rate: 0.0,
        default_currency: "USD".to_string(),
        only_admins_may_create_projects: false,
        only_admins_see_billable_rates: false,
        rounding: 1,
        rounding_minutes: 0,
        at: at("2018-04-12T16:49:15+09:00"),
        logo_url: String::new(),
    }
}

pub fn test_workspace_user() -> WorkspaceUser {
    WorkspaceUser {
        id: 4808871,
        uid: 2941647,
        wid: 3278506,
        admin: true,
        owner: true,
        active: true,
        email: "test@a.a".to_string(),
        timezone: "Asia/Tokyo".to_string(),
        inactive: false,
        at: at("2018-04-12T16:49:00+09:00"),
        name: "saso".to_string(),
        group_ids: vec![],
        rate: 0.0,
        labour_cost: 0.0,
        invite_url: String::new(),
        invitation_code: String::new(),
        avatar_file_name: String::new(),
    }
}
