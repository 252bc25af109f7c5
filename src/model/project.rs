use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::timestamp;

fn project_entity_type() -> String {
    "project".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub abbreviation: Option<String>,
    pub color: Option<String>,
    pub archived: Option<bool>,
    pub app_url: Option<String>,
    pub external_id: Option<String>,
    pub global_id: Option<String>,
    pub team_id: Option<i64>,
    pub workflow_id: Option<i64>,
    pub iteration_length: Option<i64>,
    pub days_to_thermometer: Option<i64>,
    pub show_thermometer: Option<bool>,
    #[serde(default)]
    pub follower_ids: Vec<String>,
    pub stats: Option<Value>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default = "project_entity_type")]
    pub entity_type: String,
}

/// A VCS repository linked to the workspace. Read-only resource.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub id: i64,
    pub name: Option<String>,
    pub full_name: Option<String>,
    /// Provider kind, e.g. `"github"`.
    #[serde(rename = "type")]
    pub repo_type: Option<String>,
    pub url: Option<String>,
    pub external_id: Option<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default = "repository_entity_type")]
    pub entity_type: String,
}

fn repository_entity_type() -> String {
    "repository".to_string()
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateProjectInput {
    pub name: String,
    pub team_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProjectInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_to_thermometer: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_thermometer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_ids: Option<Vec<String>>,
}
