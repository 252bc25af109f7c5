use serde::{Deserialize, Serialize};
use serde_json::Value;

fn group_entity_type() -> String {
    "group".to_string()
}

/// A team ("group" on the wire). UUID-identified.
#[derive(Debug, Clone, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub mention_name: String,
    pub description: Option<String>,
    pub archived: Option<bool>,
    pub global_id: Option<String>,
    pub app_url: Option<String>,
    pub color: Option<String>,
    pub color_key: Option<String>,
    pub display_icon: Option<Value>,
    pub num_stories_started: Option<i64>,
    pub num_stories: Option<i64>,
    pub num_epics_started: Option<i64>,
    #[serde(default)]
    pub member_ids: Vec<String>,
    #[serde(default)]
    pub workflow_ids: Vec<i64>,
    #[serde(default = "group_entity_type")]
    pub entity_type: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateGroupInput {
    pub name: String,
    pub mention_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_icon_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateGroupInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mention_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_icon_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_ids: Option<Vec<i64>>,
}
