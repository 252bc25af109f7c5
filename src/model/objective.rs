use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::milestone::{Category, CreateCategoryParams};
use super::timestamp;

fn objective_entity_type() -> String {
    "objective".to_string()
}

fn default_objective_state() -> String {
    "to do".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Objective {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_objective_state")]
    pub state: String,
    pub archived: Option<bool>,
    pub started: Option<bool>,
    pub completed: Option<bool>,
    pub position: Option<i64>,
    pub app_url: Option<String>,
    pub global_id: Option<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub key_result_ids: Vec<String>,
    pub stats: Option<Value>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default = "objective_entity_type")]
    pub entity_type: String,
}

/// A measurable result attached to an objective. UUID-identified.
#[derive(Debug, Clone, Deserialize)]
pub struct KeyResult {
    pub id: String,
    pub name: String,
    pub objective_id: i64,
    #[serde(rename = "type")]
    pub result_type: Option<String>,
    pub current_observed_value: Option<Value>,
    pub current_target_value: Option<Value>,
    pub initial_observed_value: Option<Value>,
    pub progress: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateObjectiveInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<CreateCategoryParams>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateObjectiveInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<CreateCategoryParams>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct KeyResultInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_observed_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_value: Option<Value>,
}
