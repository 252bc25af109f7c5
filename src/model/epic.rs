use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::label::{CreateLabelParams, Label};
use super::timestamp;

fn epic_entity_type() -> String {
    "epic".to_string()
}

fn default_epic_state() -> String {
    "to do".to_string()
}

/// An epic as returned by `GET /epics/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Epic {
    pub id: i64,
    pub global_id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_epic_state")]
    pub state: String,
    pub archived: Option<bool>,
    pub started: Option<bool>,
    pub completed: Option<bool>,
    pub group_id: Option<String>,
    pub requested_by_id: Option<String>,
    pub milestone_id: Option<i64>,
    pub epic_state_id: Option<i64>,
    pub external_id: Option<String>,
    pub position: Option<i64>,
    pub app_url: Option<String>,
    pub productboard_id: Option<String>,
    pub productboard_plugin_id: Option<String>,
    pub productboard_url: Option<String>,
    pub productboard_name: Option<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub planned_start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub started_at_override: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub completed_at_override: Option<DateTime<Utc>>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub label_ids: Vec<i64>,
    #[serde(default)]
    pub owner_ids: Vec<String>,
    #[serde(default)]
    pub follower_ids: Vec<String>,
    #[serde(default)]
    pub group_ids: Vec<String>,
    #[serde(default)]
    pub objective_ids: Vec<i64>,
    #[serde(default)]
    pub project_ids: Vec<i64>,
    #[serde(default)]
    pub mention_ids: Vec<String>,
    #[serde(default)]
    pub member_mention_ids: Vec<String>,
    #[serde(default)]
    pub group_mention_ids: Vec<String>,
    #[serde(default)]
    pub associated_groups: Vec<Value>,
    pub stories_without_projects: Option<Value>,
    pub stats: Option<Value>,
    #[serde(default = "epic_entity_type")]
    pub entity_type: String,
}

/// Reduced epic projection returned by list and search contexts.
#[derive(Debug, Clone, Deserialize)]
pub struct EpicSlim {
    pub id: i64,
    pub name: String,
    #[serde(default = "default_epic_state")]
    pub state: String,
    pub archived: Option<bool>,
    pub started: Option<bool>,
    pub completed: Option<bool>,
    pub group_id: Option<String>,
    pub requested_by_id: Option<String>,
    pub milestone_id: Option<i64>,
    pub epic_state_id: Option<i64>,
    pub position: Option<i64>,
    pub app_url: Option<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub label_ids: Vec<i64>,
    #[serde(default)]
    pub owner_ids: Vec<String>,
    #[serde(default)]
    pub follower_ids: Vec<String>,
    #[serde(default)]
    pub group_ids: Vec<String>,
    #[serde(default)]
    pub objective_ids: Vec<i64>,
    #[serde(default)]
    pub project_ids: Vec<i64>,
    pub stats: Option<Value>,
    #[serde(default = "epic_entity_type")]
    pub entity_type: String,
}

/// The workspace-wide set of epic states.
#[derive(Debug, Clone, Deserialize)]
pub struct EpicWorkflow {
    pub id: i64,
    pub default_epic_state_id: i64,
    #[serde(default)]
    pub epic_states: Vec<EpicState>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default = "epic_workflow_entity_type")]
    pub entity_type: String,
}

fn epic_workflow_entity_type() -> String {
    "epic-workflow".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct EpicState {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub state_type: String,
    pub color: Option<String>,
    pub description: Option<String>,
    pub position: Option<i64>,
    pub global_id: Option<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default = "epic_state_entity_type")]
    pub entity_type: String,
}

fn epic_state_entity_type() -> String {
    "epic-state".to_string()
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateEpicInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epic_state_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_by_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<CreateLabelParams>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateEpicInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epic_state_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<CreateLabelParams>>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::codec::decode;

    #[test]
    fn epic_state_defaults_to_to_do() {
        let epic: Epic = decode(json!({
            "id": 5,
            "global_id": "epic-5",
            "name": "Q3 platform work",
        }))
        .unwrap();
        assert_eq!(epic.state, "to do");
        assert_eq!(epic.entity_type, "epic");
        assert!(epic.objective_ids.is_empty());
    }

    #[test]
    fn epic_workflow_hydrates_states() {
        let wf: EpicWorkflow = decode(json!({
            "id": 1,
            "default_epic_state_id": 100,
            "epic_states": [
                {"id": 100, "name": "to do", "type": "unstarted"},
                {"id": 101, "name": "in progress", "type": "started"},
            ],
        }))
        .unwrap();
        assert_eq!(wf.entity_type, "epic-workflow");
        assert_eq!(wf.epic_states.len(), 2);
        assert_eq!(wf.epic_states[1].state_type, "started");
    }
}
