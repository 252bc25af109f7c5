use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::timestamp;

fn workflow_entity_type() -> String {
    "workflow".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Workflow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub default_state_id: Option<i64>,
    pub team_id: Option<i64>,
    pub auto_assign_owner: Option<bool>,
    #[serde(default)]
    pub states: Vec<WorkflowState>,
    #[serde(default)]
    pub project_ids: Vec<i64>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default = "workflow_entity_type")]
    pub entity_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowState {
    pub id: i64,
    pub name: String,
    /// One of `unstarted`, `started`, `done`.
    #[serde(rename = "type")]
    pub state_type: String,
    pub description: Option<String>,
    pub verb: Option<String>,
    pub position: Option<i64>,
    pub num_stories: Option<i64>,
    pub num_story_templates: Option<i64>,
    pub global_id: Option<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default = "workflow_state_entity_type")]
    pub entity_type: String,
}

fn workflow_state_entity_type() -> String {
    "workflow-state".to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::codec::decode;

    #[test]
    fn workflow_hydrates_states_in_order() {
        let wf: Workflow = decode(json!({
            "id": 2,
            "name": "Engineering",
            "default_state_id": 500000,
            "states": [
                {"id": 500000, "name": "Unstarted", "type": "unstarted", "verb": "start",
                 "num_stories": 0, "position": 0,
                 "created_at": "2023-01-01T00:00:00Z", "updated_at": "2023-01-01T00:00:00Z"},
                {"id": 500001, "name": "Done", "type": "done"},
            ],
        }))
        .unwrap();
        assert_eq!(wf.states.len(), 2);
        assert_eq!(wf.states[0].state_type, "unstarted");
        assert_eq!(wf.states[1].name, "Done");
        assert_eq!(wf.states[1].verb, None);
    }
}
