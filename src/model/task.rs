use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

fn task_entity_type() -> String {
    "task".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    pub id: i64,
    pub description: String,
    #[serde(default)]
    pub complete: bool,
    pub story_id: Option<i64>,
    pub position: Option<i64>,
    pub external_id: Option<String>,
    pub global_id: Option<String>,
    #[serde(default)]
    pub owner_ids: Vec<String>,
    #[serde(default)]
    pub mention_ids: Vec<String>,
    #[serde(default)]
    pub member_mention_ids: Vec<String>,
    #[serde(default)]
    pub group_mention_ids: Vec<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default = "task_entity_type")]
    pub entity_type: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTaskInput {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTaskInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::codec::encode;

    #[test]
    fn explicit_false_survives_encoding() {
        let input = UpdateTaskInput {
            complete: Some(false),
            ..Default::default()
        };
        let body = encode(&input).unwrap();
        assert_eq!(body, json!({"complete": false}));
    }

    #[test]
    fn unset_complete_is_omitted_not_nulled() {
        let input = CreateTaskInput {
            description: "ship it".to_string(),
            ..Default::default()
        };
        let body = encode(&input).unwrap();
        assert_eq!(body, json!({"description": "ship it"}));
    }
}
