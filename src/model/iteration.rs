use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::label::{CreateLabelParams, Label};
use super::timestamp;

fn iteration_entity_type() -> String {
    "iteration".to_string()
}

fn default_iteration_status() -> String {
    "unstarted".to_string()
}

/// An iteration as returned by the API.
///
/// `start_date`/`end_date` are accepted as bare `YYYY-MM-DD` strings on
/// input but always come back as full timestamps; the asymmetry is the
/// server's normalization, so the read side uses the timestamp type and
/// the inputs keep plain strings.
#[derive(Debug, Clone, Deserialize)]
pub struct Iteration {
    pub id: i64,
    pub name: String,
    pub global_id: String,
    #[serde(default = "default_iteration_status")]
    pub status: String,
    pub description: Option<String>,
    pub app_url: Option<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub label_ids: Vec<i64>,
    #[serde(default)]
    pub follower_ids: Vec<String>,
    #[serde(default)]
    pub group_ids: Vec<String>,
    #[serde(default)]
    pub mention_ids: Vec<String>,
    #[serde(default)]
    pub member_mention_ids: Vec<String>,
    #[serde(default)]
    pub group_mention_ids: Vec<String>,
    #[serde(default)]
    pub associated_groups: Vec<Value>,
    pub stats: Option<Value>,
    #[serde(default = "iteration_entity_type")]
    pub entity_type: String,
}

/// Body of `POST /iterations`; dates are bare `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateIterationInput {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<CreateLabelParams>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateIterationInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
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
    use crate::codec::{decode, encode};

    #[test]
    fn read_side_dates_are_full_timestamps() {
        let it: Iteration = decode(json!({
            "id": 3,
            "name": "Sprint 12",
            "global_id": "iter-3",
            "start_date": "2023-06-05T00:00:00Z",
            "end_date": "2023-06-16T00:00:00Z",
        }))
        .unwrap();
        assert_eq!(it.status, "unstarted");
        assert!(it.start_date.unwrap() < it.end_date.unwrap());
    }

    #[test]
    fn write_side_dates_stay_bare_strings() {
        let input = CreateIterationInput {
            name: "Sprint 13".to_string(),
            start_date: "2023-06-19".to_string(),
            end_date: "2023-06-30".to_string(),
            ..Default::default()
        };
        let body = encode(&input).unwrap();
        assert_eq!(body["start_date"], json!("2023-06-19"));
        assert_eq!(body.as_object().unwrap().len(), 3);
    }
}
