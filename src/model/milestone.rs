use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

fn milestone_entity_type() -> String {
    "milestone".to_string()
}

fn default_milestone_state() -> String {
    "to do".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Milestone {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_milestone_state")]
    pub state: String,
    pub archived: Option<bool>,
    pub started: Option<bool>,
    pub completed: Option<bool>,
    pub position: Option<i64>,
    pub app_url: Option<String>,
    pub global_id: Option<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
    pub stats: Option<MilestoneStats>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub started_at_override: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub completed_at_override: Option<DateTime<Utc>>,
    #[serde(default = "milestone_entity_type")]
    pub entity_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MilestoneStats {
    pub average_cycle_time: Option<i64>,
    pub average_lead_time: Option<i64>,
    pub num_related_documents: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub color: Option<String>,
    pub archived: Option<bool>,
    pub external_id: Option<String>,
    pub global_id: Option<String>,
    #[serde(rename = "type")]
    pub category_type: Option<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default = "category_entity_type")]
    pub entity_type: String,
}

fn category_entity_type() -> String {
    "category".to_string()
}

/// Category payload, used standalone for `POST /categories` and nested
/// inside milestone and objective inputs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCategoryParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCategoryInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateMilestoneInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<CreateCategoryParams>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at_override: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at_override: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateMilestoneInput {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at_override: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at_override: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::codec::{decode, encode};

    #[test]
    fn milestone_hydrates_categories_and_stats() {
        let m: Milestone = decode(json!({
            "id": 88,
            "name": "Launch",
            "categories": [{"id": 4, "name": "growth", "type": "milestone"}],
            "stats": {"average_cycle_time": 3600, "num_related_documents": 2},
        }))
        .unwrap();
        assert_eq!(m.state, "to do");
        assert_eq!(m.categories[0].name, "growth");
        let stats = m.stats.unwrap();
        assert_eq!(stats.average_cycle_time, Some(3600));
        assert_eq!(stats.average_lead_time, None);
    }

    #[test]
    fn nested_category_inputs_strip_unset_fields() {
        let input = CreateMilestoneInput {
            name: "Launch".to_string(),
            categories: Some(vec![CreateCategoryParams {
                name: "growth".to_string(),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let body = encode(&input).unwrap();
        assert_eq!(
            body,
            json!({"name": "Launch", "categories": [{"name": "growth"}]})
        );
    }
}
