use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

fn doc_entity_type() -> String {
    "doc".to_string()
}

/// Full document projection from `GET /documents/{id}`. UUID-identified.
#[derive(Debug, Clone, Deserialize)]
pub struct Doc {
    pub id: String,
    pub title: Option<String>,
    /// Markdown or HTML depending on the requested content format.
    pub content: Option<String>,
    pub app_url: Option<String>,
    pub archived: Option<bool>,
    pub created_by_id: Option<String>,
    #[serde(default)]
    pub follower_ids: Vec<String>,
    #[serde(default)]
    pub epic_ids: Vec<i64>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default = "doc_entity_type")]
    pub entity_type: String,
}

/// Reduced projection returned by `GET /documents` — no content body.
#[derive(Debug, Clone, Deserialize)]
pub struct DocSlim {
    pub id: String,
    pub title: Option<String>,
    pub app_url: Option<String>,
    pub archived: Option<bool>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default = "doc_entity_type")]
    pub entity_type: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateDocInput {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateDocInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}
