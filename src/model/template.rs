use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::timestamp;

fn template_entity_type() -> String {
    "entity-template".to_string()
}

/// A story template. UUID-identified. `story_contents` mirrors the
/// story shape loosely, so it stays a raw document.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityTemplate {
    pub id: String,
    pub name: String,
    pub author_id: Option<String>,
    pub story_contents: Option<Value>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub last_used_at: Option<DateTime<Utc>>,
    #[serde(default = "template_entity_type")]
    pub entity_type: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateEntityTemplateInput {
    pub name: String,
    pub story_contents: Value,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateEntityTemplateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_contents: Option<Value>,
}
