use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

fn health_entity_type() -> String {
    "health".to_string()
}

/// A health status entry on an epic. UUID-identified.
#[derive(Debug, Clone, Deserialize)]
pub struct Health {
    pub id: String,
    /// One of `onTrack`, `atRisk`, `offTrack`.
    pub status: String,
    pub text: Option<String>,
    pub author_id: Option<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default = "health_entity_type")]
    pub entity_type: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateHealthInput {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateHealthInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
