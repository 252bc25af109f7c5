use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use super::timestamp;

fn member_entity_type() -> String {
    "member".to_string()
}

/// A workspace member. Identified by UUID, not a numeric counter.
#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    pub id: String,
    pub profile: Profile,
    pub role: String,
    pub disabled: Option<bool>,
    pub state: Option<String>,
    pub global_id: Option<String>,
    pub mention_name: Option<String>,
    #[serde(default)]
    pub group_ids: Vec<String>,
    #[serde(default)]
    pub created_without_invite: Option<bool>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default = "member_entity_type")]
    pub entity_type: String,
}

/// Embedded in [`Member`]; never fetched independently.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub id: String,
    pub mention_name: String,
    pub name: Option<String>,
    pub email_address: Option<String>,
    #[serde(default)]
    pub is_owner: bool,
    #[serde(default)]
    pub deactivated: bool,
    pub two_factor_auth_activated: Option<bool>,
    pub gravatar_hash: Option<String>,
    pub display_icon: Option<Value>,
    #[serde(default = "profile_entity_type")]
    pub entity_type: String,
}

fn profile_entity_type() -> String {
    "profile".to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::codec::decode;

    #[test]
    fn member_hydrates_embedded_profile() {
        let member: Member = decode(json!({
            "id": "12345678-1234-1234-1234-123456789012",
            "role": "member",
            "disabled": false,
            "state": "full",
            "group_ids": ["87654321-4321-4321-4321-210987654321"],
            "created_at": "2023-01-01T00:00:00Z",
            "updated_at": "2023-01-02T00:00:00Z",
            "profile": {
                "id": "12345678-1234-1234-1234-123456789012",
                "mention_name": "testuser",
                "name": "Test User",
                "email_address": "test@example.com",
                "is_owner": false,
                "deactivated": false,
                "two_factor_auth_activated": true,
                "gravatar_hash": "hash123",
                "display_icon": null,
            },
        }))
        .unwrap();
        assert_eq!(member.profile.mention_name, "testuser");
        assert_eq!(member.profile.name.as_deref(), Some("Test User"));
        assert!(!member.profile.is_owner);
        assert_eq!(member.group_ids.len(), 1);
    }

    #[test]
    fn member_without_profile_is_a_schema_violation() {
        let err = decode::<Member>(json!({
            "id": "12345678-1234-1234-1234-123456789012",
            "role": "member",
        }))
        .unwrap_err();
        assert!(err.to_string().contains("`profile`"));
    }
}
