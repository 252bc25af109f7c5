use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

fn custom_field_entity_type() -> String {
    "custom-field".to_string()
}

/// A workspace custom field definition. UUID-identified.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomField {
    pub id: String,
    pub name: String,
    pub field_type: Option<String>,
    pub description: Option<String>,
    pub canonical_name: Option<String>,
    pub icon_set_identifier: Option<String>,
    pub enabled: Option<bool>,
    pub position: Option<i64>,
    pub fixed_position: Option<bool>,
    #[serde(default)]
    pub values: Vec<CustomFieldEnumValue>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default = "custom_field_entity_type")]
    pub entity_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomFieldEnumValue {
    pub id: String,
    pub value: String,
    pub position: Option<i64>,
    pub color_key: Option<String>,
    pub enabled: Option<bool>,
    #[serde(default = "enum_value_entity_type")]
    pub entity_type: String,
}

fn enum_value_entity_type() -> String {
    "custom-field-enum-value".to_string()
}

/// A selected custom-field value attached to a story.
#[derive(Debug, Clone, Deserialize)]
pub struct StoryCustomField {
    pub field_id: String,
    pub value: Option<String>,
    pub value_id: Option<String>,
}

/// Nested inside story inputs to set a custom-field value.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomFieldValueInput {
    pub field_id: String,
    pub value_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCustomFieldInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_set_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<UpdateCustomFieldEnumValueInput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_id: Option<String>,
}

/// Nested inside [`UpdateCustomFieldInput`]; omit `id` to create a new
/// enum value, set it to modify an existing one.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCustomFieldEnumValueInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::codec::{decode, encode};

    #[test]
    fn custom_field_hydrates_enum_values() {
        let field: CustomField = decode(json!({
            "id": "abcd1234-0000-0000-0000-000000000000",
            "name": "Priority",
            "field_type": "enum",
            "enabled": true,
            "values": [
                {"id": "v1", "value": "High", "position": 0, "color_key": "red"},
                {"id": "v2", "value": "Low", "position": 1},
            ],
        }))
        .unwrap();
        assert_eq!(field.entity_type, "custom-field");
        assert_eq!(field.values[0].value, "High");
        assert_eq!(field.values[1].color_key, None);
    }

    #[test]
    fn enum_value_update_strips_unset_recursively() {
        let input = UpdateCustomFieldInput {
            enabled: Some(false),
            values: Some(vec![
                UpdateCustomFieldEnumValueInput {
                    id: Some("v1".to_string()),
                    enabled: Some(false),
                    ..Default::default()
                },
                UpdateCustomFieldEnumValueInput {
                    value: Some("Medium".to_string()),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        };
        let body = encode(&input).unwrap();
        assert_eq!(
            body,
            json!({
                "enabled": false,
                "values": [
                    {"id": "v1", "enabled": false},
                    {"value": "Medium"},
                ],
            })
        );
    }
}
