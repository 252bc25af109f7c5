use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::timestamp;

fn label_entity_type() -> String {
    "label".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub id: i64,
    pub external_id: Option<String>,
    pub name: String,
    pub archived: bool,
    pub color: Option<String>,
    pub description: Option<String>,
    pub app_url: Option<String>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub updated_at: DateTime<Utc>,
    pub stats: Option<Value>,
    #[serde(default = "label_entity_type")]
    pub entity_type: String,
}

/// Label payload, used standalone for `POST /labels` and nested inside
/// story and epic inputs (the server upserts by name).
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateLabelParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateLabelInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::codec::{decode, encode};

    fn label_doc() -> Value {
        json!({
            "id": 17,
            "external_id": null,
            "name": "infra",
            "archived": false,
            "color": "#123456",
            "created_at": "2023-03-01T08:00:00Z",
            "updated_at": "2023-03-02T08:00:00+00:00",
        })
    }

    #[test]
    fn label_timestamps_are_required() {
        let mut doc = label_doc();
        doc.as_object_mut().unwrap().remove("created_at");
        let err = decode::<Label>(doc).unwrap_err();
        assert!(err.to_string().contains("`created_at`"));
    }

    #[test]
    fn present_null_decodes_like_absent() {
        let label: Label = decode(label_doc()).unwrap();
        assert_eq!(label.external_id, None);
        assert_eq!(label.description, None);
    }

    #[test]
    fn create_label_minimal_payload() {
        let params = CreateLabelParams {
            name: "urgent".to_string(),
            ..Default::default()
        };
        let body = encode(&params).unwrap();
        assert_eq!(body, json!({"name": "urgent"}));
    }
}
