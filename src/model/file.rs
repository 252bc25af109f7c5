use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

fn file_entity_type() -> String {
    "file".to_string()
}

/// A file uploaded to the workspace via the multipart endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedFile {
    pub id: i64,
    pub name: String,
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub size: Option<i64>,
    pub url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub description: Option<String>,
    pub external_id: Option<String>,
    pub uploader_id: Option<String>,
    #[serde(default)]
    pub story_ids: Vec<i64>,
    #[serde(default)]
    pub mention_ids: Vec<String>,
    #[serde(default)]
    pub member_mention_ids: Vec<String>,
    #[serde(default)]
    pub group_mention_ids: Vec<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default = "file_entity_type")]
    pub entity_type: String,
}

/// An externally-hosted file (Dropbox, Drive, ...) attached by URL.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkedFile {
    pub id: i64,
    pub name: String,
    /// Source kind, e.g. `"google"`, `"dropbox"`, `"url"`.
    #[serde(rename = "type")]
    pub file_type: Option<String>,
    pub url: Option<String>,
    pub content_type: Option<String>,
    pub description: Option<String>,
    pub size: Option<i64>,
    pub thumbnail_url: Option<String>,
    pub uploader_id: Option<String>,
    #[serde(default)]
    pub story_ids: Vec<i64>,
    #[serde(default)]
    pub mention_ids: Vec<String>,
    #[serde(default)]
    pub member_mention_ids: Vec<String>,
    #[serde(default)]
    pub group_mention_ids: Vec<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default = "linked_file_entity_type")]
    pub entity_type: String,
}

fn linked_file_entity_type() -> String {
    "linked-file".to_string()
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateLinkedFileInput {
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploader_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateLinkedFileInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploader_id: Option<String>,
}

/// Body of `PUT /files/{id}` for an uploaded file's metadata.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateFileInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploader_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
