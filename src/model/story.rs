use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::comment::StoryComment;
use super::custom_field::{CustomFieldValueInput, StoryCustomField};
use super::file::{LinkedFile, UploadedFile};
use super::label::{CreateLabelParams, Label};
use super::task::{CreateTaskInput, Task};
use super::timestamp;

fn story_entity_type() -> String {
    "story".to_string()
}

fn default_story_type() -> String {
    "feature".to_string()
}

/// A story as returned by `GET /stories/{id}` and story-creating
/// endpoints — the full projection, with comments, tasks and links
/// hydrated into their own record types.
#[derive(Debug, Clone, Deserialize)]
pub struct Story {
    pub name: String,
    pub id: Option<i64>,
    pub global_id: Option<String>,
    pub external_id: Option<String>,
    pub description: Option<String>,
    #[serde(default = "default_story_type")]
    pub story_type: String,
    pub estimate: Option<i64>,
    pub group_id: Option<String>,
    pub story_template_id: Option<String>,
    pub requested_by_id: Option<String>,
    pub workflow_state_id: Option<i64>,
    pub workflow_id: Option<i64>,
    pub project_id: Option<i64>,
    pub epic_id: Option<i64>,
    pub iteration_id: Option<i64>,
    pub position: Option<i64>,
    pub app_url: Option<String>,
    pub archived: Option<bool>,
    pub started: Option<bool>,
    pub completed: Option<bool>,
    pub blocker: Option<bool>,
    pub blocked: Option<bool>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub moved_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub started_at_override: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub completed_at_override: Option<DateTime<Utc>>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub label_ids: Vec<i64>,
    #[serde(default)]
    pub owner_ids: Vec<String>,
    #[serde(default)]
    pub follower_ids: Vec<String>,
    #[serde(default)]
    pub mention_ids: Vec<String>,
    #[serde(default)]
    pub member_mention_ids: Vec<String>,
    #[serde(default)]
    pub group_mention_ids: Vec<String>,
    #[serde(default)]
    pub previous_iteration_ids: Vec<i64>,
    #[serde(default)]
    pub comments: Vec<StoryComment>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub story_links: Vec<StoryLink>,
    #[serde(default)]
    pub files: Vec<UploadedFile>,
    #[serde(default)]
    pub linked_files: Vec<LinkedFile>,
    #[serde(default)]
    pub external_links: Vec<String>,
    #[serde(default)]
    pub custom_fields: Vec<StoryCustomField>,
    // Raw shapes the API does not document stably.
    #[serde(default)]
    pub pull_requests: Vec<Value>,
    #[serde(default)]
    pub branches: Vec<Value>,
    #[serde(default)]
    pub commits: Vec<Value>,
    pub stats: Option<Value>,
    #[serde(default = "story_entity_type")]
    pub entity_type: String,
}

/// The reduced projection used by list and search contexts
/// (`/epics/{id}/stories`, `/groups/{id}/stories`, bulk create, ...).
/// Shares no code with [`Story`]; fields common to both carry the same
/// meaning and type.
#[derive(Debug, Clone, Deserialize)]
pub struct StorySlim {
    pub id: i64,
    pub name: String,
    #[serde(default = "default_story_type")]
    pub story_type: String,
    pub description: Option<String>,
    pub estimate: Option<i64>,
    pub group_id: Option<String>,
    pub requested_by_id: Option<String>,
    pub workflow_state_id: Option<i64>,
    pub workflow_id: Option<i64>,
    pub project_id: Option<i64>,
    pub epic_id: Option<i64>,
    pub iteration_id: Option<i64>,
    pub position: Option<i64>,
    pub app_url: Option<String>,
    pub archived: Option<bool>,
    pub started: Option<bool>,
    pub completed: Option<bool>,
    pub blocker: Option<bool>,
    pub blocked: Option<bool>,
    pub num_tasks_completed: Option<i64>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub moved_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub label_ids: Vec<i64>,
    #[serde(default)]
    pub owner_ids: Vec<String>,
    #[serde(default)]
    pub follower_ids: Vec<String>,
    #[serde(default)]
    pub mention_ids: Vec<String>,
    #[serde(default)]
    pub member_mention_ids: Vec<String>,
    #[serde(default)]
    pub group_mention_ids: Vec<String>,
    #[serde(default)]
    pub previous_iteration_ids: Vec<i64>,
    #[serde(default)]
    pub task_ids: Vec<i64>,
    #[serde(default)]
    pub comment_ids: Vec<i64>,
    #[serde(default)]
    pub external_links: Vec<String>,
    #[serde(default)]
    pub custom_fields: Vec<StoryCustomField>,
    pub stats: Option<Value>,
    #[serde(default = "story_entity_type")]
    pub entity_type: String,
}

/// A typed relationship between two stories ("blocks", "duplicates",
/// "relates to").
#[derive(Debug, Clone, Deserialize)]
pub struct StoryLink {
    pub id: i64,
    pub subject_id: i64,
    pub object_id: i64,
    pub verb: String,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default = "story_link_entity_type")]
    pub entity_type: String,
}

fn story_link_entity_type() -> String {
    "story-link".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoryHistory {
    pub id: String,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub changed_at: Option<DateTime<Utc>>,
    pub member_id: Option<String>,
    pub version: Option<String>,
    pub webhook_id: Option<String>,
    #[serde(default)]
    pub actions: Vec<Value>,
    #[serde(default)]
    pub references: Vec<Value>,
}

/// Body of `POST /stories`. `name` is the only field the server
/// requires; everything left as `None` stays out of the payload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateStoryParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_state_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epic_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_by_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<CreateLabelParams>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<CreateTaskInput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<CustomFieldValueInput>>,
}

/// Body of `PUT /stories/{id}`. Absent keys leave the server value
/// unchanged, which is why unset fields must not serialize at all.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateStoryInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_state_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epic_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<CreateLabelParams>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<CustomFieldValueInput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at_override: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at_override: Option<DateTime<Utc>>,
}

/// Body of `PUT /stories/bulk`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateStoriesInput {
    pub story_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epic_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_state_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_ids_add: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_ids_remove: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_ids_add: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_ids_remove: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels_add: Option<Vec<CreateLabelParams>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels_remove: Option<Vec<CreateLabelParams>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateStoryFromTemplateInput {
    pub story_template_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_state_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epic_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<CustomFieldValueInput>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoryLinkInput {
    pub verb: String,
    pub subject_id: i64,
    pub object_id: i64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::codec::{decode, encode};

    #[test]
    fn minimal_story_takes_declared_defaults() {
        let raw = json!({
            "id": 1001,
            "name": "Test Story",
            "workflow_state_id": 500000,
        });
        let story: Story = decode(raw).unwrap();
        assert_eq!(story.id, Some(1001));
        assert_eq!(story.name, "Test Story");
        assert_eq!(story.workflow_state_id, Some(500000));
        assert_eq!(story.story_type, "feature");
        assert_eq!(story.entity_type, "story");
        assert_eq!(story.description, None);
        assert_eq!(story.epic_id, None);
        assert_eq!(story.deadline, None);
        assert!(story.owner_ids.is_empty());
        assert!(story.labels.is_empty());
        assert!(story.comments.is_empty());
    }

    #[test]
    fn relationship_lists_default_to_empty_not_absent() {
        let story: Story = decode(json!({"name": "s"})).unwrap();
        // Safe to iterate without a presence check.
        assert_eq!(story.label_ids.iter().count(), 0);
        assert_eq!(story.previous_iteration_ids, Vec::<i64>::new());
    }

    #[test]
    fn full_story_hydrates_nested_records() {
        let raw = json!({
            "id": 42,
            "name": "Full",
            "created_at": "2023-01-01T00:00:00Z",
            "labels": [{
                "id": 9,
                "external_id": null,
                "name": "backend",
                "archived": false,
                "color": "#00ff00",
                "created_at": "2023-01-01T00:00:00Z",
                "updated_at": "2023-01-01T00:00:00Z",
            }],
            "tasks": [{
                "id": 3,
                "description": "write tests",
                "complete": false,
            }],
            "story_links": [{
                "id": 5,
                "subject_id": 42,
                "object_id": 43,
                "verb": "blocks",
            }],
        });
        let story: Story = decode(raw).unwrap();
        assert_eq!(story.labels[0].name, "backend");
        assert_eq!(story.tasks[0].description, "write tests");
        assert_eq!(story.story_links[0].verb, "blocks");
        assert!(story.created_at.is_some());
    }

    #[test]
    fn create_story_omits_unset_optionals() {
        let params = CreateStoryParams {
            name: "New story".to_string(),
            ..Default::default()
        };
        let body = encode(&params).unwrap();
        let obj = body.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["name"], "New story");
    }

    #[test]
    fn update_story_keeps_explicit_values() {
        let input = UpdateStoryInput {
            archived: Some(false),
            estimate: Some(0),
            owner_ids: Some(vec![]),
            ..Default::default()
        };
        let body = encode(&input).unwrap();
        let obj = body.as_object().unwrap();
        assert_eq!(obj["archived"], json!(false));
        assert_eq!(obj["estimate"], json!(0));
        assert_eq!(obj["owner_ids"], json!([]));
        assert!(!obj.contains_key("name"));
    }

    #[test]
    fn slim_story_requires_an_id() {
        let err = decode::<StorySlim>(json!({"name": "no id"})).unwrap_err();
        assert!(err.to_string().contains("`id`"));
    }
}
