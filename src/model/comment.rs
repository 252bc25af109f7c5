use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

fn story_comment_entity_type() -> String {
    "story-comment".to_string()
}

/// A flat comment on a story. Deleted comments come back with a null
/// `text`, so the field is optional even though it is required on write.
#[derive(Debug, Clone, Deserialize)]
pub struct StoryComment {
    pub id: i64,
    pub text: Option<String>,
    pub author_id: Option<String>,
    pub story_id: Option<i64>,
    pub position: Option<i64>,
    pub app_url: Option<String>,
    pub external_id: Option<String>,
    pub global_id: Option<String>,
    pub deleted: Option<bool>,
    pub blocker: Option<bool>,
    pub unblocks_parent: Option<bool>,
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub reactions: Vec<StoryReaction>,
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
    #[serde(default = "story_comment_entity_type")]
    pub entity_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoryReaction {
    pub emoji: String,
    #[serde(default)]
    pub permission_ids: Vec<String>,
}

/// A threaded comment on an epic. Each node owns its replies, forming
/// a tree of unbounded depth.
#[derive(Debug, Clone, Deserialize)]
pub struct ThreadedComment {
    pub id: i64,
    pub text: Option<String>,
    pub author_id: Option<String>,
    pub app_url: Option<String>,
    pub external_id: Option<String>,
    pub global_id: Option<String>,
    pub deleted: Option<bool>,
    #[serde(default)]
    pub comments: Vec<ThreadedComment>,
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
    #[serde(default = "threaded_comment_entity_type")]
    pub entity_type: String,
}

fn threaded_comment_entity_type() -> String {
    "epic-comment".to_string()
}

/// Body for creating a comment on a story or an epic.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCommentInput {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCommentInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::codec::decode;

    #[test]
    fn threaded_comments_recurse_without_depth_limit() {
        let root: ThreadedComment = decode(json!({
            "id": 1,
            "text": "root",
            "comments": [{
                "id": 2,
                "text": "reply",
                "comments": [{
                    "id": 3,
                    "text": "reply to reply",
                }],
            }],
        }))
        .unwrap();
        assert_eq!(root.comments.len(), 1);
        let reply = &root.comments[0];
        assert_eq!(reply.comments.len(), 1);
        let leaf = &reply.comments[0];
        assert_eq!(leaf.text.as_deref(), Some("reply to reply"));
        assert!(leaf.comments.is_empty());
    }

    #[test]
    fn deleted_comment_has_null_text() {
        let comment: StoryComment = decode(json!({
            "id": 10,
            "text": null,
            "deleted": true,
        }))
        .unwrap();
        assert_eq!(comment.text, None);
        assert_eq!(comment.deleted, Some(true));
        assert!(comment.reactions.is_empty());
    }

    #[test]
    fn reactions_hydrate_with_member_lists() {
        let comment: StoryComment = decode(json!({
            "id": 11,
            "text": "nice",
            "reactions": [{"emoji": ":thumbsup:", "permission_ids": ["u-1", "u-2"]}],
        }))
        .unwrap();
        assert_eq!(comment.reactions[0].emoji, ":thumbsup:");
        assert_eq!(comment.reactions[0].permission_ids.len(), 2);
    }
}
