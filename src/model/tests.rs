//! Cross-entity fixture tests: full wire documents (with the extra
//! keys a live server sends) decoded into their record types.

use serde_json::{json, Value};

use super::*;
use crate::codec::{decode, decode_list};

fn full_label_doc(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "external_id": null,
        "name": name,
        "archived": false,
        "color": "#6515dd",
        "description": null,
        "app_url": format!("https://app.shortcut.com/org/label/{id}"),
        "created_at": "2023-01-01T00:00:00Z",
        "updated_at": "2023-01-05T12:00:00Z",
        "stats": {"num_stories_total": 4, "num_epics": 1},
    })
}

#[test]
fn story_with_every_optional_and_extras() {
    let raw = json!({
        "id": 1001,
        "global_id": "v3|1001",
        "external_id": "JIRA-99",
        "name": "Port the importer",
        "description": "long form text",
        "story_type": "chore",
        "estimate": 3,
        "workflow_state_id": 500001,
        "workflow_id": 2,
        "epic_id": 5,
        "iteration_id": 3,
        "project_id": null,
        "group_id": "11111111-2222-3333-4444-555555555555",
        "requested_by_id": "66666666-7777-8888-9999-000000000000",
        "position": 12288,
        "app_url": "https://app.shortcut.com/org/story/1001",
        "archived": false,
        "started": true,
        "completed": false,
        "blocked": false,
        "blocker": false,
        "deadline": "2023-09-01T00:00:00Z",
        "created_at": "2023-06-01T09:00:00Z",
        "updated_at": "2023-06-02T09:00:00Z",
        "started_at": "2023-06-01T10:00:00Z",
        "moved_at": "2023-06-01T10:00:00Z",
        "labels": [full_label_doc(17, "infra")],
        "label_ids": [17],
        "owner_ids": ["66666666-7777-8888-9999-000000000000"],
        "follower_ids": [],
        "comments": [
            {"id": 1, "text": "first", "author_id": "66666666-7777-8888-9999-000000000000",
             "created_at": "2023-06-01T11:00:00Z",
             "reactions": [{"emoji": ":rocket:", "permission_ids": []}]},
        ],
        "tasks": [
            {"id": 7, "description": "step one", "complete": true,
             "completed_at": "2023-06-01T12:00:00Z", "owner_ids": []},
        ],
        "story_links": [],
        "custom_fields": [
            {"field_id": "f-1", "value": "High", "value_id": "v-1"},
        ],
        "stats": {"num_related_documents": 0},
        "entity_type": "story",
        // Keys this client does not declare; must be ignored.
        "lead_time": 86400,
        "cycle_time": 43200,
        "synced_item": {"external_id": "x", "url": "https://example.com"},
    });
    let story: Story = decode(raw).unwrap();
    assert_eq!(story.story_type, "chore");
    assert_eq!(story.labels[0].stats.as_ref().unwrap()["num_epics"], 1);
    assert_eq!(story.comments[0].reactions[0].emoji, ":rocket:");
    assert!(story.tasks[0].complete);
    assert_eq!(story.custom_fields[0].value.as_deref(), Some("High"));
    assert_eq!(story.project_id, None);
}

#[test]
fn two_decodes_produce_independent_values() {
    let raw = json!({"name": "twin"});
    let a: Story = decode(raw.clone()).unwrap();
    let mut b: Story = decode(raw).unwrap();
    b.owner_ids.push("someone".to_string());
    assert!(a.owner_ids.is_empty());
    assert_eq!(b.owner_ids.len(), 1);
}

#[test]
fn label_list_decodes_elementwise() {
    let raw = json!([full_label_doc(1, "a"), full_label_doc(2, "b")]);
    let labels = decode_list::<Label>(raw).unwrap();
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[1].name, "b");
}

#[test]
fn minimal_workflow_state_fixture() {
    let state: WorkflowState = decode(json!({
        "id": 500000,
        "global_id": "wf-state-500000",
        "name": "Unstarted",
        "type": "unstarted",
        "description": "",
        "verb": "start",
        "num_stories": 0,
        "num_story_templates": 0,
        "position": 0,
        "created_at": "2023-01-01T00:00:00Z",
        "updated_at": "2023-01-01T00:00:00Z",
    }))
    .unwrap();
    assert_eq!(state.state_type, "unstarted");
    assert_eq!(state.description.as_deref(), Some(""));
}

#[test]
fn minimal_project_fixture() {
    let project: Project = decode(json!({
        "id": 3001,
        "name": "Backend Project",
        "description": "Backend services",
        "abbreviation": "BE",
        "archived": false,
        "color": "#ff0000",
        "created_at": "2023-01-01T00:00:00Z",
        "updated_at": "2023-01-02T00:00:00Z",
    }))
    .unwrap();
    assert_eq!(project.abbreviation.as_deref(), Some("BE"));
    assert_eq!(project.entity_type, "project");
}

#[test]
fn doc_slim_and_full_are_distinct_projections() {
    let slim: DocSlim = decode(json!({
        "id": "d0000000-0000-0000-0000-000000000001",
        "title": "Runbook",
    }))
    .unwrap();
    let full: Doc = decode(json!({
        "id": "d0000000-0000-0000-0000-000000000001",
        "title": "Runbook",
        "content": "# Steps\n...",
        "epic_ids": [5],
    }))
    .unwrap();
    assert_eq!(slim.title.as_deref(), Some("Runbook"));
    assert_eq!(full.content.as_deref(), Some("# Steps\n..."));
    assert_eq!(full.epic_ids, vec![5]);
}

#[test]
fn missing_optionals_all_take_defaults() {
    let member: Member = decode(json!({
        "id": "12345678-1234-1234-1234-123456789012",
        "role": "owner",
        "profile": {
            "id": "12345678-1234-1234-1234-123456789012",
            "mention_name": "owner",
        },
    }))
    .unwrap();
    assert_eq!(member.state, None);
    assert_eq!(member.created_at, None);
    assert!(member.group_ids.is_empty());
    assert!(!member.profile.is_owner);
    assert_eq!(member.profile.email_address, None);
}
