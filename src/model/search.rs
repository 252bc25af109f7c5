use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::doc::DocSlim;
use super::epic::EpicSlim;
use super::iteration::Iteration;
use super::objective::Objective;
use super::story::Story;

/// One page of a search-style response. `next` is an opaque cursor —
/// a path or a full URL — that fetches the following page; its absence
/// terminates the sequence.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults<T> {
    pub total: Option<i64>,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    pub next: Option<String>,
}

pub type SearchStoryResult = SearchResults<Story>;
pub type StorySearchResults = SearchResults<Story>;
pub type EpicSearchResults = SearchResults<EpicSlim>;
pub type IterationSearchResults = SearchResults<Iteration>;
pub type ObjectiveSearchResults = SearchResults<Objective>;
pub type DocumentSearchResults = SearchResults<DocSlim>;

/// Query parameters for the `GET /search/*` endpoints.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchInputs {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
    /// `"slim"` or `"full"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl SearchInputs {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

/// Body of `POST /stories/search` (advanced story query).
#[derive(Debug, Clone, Default, Serialize)]
pub struct QueryStoriesInput {
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
    pub owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_by_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub includes_description: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_state_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_end: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_end: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::codec::decode;

    #[test]
    fn search_page_decodes_typed_data() {
        let page: SearchStoryResult = decode(json!({
            "total": 2,
            "data": [
                {"id": 1, "name": "first"},
                {"id": 2, "name": "second"},
            ],
            "next": "/api/v3/search/stories?token=abc",
        }))
        .unwrap();
        assert_eq!(page.total, Some(2));
        assert_eq!(page.data[1].name, "second");
        assert!(page.next.is_some());
    }

    #[test]
    fn last_page_has_no_cursor() {
        let page: SearchStoryResult = decode(json!({"total": 0, "data": []})).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.next, None);
    }
}
