//! HTTP transport for the Shortcut API v3.
//!
//! One method per remote endpoint. Each method encodes its input
//! record (unset fields stripped), issues the request, checks the
//! status, and hands the body to [`crate::codec`] for hydration. The
//! decode/encode core itself never sees a URL or header.

use futures::stream::Stream;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::codec::{decode, decode_list, encode};
use crate::error::{Error, Result};
use crate::model::*;
use crate::pagination;

pub const DEFAULT_BASE_URL: &str = "https://api.app.shortcut.com/api/v3";

const USER_AGENT_VALUE: &str = concat!("useshortcut-rs/", env!("CARGO_PKG_VERSION"));

pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(api_token: &str) -> Result<Self> {
        Self::with_base_url(api_token, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_token: &str, base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        let mut token = HeaderValue::from_str(api_token).map_err(|e| Error::Api {
            status: 0,
            message: format!("invalid api token: {e}"),
            body: None,
        })?;
        token.set_sensitive(true);
        headers.insert("Shortcut-Token", token);

        let client = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn dispatch(&self, req: reqwest::RequestBuilder, method: &str, path: &str) -> Result<Value> {
        debug!(method, path, "shortcut api request");
        let resp = req.send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        if !status.is_success() {
            let body: Option<Value> = serde_json::from_slice(&bytes).ok();
            let message = body
                .as_ref()
                .and_then(|b| b.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| String::from_utf8_lossy(&bytes).into_owned());
            return Err(Error::Api {
                status: status.as_u16(),
                message,
                body,
            });
        }
        if bytes.is_empty() {
            // 204 and friends carry no body.
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| Error::Decode {
            entity: "response".to_string(),
            detail: e.to_string(),
        })
    }

    async fn get(&self, path: &str) -> Result<Value> {
        self.dispatch(self.client.get(self.url(path)), "GET", path).await
    }

    async fn get_query<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> Result<Value> {
        self.dispatch(self.client.get(self.url(path)).query(query), "GET", path)
            .await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value> {
        self.dispatch(self.client.post(self.url(path)).json(&body), "POST", path)
            .await
    }

    async fn post_no_body(&self, path: &str) -> Result<Value> {
        self.dispatch(self.client.post(self.url(path)), "POST", path).await
    }

    async fn put(&self, path: &str, body: Value) -> Result<Value> {
        self.dispatch(self.client.put(self.url(path)).json(&body), "PUT", path)
            .await
    }

    async fn put_no_body(&self, path: &str) -> Result<Value> {
        self.dispatch(self.client.put(self.url(path)), "PUT", path).await
    }

    async fn delete(&self, path: &str) -> Result<()> {
        self.dispatch(self.client.delete(self.url(path)), "DELETE", path)
            .await
            .map(|_| ())
    }

    async fn delete_json(&self, path: &str, body: Value) -> Result<()> {
        self.dispatch(self.client.delete(self.url(path)).json(&body), "DELETE", path)
            .await
            .map(|_| ())
    }

    // Members

    pub async fn get_current_member(&self) -> Result<Member> {
        decode(self.get("/member").await?)
    }

    pub async fn list_members(&self) -> Result<Vec<Member>> {
        decode_list(self.get("/members").await?)
    }

    pub async fn get_member(&self, member_id: &str) -> Result<Member> {
        decode(self.get(&format!("/members/{member_id}")).await?)
    }

    // Stories

    pub async fn create_story(&self, story: &CreateStoryParams) -> Result<Story> {
        decode(self.post("/stories", encode(story)?).await?)
    }

    pub async fn get_story(&self, story_id: i64) -> Result<Story> {
        decode(self.get(&format!("/stories/{story_id}")).await?)
    }

    pub async fn update_story(&self, story_id: i64, story: &UpdateStoryInput) -> Result<Story> {
        decode(self.put(&format!("/stories/{story_id}"), encode(story)?).await?)
    }

    pub async fn delete_story(&self, story_id: i64) -> Result<()> {
        self.delete(&format!("/stories/{story_id}")).await
    }

    pub async fn create_multiple_stories(
        &self,
        stories: &[CreateStoryParams],
    ) -> Result<Vec<StorySlim>> {
        let body = serde_json::json!({ "stories": encode(&stories)? });
        decode_list(self.post("/stories/bulk", body).await?)
    }

    pub async fn update_multiple_stories(&self, input: &UpdateStoriesInput) -> Result<()> {
        self.put("/stories/bulk", encode(input)?).await.map(|_| ())
    }

    pub async fn delete_multiple_stories(&self, story_ids: &[i64]) -> Result<()> {
        self.delete_json("/stories/bulk", serde_json::json!({ "story_ids": story_ids }))
            .await
    }

    pub async fn create_story_from_template(
        &self,
        params: &CreateStoryFromTemplateInput,
    ) -> Result<StorySlim> {
        decode(self.post("/stories/from-template", encode(params)?).await?)
    }

    pub async fn query_stories(&self, input: &QueryStoriesInput) -> Result<StorySearchResults> {
        decode(self.post("/stories/search", encode(input)?).await?)
    }

    pub async fn get_story_history(&self, story_id: i64) -> Result<Vec<StoryHistory>> {
        decode_list(self.get(&format!("/stories/{story_id}/history")).await?)
    }

    pub async fn list_story_sub_tasks(&self, story_id: i64) -> Result<Vec<StorySlim>> {
        decode_list(self.get(&format!("/stories/{story_id}/sub-tasks")).await?)
    }

    pub async fn get_external_link_stories(&self, external_link: &str) -> Result<Vec<StorySlim>> {
        let raw = self
            .get_query("/external-link/stories", &[("external_link", external_link)])
            .await?;
        decode_list(raw)
    }

    // Story comments

    pub async fn list_story_comments(&self, story_id: i64) -> Result<Vec<StoryComment>> {
        decode_list(self.get(&format!("/stories/{story_id}/comments")).await?)
    }

    pub async fn create_story_comment(
        &self,
        story_id: i64,
        comment: &CreateCommentInput,
    ) -> Result<StoryComment> {
        decode(
            self.post(&format!("/stories/{story_id}/comments"), encode(comment)?)
                .await?,
        )
    }

    pub async fn get_story_comment(&self, story_id: i64, comment_id: i64) -> Result<StoryComment> {
        decode(
            self.get(&format!("/stories/{story_id}/comments/{comment_id}"))
                .await?,
        )
    }

    pub async fn update_story_comment(
        &self,
        story_id: i64,
        comment_id: i64,
        comment: &UpdateCommentInput,
    ) -> Result<StoryComment> {
        decode(
            self.put(
                &format!("/stories/{story_id}/comments/{comment_id}"),
                encode(comment)?,
            )
            .await?,
        )
    }

    pub async fn delete_story_comment(&self, story_id: i64, comment_id: i64) -> Result<()> {
        self.delete(&format!("/stories/{story_id}/comments/{comment_id}"))
            .await
    }

    pub async fn create_story_reaction(
        &self,
        story_id: i64,
        comment_id: i64,
        emoji: &str,
    ) -> Result<()> {
        self.post(
            &format!("/stories/{story_id}/comments/{comment_id}/reactions"),
            serde_json::json!({ "emoji": emoji }),
        )
        .await
        .map(|_| ())
    }

    pub async fn delete_story_reaction(
        &self,
        story_id: i64,
        comment_id: i64,
        emoji: &str,
    ) -> Result<()> {
        self.delete_json(
            &format!("/stories/{story_id}/comments/{comment_id}/reactions"),
            serde_json::json!({ "emoji": emoji }),
        )
        .await
    }

    pub async fn unlink_comment_thread_from_slack(
        &self,
        story_id: i64,
        comment_id: i64,
    ) -> Result<()> {
        self.post_no_body(&format!(
            "/stories/{story_id}/comments/{comment_id}/unlink-from-slack"
        ))
        .await
        .map(|_| ())
    }

    // Story tasks

    pub async fn list_story_tasks(&self, story_id: i64) -> Result<Vec<Task>> {
        decode_list(self.get(&format!("/stories/{story_id}/tasks")).await?)
    }

    pub async fn create_story_task(&self, story_id: i64, task: &CreateTaskInput) -> Result<Task> {
        decode(
            self.post(&format!("/stories/{story_id}/tasks"), encode(task)?)
                .await?,
        )
    }

    pub async fn get_story_task(&self, story_id: i64, task_id: i64) -> Result<Task> {
        decode(self.get(&format!("/stories/{story_id}/tasks/{task_id}")).await?)
    }

    pub async fn update_story_task(
        &self,
        story_id: i64,
        task_id: i64,
        task: &UpdateTaskInput,
    ) -> Result<Task> {
        decode(
            self.put(&format!("/stories/{story_id}/tasks/{task_id}"), encode(task)?)
                .await?,
        )
    }

    pub async fn delete_story_task(&self, story_id: i64, task_id: i64) -> Result<()> {
        self.delete(&format!("/stories/{story_id}/tasks/{task_id}")).await
    }

    // Story links

    pub async fn create_story_link(&self, params: &StoryLinkInput) -> Result<StoryLink> {
        decode(self.post("/story-links", encode(params)?).await?)
    }

    pub async fn get_story_link(&self, story_link_id: i64) -> Result<StoryLink> {
        decode(self.get(&format!("/story-links/{story_link_id}")).await?)
    }

    pub async fn update_story_link(
        &self,
        story_link_id: i64,
        params: &StoryLinkInput,
    ) -> Result<StoryLink> {
        decode(
            self.put(&format!("/story-links/{story_link_id}"), encode(params)?)
                .await?,
        )
    }

    pub async fn delete_story_link(&self, story_link_id: i64) -> Result<()> {
        self.delete(&format!("/story-links/{story_link_id}")).await
    }

    // Search

    pub async fn search(&self, params: &SearchInputs) -> Result<Value> {
        self.get_query("/search", params).await
    }

    pub async fn search_stories(&self, params: &SearchInputs) -> Result<SearchStoryResult> {
        decode(self.get_query("/search/stories", params).await?)
    }

    async fn fetch_search_page(&self, path: String) -> Result<SearchStoryResult> {
        decode(self.get(&path).await?)
    }

    /// All pages of a story search, drained eagerly in order.
    pub async fn search_stories_all(&self, params: &SearchInputs) -> Result<Vec<Story>> {
        let first = self.search_stories(params).await?;
        pagination::collect_pages(first, &self.base_url, |path| self.fetch_search_page(path)).await
    }

    /// Lazy variant: stories are yielded as pages are fetched.
    pub async fn search_stories_iter(
        &self,
        params: &SearchInputs,
    ) -> Result<impl Stream<Item = Result<Story>> + '_> {
        let first = self.search_stories(params).await?;
        Ok(pagination::page_stream(first, self.base_url.clone(), |path| {
            self.fetch_search_page(path)
        }))
    }

    pub async fn search_epics(&self, params: &SearchInputs) -> Result<EpicSearchResults> {
        decode(self.get_query("/search/epics", params).await?)
    }

    pub async fn search_iterations(&self, params: &SearchInputs) -> Result<IterationSearchResults> {
        decode(self.get_query("/search/iterations", params).await?)
    }

    pub async fn search_milestones(&self, params: &SearchInputs) -> Result<ObjectiveSearchResults> {
        decode(self.get_query("/search/milestones", params).await?)
    }

    pub async fn search_objectives(&self, params: &SearchInputs) -> Result<ObjectiveSearchResults> {
        decode(self.get_query("/search/objectives", params).await?)
    }

    pub async fn search_documents(&self, params: &SearchInputs) -> Result<DocumentSearchResults> {
        decode(self.get_query("/search/documents", params).await?)
    }

    // Workflows

    pub async fn list_workflows(&self) -> Result<Vec<Workflow>> {
        decode_list(self.get("/workflows").await?)
    }

    pub async fn get_workflow(&self, workflow_id: i64) -> Result<Workflow> {
        decode(self.get(&format!("/workflows/{workflow_id}")).await?)
    }

    pub async fn get_epic_workflow(&self) -> Result<EpicWorkflow> {
        decode(self.get("/epic-workflow").await?)
    }

    // Epics

    pub async fn list_epics(&self) -> Result<Vec<EpicSlim>> {
        decode_list(self.get("/epics").await?)
    }

    pub async fn get_epic(&self, epic_id: i64) -> Result<Epic> {
        decode(self.get(&format!("/epics/{epic_id}")).await?)
    }

    pub async fn create_epic(&self, epic: &CreateEpicInput) -> Result<Epic> {
        decode(self.post("/epics", encode(epic)?).await?)
    }

    pub async fn update_epic(&self, epic_id: i64, epic: &UpdateEpicInput) -> Result<Epic> {
        decode(self.put(&format!("/epics/{epic_id}"), encode(epic)?).await?)
    }

    pub async fn delete_epic(&self, epic_id: i64) -> Result<()> {
        self.delete(&format!("/epics/{epic_id}")).await
    }

    /// Raw paginated epic listing; the response envelope is not a
    /// stable documented shape, so it is returned as-is.
    pub async fn list_epics_paginated(
        &self,
        includes_description: Option<bool>,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<Value> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(v) = includes_description {
            query.push(("includes_description", v.to_string()));
        }
        if let Some(v) = page {
            query.push(("page", v.to_string()));
        }
        if let Some(v) = page_size {
            query.push(("page_size", v.to_string()));
        }
        self.get_query("/epics/paginated", &query).await
    }

    pub async fn list_epic_stories(
        &self,
        epic_id: i64,
        includes_description: Option<bool>,
    ) -> Result<Vec<StorySlim>> {
        let raw = match includes_description {
            Some(v) => {
                self.get_query(
                    &format!("/epics/{epic_id}/stories"),
                    &[("includes_description", v.to_string())],
                )
                .await?
            }
            None => self.get(&format!("/epics/{epic_id}/stories")).await?,
        };
        decode_list(raw)
    }

    pub async fn list_epic_documents(&self, epic_id: i64) -> Result<Vec<DocSlim>> {
        decode_list(self.get(&format!("/epics/{epic_id}/documents")).await?)
    }

    pub async fn unlink_productboard_from_epic(&self, epic_id: i64) -> Result<()> {
        self.post_no_body(&format!("/epics/{epic_id}/unlink-productboard"))
            .await
            .map(|_| ())
    }

    // Epic comments (threaded)

    pub async fn list_epic_comments(&self, epic_id: i64) -> Result<Vec<ThreadedComment>> {
        decode_list(self.get(&format!("/epics/{epic_id}/comments")).await?)
    }

    pub async fn create_epic_comment(
        &self,
        epic_id: i64,
        comment: &CreateCommentInput,
    ) -> Result<ThreadedComment> {
        decode(
            self.post(&format!("/epics/{epic_id}/comments"), encode(comment)?)
                .await?,
        )
    }

    /// Reply to an existing epic comment, nesting one level deeper.
    pub async fn create_epic_comment_comment(
        &self,
        epic_id: i64,
        comment_id: i64,
        comment: &CreateCommentInput,
    ) -> Result<ThreadedComment> {
        decode(
            self.post(
                &format!("/epics/{epic_id}/comments/{comment_id}"),
                encode(comment)?,
            )
            .await?,
        )
    }

    pub async fn get_epic_comment(&self, epic_id: i64, comment_id: i64) -> Result<ThreadedComment> {
        decode(self.get(&format!("/epics/{epic_id}/comments/{comment_id}")).await?)
    }

    pub async fn update_epic_comment(
        &self,
        epic_id: i64,
        comment_id: i64,
        comment: &UpdateCommentInput,
    ) -> Result<ThreadedComment> {
        decode(
            self.put(
                &format!("/epics/{epic_id}/comments/{comment_id}"),
                encode(comment)?,
            )
            .await?,
        )
    }

    pub async fn delete_epic_comment(&self, epic_id: i64, comment_id: i64) -> Result<()> {
        self.delete(&format!("/epics/{epic_id}/comments/{comment_id}")).await
    }

    // Epic health

    pub async fn get_epic_health(&self, epic_id: i64) -> Result<Health> {
        decode(self.get(&format!("/epics/{epic_id}/health")).await?)
    }

    pub async fn create_epic_health(
        &self,
        epic_id: i64,
        health: &CreateHealthInput,
    ) -> Result<Health> {
        decode(
            self.post(&format!("/epics/{epic_id}/health"), encode(health)?)
                .await?,
        )
    }

    pub async fn list_epic_health_history(&self, epic_id: i64) -> Result<Vec<Health>> {
        decode_list(self.get(&format!("/epics/{epic_id}/health-history")).await?)
    }

    pub async fn update_health(&self, health_id: &str, health: &UpdateHealthInput) -> Result<Health> {
        decode(self.put(&format!("/health/{health_id}"), encode(health)?).await?)
    }

    // Iterations

    pub async fn list_iterations(&self) -> Result<Vec<Iteration>> {
        decode_list(self.get("/iterations").await?)
    }

    pub async fn get_iteration(&self, iteration_id: i64) -> Result<Iteration> {
        decode(self.get(&format!("/iterations/{iteration_id}")).await?)
    }

    pub async fn create_iteration(&self, iteration: &CreateIterationInput) -> Result<Iteration> {
        decode(self.post("/iterations", encode(iteration)?).await?)
    }

    pub async fn update_iteration(
        &self,
        iteration_id: i64,
        iteration: &UpdateIterationInput,
    ) -> Result<Iteration> {
        decode(
            self.put(&format!("/iterations/{iteration_id}"), encode(iteration)?)
                .await?,
        )
    }

    pub async fn delete_iteration(&self, iteration_id: i64) -> Result<()> {
        self.delete(&format!("/iterations/{iteration_id}")).await
    }

    pub async fn list_iteration_stories(
        &self,
        iteration_id: i64,
        includes_description: Option<bool>,
    ) -> Result<Vec<StorySlim>> {
        let raw = match includes_description {
            Some(v) => {
                self.get_query(
                    &format!("/iterations/{iteration_id}/stories"),
                    &[("includes_description", v.to_string())],
                )
                .await?
            }
            None => self.get(&format!("/iterations/{iteration_id}/stories")).await?,
        };
        decode_list(raw)
    }

    pub async fn enable_iterations(&self) -> Result<()> {
        self.put_no_body("/iterations/enable").await.map(|_| ())
    }

    pub async fn disable_iterations(&self) -> Result<()> {
        self.put_no_body("/iterations/disable").await.map(|_| ())
    }

    // Labels

    pub async fn list_labels(&self) -> Result<Vec<Label>> {
        decode_list(self.get("/labels").await?)
    }

    pub async fn get_label(&self, label_id: i64) -> Result<Label> {
        decode(self.get(&format!("/labels/{label_id}")).await?)
    }

    pub async fn create_label(&self, params: &CreateLabelParams) -> Result<Label> {
        decode(self.post("/labels", encode(params)?).await?)
    }

    pub async fn update_label(&self, label_id: i64, params: &UpdateLabelInput) -> Result<Label> {
        decode(self.put(&format!("/labels/{label_id}"), encode(params)?).await?)
    }

    pub async fn delete_label(&self, label_id: i64) -> Result<()> {
        self.delete(&format!("/labels/{label_id}")).await
    }

    pub async fn list_label_epics(&self, label_id: i64) -> Result<Vec<EpicSlim>> {
        decode_list(self.get(&format!("/labels/{label_id}/epics")).await?)
    }

    pub async fn list_label_stories(
        &self,
        label_id: i64,
        includes_description: Option<bool>,
    ) -> Result<Vec<StorySlim>> {
        let raw = match includes_description {
            Some(v) => {
                self.get_query(
                    &format!("/labels/{label_id}/stories"),
                    &[("includes_description", v.to_string())],
                )
                .await?
            }
            None => self.get(&format!("/labels/{label_id}/stories")).await?,
        };
        decode_list(raw)
    }

    // Groups

    pub async fn list_groups(&self) -> Result<Vec<Group>> {
        decode_list(self.get("/groups").await?)
    }

    pub async fn get_group(&self, group_id: &str) -> Result<Group> {
        decode(self.get(&format!("/groups/{group_id}")).await?)
    }

    pub async fn create_group(&self, params: &CreateGroupInput) -> Result<Group> {
        decode(self.post("/groups", encode(params)?).await?)
    }

    pub async fn update_group(&self, group_id: &str, params: &UpdateGroupInput) -> Result<Group> {
        decode(self.put(&format!("/groups/{group_id}"), encode(params)?).await?)
    }

    pub async fn delete_group(&self, group_id: &str) -> Result<()> {
        self.delete(&format!("/groups/{group_id}")).await
    }

    pub async fn list_group_stories(
        &self,
        group_id: &str,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<StorySlim>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(v) = limit {
            query.push(("limit", v.to_string()));
        }
        if let Some(v) = offset {
            query.push(("offset", v.to_string()));
        }
        decode_list(
            self.get_query(&format!("/groups/{group_id}/stories"), &query)
                .await?,
        )
    }

    // Milestones

    pub async fn list_milestones(&self) -> Result<Vec<Milestone>> {
        decode_list(self.get("/milestones").await?)
    }

    pub async fn get_milestone(&self, milestone_id: i64) -> Result<Milestone> {
        decode(self.get(&format!("/milestones/{milestone_id}")).await?)
    }

    pub async fn create_milestone(&self, milestone: &CreateMilestoneInput) -> Result<Milestone> {
        decode(self.post("/milestones", encode(milestone)?).await?)
    }

    pub async fn update_milestone(
        &self,
        milestone_id: i64,
        milestone: &UpdateMilestoneInput,
    ) -> Result<Milestone> {
        decode(
            self.put(&format!("/milestones/{milestone_id}"), encode(milestone)?)
                .await?,
        )
    }

    pub async fn delete_milestone(&self, milestone_id: i64) -> Result<()> {
        self.delete(&format!("/milestones/{milestone_id}")).await
    }

    pub async fn list_milestone_epics(&self, milestone_id: i64) -> Result<Vec<EpicSlim>> {
        decode_list(self.get(&format!("/milestones/{milestone_id}/epics")).await?)
    }

    // Categories

    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        decode_list(self.get("/categories").await?)
    }

    pub async fn get_category(&self, category_id: i64) -> Result<Category> {
        decode(self.get(&format!("/categories/{category_id}")).await?)
    }

    pub async fn create_category(&self, params: &CreateCategoryParams) -> Result<Category> {
        decode(self.post("/categories", encode(params)?).await?)
    }

    pub async fn update_category(
        &self,
        category_id: i64,
        params: &UpdateCategoryInput,
    ) -> Result<Category> {
        decode(
            self.put(&format!("/categories/{category_id}"), encode(params)?)
                .await?,
        )
    }

    pub async fn delete_category(&self, category_id: i64) -> Result<()> {
        self.delete(&format!("/categories/{category_id}")).await
    }

    pub async fn list_category_milestones(&self, category_id: i64) -> Result<Vec<Milestone>> {
        decode_list(self.get(&format!("/categories/{category_id}/milestones")).await?)
    }

    pub async fn list_category_objectives(&self, category_id: i64) -> Result<Vec<Objective>> {
        decode_list(self.get(&format!("/categories/{category_id}/objectives")).await?)
    }

    // Objectives

    pub async fn list_objectives(&self) -> Result<Vec<Objective>> {
        decode_list(self.get("/objectives").await?)
    }

    pub async fn get_objective(&self, objective_id: i64) -> Result<Objective> {
        decode(self.get(&format!("/objectives/{objective_id}")).await?)
    }

    pub async fn create_objective(&self, params: &CreateObjectiveInput) -> Result<Objective> {
        decode(self.post("/objectives", encode(params)?).await?)
    }

    pub async fn update_objective(
        &self,
        objective_id: i64,
        params: &UpdateObjectiveInput,
    ) -> Result<Objective> {
        decode(
            self.put(&format!("/objectives/{objective_id}"), encode(params)?)
                .await?,
        )
    }

    pub async fn delete_objective(&self, objective_id: i64) -> Result<()> {
        self.delete(&format!("/objectives/{objective_id}")).await
    }

    pub async fn list_objective_epics(&self, objective_id: i64) -> Result<Vec<EpicSlim>> {
        decode_list(self.get(&format!("/objectives/{objective_id}/epics")).await?)
    }

    // Key results

    pub async fn get_key_result(&self, key_result_id: &str) -> Result<KeyResult> {
        decode(self.get(&format!("/key-results/{key_result_id}")).await?)
    }

    pub async fn update_key_result(
        &self,
        key_result_id: &str,
        params: &KeyResultInput,
    ) -> Result<KeyResult> {
        decode(
            self.put(&format!("/key-results/{key_result_id}"), encode(params)?)
                .await?,
        )
    }

    // Projects

    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        decode_list(self.get("/projects").await?)
    }

    pub async fn get_project(&self, project_id: i64) -> Result<Project> {
        decode(self.get(&format!("/projects/{project_id}")).await?)
    }

    pub async fn create_project(&self, params: &CreateProjectInput) -> Result<Project> {
        decode(self.post("/projects", encode(params)?).await?)
    }

    pub async fn update_project(
        &self,
        project_id: i64,
        params: &UpdateProjectInput,
    ) -> Result<Project> {
        decode(self.put(&format!("/projects/{project_id}"), encode(params)?).await?)
    }

    pub async fn delete_project(&self, project_id: i64) -> Result<()> {
        self.delete(&format!("/projects/{project_id}")).await
    }

    pub async fn list_project_stories(
        &self,
        project_id: i64,
        includes_description: Option<bool>,
    ) -> Result<Vec<StorySlim>> {
        let raw = match includes_description {
            Some(v) => {
                self.get_query(
                    &format!("/projects/{project_id}/stories"),
                    &[("includes_description", v.to_string())],
                )
                .await?
            }
            None => self.get(&format!("/projects/{project_id}/stories")).await?,
        };
        decode_list(raw)
    }

    // Repositories

    pub async fn list_repositories(&self) -> Result<Vec<Repository>> {
        decode_list(self.get("/repositories").await?)
    }

    pub async fn get_repository(&self, repository_id: i64) -> Result<Repository> {
        decode(self.get(&format!("/repositories/{repository_id}")).await?)
    }

    // Custom fields

    pub async fn list_custom_fields(&self) -> Result<Vec<CustomField>> {
        decode_list(self.get("/custom-fields").await?)
    }

    pub async fn get_custom_field(&self, custom_field_id: &str) -> Result<CustomField> {
        decode(self.get(&format!("/custom-fields/{custom_field_id}")).await?)
    }

    pub async fn update_custom_field(
        &self,
        custom_field_id: &str,
        custom_field: &UpdateCustomFieldInput,
    ) -> Result<CustomField> {
        decode(
            self.put(
                &format!("/custom-fields/{custom_field_id}"),
                encode(custom_field)?,
            )
            .await?,
        )
    }

    pub async fn delete_custom_field(&self, custom_field_id: &str) -> Result<()> {
        self.delete(&format!("/custom-fields/{custom_field_id}")).await
    }

    // Documents

    pub async fn list_docs(&self) -> Result<Vec<DocSlim>> {
        decode_list(self.get("/documents").await?)
    }

    pub async fn get_doc(&self, doc_id: &str, content_format: Option<&str>) -> Result<Doc> {
        let raw = match content_format {
            Some(fmt) => {
                self.get_query(&format!("/documents/{doc_id}"), &[("content_format", fmt)])
                    .await?
            }
            None => self.get(&format!("/documents/{doc_id}")).await?,
        };
        decode(raw)
    }

    pub async fn create_doc(&self, doc: &CreateDocInput) -> Result<DocSlim> {
        decode(self.post("/documents", encode(doc)?).await?)
    }

    pub async fn update_doc(&self, doc_id: &str, doc: &UpdateDocInput) -> Result<Doc> {
        decode(self.put(&format!("/documents/{doc_id}"), encode(doc)?).await?)
    }

    pub async fn delete_doc(&self, doc_id: &str) -> Result<()> {
        self.delete(&format!("/documents/{doc_id}")).await
    }

    pub async fn list_document_epics(&self, doc_id: &str) -> Result<Vec<EpicSlim>> {
        decode_list(self.get(&format!("/documents/{doc_id}/epics")).await?)
    }

    pub async fn link_document_to_epic(&self, doc_id: &str, epic_id: i64) -> Result<()> {
        self.put_no_body(&format!("/documents/{doc_id}/epics/{epic_id}"))
            .await
            .map(|_| ())
    }

    pub async fn unlink_document_from_epic(&self, doc_id: &str, epic_id: i64) -> Result<()> {
        self.delete(&format!("/documents/{doc_id}/epics/{epic_id}")).await
    }

    // Entity templates

    pub async fn list_entity_templates(&self) -> Result<Vec<EntityTemplate>> {
        decode_list(self.get("/entity-templates").await?)
    }

    pub async fn get_entity_template(&self, template_id: &str) -> Result<EntityTemplate> {
        decode(self.get(&format!("/entity-templates/{template_id}")).await?)
    }

    pub async fn create_entity_template(
        &self,
        template: &CreateEntityTemplateInput,
    ) -> Result<EntityTemplate> {
        decode(self.post("/entity-templates", encode(template)?).await?)
    }

    pub async fn update_entity_template(
        &self,
        template_id: &str,
        template: &UpdateEntityTemplateInput,
    ) -> Result<EntityTemplate> {
        decode(
            self.put(&format!("/entity-templates/{template_id}"), encode(template)?)
                .await?,
        )
    }

    pub async fn delete_entity_template(&self, template_id: &str) -> Result<()> {
        self.delete(&format!("/entity-templates/{template_id}")).await
    }

    pub async fn enable_story_templates(&self) -> Result<()> {
        self.put_no_body("/entity-templates/enable").await.map(|_| ())
    }

    pub async fn disable_story_templates(&self) -> Result<()> {
        self.put_no_body("/entity-templates/disable").await.map(|_| ())
    }

    // Files

    pub async fn list_files(&self) -> Result<Vec<UploadedFile>> {
        decode_list(self.get("/files").await?)
    }

    pub async fn get_file(&self, file_id: i64) -> Result<UploadedFile> {
        decode(self.get(&format!("/files/{file_id}")).await?)
    }

    pub async fn update_file(&self, file_id: i64, params: &UpdateFileInput) -> Result<UploadedFile> {
        decode(self.put(&format!("/files/{file_id}"), encode(params)?).await?)
    }

    pub async fn delete_file(&self, file_id: i64) -> Result<()> {
        self.delete(&format!("/files/{file_id}")).await
    }

    /// Multipart upload; the one endpoint that does not speak JSON on
    /// the way in.
    pub async fn upload_file(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        story_id: Option<i64>,
    ) -> Result<Vec<UploadedFile>> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let mut form = reqwest::multipart::Form::new().part("file0", part);
        if let Some(id) = story_id {
            form = form.text("story_id", id.to_string());
        }
        let raw = self
            .dispatch(
                self.client.post(self.url("/files")).multipart(form),
                "POST",
                "/files",
            )
            .await?;
        decode_list(raw)
    }

    // Linked files

    pub async fn list_linked_files(&self) -> Result<Vec<LinkedFile>> {
        decode_list(self.get("/linked-files").await?)
    }

    pub async fn get_linked_file(&self, linked_file_id: i64) -> Result<LinkedFile> {
        decode(self.get(&format!("/linked-files/{linked_file_id}")).await?)
    }

    pub async fn create_linked_file(&self, params: &CreateLinkedFileInput) -> Result<LinkedFile> {
        decode(self.post("/linked-files", encode(params)?).await?)
    }

    pub async fn update_linked_file(
        &self,
        linked_file_id: i64,
        params: &UpdateLinkedFileInput,
    ) -> Result<LinkedFile> {
        decode(
            self.put(&format!("/linked-files/{linked_file_id}"), encode(params)?)
                .await?,
        )
    }

    pub async fn delete_linked_file(&self, linked_file_id: i64) -> Result<()> {
        self.delete(&format!("/linked-files/{linked_file_id}")).await
    }

    // Generic integrations (webhooks)

    pub async fn create_generic_integration(
        &self,
        integration: &CreateGenericIntegrationInput,
    ) -> Result<()> {
        self.post("/integrations/webhook", encode(integration)?)
            .await
            .map(|_| ())
    }

    pub async fn get_generic_integration(&self, integration_id: i64) -> Result<Value> {
        self.get(&format!("/integrations/webhook/{integration_id}")).await
    }

    pub async fn delete_generic_integration(&self, integration_id: i64) -> Result<()> {
        self.delete(&format!("/integrations/webhook/{integration_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_doubling_slashes() {
        let client = ApiClient::new("token").unwrap();
        assert_eq!(
            client.url("/stories/1"),
            "https://api.app.shortcut.com/api/v3/stories/1"
        );
        assert_eq!(
            client.url("stories/1"),
            "https://api.app.shortcut.com/api/v3/stories/1"
        );
    }

    #[test]
    fn custom_base_url_is_trimmed() {
        let client = ApiClient::with_base_url("token", "http://localhost:8080/api/v3/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api/v3");
        assert_eq!(client.url("/member"), "http://localhost:8080/api/v3/member");
    }

    #[test]
    fn token_with_control_chars_is_rejected() {
        assert!(ApiClient::new("bad\ntoken").is_err());
    }
}
