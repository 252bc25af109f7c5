//! Typed records mirroring the Shortcut API v3 wire shapes.
//!
//! Read entities are produced only by [`crate::codec::decode`] and are
//! never mutated in place; updates go through the `*Input` records,
//! whose unset fields are stripped from the request body entirely.

pub mod comment;
pub mod custom_field;
pub mod doc;
pub mod epic;
pub mod file;
pub mod group;
pub mod health;
pub mod integration;
pub mod iteration;
pub mod label;
pub mod member;
pub mod milestone;
pub mod objective;
pub mod project;
pub mod search;
pub mod story;
pub mod task;
pub mod template;
pub mod timestamp;
pub mod workflow;

pub use comment::{
    CreateCommentInput, StoryComment, StoryReaction, ThreadedComment, UpdateCommentInput,
};
pub use custom_field::{
    CustomField, CustomFieldEnumValue, CustomFieldValueInput, StoryCustomField,
    UpdateCustomFieldEnumValueInput, UpdateCustomFieldInput,
};
pub use doc::{CreateDocInput, Doc, DocSlim, UpdateDocInput};
pub use epic::{
    CreateEpicInput, Epic, EpicSlim, EpicState, EpicWorkflow, UpdateEpicInput,
};
pub use file::{
    CreateLinkedFileInput, LinkedFile, UpdateFileInput, UpdateLinkedFileInput, UploadedFile,
};
pub use group::{CreateGroupInput, Group, UpdateGroupInput};
pub use health::{CreateHealthInput, Health, UpdateHealthInput};
pub use integration::CreateGenericIntegrationInput;
pub use iteration::{CreateIterationInput, Iteration, UpdateIterationInput};
pub use label::{CreateLabelParams, Label, UpdateLabelInput};
pub use member::{Member, Profile};
pub use milestone::{
    Category, CreateCategoryParams, CreateMilestoneInput, Milestone, MilestoneStats,
    UpdateCategoryInput, UpdateMilestoneInput,
};
pub use objective::{
    CreateObjectiveInput, KeyResult, KeyResultInput, Objective, UpdateObjectiveInput,
};
pub use project::{CreateProjectInput, Project, Repository, UpdateProjectInput};
pub use search::{
    DocumentSearchResults, EpicSearchResults, IterationSearchResults, ObjectiveSearchResults,
    QueryStoriesInput, SearchInputs, SearchResults, SearchStoryResult, StorySearchResults,
};
pub use story::{
    CreateStoryFromTemplateInput, CreateStoryParams, Story, StoryHistory, StoryLink,
    StoryLinkInput, StorySlim, UpdateStoriesInput, UpdateStoryInput,
};
pub use task::{CreateTaskInput, Task, UpdateTaskInput};
pub use template::{CreateEntityTemplateInput, EntityTemplate, UpdateEntityTemplateInput};
pub use workflow::{Workflow, WorkflowState};

#[cfg(test)]
pub mod tests;
