use serde::Serialize;

/// Body of `POST /integrations/webhook`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateGenericIntegrationInput {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}
