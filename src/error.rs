use serde_json::Value;

/// Errors surfaced by the client and the decode/encode core.
///
/// Decode failures are split by cause: a missing required field is a
/// `Schema` error (the remote schema or a fixture broke its contract),
/// a malformed timestamp string is a `Parse` error, and any other shape
/// mismatch is a `Decode` error. None of them are silently defaulted.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("api error {status}: {message}")]
    Api {
        status: u16,
        message: String,
        /// Server-provided JSON error body, when there was one.
        body: Option<Value>,
    },

    #[error("{entity}: missing required field `{field}`")]
    Schema { entity: String, field: String },

    #[error("{entity}: {detail}")]
    Parse { entity: String, detail: String },

    #[error("{entity}: {detail}")]
    Decode { entity: String, detail: String },
}

pub type Result<T> = std::result::Result<T, Error>;
