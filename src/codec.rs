//! The pure decode/encode core.
//!
//! The transport hands this module an already-parsed, already
//! status-checked JSON document and gets back a typed value, or a typed
//! failure. Nothing here performs I/O or holds state, so the functions
//! are safe to call from any number of concurrent tasks.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::timestamp::INVALID_TIMESTAMP;

/// Hydrate a raw JSON document into a typed record.
///
/// Unknown keys are dropped, absent optionals take their declared
/// defaults, nested records (profiles, categories, threaded comments)
/// are hydrated recursively. A missing required field fails with
/// [`Error::Schema`] naming the field and the target record type.
pub fn decode<T: DeserializeOwned>(raw: Value) -> Result<T> {
    serde_json::from_value(raw).map_err(|e| classify::<T>(e))
}

/// Hydrate a JSON array element-by-element, so a failure reports the
/// element's record type rather than `Vec<..>`.
pub fn decode_list<T: DeserializeOwned>(raw: Value) -> Result<Vec<T>> {
    match raw {
        Value::Array(items) => items.into_iter().map(decode).collect(),
        other => Err(Error::Decode {
            entity: entity_name::<T>(),
            detail: format!("expected a JSON array, got {other}"),
        }),
    }
}

/// Serialize an input record to a request body.
///
/// Every unset optional field is omitted from the document entirely —
/// the remote API reads a transmitted `null` as "clear this field" but
/// a missing key as "leave unchanged", so the two must never collapse
/// into each other. Explicitly set values, including `false`, `0` and
/// empty lists, are emitted as-is. Nested input records get the same
/// treatment through their own `skip_serializing_if` declarations.
pub fn encode<T: Serialize>(record: &T) -> Result<Value> {
    serde_json::to_value(record).map_err(|e| Error::Decode {
        entity: entity_name::<T>(),
        detail: e.to_string(),
    })
}

fn classify<T>(err: serde_json::Error) -> Error {
    let entity = entity_name::<T>();
    let msg = err.to_string();
    if let Some(rest) = msg.strip_prefix("missing field `") {
        if let Some(field) = rest.split('`').next() {
            return Error::Schema {
                entity,
                field: field.to_string(),
            };
        }
    }
    if msg.contains(INVALID_TIMESTAMP) {
        return Error::Parse {
            entity,
            detail: msg,
        };
    }
    Error::Decode {
        entity,
        detail: msg,
    }
}

/// Unqualified record name for error messages, e.g.
/// `useshortcut::model::story::Story` -> `Story`.
fn entity_name<T>() -> String {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base).to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::{Label, Member, Story};

    #[test]
    fn unknown_keys_are_dropped() {
        let raw = json!({
            "name": "Spike",
            "some_future_field": {"nested": true},
            "another_addition": [1, 2, 3],
        });
        let story: Story = decode(raw).unwrap();
        assert_eq!(story.name, "Spike");
    }

    #[test]
    fn missing_required_field_names_it() {
        let raw = json!({"id": 7});
        let err = decode::<Story>(raw).unwrap_err();
        match err {
            Error::Schema { entity, field } => {
                assert_eq!(entity, "Story");
                assert_eq!(field, "name");
            }
            other => panic!("expected Schema error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_timestamp_is_a_parse_error() {
        let raw = json!({
            "id": 1,
            "external_id": null,
            "name": "bug",
            "archived": false,
            "color": "#ff0000",
            "created_at": "not-a-timestamp",
            "updated_at": "2023-01-01T00:00:00Z",
        });
        let err = decode::<Label>(raw).unwrap_err();
        match err {
            Error::Parse { entity, detail } => {
                assert_eq!(entity, "Label");
                assert!(detail.contains("invalid timestamp"));
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn decode_list_reports_element_type() {
        let err = decode_list::<Member>(json!({"not": "an array"})).unwrap_err();
        assert!(err.to_string().starts_with("Member:"));
    }

    #[test]
    fn entity_name_strips_path_and_generics() {
        assert_eq!(entity_name::<Story>(), "Story");
        assert_eq!(
            entity_name::<crate::model::SearchStoryResult>(),
            "SearchResults"
        );
    }
}
