//! Firestore Document Codec
//!
//! Conversion between items and the REST API's typed-value documents,
//! e.g. `{"fields": {"text": {"stringValue": "Buy milk"}}}`.

use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::domain::{Item, ItemId, ItemInput, StoreError, StoreResult};

pub(super) const FIELD_TEXT: &str = "text";
pub(super) const FIELD_COMPLETED: &str = "completed";
pub(super) const FIELD_CREATED_AT: &str = "createdAt";

/// A document as returned by the REST API
#[derive(Debug, Deserialize)]
pub(super) struct Document {
    /// Full resource name, `projects/.../documents/{collection}/{id}`
    pub name: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

/// Body of a collection listing
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ListResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Error envelope, `{"error": {"code": 404, "message": "...", "status": "NOT_FOUND"}}`
#[derive(Debug, Deserialize)]
pub(super) struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorDetail {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Request body for inserting a new record
pub(super) fn encode_input(input: &ItemInput) -> Value {
    json!({
        "fields": {
            FIELD_TEXT: { "stringValue": input.text },
            FIELD_COMPLETED: { "booleanValue": input.completed },
            FIELD_CREATED_AT: { "stringValue": input.created_at },
        }
    })
}

/// Request body for patching the completion flag
pub(super) fn encode_completed(completed: bool) -> Value {
    json!({
        "fields": {
            FIELD_COMPLETED: { "booleanValue": completed },
        }
    })
}

/// Last path segment of a document name
pub(super) fn document_id(name: &str) -> Option<ItemId> {
    name.rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .map(ItemId::from)
}

impl Document {
    pub fn id(&self) -> StoreResult<ItemId> {
        document_id(&self.name)
            .ok_or_else(|| StoreError::Decode(format!("document name `{}` has no id", self.name)))
    }

    pub fn into_item(self) -> StoreResult<Item> {
        let id = self.id()?;
        let text = string_field(&self.fields, FIELD_TEXT)
            .ok_or_else(|| StoreError::Decode(format!("document {} has no `{}`", id, FIELD_TEXT)))?;
        let completed = bool_field(&self.fields, FIELD_COMPLETED).unwrap_or(false);
        let created_at = string_field(&self.fields, FIELD_CREATED_AT).unwrap_or_default();
        Ok(Item {
            id,
            text,
            completed,
            created_at,
        })
    }
}

fn string_field(fields: &Map<String, Value>, name: &str) -> Option<String> {
    let value = fields.get(name)?;
    value
        .get("stringValue")
        .or_else(|| value.get("timestampValue"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn bool_field(fields: &Map<String, Value>, name: &str) -> Option<bool> {
    fields.get(name)?.get("booleanValue")?.as_bool()
}
