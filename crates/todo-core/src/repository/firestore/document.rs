//! Firestore REST wire types
//!
//! Documents travel as `{ name, fields }` where every field value is
//! wrapped in a typed object such as `{"stringValue": "..."}`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult, NewTodo, Todo, TodoId, TodoPatch};

pub const FIELD_TEXT: &str = "text";
pub const FIELD_COMPLETED: &str = "completed";
pub const FIELD_CREATED_AT: &str = "createdAt";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringValue {
    #[serde(default)]
    pub string_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanValue {
    #[serde(default)]
    pub boolean_value: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimestampValue {
    #[serde(default)]
    pub timestamp_value: Option<String>,
}

/// The fields of a todo document; unknown fields are ignored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodoFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<StringValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<BooleanValue>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<TimestampValue>,
}

impl TodoFields {
    pub fn from_patch(patch: &TodoPatch) -> Self {
        Self {
            text: patch.text.clone().map(|s| StringValue { string_value: Some(s) }),
            completed: patch.completed.map(|b| BooleanValue { boolean_value: Some(b) }),
            created_at: None,
        }
    }
}

/// Field paths written by a patch, for `updateMask.fieldPaths`
pub fn patch_mask(patch: &TodoPatch) -> Vec<&'static str> {
    let mut mask = Vec::new();
    if patch.text.is_some() {
        mask.push(FIELD_TEXT);
    }
    if patch.completed.is_some() {
        mask.push(FIELD_COMPLETED);
    }
    mask
}

pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Full resource name, ends with the document id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub fields: TodoFields,
}

impl Document {
    pub fn from_new(todo: &NewTodo) -> Self {
        Self {
            name: None,
            fields: TodoFields {
                text: Some(StringValue { string_value: Some(todo.text.clone()) }),
                completed: Some(BooleanValue { boolean_value: Some(todo.completed) }),
                created_at: Some(TimestampValue {
                    timestamp_value: Some(format_timestamp(&todo.created_at)),
                }),
            },
        }
    }

    pub fn document_id(&self) -> Option<&str> {
        self.name
            .as_deref()
            .and_then(|name| name.rsplit('/').next())
            .filter(|id| !id.is_empty())
    }

    pub fn into_todo(self) -> DomainResult<Todo> {
        let id = self
            .document_id()
            .map(TodoId::document)
            .ok_or_else(|| DomainError::Decode("document without a name".to_string()))?;
        let text = self
            .fields
            .text
            .and_then(|v| v.string_value)
            .ok_or_else(|| DomainError::Decode(format!("document {} has no text", id)))?;
        let completed = self
            .fields
            .completed
            .and_then(|v| v.boolean_value)
            .unwrap_or(false);
        Ok(Todo { id, text, completed })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorStatus {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

/// Map a failed response to a domain error.
///
/// Prefers the canonical status name from the error body and falls back
/// to the HTTP status code when the body is not a Firestore error.
pub fn error_from_response(http_status: u16, body: &str) -> DomainError {
    let parsed = serde_json::from_str::<ErrorResponse>(body).ok().map(|r| r.error);
    let message = parsed
        .as_ref()
        .map(|e| e.message.clone())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.trim().to_string());
    let status = parsed.map(|e| e.status).unwrap_or_default();

    match (status.as_str(), http_status) {
        ("NOT_FOUND", _) | ("", 404) => DomainError::NotFound(message),
        ("PERMISSION_DENIED" | "UNAUTHENTICATED", _) | ("", 401 | 403) => {
            DomainError::PermissionDenied(message)
        }
        ("INVALID_ARGUMENT" | "FAILED_PRECONDITION", _) | ("", 400) => {
            DomainError::InvalidInput(message)
        }
        _ => DomainError::Remote { status: http_status, message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_new_todo_encoding() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let doc = Document::from_new(&NewTodo::new("Buy milk", at));
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            value,
            json!({
                "fields": {
                    "text": { "stringValue": "Buy milk" },
                    "completed": { "booleanValue": false },
                    "createdAt": { "timestampValue": "2024-05-01T12:30:00.000Z" }
                }
            })
        );
    }

    #[test]
    fn test_document_decoding() {
        let doc: Document = serde_json::from_value(json!({
            "name": "projects/demo/databases/(default)/documents/todos/Zx81",
            "fields": {
                "text": { "stringValue": "Walk dog" },
                "completed": { "booleanValue": true },
                "createdAt": { "timestampValue": "2024-05-01T12:30:00Z" },
                "owner": { "mapValue": {} }
            },
            "createTime": "2024-05-01T12:30:00.123456Z"
        }))
        .unwrap();

        assert_eq!(doc.document_id(), Some("Zx81"));
        let todo = doc.into_todo().unwrap();
        assert_eq!(todo, Todo::new(TodoId::document("Zx81"), "Walk dog").completed());
    }

    #[test]
    fn test_missing_completed_defaults_to_false() {
        let doc: Document = serde_json::from_value(json!({
            "name": "projects/demo/databases/(default)/documents/todos/a1",
            "fields": { "text": { "stringValue": "No flag" } }
        }))
        .unwrap();
        assert!(!doc.into_todo().unwrap().completed);
    }

    #[test]
    fn test_missing_text_is_a_decode_error() {
        let doc: Document = serde_json::from_value(json!({
            "name": "projects/demo/databases/(default)/documents/todos/a1",
            "fields": { "completed": { "booleanValue": true } }
        }))
        .unwrap();
        assert!(matches!(doc.into_todo(), Err(DomainError::Decode(_))));
    }

    #[test]
    fn test_patch_encoding() {
        let patch = TodoPatch::completed(true);
        assert_eq!(patch_mask(&patch), vec![FIELD_COMPLETED]);
        assert_eq!(
            serde_json::to_value(TodoFields::from_patch(&patch)).unwrap(),
            json!({ "completed": { "booleanValue": true } })
        );
    }

    #[test]
    fn test_empty_list_response() {
        let resp: ListDocumentsResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.documents.is_empty());
        assert!(resp.next_page_token.is_none());
    }

    #[test]
    fn test_error_mapping() {
        let body = r#"{"error":{"code":404,"message":"No document to update","status":"NOT_FOUND"}}"#;
        assert_eq!(
            error_from_response(404, body),
            DomainError::NotFound("No document to update".to_string())
        );

        let body = r#"{"error":{"code":403,"message":"Missing or insufficient permissions.","status":"PERMISSION_DENIED"}}"#;
        assert!(matches!(error_from_response(403, body), DomainError::PermissionDenied(_)));

        assert_eq!(
            error_from_response(502, "Bad Gateway"),
            DomainError::Remote { status: 502, message: "Bad Gateway".to_string() }
        );
    }
}
