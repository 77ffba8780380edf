// src/domain/image/entity.rs
use super::value_objects::{DisplayName, FileName, UploadedTimestamp};
use serde::Serialize;
use serde_json::{Map, Value};

pub const IMAGE_DOCUMENT_TYPE: &str = "image";

/// Metadata document written next to an uploaded photo. Built once per
/// upload request and handed to the storage call as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewImageDocument {
    pub content_type: String,
    pub file_name: FileName,
    pub user_id: String,
    pub display_name: DisplayName,
    pub uploaded_ts: UploadedTimestamp,
    #[serde(rename = "type")]
    pub kind: String,
}

impl NewImageDocument {
    pub fn new(
        content_type: impl Into<String>,
        file_name: FileName,
        user_id: impl Into<String>,
        display_name: DisplayName,
        uploaded_ts: UploadedTimestamp,
    ) -> Self {
        Self {
            content_type: content_type.into(),
            file_name,
            user_id: user_id.into(),
            display_name,
            uploaded_ts,
            kind: IMAGE_DOCUMENT_TYPE.to_string(),
        }
    }

    pub fn into_map(self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("contentType".into(), Value::String(self.content_type));
        map.insert("fileName".into(), Value::String(self.file_name.to_string()));
        map.insert("userId".into(), Value::String(self.user_id));
        map.insert(
            "displayName".into(),
            Value::String(self.display_name.as_str().to_string()),
        );
        map.insert(
            "uploadedTs".into(),
            Value::String(self.uploaded_ts.as_str().to_string()),
        );
        map.insert("type".into(), Value::String(self.kind));
        map
    }
}
