// src/domain/image/record.rs
use serde_json::Value;

/// Attachment name under which uploads are stored; its `length` is
/// reported on every listed image.
pub const PRIMARY_ATTACHMENT: &str = "jen.png";

const PRIVATE_FIELDS: [&str; 2] = ["userId", "_attachments"];

/// Builds public attachment URLs of the form `{base}/{id}/{file}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentUrls {
    base: String,
}

impl AttachmentUrls {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, id: &str, file_name: &str) -> String {
        format!("{}/{}/{}", self.base, id, file_name)
    }
}

/// Derives `url` and `length` on an image record and strips the fields
/// that must not leave the server. Records that are not JSON objects are
/// returned untouched.
pub fn massage_image_record(mut record: Value, urls: &AttachmentUrls) -> Value {
    let Some(fields) = record.as_object_mut() else {
        tracing::warn!(record = %record, "skipping non-object image record");
        return record;
    };

    let id = fields.get("_id").and_then(Value::as_str).unwrap_or_default();
    let file_name = fields
        .get("fileName")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let url = urls.url_for(id, file_name);

    let length = fields
        .get("_attachments")
        .and_then(|attachments| attachments.get(PRIMARY_ATTACHMENT))
        .and_then(|attachment| attachment.get("length"))
        .and_then(byte_length)
        .map(Value::from)
        .unwrap_or(Value::Null);

    fields.insert("url".into(), Value::String(url));
    fields.insert("length".into(), length);
    for key in PRIVATE_FIELDS {
        fields.remove(key);
    }

    record
}

/// Integral byte count of a JSON number; fractional values are truncated.
#[allow(clippy::cast_possible_truncation)]
fn byte_length(length: &Value) -> Option<i64> {
    length
        .as_i64()
        .or_else(|| length.as_f64().map(|bytes| bytes as i64))
}
