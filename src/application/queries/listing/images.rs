// src/application/queries/listing/images.rs
use super::{
    ListingQueryService,
    rows::{row_field, view_rows},
};
use crate::{
    application::{ApplicationResult, dto::RecordEnvelope},
    domain::image::massage_image_record,
};
use serde_json::Value;

impl ListingQueryService {
    /// Pairs an `include_docs` view whose rows alternate image document,
    /// uploader document. Each uploader is attached as `user` on the image
    /// emitted just before it. Alternation is trusted: a view that breaks
    /// it attaches users to the wrong images. A trailing image without an
    /// uploader row is emitted without `user`.
    pub fn parse_images(&self, document: &Value) -> ApplicationResult<RecordEnvelope> {
        let rows = view_rows(document, "images")?;

        let mut images: Vec<Value> = Vec::with_capacity(rows.len().div_ceil(2));
        for (index, row) in rows.iter().enumerate() {
            let doc = row_field(row, "doc");
            if index % 2 == 0 {
                images.push(massage_image_record(doc, &self.attachment_urls));
            } else if let Some(Value::Object(image)) = images.last_mut() {
                image.insert("user".into(), doc);
            }
        }

        tracing::debug!(rows = rows.len(), records = images.len(), "shaped image listing");
        Ok(RecordEnvelope::new(images))
    }

    /// Shapes a by-user view where each row's `value` is an image record.
    pub fn parse_images_for_user(&self, document: &Value) -> ApplicationResult<RecordEnvelope> {
        let rows = view_rows(document, "images")?;

        let images: Vec<Value> = rows
            .iter()
            .map(|row| massage_image_record(row_field(row, "value"), &self.attachment_urls))
            .collect();

        tracing::debug!(records = images.len(), "shaped user image listing");
        Ok(RecordEnvelope::new(images))
    }
}
