use super::{
    ListingQueryService,
    rows::{row_field, view_rows},
};
use crate::application::{ApplicationResult, dto::RecordEnvelope};
use serde_json::Value;

impl ListingQueryService {
    /// User rows are passed through exactly as the view projected them.
    pub fn parse_users(&self, document: &Value) -> ApplicationResult<RecordEnvelope> {
        let users: Vec<Value> = view_rows(document, "users")?
            .iter()
            .map(|row| row_field(row, "value"))
            .collect();

        tracing::debug!(records = users.len(), "shaped user listing");
        Ok(RecordEnvelope::new(users))
    }
}
