// tests/support/builders.rs
use bluepic_core::{
    application::queries::listing::ListingQueryService,
    domain::image::AttachmentUrls,
    presentation::http::params::RequestParams,
};
use serde_json::{Value, json};

pub const BASE_URL: &str = "http://couch.test:5984/bluepic_db";

pub fn listing_service() -> ListingQueryService {
    ListingQueryService::new(AttachmentUrls::new(BASE_URL))
}

/// Stored image document as the database returns it.
pub fn image_doc(id: &str, file_name: &str, user_id: &str, length: i64) -> Value {
    json!({
        "_id": id,
        "_rev": "1-abc",
        "type": "image",
        "fileName": file_name,
        "displayName": format!("Display {id}"),
        "contentType": "image/png",
        "uploadedTs": "2016-05-01T10:00:00",
        "userId": user_id,
        "_attachments": {
            "jen.png": { "content_type": "image/png", "length": length, "stub": true }
        }
    })
}

pub fn user_doc(id: &str, name: &str) -> Value {
    json!({ "_id": id, "type": "user", "name": name })
}

pub fn doc_row(doc: Value) -> Value {
    json!({ "id": doc["_id"].clone(), "key": doc["_id"].clone(), "doc": doc })
}

pub fn value_row(value: Value) -> Value {
    json!({ "id": value["_id"].clone(), "key": value["_id"].clone(), "value": value })
}

pub fn view(rows: Vec<Value>) -> Value {
    json!({ "total_rows": rows.len(), "offset": 0, "rows": rows })
}

pub fn upload_params(display_name: &str, file_name: &str, user_id: &str) -> RequestParams {
    RequestParams::new()
        .with("displayName", display_name)
        .with("fileName", file_name)
        .with("userId", user_id)
}
