use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform wrapper returned by every listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordEnvelope {
    pub number_of_records: usize,
    pub records: Vec<Value>,
}

impl RecordEnvelope {
    pub fn new(records: Vec<Value>) -> Self {
        Self {
            number_of_records: records.len(),
            records,
        }
    }

    pub fn into_value(self) -> Value {
        let mut envelope = serde_json::Map::new();
        envelope.insert(
            "number_of_records".into(),
            Value::from(self.number_of_records),
        );
        envelope.insert("records".into(), Value::Array(self.records));
        Value::Object(envelope)
    }
}

impl From<Vec<Value>> for RecordEnvelope {
    fn from(records: Vec<Value>) -> Self {
        Self::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn count_tracks_records() {
        let envelope = RecordEnvelope::new(vec![json!({"a": 1}), json!({"b": 2})]);
        assert_eq!(envelope.number_of_records, 2);
        assert_eq!(envelope.number_of_records, envelope.records.len());
    }

    #[test]
    fn serializes_to_the_wire_shape() {
        let envelope = RecordEnvelope::new(vec![json!({"a": 1})]);
        let expected = json!({ "number_of_records": 1, "records": [{"a": 1}] });
        assert_eq!(serde_json::to_value(&envelope).unwrap(), expected);
        assert_eq!(envelope.into_value(), expected);
    }
}
