//! Identifier-alias records

use crate::fields;
use serde::{Deserialize, Serialize};

/// Alias data joined onto a protein through its external id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdRecord {
    #[serde(default, deserialize_with = "fields::text")]
    pub uuid: Option<String>,

    /// Join key back to `ProteinRecord::external_id`
    #[serde(default, deserialize_with = "fields::text")]
    pub external_id: Option<String>,

    /// Unique aliases, one protein each
    #[serde(default, deserialize_with = "fields::string_list")]
    pub secondary_ids: Vec<String>,

    /// Shared aliases, possibly several proteins each
    #[serde(default, deserialize_with = "fields::string_list")]
    pub ambiguous_secondary_ids: Vec<String>,
}

impl IdRecord {
    pub fn new(external_id: impl Into<String>) -> Self {
        Self {
            external_id: Some(external_id.into()),
            ..Default::default()
        }
    }

    pub fn with_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = Some(uuid.into());
        self
    }

    pub fn with_secondary_id(mut self, id: impl Into<String>) -> Self {
        self.secondary_ids.push(id.into());
        self
    }

    pub fn with_ambiguous_id(mut self, id: impl Into<String>) -> Self {
        self.ambiguous_secondary_ids.push(id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_lists_decode_empty() {
        let record: IdRecord = serde_json::from_value(json!({
            "uuid": "0b6c-44",
            "external_id": "E1",
            "secondary_ids": null
        }))
        .unwrap();

        assert_eq!(record.external_id.as_deref(), Some("E1"));
        assert!(record.secondary_ids.is_empty());
        assert!(record.ambiguous_secondary_ids.is_empty());
    }

    #[test]
    fn test_lists_drop_blank_entries() {
        let record: IdRecord = serde_json::from_value(json!({
            "external_id": "E1",
            "secondary_ids": ["S1", "", "S2"],
            "ambiguous_secondary_ids": ["A1"]
        }))
        .unwrap();

        assert_eq!(record.secondary_ids, vec!["S1", "S2"]);
        assert_eq!(record.ambiguous_secondary_ids, vec!["A1"]);
    }
}
