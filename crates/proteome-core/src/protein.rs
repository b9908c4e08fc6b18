//! Protein records and their alias tiers

use crate::fields;
use crate::id_record::IdRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A protein node as supplied by a record source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProteinRecord {
    /// Canonical identifier (primary key)
    pub id: String,

    #[serde(default, deserialize_with = "fields::text")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "fields::text")]
    pub external_id: Option<String>,

    #[serde(default, deserialize_with = "fields::text")]
    pub protein_sequence: Option<String>,

    #[serde(default, deserialize_with = "fields::dataset")]
    pub dataset: Option<String>,

    /// Taxon identifier, often numeric in exports
    #[serde(default, deserialize_with = "fields::text")]
    pub organism: Option<String>,

    #[serde(default, deserialize_with = "fields::text")]
    pub organism_name: Option<String>,

    #[serde(default, deserialize_with = "fields::text")]
    pub node_type: Option<String>,

    #[serde(default, deserialize_with = "fields::date")]
    pub date: Option<DateTime<Utc>>,
}

impl ProteinRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    /// External id, if present and non-empty
    pub fn external_key(&self) -> Option<&str> {
        self.external_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// A fully resolved protein, read-only once the index is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Protein {
    pub id: String,

    /// Taken from the identifier-alias batch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_sequence: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organism: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organism_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ambiguous_secondary_ids: Option<Vec<String>>,
}

impl Protein {
    pub fn secondary_ids(&self) -> &[String] {
        self.secondary_ids.as_deref().unwrap_or_default()
    }

    pub fn ambiguous_secondary_ids(&self) -> &[String] {
        self.ambiguous_secondary_ids.as_deref().unwrap_or_default()
    }
}

/// Mutable per-protein state during the build pass
#[derive(Debug, Clone)]
pub struct ProteinDraft {
    record: ProteinRecord,
    uuid: Option<String>,
    secondary_ids: Vec<String>,
    ambiguous_secondary_ids: Vec<String>,
}

impl ProteinDraft {
    pub fn new(record: ProteinRecord) -> Self {
        Self {
            record,
            uuid: None,
            secondary_ids: Vec::new(),
            ambiguous_secondary_ids: Vec::new(),
        }
    }

    pub fn record(&self) -> &ProteinRecord {
        &self.record
    }

    /// Merge an alias record; later UUIDs replace earlier ones
    pub fn absorb(&mut self, alias: &IdRecord) {
        if let Some(uuid) = alias.uuid.as_ref().filter(|u| !u.is_empty()) {
            self.uuid = Some(uuid.clone());
        }
        extend_unique(&mut self.secondary_ids, &alias.secondary_ids);
        extend_unique(&mut self.ambiguous_secondary_ids, &alias.ambiguous_secondary_ids);
    }

    /// Freeze into the immutable record
    pub fn finish(self) -> Protein {
        let ProteinRecord {
            id,
            name,
            external_id,
            protein_sequence,
            dataset,
            organism,
            organism_name,
            node_type,
            date,
        } = self.record;

        Protein {
            id,
            uuid: self.uuid,
            name,
            external_id,
            protein_sequence,
            dataset,
            organism,
            organism_name,
            node_type,
            date,
            secondary_ids: non_empty(self.secondary_ids),
            ambiguous_secondary_ids: non_empty(self.ambiguous_secondary_ids),
        }
    }
}

fn extend_unique(target: &mut Vec<String>, ids: &[String]) {
    for id in ids {
        if !target.contains(id) {
            target.push(id.clone());
        }
    }
}

fn non_empty(ids: Vec<String>) -> Option<Vec<String>> {
    (!ids.is_empty()).then_some(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_decoding_is_lenient() {
        let record: ProteinRecord = serde_json::from_value(json!({
            "id": "P1",
            "name": "Kinase A",
            "dataset": ["STRING", "UniProt"],
            "organism": 3702,
            "date": "2024-01-15",
            "unexpected_column": true
        }))
        .unwrap();

        assert_eq!(record.id, "P1");
        assert_eq!(record.dataset.as_deref(), Some("STRING"));
        assert_eq!(record.organism.as_deref(), Some("3702"));
        assert!(record.date.is_some());
        assert!(record.external_id.is_none());
    }

    #[test]
    fn test_external_key_ignores_empty() {
        assert_eq!(ProteinRecord::new("P1").with_external_id("").external_key(), None);
        assert_eq!(
            ProteinRecord::new("P1").with_external_id("E1").external_key(),
            Some("E1")
        );
    }

    #[test]
    fn test_draft_absorbs_aliases() {
        let mut draft = ProteinDraft::new(ProteinRecord::new("P1").with_name("Kinase A"));
        draft.absorb(&IdRecord::new("E1").with_uuid("u-1").with_secondary_id("S1"));
        draft.absorb(
            &IdRecord::new("E1")
                .with_uuid("u-2")
                .with_secondary_id("S1")
                .with_secondary_id("S2")
                .with_ambiguous_id("A1"),
        );

        let protein = draft.finish();
        assert_eq!(protein.uuid.as_deref(), Some("u-2"));
        assert_eq!(protein.secondary_ids(), ["S1".to_string(), "S2".to_string()]);
        assert_eq!(protein.ambiguous_secondary_ids(), ["A1".to_string()]);
        assert_eq!(protein.name.as_deref(), Some("Kinase A"));
    }

    #[test]
    fn test_finish_without_aliases() {
        let protein = ProteinDraft::new(ProteinRecord::new("P2")).finish();
        assert!(protein.uuid.is_none());
        assert!(protein.secondary_ids.is_none());
        assert!(protein.secondary_ids().is_empty());
    }
}
