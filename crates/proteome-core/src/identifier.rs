//! Identifier resolution across the four alias tiers
//!
//! Proteins can be named by their primary id, an external id, a
//! secondary id, or an ambiguous secondary id shared with other
//! proteins. GO terms can be named by primary or external id.
//! [`IdentifierIndexBuilder`] accumulates records; [`IdentifierIndex`]
//! is the frozen, read-only result.

use crate::go_term::GoTerm;
use crate::id_record::IdRecord;
use crate::protein::{Protein, ProteinDraft, ProteinRecord};
use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;

/// Mutable phase of identifier registration
#[derive(Debug, Default)]
pub struct IdentifierIndexBuilder {
    drafts: IndexMap<String, ProteinDraft>,
    external_to_protein: HashMap<String, String>,
    secondary_to_protein: HashMap<String, String>,
    ambiguous_to_proteins: HashMap<String, IndexSet<String>>,
    go_terms: HashMap<String, GoTerm>,
    external_to_go_term: HashMap<String, String>,
}

impl IdentifierIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a protein under its primary and external ids
    ///
    /// Returns `true` when the primary id was already registered; the new
    /// record replaces the old one but keeps its storage position.
    pub fn add_protein(&mut self, record: ProteinRecord) -> bool {
        let id = record.id.clone();
        let external_id = record.external_key().map(str::to_string);

        let replaced = self.drafts.insert(id.clone(), ProteinDraft::new(record));
        if let Some(old_external) = replaced.as_ref().and_then(|d| d.record().external_key()) {
            unlink(&mut self.external_to_protein, old_external, &id);
        }
        if let Some(external_id) = external_id {
            self.external_to_protein.insert(external_id, id);
        }
        replaced.is_some()
    }

    /// Register a GO term under its primary and external ids
    pub fn add_go_term(&mut self, term: GoTerm) -> bool {
        let id = term.id.clone();
        let external_id = term.external_key().map(str::to_string);

        let replaced = self.go_terms.insert(id.clone(), term);
        if let Some(old_external) = replaced.as_ref().and_then(GoTerm::external_key) {
            unlink(&mut self.external_to_go_term, old_external, &id);
        }
        if let Some(external_id) = external_id {
            self.external_to_go_term.insert(external_id, id);
        }
        replaced.is_some()
    }

    /// Enrich a protein with alias tiers, joined on external id
    ///
    /// Returns `false` when the external id matches no loaded protein.
    pub fn apply_id_record(&mut self, record: &IdRecord) -> bool {
        let Some(protein_id) = record
            .external_id
            .as_deref()
            .and_then(|ext| self.external_to_protein.get(ext))
            .cloned()
        else {
            return false;
        };
        let Some(draft) = self.drafts.get_mut(&protein_id) else {
            return false;
        };

        draft.absorb(record);

        for secondary_id in &record.secondary_ids {
            self.secondary_to_protein
                .insert(secondary_id.clone(), protein_id.clone());
        }
        for ambiguous_id in &record.ambiguous_secondary_ids {
            self.ambiguous_to_proteins
                .entry(ambiguous_id.clone())
                .or_default()
                .insert(protein_id.clone());
        }
        true
    }

    /// Freeze every draft and produce the read-only index
    pub fn finish(self) -> IdentifierIndex {
        let proteins = self
            .drafts
            .into_iter()
            .map(|(id, draft)| (id, draft.finish()))
            .collect();

        IdentifierIndex {
            proteins,
            external_to_protein: self.external_to_protein,
            secondary_to_protein: self.secondary_to_protein,
            ambiguous_to_proteins: self.ambiguous_to_proteins,
            go_terms: self.go_terms,
            external_to_go_term: self.external_to_go_term,
        }
    }
}

/// Drop `external -> id` unless another record has since claimed it
fn unlink(map: &mut HashMap<String, String>, external: &str, id: &str) {
    if map.get(external).is_some_and(|owner| owner == id) {
        map.remove(external);
    }
}

/// Read-only identifier maps
#[derive(Debug, Default)]
pub struct IdentifierIndex {
    proteins: IndexMap<String, Protein>,
    external_to_protein: HashMap<String, String>,
    secondary_to_protein: HashMap<String, String>,
    ambiguous_to_proteins: HashMap<String, IndexSet<String>>,
    go_terms: HashMap<String, GoTerm>,
    external_to_go_term: HashMap<String, String>,
}

impl IdentifierIndex {
    /// Resolve any spelling of a protein identifier to its primary id
    ///
    /// Tiers are tried in order: primary, external, secondary, ambiguous.
    /// An ambiguous alias yields the first protein it was attached to.
    pub fn resolve_protein(&self, identifier: &str) -> Option<&str> {
        if let Some((id, _)) = self.proteins.get_key_value(identifier) {
            return Some(id.as_str());
        }
        if let Some(id) = self.external_to_protein.get(identifier) {
            return Some(id.as_str());
        }
        if let Some(id) = self.secondary_to_protein.get(identifier) {
            return Some(id.as_str());
        }
        self.ambiguous_to_proteins
            .get(identifier)
            .and_then(|ids| ids.first())
            .map(String::as_str)
    }

    /// Map an external GO id to its primary id; anything else passes through
    pub fn resolve_go_term<'a>(&'a self, identifier: &'a str) -> &'a str {
        self.external_to_go_term
            .get(identifier)
            .map(String::as_str)
            .unwrap_or(identifier)
    }

    /// Every protein an ambiguous alias is attached to, in attachment order
    pub fn ambiguous_candidates(&self, alias: &str) -> Vec<&str> {
        self.ambiguous_to_proteins
            .get(alias)
            .map(|ids| ids.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Look up a protein by primary id only
    pub fn protein(&self, id: &str) -> Option<&Protein> {
        self.proteins.get(id)
    }

    /// Look up a GO term by primary id only
    pub fn go_term(&self, id: &str) -> Option<&GoTerm> {
        self.go_terms.get(id)
    }

    /// All proteins in load order
    pub fn proteins(&self) -> impl Iterator<Item = &Protein> {
        self.proteins.values()
    }

    pub fn protein_count(&self) -> usize {
        self.proteins.len()
    }

    pub fn go_term_count(&self) -> usize {
        self.go_terms.len()
    }

    pub fn external_id_count(&self) -> usize {
        self.external_to_protein.len()
    }

    pub fn secondary_id_count(&self) -> usize {
        self.secondary_to_protein.len()
    }

    pub fn ambiguous_id_count(&self) -> usize {
        self.ambiguous_to_proteins.len()
    }
}
