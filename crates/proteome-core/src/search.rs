//! Ranked substring search over protein identifiers and names

use crate::protein::Protein;
use serde::{Deserialize, Serialize};

/// Relevance tier of a match; lower is more relevant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    ExactPrimaryId = 0,
    ExactExternalId = 1,
    ExactSecondaryId = 2,
    ExactName = 3,
    Substring = 4,
}

/// A query normalized for case-insensitive matching
#[derive(Debug, Clone)]
pub struct Needle(String);

impl Needle {
    /// Trims surrounding whitespace and lowercases
    pub fn new(query: &str) -> Self {
        Self(query.trim().to_lowercase())
    }

    fn contained_in(&self, field: &str) -> bool {
        field.to_lowercase().contains(&self.0)
    }

    fn equals(&self, field: &str) -> bool {
        field.to_lowercase() == self.0
    }

    /// Whether any searchable field contains the needle
    ///
    /// Fields are checked in order: primary id, external id, secondary
    /// ids, ambiguous secondary ids, name. The first hit wins.
    pub fn matches(&self, protein: &Protein) -> bool {
        self.contained_in(&protein.id)
            || protein
                .external_id
                .as_deref()
                .is_some_and(|id| self.contained_in(id))
            || protein.secondary_ids().iter().any(|id| self.contained_in(id))
            || protein
                .ambiguous_secondary_ids()
                .iter()
                .any(|id| self.contained_in(id))
            || protein
                .name
                .as_deref()
                .is_some_and(|name| self.contained_in(name))
    }

    pub fn tier(&self, protein: &Protein) -> MatchTier {
        if self.equals(&protein.id) {
            MatchTier::ExactPrimaryId
        } else if protein.external_id.as_deref().is_some_and(|id| self.equals(id)) {
            MatchTier::ExactExternalId
        } else if protein.secondary_ids().iter().any(|id| self.equals(id)) {
            MatchTier::ExactSecondaryId
        } else if protein.name.as_deref().is_some_and(|name| self.equals(name)) {
            MatchTier::ExactName
        } else {
            MatchTier::Substring
        }
    }
}

/// Filter, rank by tier, truncate
///
/// The sort is stable, so proteins within a tier keep their input order.
pub fn rank<'a, I>(proteins: I, query: &str, limit: usize) -> Vec<&'a Protein>
where
    I: IntoIterator<Item = &'a Protein>,
{
    let needle = Needle::new(query);
    let mut hits: Vec<(MatchTier, &Protein)> = proteins
        .into_iter()
        .filter(|protein| needle.matches(protein))
        .map(|protein| (needle.tier(protein), protein))
        .collect();

    hits.sort_by_key(|(tier, _)| *tier);
    hits.into_iter().take(limit).map(|(_, protein)| protein).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id_record::IdRecord;
    use crate::protein::{ProteinDraft, ProteinRecord};

    fn protein(
        id: &str,
        external: Option<&str>,
        name: Option<&str>,
        secondary: &[&str],
    ) -> Protein {
        let mut record = ProteinRecord::new(id);
        record.external_id = external.map(str::to_string);
        record.name = name.map(str::to_string);
        let mut draft = ProteinDraft::new(record);
        let mut alias = IdRecord::new(external.unwrap_or(id));
        alias.secondary_ids = secondary.iter().map(|s| s.to_string()).collect();
        draft.absorb(&alias);
        draft.finish()
    }

    #[test]
    fn test_tiers() {
        let p = protein("AT1G01010", Some("Q0WV96"), Some("NAC001"), &["F22L4.1"]);

        assert_eq!(Needle::new("at1g01010").tier(&p), MatchTier::ExactPrimaryId);
        assert_eq!(Needle::new("q0wv96").tier(&p), MatchTier::ExactExternalId);
        assert_eq!(Needle::new("F22L4.1").tier(&p), MatchTier::ExactSecondaryId);
        assert_eq!(Needle::new("nac001").tier(&p), MatchTier::ExactName);
        assert_eq!(Needle::new("AT1G").tier(&p), MatchTier::Substring);
    }

    #[test]
    fn test_matches_any_field() {
        let mut p = protein("P1", Some("E1"), Some("Kinase"), &["S1"]);
        p.ambiguous_secondary_ids = Some(vec!["AMB7".to_string()]);

        assert!(Needle::new("p1").matches(&p));
        assert!(Needle::new("e1").matches(&p));
        assert!(Needle::new("s1").matches(&p));
        assert!(Needle::new("amb").matches(&p));
        assert!(Needle::new("KIN").matches(&p));
        assert!(!Needle::new("phosphatase").matches(&p));
    }

    #[test]
    fn test_exact_primary_ranks_first() {
        let proteins = vec![
            protein("ABC10", None, None, &[]),
            protein("XABC1", None, Some("ABC1"), &[]),
            protein("ABC1", None, None, &[]),
            protein("ABC11", None, None, &[]),
        ];

        let results = rank(&proteins, "abc1", 1);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "ABC1");

        let results = rank(&proteins, "abc1", 10);
        let ids: Vec<_> = results.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["ABC1", "XABC1", "ABC10", "ABC11"]);
    }

    #[test]
    fn test_blank_query_matches_everything() {
        let proteins: Vec<_> = (0..8)
            .map(|i| protein(&format!("P{}", i), None, None, &[]))
            .collect();

        assert_eq!(rank(&proteins, "", 5).len(), 5);
        assert_eq!(rank(&proteins, "   ", 50).len(), 8);
    }

    #[test]
    fn test_zero_limit() {
        let proteins = vec![protein("P1", None, None, &[])];
        assert!(rank(&proteins, "P1", 0).is_empty());
    }
}
