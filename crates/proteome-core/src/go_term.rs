//! GO-term vocabulary records

use crate::fields;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A GO term; only ever used as an annotation target
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoTerm {
    pub id: String,

    #[serde(default, deserialize_with = "fields::text")]
    pub external_id: Option<String>,

    #[serde(default, deserialize_with = "fields::text")]
    pub name: Option<String>,

    /// Remaining descriptive columns (namespace, definition, ...)
    #[serde(flatten)]
    pub attributes: HashMap<String, serde_json::Value>,
}

impl GoTerm {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    pub fn external_key(&self) -> Option<&str> {
        self.external_id.as_deref().filter(|id| !id.is_empty())
    }
}
