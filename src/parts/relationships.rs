//! Relationship files (`*.rels`).

use super::schema::NS_RELATIONSHIPS;
use super::xml::PartWriter;
use crate::error::{Error, Result};
use std::collections::HashSet;

/// A relationship entry in a .rels file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1")
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target path, relative to the source part's directory
    pub target: String,
}

/// Outgoing relationships of one part, in document order.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    entries: Vec<Relationship>,
    ids: HashSet<String>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship.
    ///
    /// Fails if `id` is already used in this file.
    pub fn add(
        &mut self,
        id: impl Into<String>,
        rel_type: &str,
        target: impl Into<String>,
    ) -> Result<()> {
        let id = id.into();
        if !self.ids.insert(id.clone()) {
            return Err(Error::PackagingFailure(format!(
                "duplicate relationship id {}",
                id
            )));
        }
        self.entries.push(Relationship {
            id,
            rel_type: rel_type.to_string(),
            target: target.into(),
        });
        Ok(())
    }

    /// Builder-style [`add`](Self::add).
    pub fn with(mut self, id: impl Into<String>, rel_type: &str, target: impl Into<String>) -> Result<Self> {
        self.add(id, rel_type, target)?;
        Ok(self)
    }

    /// Get a relationship by ID.
    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.entries.iter().find(|r| r.id == id)
    }

    /// Get relationships by type.
    pub fn get_by_type(&self, rel_type: &str) -> Vec<&Relationship> {
        self.entries
            .iter()
            .filter(|r| r.rel_type == rel_type)
            .collect()
    }

    /// Iterate over all relationships.
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.entries.iter()
    }

    /// Number of relationships.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no relationships.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the .rels part.
    pub fn to_xml(&self) -> Result<String> {
        let mut w = PartWriter::new()?;
        w.element("Relationships", &[("xmlns", NS_RELATIONSHIPS)], |w| {
            for rel in &self.entries {
                w.empty(
                    "Relationship",
                    &[
                        ("Id", rel.id.as_str()),
                        ("Type", rel.rel_type.as_str()),
                        ("Target", rel.target.as_str()),
                    ],
                )?;
            }
            Ok(())
        })?;
        w.finish()
    }
}

/// Relationship ID for the `n`th entry of a file.
pub fn rel_id(n: usize) -> String {
    format!("rId{}", n)
}
