//! Physical entity types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use super::reference::EntityReference;

/// The concrete kind of a simple physical entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhysicalEntityKind {
    Protein,
    SmallMolecule,
    Dna,
    Rna,
}

impl PhysicalEntityKind {
    /// Stable string form, matching the serialized representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Protein => "protein",
            Self::SmallMolecule => "small-molecule",
            Self::Dna => "dna",
            Self::Rna => "rna",
        }
    }
}

impl std::fmt::Display for PhysicalEntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Viewport coordinates, as recorded by the editor client.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A simple physical entity: one occurrence of a protein, small molecule,
/// DNA, or RNA in the pathway document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplePhysicalEntity {
    /// Document-unique id.
    pub id: Uuid,
    /// Display name shown on the entity's node.
    pub name: String,
    /// Concrete entity kind.
    pub kind: PhysicalEntityKind,
    /// What this entity is, when grounded in the reference vocabulary.
    pub entity_reference: Option<EntityReference>,
    /// Cellular location term, when annotated.
    pub cellular_location: Option<String>,
    /// Last known viewport position.
    pub position: Option<Position>,
    /// When the entity was added to the document.
    pub created_at: DateTime<Utc>,
}

impl SimplePhysicalEntity {
    /// Create an entity with a fresh id and the current timestamp.
    pub fn new(name: impl Into<String>, kind: PhysicalEntityKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            entity_reference: None,
            cellular_location: None,
            position: None,
            created_at: Utc::now(),
        }
    }

    /// Ground the entity in a reference.
    #[must_use]
    pub fn with_reference(mut self, reference: EntityReference) -> Self {
        self.entity_reference = Some(reference);
        self
    }

    /// Set the viewport position.
    #[must_use]
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Position { x, y });
        self
    }

    /// Set the cellular location term.
    #[must_use]
    pub fn with_cellular_location(mut self, location: impl Into<String>) -> Self {
        self.cellular_location = Some(location.into());
        self
    }

    /// The flattened set of member references reachable from this entity's
    /// reference: the generic (family) references it stands for.
    ///
    /// Deduplicated by URI, in depth-first encounter order. Purely computed;
    /// an ungrounded or non-generic entity yields an empty set.
    pub fn generic_entity_references(&self) -> Vec<EntityReference> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut out = Vec::new();

        fn collect<'a>(
            reference: &'a EntityReference,
            seen: &mut HashSet<&'a str>,
            out: &mut Vec<EntityReference>,
        ) {
            for member in &reference.member_refs {
                if seen.insert(member.uri.as_str()) {
                    out.push(member.clone());
                }
                collect(member, seen, out);
            }
        }

        if let Some(reference) = &self.entity_reference {
            collect(reference, &mut seen, &mut out);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Xref;

    fn erk_family() -> EntityReference {
        EntityReference::new("http://identifiers.org/genenames/ERK")
            .with_display_name("ERK")
            .with_member(
                EntityReference::new("http://identifiers.org/uniprot/P28482")
                    .with_display_name("MAPK1")
                    .with_xref(Xref::new("uniprot", "P28482")),
            )
            .with_member(
                EntityReference::new("http://identifiers.org/uniprot/P27361")
                    .with_display_name("MAPK3")
                    .with_xref(Xref::new("uniprot", "P27361")),
            )
    }

    #[test]
    fn generic_references_flatten_members() {
        let entity = SimplePhysicalEntity::new("ERK", PhysicalEntityKind::Protein)
            .with_reference(erk_family());

        let generics = entity.generic_entity_references();
        let uris: Vec<&str> = generics.iter().map(|r| r.uri.as_str()).collect();

        assert_eq!(
            uris,
            vec![
                "http://identifiers.org/uniprot/P28482",
                "http://identifiers.org/uniprot/P27361",
            ]
        );
    }

    #[test]
    fn generic_references_deduplicate_by_uri() {
        let shared = EntityReference::new("http://identifiers.org/uniprot/P28482");
        let reference = EntityReference::new("http://example.org/generic")
            .with_member(shared.clone())
            .with_member(EntityReference::new("http://example.org/nested").with_member(shared));

        let entity = SimplePhysicalEntity::new("generic", PhysicalEntityKind::Protein)
            .with_reference(reference);

        let generics = entity.generic_entity_references();
        let p28482_count = generics
            .iter()
            .filter(|r| r.uri.ends_with("P28482"))
            .count();

        assert_eq!(p28482_count, 1);
        assert_eq!(generics.len(), 2);
    }

    #[test]
    fn ungrounded_entity_has_no_generic_references() {
        let entity = SimplePhysicalEntity::new("ATP", PhysicalEntityKind::SmallMolecule);
        assert!(entity.generic_entity_references().is_empty());
    }

    #[test]
    fn concrete_reference_yields_empty_set() {
        let entity = SimplePhysicalEntity::new("MAPK1", PhysicalEntityKind::Protein)
            .with_reference(EntityReference::new(
                "http://identifiers.org/uniprot/P28482",
            ));
        assert!(entity.generic_entity_references().is_empty());
    }

    #[test]
    fn kind_serializes_kebab_case() {
        let json = serde_json::to_string(&PhysicalEntityKind::SmallMolecule).unwrap();
        assert_eq!(json, "\"small-molecule\"");
    }
}
