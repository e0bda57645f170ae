//! Reference vocabulary types.
//!
//! An entity reference identifies *what* a physical entity is (a protein
//! species, a chemical), as opposed to the entity itself, which is one
//! occurrence of that thing in a pathway. Generic references group member
//! references into families.

use serde::{Deserialize, Serialize};

/// External database cross-reference (e.g. `uniprot:P28482`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xref {
    /// Database name, lowercase (e.g. "uniprot", "chebi").
    pub db: String,
    /// Identifier within that database.
    pub id: String,
}

impl Xref {
    pub fn new(db: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            db: db.into(),
            id: id.into(),
        }
    }
}

/// A reference entity from the pathway exchange vocabulary.
///
/// `member_refs` nests further references for generic (family) groupings;
/// a concrete reference has an empty member list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityReference {
    /// Canonical URI identifying the reference.
    pub uri: String,
    /// Human-readable name, when known.
    pub display_name: Option<String>,
    /// External database cross-references.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub xrefs: Vec<Xref>,
    /// Member references of a generic grouping.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub member_refs: Vec<EntityReference>,
}

impl EntityReference {
    /// Create a reference with the given URI and no other data.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            display_name: None,
            xrefs: Vec::new(),
            member_refs: Vec::new(),
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Add a cross-reference.
    #[must_use]
    pub fn with_xref(mut self, xref: Xref) -> Self {
        self.xrefs.push(xref);
        self
    }

    /// Add a member reference, making this a generic grouping.
    #[must_use]
    pub fn with_member(mut self, member: EntityReference) -> Self {
        self.member_refs.push(member);
        self
    }

    /// Whether this reference is a generic grouping.
    pub fn is_generic(&self) -> bool {
        !self.member_refs.is_empty()
    }
}
