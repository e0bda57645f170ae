//! The pathway document: the working set of entities and interactions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::{PhysicalEntityKind, SimplePhysicalEntity};
use super::interaction::Interaction;
use super::reference::{EntityReference, Xref};

/// The working document edited through the client.
///
/// Invariant: every participant id of a retained interaction names an entity
/// present in the document, and every retained interaction has at least two
/// participants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathwayDocument {
    entities: Vec<SimplePhysicalEntity>,
    interactions: Vec<Interaction>,
}

impl PathwayDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// All entities, in insertion order.
    pub fn entities(&self) -> &[SimplePhysicalEntity] {
        &self.entities
    }

    /// All interactions, in insertion order.
    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }

    /// Look up an entity by id.
    pub fn entity(&self, id: Uuid) -> Option<&SimplePhysicalEntity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Add an entity to the document.
    pub fn add_entity(&mut self, entity: SimplePhysicalEntity) {
        self.entities.push(entity);
    }

    /// Add an interaction.
    ///
    /// Returns `false` without modifying the document when the interaction
    /// has fewer than two participants or names an unknown entity.
    pub fn add_interaction(&mut self, interaction: Interaction) -> bool {
        if interaction.arity() < 2 {
            return false;
        }
        if !interaction
            .participants
            .iter()
            .all(|id| self.entity(*id).is_some())
        {
            return false;
        }
        self.interactions.push(interaction);
        true
    }

    /// Remove an entity by id.
    ///
    /// The id is also pruned from every interaction's participant list, and
    /// interactions left with fewer than two participants are dropped.
    /// Returns `false` when no entity with the id exists.
    pub fn remove_entity(&mut self, id: Uuid) -> bool {
        let before = self.entities.len();
        self.entities.retain(|e| e.id != id);
        if self.entities.len() == before {
            return false;
        }

        for interaction in &mut self.interactions {
            interaction.participants.retain(|p| *p != id);
        }
        self.interactions.retain(|i| i.arity() >= 2);
        true
    }

    /// Total number of elements (entities plus interactions).
    pub fn len(&self) -> usize {
        self.entities.len() + self.interactions.len()
    }

    /// Whether the document holds no elements.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.interactions.is_empty()
    }

    /// A small seeded pathway used by tests and the demo mode: a fragment of
    /// MAPK signalling with one generic (family) entity.
    pub fn example() -> Self {
        let mut doc = Self::new();

        let mek = SimplePhysicalEntity::new("MAP2K1", PhysicalEntityKind::Protein)
            .with_reference(
                EntityReference::new("http://identifiers.org/uniprot/Q02750")
                    .with_display_name("MAP2K1")
                    .with_xref(Xref::new("uniprot", "Q02750")),
            )
            .with_cellular_location("cytoplasm")
            .with_position(80.0, 120.0);

        let erk = SimplePhysicalEntity::new("ERK", PhysicalEntityKind::Protein)
            .with_reference(
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
                    ),
            )
            .with_cellular_location("cytoplasm")
            .with_position(240.0, 120.0);

        let atp = SimplePhysicalEntity::new("ATP", PhysicalEntityKind::SmallMolecule)
            .with_reference(
                EntityReference::new("http://identifiers.org/chebi/CHEBI:15422")
                    .with_display_name("ATP")
                    .with_xref(Xref::new("chebi", "CHEBI:15422")),
            )
            .with_position(160.0, 240.0);

        let phosphorylation = Interaction::new(
            "phosphorylation",
            vec![mek.id, erk.id, atp.id],
        );

        doc.add_entity(mek);
        doc.add_entity(erk);
        doc.add_entity(atp);
        let added = doc.add_interaction(phosphorylation);
        debug_assert!(added);

        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_entities() -> (PathwayDocument, Uuid, Uuid) {
        let mut doc = PathwayDocument::new();
        let a = SimplePhysicalEntity::new("a", PhysicalEntityKind::Protein);
        let b = SimplePhysicalEntity::new("b", PhysicalEntityKind::Protein);
        let (a_id, b_id) = (a.id, b.id);
        doc.add_entity(a);
        doc.add_entity(b);
        (doc, a_id, b_id)
    }

    #[test]
    fn add_interaction_rejects_arity_below_two() {
        let (mut doc, a_id, _) = two_entities();
        assert!(!doc.add_interaction(Interaction::new("lonely", vec![a_id])));
        assert!(doc.interactions().is_empty());
    }

    #[test]
    fn add_interaction_rejects_unknown_participant() {
        let (mut doc, a_id, _) = two_entities();
        let unknown = Uuid::new_v4();
        assert!(!doc.add_interaction(Interaction::new("dangling", vec![a_id, unknown])));
        assert!(doc.interactions().is_empty());
    }

    #[test]
    fn removing_entity_prunes_and_drops_starved_interactions() {
        let (mut doc, a_id, b_id) = two_entities();
        assert!(doc.add_interaction(Interaction::new("binds", vec![a_id, b_id])));

        assert!(doc.remove_entity(a_id));

        // The interaction fell below two participants and was dropped with it.
        assert!(doc.interactions().is_empty());
        assert!(doc.entity(a_id).is_none());
        assert!(doc.entity(b_id).is_some());
    }

    #[test]
    fn removing_entity_keeps_interactions_with_enough_participants() {
        let (mut doc, a_id, b_id) = two_entities();
        let c = SimplePhysicalEntity::new("c", PhysicalEntityKind::SmallMolecule);
        let c_id = c.id;
        doc.add_entity(c);
        assert!(doc.add_interaction(Interaction::new("complex", vec![a_id, b_id, c_id])));

        assert!(doc.remove_entity(c_id));

        assert_eq!(doc.interactions().len(), 1);
        assert_eq!(doc.interactions()[0].participants, vec![a_id, b_id]);
    }

    #[test]
    fn remove_unknown_entity_is_a_noop() {
        let (mut doc, ..) = two_entities();
        assert!(!doc.remove_entity(Uuid::new_v4()));
        assert_eq!(doc.entities().len(), 2);
    }

    #[test]
    fn example_document_upholds_invariants() {
        let doc = PathwayDocument::example();

        assert_eq!(doc.entities().len(), 3);
        assert_eq!(doc.interactions().len(), 1);
        assert!(doc.interactions()[0].arity() >= 2);

        // The generic ERK entity resolves its family members.
        let erk = doc
            .entities()
            .iter()
            .find(|e| e.name == "ERK")
            .expect("example contains ERK");
        assert_eq!(erk.generic_entity_references().len(), 2);
    }
}
