//! Entity DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use factoid_core::{
    EntityReference, Interaction, PhysicalEntityKind, Position, SimplePhysicalEntity, Xref,
};

/// Cross-reference DTO.
#[derive(Debug, Clone, Serialize)]
pub struct XrefDto {
    pub db: String,
    pub id: String,
}

impl From<&Xref> for XrefDto {
    fn from(xref: &Xref) -> Self {
        Self {
            db: xref.db.clone(),
            id: xref.id.clone(),
        }
    }
}

/// Entity reference DTO.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityReferenceDto {
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub xrefs: Vec<XrefDto>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub member_refs: Vec<EntityReferenceDto>,
}

impl From<&EntityReference> for EntityReferenceDto {
    fn from(reference: &EntityReference) -> Self {
        Self {
            uri: reference.uri.clone(),
            display_name: reference.display_name.clone(),
            xrefs: reference.xrefs.iter().map(XrefDto::from).collect(),
            member_refs: reference
                .member_refs
                .iter()
                .map(EntityReferenceDto::from)
                .collect(),
        }
    }
}

/// Viewport position DTO.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PositionDto {
    pub x: f64,
    pub y: f64,
}

impl From<Position> for PositionDto {
    fn from(position: Position) -> Self {
        Self {
            x: position.x,
            y: position.y,
        }
    }
}

/// Simple physical entity DTO for the HTTP API.
///
/// The derived generic-entity-reference set is carried on the DTO but never
/// serialized: JSON output for any instance contains no field for it,
/// whatever its runtime value.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplePhysicalEntityDto {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PhysicalEntityKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_reference: Option<EntityReferenceDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cellular_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionDto>,
    pub created_at: DateTime<Utc>,
    /// Derived from the entity's reference hierarchy; not part of the JSON
    /// contract.
    #[serde(skip_serializing)]
    pub generic_entity_references: Vec<EntityReferenceDto>,
}

impl From<&SimplePhysicalEntity> for SimplePhysicalEntityDto {
    fn from(entity: &SimplePhysicalEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name.clone(),
            kind: entity.kind,
            entity_reference: entity.entity_reference.as_ref().map(EntityReferenceDto::from),
            cellular_location: entity.cellular_location.clone(),
            position: entity.position.map(PositionDto::from),
            created_at: entity.created_at,
            generic_entity_references: entity
                .generic_entity_references()
                .iter()
                .map(EntityReferenceDto::from)
                .collect(),
        }
    }
}

/// Interaction DTO for the HTTP API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionDto {
    pub id: Uuid,
    pub name: String,
    pub participants: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<&Interaction> for InteractionDto {
    fn from(interaction: &Interaction) -> Self {
        Self {
            id: interaction.id,
            name: interaction.name.clone(),
            participants: interaction.participants.clone(),
            created_at: interaction.created_at,
        }
    }
}

/// Request body for adding an entity.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntityRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PhysicalEntityKind,
    #[serde(default)]
    pub entity_reference: Option<EntityReference>,
    #[serde(default)]
    pub cellular_location: Option<String>,
    #[serde(default)]
    pub position: Option<Position>,
}

/// Request body for adding an interaction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInteractionRequest {
    pub name: String,
    pub participants: Vec<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use factoid_core::Xref;

    fn erk_entity() -> SimplePhysicalEntity {
        SimplePhysicalEntity::new("ERK", PhysicalEntityKind::Protein)
            .with_reference(
                EntityReference::new("http://identifiers.org/genenames/ERK")
                    .with_member(
                        EntityReference::new("http://identifiers.org/uniprot/P28482")
                            .with_xref(Xref::new("uniprot", "P28482")),
                    )
                    .with_member(EntityReference::new(
                        "http://identifiers.org/uniprot/P27361",
                    )),
            )
            .with_cellular_location("cytoplasm")
    }

    #[test]
    fn dto_carries_the_derived_reference_set() {
        let dto = SimplePhysicalEntityDto::from(&erk_entity());
        assert_eq!(dto.generic_entity_references.len(), 2);
    }

    #[test]
    fn derived_reference_set_is_never_serialized() {
        // Non-empty derived set
        let dto = SimplePhysicalEntityDto::from(&erk_entity());
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("genericEntityReferences").is_none());
        assert!(json.get("generic_entity_references").is_none());

        // Empty derived set
        let plain = SimplePhysicalEntity::new("ATP", PhysicalEntityKind::SmallMolecule);
        let json = serde_json::to_value(SimplePhysicalEntityDto::from(&plain)).unwrap();
        assert!(json.get("genericEntityReferences").is_none());
    }

    #[test]
    fn dto_serialization_camel_case() {
        let dto = SimplePhysicalEntityDto::from(&erk_entity());
        let json = serde_json::to_value(&dto).unwrap();

        assert!(json.get("createdAt").is_some());
        assert!(json.get("cellularLocation").is_some());
        assert!(json.get("entityReference").is_some());
        assert_eq!(json["type"], "protein");

        // Ensure snake_case fields don't exist
        assert!(json.get("created_at").is_none());
        assert!(json.get("cellular_location").is_none());
    }

    #[test]
    fn dto_serialization_is_idempotent() {
        let dto = SimplePhysicalEntityDto::from(&erk_entity());

        let first = serde_json::to_string(&dto).unwrap();
        let second = serde_json::to_string(&dto).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn absent_optionals_are_omitted() {
        let plain = SimplePhysicalEntity::new("ATP", PhysicalEntityKind::SmallMolecule);
        let json = serde_json::to_value(SimplePhysicalEntityDto::from(&plain)).unwrap();

        assert!(json.get("entityReference").is_none());
        assert!(json.get("cellularLocation").is_none());
        assert!(json.get("position").is_none());
    }

    #[test]
    fn create_request_accepts_wire_field_names() {
        let request: CreateEntityRequest = serde_json::from_str(
            r#"{"name": "GDP", "type": "small-molecule", "position": {"x": 1.0, "y": 2.0}}"#,
        )
        .unwrap();

        assert_eq!(request.name, "GDP");
        assert_eq!(request.kind, PhysicalEntityKind::SmallMolecule);
        assert!(request.entity_reference.is_none());
    }
}
