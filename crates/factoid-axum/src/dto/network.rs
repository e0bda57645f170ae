//! Cytoscape network mapping.
//!
//! Maps the pathway document to the element shape the graph client feeds to
//! cytoscape: entity nodes, interaction connector nodes, and one edge per
//! (interaction, participant) pair.

use serde::Serialize;

use factoid_core::PathwayDocument;

use super::entity::PositionDto;

/// Data record of a cytoscape node.
#[derive(Debug, Clone, Serialize)]
pub struct NodeDataDto {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Participant count; only present on interaction nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arity: Option<usize>,
}

/// A cytoscape node element.
#[derive(Debug, Clone, Serialize)]
pub struct NodeDto {
    pub data: NodeDataDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionDto>,
    pub classes: String,
}

/// Data record of a cytoscape edge.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeDataDto {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// A cytoscape edge element.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeDto {
    pub data: EdgeDataDto,
}

/// The full element set for the current document.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkDto {
    pub nodes: Vec<NodeDto>,
    pub edges: Vec<EdgeDto>,
}

impl From<&PathwayDocument> for NetworkDto {
    fn from(doc: &PathwayDocument) -> Self {
        let mut nodes: Vec<NodeDto> = doc
            .entities()
            .iter()
            .map(|entity| NodeDto {
                data: NodeDataDto {
                    id: entity.id.to_string(),
                    name: entity.name.clone(),
                    kind: entity.kind.as_str().to_string(),
                    arity: None,
                },
                position: entity.position.map(PositionDto::from),
                classes: "entity".to_string(),
            })
            .collect();

        let mut edges = Vec::new();

        for interaction in doc.interactions() {
            nodes.push(NodeDto {
                data: NodeDataDto {
                    id: interaction.id.to_string(),
                    name: interaction.name.clone(),
                    kind: "interaction".to_string(),
                    arity: Some(interaction.arity()),
                },
                position: None,
                classes: "entity interaction".to_string(),
            });

            for participant in &interaction.participants {
                edges.push(EdgeDto {
                    data: EdgeDataDto {
                        id: format!("{}-{}", interaction.id, participant),
                        source: interaction.id.to_string(),
                        target: participant.to_string(),
                    },
                });
            }
        }

        Self { nodes, edges }
    }
}
