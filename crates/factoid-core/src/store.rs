//! Shared in-memory document store.
//!
//! One `PathwayDocument` behind a read/write lock, shared across request
//! handlers. Reads take snapshots; writes are exclusive.

use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{Interaction, PathwayDocument, SimplePhysicalEntity};
use crate::error::CoreError;

/// Lookup failures against the document store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No entity with the given id exists in the document.
    #[error("entity not found: {0}")]
    EntityNotFound(Uuid),
}

/// The shared working document.
#[derive(Debug, Default)]
pub struct DocumentStore {
    doc: RwLock<PathwayDocument>,
}

impl DocumentStore {
    /// Create a store holding an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given document.
    pub fn with_document(doc: PathwayDocument) -> Self {
        Self {
            doc: RwLock::new(doc),
        }
    }

    /// Clone the current document.
    pub async fn snapshot(&self) -> PathwayDocument {
        self.doc.read().await.clone()
    }

    /// Replace the current document wholesale.
    pub async fn replace(&self, doc: PathwayDocument) {
        *self.doc.write().await = doc;
    }

    /// All entities in the current document.
    pub async fn entities(&self) -> Vec<SimplePhysicalEntity> {
        self.doc.read().await.entities().to_vec()
    }

    /// Look up one entity by id.
    pub async fn entity(&self, id: Uuid) -> Result<SimplePhysicalEntity, StoreError> {
        self.doc
            .read()
            .await
            .entity(id)
            .cloned()
            .ok_or(StoreError::EntityNotFound(id))
    }

    /// Add an entity.
    pub async fn add_entity(&self, entity: SimplePhysicalEntity) {
        self.doc.write().await.add_entity(entity);
    }

    /// Remove an entity, pruning it from interactions.
    pub async fn remove_entity(&self, id: Uuid) -> Result<(), StoreError> {
        if self.doc.write().await.remove_entity(id) {
            Ok(())
        } else {
            Err(StoreError::EntityNotFound(id))
        }
    }

    /// Add an interaction between existing entities.
    pub async fn add_interaction(&self, interaction: Interaction) -> Result<(), CoreError> {
        let mut doc = self.doc.write().await;
        if doc.add_interaction(interaction) {
            Ok(())
        } else {
            Err(CoreError::Validation(
                "an interaction needs at least two existing participants".to_string(),
            ))
        }
    }
}
