//! Core pathway domain for factoid.
//!
//! This crate holds the pure domain model (entities, entity references,
//! interactions, the pathway document), the shared in-memory document store,
//! and the transport contract constants used by adapters. It has no
//! web-framework dependencies.

#![deny(unused_crate_dependencies)]

pub mod contracts;
pub mod domain;
pub mod error;
pub mod store;

// Re-export commonly used types for convenience
pub use domain::{
    EntityReference, Interaction, PathwayDocument, PhysicalEntityKind, Position,
    SimplePhysicalEntity, Xref,
};
pub use error::CoreError;
pub use store::{DocumentStore, StoreError};

// Silence unused dev-dependency warnings for JSON-shape tests
#[cfg(test)]
use serde_json as _;
