//! Core domain types.
//!
//! These types represent the pure pathway model, independent of any
//! infrastructure concerns (HTTP, serialization contracts, storage).
//!
//! # Structure
//!
//! - `entity` - Physical entity types (`SimplePhysicalEntity`, `Position`)
//! - `reference` - Reference vocabulary (`EntityReference`, `Xref`)
//! - `interaction` - Interactions connecting entities
//! - `pathway` - The working document (`PathwayDocument`)

mod entity;
mod interaction;
mod pathway;
mod reference;

// Re-export domain types at the domain level for convenience
pub use entity::{PhysicalEntityKind, Position, SimplePhysicalEntity};
pub use interaction::Interaction;
pub use pathway::PathwayDocument;
pub use reference::{EntityReference, Xref};
